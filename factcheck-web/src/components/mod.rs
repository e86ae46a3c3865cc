pub(crate) mod copy_button;
pub(crate) mod editor_name;
pub(crate) mod expandable_text;
pub(crate) mod global_search;
pub(crate) mod hyperlinks;
pub(crate) mod language_selector;
pub(crate) mod linkified_text;
pub(crate) mod nav_links;
pub(crate) mod profile_menu;
pub(crate) mod reply_card;
pub(crate) mod reply_feedback;
pub(crate) mod time_ago;

#[cfg(all(test, target_arch = "wasm32"))]
mod profile_menu_test;
#[cfg(all(test, target_arch = "wasm32"))]
mod reply_card_test;
