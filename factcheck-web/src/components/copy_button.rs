use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yew::{Callback, Html, Properties, function_component, html, use_state};
use yew_icons::{Icon, IconId};

use crate::styles::Style;

/// How long the "Copied" confirmation stays up.
const CONFIRMATION_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub content: String,
}

/// Copies `content` to the system clipboard.
#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let (i18n, ..) = use_translation();
    let copied = use_state(|| false);

    let onclick = {
        let copied = copied.clone();
        let content = props.content.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let Some(clipboard) = web_sys::window().and_then(|window| window.navigator().clipboard())
            else {
                log::warn!("clipboard API unavailable");
                return;
            };
            let promise = clipboard.write_text(&content);
            let copied = copied.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        copied.set(true);
                        let copied = copied.clone();
                        Timeout::new(CONFIRMATION_MS, move || copied.set(false)).forget();
                    }
                    Err(err) => log::warn!("copy to clipboard failed: {err:?}"),
                }
            });
        })
    };

    let (icon, label) = if *copied {
        (IconId::HeroiconsOutlineCheck, i18n.t("reply.copied"))
    } else {
        (IconId::HeroiconsOutlineClipboardDocument, i18n.t("reply.copy"))
    };

    html! {
        <button class={Style::CopyButton.class()} {onclick} aria-label={label.clone()}>
            <Icon icon_id={icon} class="h-4 w-4" />
            { label }
        </button>
    }
}
