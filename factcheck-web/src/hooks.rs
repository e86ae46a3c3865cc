use shared::layout::LayoutMode;
use yew::{hook, use_context};
use yew_hooks::use_window_size;

/// Fixed viewport width provided from above, replacing the live window size.
///
/// Used by tests and by hosts that render inside a frame of known width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOverride {
    pub width: f64,
}

/// Current header layout, re-evaluated when the window resizes.
#[hook]
pub fn use_layout_mode() -> LayoutMode {
    let injected = use_context::<ViewportOverride>();
    let (window_width, _) = use_window_size();
    let width = injected.map_or(window_width, |viewport| viewport.width);
    LayoutMode::from_width(width)
}

/// Address of the page being viewed, when running in a browser.
pub fn current_page_url() -> Option<String> {
    web_sys::window().and_then(|window| window.location().href().ok())
}
