use crate::containers::header::HeaderBar;
use yew::{Children, Html, Properties, function_component, html};
use yewdux::prelude::use_store;

use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Page chrome: the header wired to the session store, then the page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();

    let on_menu_toggle = dispatch.reduce_mut_callback(AppState::toggle_side_menu);
    let on_login = dispatch.reduce_mut_callback(AppState::request_login);
    let on_logout = dispatch.reduce_mut_callback(|state: &mut AppState| {
        log::info!("signing out");
        state.sign_out();
    });

    html! {
        <>
            <HeaderBar
                user={state.user.clone()}
                {on_menu_toggle}
                {on_login}
                {on_logout}
            />
            <main
                class="p-4 max-w-5xl mx-auto"
                data-side-menu-open={state.side_menu_open.to_string()}
                data-login-prompt-open={state.login_prompt_open.to_string()}
            >
                { props.children.clone() }
            </main>
        </>
    }
}
