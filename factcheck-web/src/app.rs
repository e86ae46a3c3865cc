use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::routes::{MainRoute, switch};
use yew::{ContextProvider, Html, function_component, html, use_effect_with, use_memo};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Page data rendered until a query client replaces it.
const SNAPSHOT: &str = include_str!("../fixtures/snapshot.json");

#[function_component(App)]
pub fn app() -> Html {
    let (_store_state, store_dispatch) = use_store::<AppState>();
    let config = use_memo((), |()| FrontendConfig::load());

    use_effect_with((), move |()| {
        match AppState::from_snapshot(SNAPSHOT) {
            Ok(state) => {
                log::debug!("loaded {} article replies", state.article_replies.len());
                store_dispatch.set(state);
            }
            Err(err) => log::error!("bundled snapshot rejected: {err}"),
        }
        || ()
    });

    html! {
        <ContextProvider<FrontendConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Switch<MainRoute> render={switch} />
            </BrowserRouter>
        </ContextProvider<FrontendConfig>>
    }
}
