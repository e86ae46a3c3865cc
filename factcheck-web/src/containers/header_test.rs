//! Server-rendered checks for the header layouts.

use std::collections::HashMap;

use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use shared::models::User;
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

use super::header::HeaderBar;
use crate::hooks::ViewportOverride;
use crate::language::supported_languages;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    width: f64,
    user: Option<User>,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();
    let config = I18nProviderConfig {
        translations,
        default_language: "en".to_string(),
        ..Default::default()
    };
    let history = AnyHistory::from(MemoryHistory::new());
    let viewport = ViewportOverride { width: props.width };

    html! {
        <I18nProvider ..config>
            <Router {history}>
                <ContextProvider<ViewportOverride> context={viewport}>
                    <HeaderBar user={props.user.clone()} />
                </ContextProvider<ViewportOverride>>
            </Router>
        </I18nProvider>
    }
}

async fn render(width: f64, user: Option<User>) -> String {
    yew::LocalServerRenderer::<Harness>::with_props(HarnessProps { width, user })
        .render()
        .await
}

fn signed_in() -> User {
    User {
        id: "u1".to_string(),
        name: Some("Alice".to_string()),
        level: 5,
        email: Some("alice@example.org".to_string()),
    }
}

#[wasm_bindgen_test]
async fn wide_header_signed_out_shows_login() {
    let html = render(1200.0, None).await;

    assert!(html.contains("data-layout=\"Wide\""));
    assert!(html.contains("/logo-desktop.png"));
    assert!(html.contains("login-button"));
    assert!(!html.contains("menu-toggle"));
}

#[wasm_bindgen_test]
async fn wide_header_signed_in_shows_closed_profile_menu() {
    let html = render(1200.0, Some(signed_in())).await;

    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("login-button"));
    assert!(!html.contains("profile-menu"));
}

#[wasm_bindgen_test]
async fn compact_header_moves_tabs_to_second_row() {
    let html = render(375.0, Some(signed_in())).await;

    assert!(html.contains("data-layout=\"Compact\""));
    assert!(html.contains("/logo-mobile.png"));
    assert!(html.contains("menu-toggle"));
    assert!(!html.contains("login-button"));
    assert!(!html.contains("aria-expanded"));
}

#[wasm_bindgen_test]
async fn breakpoint_is_inclusive() {
    let html = render(992.0, None).await;
    assert!(html.contains("data-layout=\"Wide\""));
}
