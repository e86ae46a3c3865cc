//! Server-rendered checks for the profile dropdown.

use std::collections::HashMap;

use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use shared::{models::User, profile_menu::ProfileMenuState};
use wasm_bindgen_test::*;
use yew::prelude::*;

use super::profile_menu::ProfileMenu;
use crate::language::supported_languages;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    initial_state: ProfileMenuState,
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
    let user = User {
        id: "u1".to_string(),
        name: Some("Alice".to_string()),
        level: 5,
        email: Some("alice@example.org".to_string()),
    };

    html! {
        <I18nProvider ..config>
            <ProfileMenu {user} on_logout={Callback::noop()} initial_state={props.initial_state} />
        </I18nProvider>
    }
}

async fn render(initial_state: ProfileMenuState) -> String {
    yew::LocalServerRenderer::<Harness>::with_props(HarnessProps { initial_state })
        .render()
        .await
}

#[wasm_bindgen_test]
async fn open_menu_has_four_rows_and_one_level_badge() {
    let html = render(ProfileMenuState::Open).await;

    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains("id=\"profile-menu\""));
    assert_eq!(html.matches("role=\"menuitem\"").count(), 4);
    assert_eq!(html.matches("LV. 5").count(), 1);
    assert!(html.contains("data-item=\"Summary\""));
    assert!(html.contains("Alice"));
    assert!(html.contains("My Profile"));
    assert!(html.contains("Logout"));
}

#[wasm_bindgen_test]
async fn closed_menu_shows_only_the_avatar() {
    let html = render(ProfileMenuState::Closed).await;

    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("role=\"menuitem\""));
    assert!(!html.contains("LV. 5"));
}
