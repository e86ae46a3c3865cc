//! Server-rendered checks for the reply card.

use std::collections::HashMap;

use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use shared::models::{ArticleReply, Reply, ReplyType, User};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

use super::reply_card::ReplyCard;
use crate::language::supported_languages;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    article_reply: Option<ArticleReply>,
    show_action_only_when_can_update: bool,
    link_to_reply: bool,
}

impl HarnessProps {
    fn card(article_reply: ArticleReply) -> Self {
        Self {
            article_reply: Some(article_reply),
            show_action_only_when_can_update: true,
            link_to_reply: true,
        }
    }
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

    html! {
        <I18nProvider ..config>
            <Router {history}>
                <ul>
                    <ReplyCard
                        article_reply={props.article_reply.clone()}
                        action_text="Delete"
                        show_action_only_when_can_update={props.show_action_only_when_can_update}
                        link_to_reply={props.link_to_reply}
                    />
                </ul>
            </Router>
        </I18nProvider>
    }
}

fn editor(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: Some(name.to_string()),
        level: 3,
        email: None,
    }
}

fn snapshot(reply_type: ReplyType, reference: Option<&str>) -> ArticleReply {
    ArticleReply {
        article_id: "a1".to_string(),
        reply_id: "r1".to_string(),
        user: Some(editor("u1", "Alice")),
        reply: Some(Reply {
            id: "r1".to_string(),
            reply_type,
            text: "Checked with the ministry.".to_string(),
            reference: reference.map(str::to_string),
            user: Some(editor("u1", "Alice")),
            hyperlinks: Vec::new(),
        }),
        ..ArticleReply::default()
    }
}

async fn render(props: HarnessProps) -> String {
    yew::LocalServerRenderer::<Harness>::with_props(props)
        .render()
        .await
}

#[wasm_bindgen_test]
async fn invalid_request_shows_hint_without_reference() {
    let html = render(HarnessProps::card(snapshot(ReplyType::NotArticle, None))).await;

    assert!(html.contains("not-in-range-info"));
    assert!(html.contains("Please refer to"));
    assert!(!html.contains("class=\"reference"));
}

#[wasm_bindgen_test]
async fn opinionated_reply_uses_different_opinion_heading() {
    let html = render(HarnessProps::card(snapshot(
        ReplyType::Opinionated,
        Some("https://example.org"),
    )))
    .await;

    assert!(html.contains("Different opinion"));
    assert!(html.contains("https://example.org"));
    assert!(!html.contains("not-in-range-info"));
}

#[wasm_bindgen_test]
async fn missing_reference_is_flagged() {
    let html = render(HarnessProps::card(snapshot(ReplyType::Rumor, None))).await;

    assert!(html.contains("no-reference"));
    assert!(html.contains("There is no reference for this reply"));
}

#[wasm_bindgen_test]
async fn reused_reply_credits_both_editors() {
    let mut article_reply = snapshot(ReplyType::NotRumor, Some("source"));
    article_reply.user = Some(editor("u2", "Bob"));
    let html = render(HarnessProps::card(article_reply)).await;

    assert!(html.contains("Bob"));
    assert!(html.contains("Alice"));
    assert!(html.contains(" uses "));
}

#[wasm_bindgen_test]
async fn action_follows_update_permission() {
    let hidden = render(HarnessProps::card(snapshot(ReplyType::Rumor, Some("source")))).await;
    assert!(!hidden.contains("reply-action"));

    let mut permitted = snapshot(ReplyType::Rumor, Some("source"));
    permitted.can_update_status = true;
    let shown = render(HarnessProps::card(permitted)).await;
    assert!(shown.contains("reply-action"));

    let everyone = render(HarnessProps {
        show_action_only_when_can_update: false,
        ..HarnessProps::card(snapshot(ReplyType::Rumor, Some("source")))
    })
    .await;
    assert!(everyone.contains("reply-action"));
}

#[wasm_bindgen_test]
async fn missing_reply_renders_placeholder() {
    let mut article_reply = snapshot(ReplyType::Rumor, None);
    article_reply.reply = None;
    let html = render(HarnessProps::card(article_reply)).await;

    assert!(!html.contains("reply-card"));
    assert!(!html.contains("Reason"));
}

#[wasm_bindgen_test]
async fn timestamp_links_to_reply_permalink_when_enabled() {
    let mut article_reply = snapshot(ReplyType::Rumor, Some("source"));
    article_reply.created_at = Some(shared::models::Timestamp::now());

    let linked = render(HarnessProps::card(article_reply.clone())).await;
    assert!(linked.contains("href=\"/reply/r1\""));

    let plain = render(HarnessProps {
        link_to_reply: false,
        ..HarnessProps::card(article_reply)
    })
    .await;
    assert!(!plain.contains("href=\"/reply/r1\""));
}
