use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yewdux::prelude::use_selector;

use crate::components::reply_card::ReplyCard;
use crate::models::app_state::AppState;

/// Latest replies across all collected messages.
#[function_component(RepliesPage)]
pub fn replies_page() -> Html {
    let (i18n, ..) = use_translation();
    let article_replies = use_selector(|state: &AppState| state.article_replies.clone());

    if article_replies.is_empty() {
        return html! { <p class="p-4 opacity-75">{ i18n.t("app.no_replies") }</p> };
    }

    html! {
        <ul>
            { for article_replies.iter().map(|article_reply| html! {
                <ReplyCard
                    key={format!("{}__{}", article_reply.article_id, article_reply.reply_id)}
                    article_reply={Some(article_reply.clone())}
                />
            }) }
        </ul>
    }
}
