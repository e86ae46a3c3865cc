use yew::{Html, Properties, function_component, html};
use yewdux::prelude::use_selector_with_deps;

use crate::components::reply_card::ReplyCard;
use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct ReplyPageProps {
    pub id: String,
}

/// Permalink page: every message this reply is connected to.
#[function_component(ReplyPage)]
pub fn reply_page(props: &ReplyPageProps) -> Html {
    let connections = use_selector_with_deps(
        |state: &AppState, id: &String| {
            state
                .connections_of_reply(id)
                .cloned()
                .collect::<Vec<_>>()
        },
        props.id.clone(),
    );

    html! {
        <ul>
            { for connections.iter().map(|article_reply| html! {
                <ReplyCard
                    key={article_reply.article_id.clone()}
                    article_reply={Some(article_reply.clone())}
                    link_to_reply={false}
                    show_feedback={false}
                />
            }) }
        </ul>
    }
}
