use yew::{Callback, Html, function_component, html};
use yewdux::prelude::use_store;

use crate::components::reply_card::ReplyCard;
use crate::models::app_state::AppState;
use shared::models::{ArticleReply, FeedbackRequest};

/// Collected messages, each followed by the replies connected to it.
#[function_component(ArticlesPage)]
pub fn articles_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    let on_feedback = dispatch.reduce_mut_callback_with(|state, request: FeedbackRequest| {
        state.pending_feedback = Some(request);
    });
    let on_action = {
        let dispatch = dispatch.clone();
        Callback::from(move |article_reply: ArticleReply| {
            log::info!(
                "status change requested for {}/{}",
                article_reply.article_id,
                article_reply.reply_id
            );
            dispatch.reduce_mut(|state| state.pending_status_change = Some(article_reply.key()));
        })
    };

    html! {
        <div class="space-y-8">
            { for state.article_ids().into_iter().map(|article_id| html! {
                <section key={article_id.to_string()}>
                    <h2 class="text-lg font-bold mb-2">{ article_id }</h2>
                    <ul>
                        { for state.replies_for_article(article_id).map(|article_reply| html! {
                            <ReplyCard
                                key={article_reply.reply_id.clone()}
                                article_reply={Some(article_reply.clone())}
                                on_action={on_action.clone()}
                                on_feedback={on_feedback.clone()}
                                action_text="×"
                            />
                        }) }
                    </ul>
                </section>
            }) }
        </div>
    }
}
