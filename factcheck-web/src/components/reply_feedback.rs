use i18nrs::yew::use_translation;
use shared::models::{ArticleReply, FeedbackRequest, FeedbackVote};
use yew::{Callback, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

use crate::styles::Style;

#[derive(Properties, PartialEq)]
pub struct ReplyFeedbackProps {
    pub article_reply: ArticleReply,
    /// Without a handler the counts are shown read-only.
    #[prop_or_default]
    pub on_feedback: Option<Callback<FeedbackRequest>>,
}

/// Helpful / not helpful counts with the viewer's own vote highlighted.
#[function_component(ReplyFeedback)]
pub fn reply_feedback(props: &ReplyFeedbackProps) -> Html {
    let (i18n, ..) = use_translation();
    let own_vote = props.article_reply.own_vote();

    let button = |vote: FeedbackVote, count: u32, icon: IconId, label: String| {
        let onclick = props.on_feedback.clone().map(|on_feedback| {
            let key = props.article_reply.key();
            Callback::from(move |_: yew::MouseEvent| {
                on_feedback.emit(FeedbackRequest {
                    key: key.clone(),
                    vote: vote.toggle(own_vote),
                });
            })
        });
        let active = own_vote == Some(vote);
        html! {
            <button
                class={classes!(
                    Style::FeedbackButton.class(),
                    active.then_some(Style::ActiveFeedback.class())
                )}
                disabled={onclick.is_none()}
                aria-pressed={active.to_string()}
                aria-label={label}
                {onclick}
            >
                <Icon icon_id={icon} class="h-4 w-4" />
                { count }
            </button>
        }
    };

    html! {
        <div class="reply-feedback flex gap-1 ml-auto">
            { button(
                FeedbackVote::Upvote,
                props.article_reply.positive_feedback_count,
                IconId::HeroiconsOutlineHandThumbUp,
                i18n.t("reply.helpful"),
            ) }
            { button(
                FeedbackVote::Downvote,
                props.article_reply.negative_feedback_count,
                IconId::HeroiconsOutlineHandThumbDown,
                i18n.t("reply.not_helpful"),
            ) }
        </div>
    }
}
