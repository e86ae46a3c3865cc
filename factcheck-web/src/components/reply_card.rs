use i18nrs::yew::use_translation;
use shared::{
    attribution::Attribution,
    clipboard::{SummaryLabels, compose_summary},
    models::{ArticleReply, FeedbackRequest, Reply},
    reply_view::{ReferenceBody, ReferenceSection, ReplyCardPolicy, ReplyCardView},
};
use yew::{AttrValue, Callback, Html, Properties, classes, function_component, html, use_context};
use yew_router::prelude::{Link, Routable};

use crate::components::{
    copy_button::CopyButton, editor_name::EditorName, expandable_text::ExpandableText,
    hyperlinks::Hyperlinks, linkified_text::LinkifiedText, reply_feedback::ReplyFeedback,
    time_ago::TimeAgo,
};
use crate::config::FrontendConfig;
use crate::hooks::current_page_url;
use crate::i18n_html::interpolate;
use crate::routes::MainRoute;
use crate::styles::Style;

#[derive(Properties, PartialEq)]
pub struct ReplyCardProps {
    /// `None` while the snapshot is still loading.
    #[prop_or_default]
    pub article_reply: Option<ArticleReply>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub on_action: Callback<ArticleReply>,
    #[prop_or_default]
    pub action_text: AttrValue,
    /// If false, show the action button for everyone.
    #[prop_or(true)]
    pub show_action_only_when_can_update: bool,
    #[prop_or(true)]
    pub link_to_reply: bool,
    #[prop_or(true)]
    pub show_feedback: bool,
    #[prop_or_default]
    pub on_feedback: Option<Callback<FeedbackRequest>>,
}

impl ReplyCardProps {
    fn policy(&self) -> ReplyCardPolicy {
        ReplyCardPolicy {
            show_action_only_when_can_update: self.show_action_only_when_can_update,
            link_to_reply: self.link_to_reply,
            show_feedback: self.show_feedback,
        }
    }
}

/// One reply connected to a message, as a list item.
#[function_component(ReplyCard)]
pub fn reply_card(props: &ReplyCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let t = |key: &str| i18n.t(key);

    let Some(article_reply) = props.article_reply.as_ref() else {
        return html! { <li class={Style::ReplyRoot.class()}><div class={Style::Skeleton.class()}></div></li> };
    };
    let (Some(reply), Some(view)) = (
        article_reply.reply.as_ref(),
        ReplyCardView::resolve(article_reply, &props.policy()),
    ) else {
        log::warn!(
            "article reply {}/{} has no embedded reply",
            article_reply.article_id,
            article_reply.reply_id
        );
        return html! { <li class={Style::ReplyRoot.class()}><div class={Style::Skeleton.class()}></div></li> };
    };

    // Header: "{author} mark the message as {type}"
    let author = match Attribution::resolve(article_reply) {
        Attribution::Single { editor } => html! { <EditorName {editor} /> },
        Attribution::Reused {
            editor,
            original_author,
            reply_id,
        } => {
            let original = interpolate(
                &t("reply.original_reply"),
                vec![("author", html! { <EditorName editor={original_author} /> })],
            );
            html! {
                <span>
                    { interpolate(
                        &t("reply.uses_reply"),
                        vec![
                            ("editor", html! { <EditorName {editor} /> }),
                            ("reply", html! {
                                <Link<MainRoute> to={MainRoute::Reply { id: reply_id }}>
                                    { original }
                                </Link<MainRoute>>
                            }),
                        ],
                    ) }
                </span>
            }
        }
    };
    let badge = html! {
        <strong title={t(&view.reply_type.description_key())}>
            { t(&view.reply_type.name_key()) }
        </strong>
    };
    let hint = view.hint.then(|| {
        let manual = html! {
            <a href={config.site_links.editor_manual_url.clone()} target="_blank" rel="noopener noreferrer">
                { t("reply.editor_manual") }
            </a>
        };
        html! {
            <aside class={classes!("not-in-range-info", Style::NotInRangeInfo.class())}>
                { "／ " }
                { interpolate(&t("reply.hint"), vec![("manual", manual)]) }
            </aside>
        }
    });

    let reference = match &view.reference {
        ReferenceSection::Hidden => html! {},
        ReferenceSection::Shown { heading, body } => html! {
            <section class={classes!("reference", Style::ReplySection.class())}>
                <h3>{ t(heading.label_key()) }</h3>
                {
                    match body {
                        ReferenceBody::Text(text) => html! { <LinkifiedText text={text.clone()} /> },
                        ReferenceBody::Missing => html! {
                            <span class="no-reference">{ format!("⚠️ {}", t("reply.no_reference")) }</span>
                        },
                    }
                }
                <Hyperlinks
                    hyperlinks={reply.hyperlinks.clone()}
                    polling_type="replies"
                    polling_id={article_reply.reply_id.clone()}
                />
            </section>
        },
    };

    let footer = {
        let time = html! { <TimeAgo at={article_reply.created_at} /> };
        let time = match view.permalink.as_deref().and_then(MainRoute::recognize) {
            Some(route) => html! { <Link<MainRoute> to={route}>{ time }</Link<MainRoute>> },
            None => time,
        };
        let action = view.action.then(|| {
            let on_action = props.on_action.clone();
            let snapshot = article_reply.clone();
            let onclick = Callback::from(move |_: yew::MouseEvent| on_action.emit(snapshot.clone()));
            html! {
                <>
                    { " ・ " }
                    <button
                        class={classes!(
                            "reply-action",
                            Style::ActionButton.class(),
                            props.disabled.then_some(Style::DisabledAction.class())
                        )}
                        disabled={props.disabled}
                        {onclick}
                    >
                        { props.action_text.clone() }
                    </button>
                </>
            }
        });
        let copy_text = copy_summary(reply, &t);
        html! {
            <footer class={Style::ReplyFooter.class()}>
                { time }
                { action }
                <CopyButton content={copy_text} />
                if view.feedback {
                    <ReplyFeedback
                        article_reply={article_reply.clone()}
                        on_feedback={props.on_feedback.clone()}
                    />
                }
            </footer>
        }
    };

    html! {
        <li class={classes!("reply-card", Style::ReplyRoot.class())} data-reply-id={reply.id.clone()}>
            <header class={Style::ReplySection.class()}>
                { interpolate(&t("reply.marked_as"), vec![("author", author), ("type", badge)]) }
                { hint }
            </header>
            <section class={Style::ReplySection.class()}>
                <h3>{ t("reply.reason") }</h3>
                <ExpandableText>
                    <LinkifiedText text={reply.text.clone()} />
                </ExpandableText>
            </section>
            { reference }
            { footer }
        </li>
    }
}

fn copy_summary(reply: &Reply, t: &impl Fn(&str) -> String) -> String {
    let labels = SummaryLabels {
        type_name: t(&reply.reply_type.name_key()),
        reason: t("reply.reason"),
        details: t("reply.details"),
        reference: t("reply.reference"),
    };
    compose_summary(reply, &labels, current_page_url().as_deref())
}
