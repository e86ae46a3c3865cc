//! Section-by-section decisions for the reply card.

use crate::models::{ArticleReply, Reply, ReplyType};

/// Caller-supplied display policy of a reply card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyCardPolicy {
    /// When false the action button shows for every viewer.
    pub show_action_only_when_can_update: bool,
    /// Wrap the timestamp in the reply permalink.
    pub link_to_reply: bool,
    /// Render the helpful / not helpful buttons.
    pub show_feedback: bool,
}

impl Default for ReplyCardPolicy {
    fn default() -> Self {
        Self {
            show_action_only_when_can_update: true,
            link_to_reply: true,
            show_feedback: true,
        }
    }
}

impl ReplyCardPolicy {
    /// Whether the moderation action button renders.
    #[must_use]
    pub fn shows_action(&self, can_update_status: bool) -> bool {
        can_update_status || !self.show_action_only_when_can_update
    }
}

/// Out-of-scope hint next to the header sentence.
#[must_use]
pub fn shows_hint(reply_type: ReplyType) -> bool {
    reply_type == ReplyType::NotArticle
}

/// Heading of the reference section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceHeading {
    /// Opinionated replies cite other viewpoints.
    DifferentOpinion,
    /// Sources backing the reply.
    Reference,
}

impl ReferenceHeading {
    /// Translation key of the heading.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::DifferentOpinion => "reply.different_opinion",
            Self::Reference => "reply.reference",
        }
    }
}

/// Body of the reference section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceBody {
    /// The trimmed-non-empty reference text.
    Text(String),
    /// Rendered as the "no reference, may be doubtful" warning.
    Missing,
}

/// Whether and how the reference section renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSection {
    /// Not-applicable replies carry no reference section at all.
    Hidden,
    /// Heading followed by the reference or the missing-reference warning.
    Shown {
        /// Section heading.
        heading: ReferenceHeading,
        /// Section content.
        body: ReferenceBody,
    },
}

impl ReferenceSection {
    /// Section for `reply`, hidden for invalid requests.
    #[must_use]
    pub fn resolve(reply: &Reply) -> Self {
        let heading = match reply.reply_type {
            ReplyType::NotArticle => return Self::Hidden,
            ReplyType::Opinionated => ReferenceHeading::DifferentOpinion,
            ReplyType::Rumor | ReplyType::NotRumor => ReferenceHeading::Reference,
        };
        let body = reply
            .reference_text()
            .map_or(ReferenceBody::Missing, |text| {
                ReferenceBody::Text(text.to_string())
            });
        Self::Shown { heading, body }
    }
}

/// Permalink path of a reply.
#[must_use]
pub fn reply_path(reply_id: &str) -> String {
    format!("/reply/{reply_id}")
}

/// Everything the card needs to decide before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyCardView {
    /// Classification shown in the badge.
    pub reply_type: ReplyType,
    /// Show the out-of-scope hint.
    pub hint: bool,
    /// Reference section to render.
    pub reference: ReferenceSection,
    /// Show the action button.
    pub action: bool,
    /// Path the timestamp links to; `None` leaves it plain.
    pub permalink: Option<String>,
    /// Show the feedback buttons.
    pub feedback: bool,
}

impl ReplyCardView {
    /// `None` while the snapshot has no embedded reply yet.
    #[must_use]
    pub fn resolve(article_reply: &ArticleReply, policy: &ReplyCardPolicy) -> Option<Self> {
        let reply = article_reply.reply.as_ref()?;
        Some(Self {
            reply_type: reply.reply_type,
            hint: shows_hint(reply.reply_type),
            reference: ReferenceSection::resolve(reply),
            action: policy.shows_action(article_reply.can_update_status),
            permalink: policy.link_to_reply.then(|| reply_path(&reply.id)),
            feedback: policy.show_feedback,
        })
    }
}
