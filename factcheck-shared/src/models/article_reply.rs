//! The association between a collected message and a reply.

use serde::{Deserialize, Serialize};

use super::{ArticleReplyFeedback, FeedbackVote, ModelError, Reply, Timestamp, User};

/// Composite identity of an article reply.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReplyKey {
    /// Collected message.
    pub article_id: String,
    /// Connected reply.
    pub reply_id: String,
}

/// A reply attached to one collected message, as selected by
/// the `ArticleReplyData` fragment.
///
/// Every field is optional or defaulted so a snapshot that has not finished
/// loading still decodes; `reply` in particular may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReply {
    /// Collected message the reply is connected to.
    #[serde(default)]
    pub article_id: String,
    /// Connected reply.
    #[serde(default)]
    pub reply_id: String,
    /// Whether the viewer may change this association's status.
    #[serde(default)]
    pub can_update_status: bool,
    /// When the connection was made.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// The reply itself; absent while loading.
    #[serde(default)]
    pub reply: Option<Reply>,
    /// Editor who connected the reply to the message.
    #[serde(default)]
    pub user: Option<User>,
    /// Total votes on this connection.
    #[serde(default)]
    pub feedback_count: u32,
    /// "Helpful" votes.
    #[serde(default)]
    pub positive_feedback_count: u32,
    /// "Not helpful" votes.
    #[serde(default)]
    pub negative_feedback_count: u32,
    /// The viewer's own vote, if any.
    #[serde(default)]
    pub own_article_reply_feedback: Option<ArticleReplyFeedback>,
}

impl ArticleReply {
    /// Decode one `ArticleReplyData` object.
    ///
    /// # Errors
    /// Returns [`ModelError::Decode`] for malformed JSON or a classification
    /// outside the known set.
    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Identity of this connection.
    #[must_use]
    pub fn key(&self) -> ArticleReplyKey {
        ArticleReplyKey {
            article_id: self.article_id.clone(),
            reply_id: self.reply_id.clone(),
        }
    }

    /// Vote the viewer has already cast, if any.
    #[must_use]
    pub fn own_vote(&self) -> Option<FeedbackVote> {
        self.own_article_reply_feedback
            .as_ref()
            .map(|feedback| feedback.score)
    }

    /// Overlay the viewer-scoped fields fetched through `ArticleReplyForUser`.
    ///
    /// Snapshots for a different key are left untouched; returns whether the
    /// overlay applied.
    pub fn apply_viewer(&mut self, viewer: &ArticleReplyForUser) -> bool {
        if viewer.article_id != self.article_id || viewer.reply_id != self.reply_id {
            return false;
        }
        self.can_update_status = viewer.can_update_status;
        self.own_article_reply_feedback
            .clone_from(&viewer.own_article_reply_feedback);
        true
    }
}

/// Viewer-specific slice of an article reply (`ArticleReplyForUser`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReplyForUser {
    /// Collected message.
    pub article_id: String,
    /// Connected reply.
    pub reply_id: String,
    /// Whether the viewer may change the connection's status.
    #[serde(default)]
    pub can_update_status: bool,
    /// The viewer's own vote, if any.
    #[serde(default)]
    pub own_article_reply_feedback: Option<ArticleReplyFeedback>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReplyType;

    const FULL: &str = r#"{
        "articleId": "a1",
        "replyId": "r1",
        "canUpdateStatus": true,
        "createdAt": "2020-01-02T03:04:05Z",
        "reply": {
            "id": "r1",
            "type": "OPINIONATED",
            "text": "text here",
            "reference": "ref here",
            "user": { "id": "u2", "name": "Alice", "level": 3 },
            "hyperlinks": [{ "url": "https://example.com", "title": "Example" }]
        },
        "user": { "id": "u1", "name": "Bob", "level": 1 },
        "feedbackCount": 3,
        "positiveFeedbackCount": 2,
        "negativeFeedbackCount": 1,
        "ownArticleReplyFeedback": { "score": 1, "comment": null }
    }"#;

    #[test]
    fn decodes_full_fragment_payload() {
        let article_reply = ArticleReply::from_json(FULL).unwrap();
        let reply = article_reply.reply.as_ref().unwrap();
        assert_eq!(reply.reply_type, ReplyType::Opinionated);
        assert_eq!(reply.hyperlinks.len(), 1);
        assert_eq!(article_reply.positive_feedback_count, 2);
        assert_eq!(article_reply.own_vote(), Some(FeedbackVote::Upvote));
        assert_eq!(
            article_reply.key(),
            ArticleReplyKey {
                article_id: "a1".into(),
                reply_id: "r1".into()
            }
        );
    }

    #[test]
    fn empty_snapshot_decodes_without_reply() {
        let article_reply = ArticleReply::from_json("{}").unwrap();
        assert!(article_reply.reply.is_none());
        assert!(!article_reply.can_update_status);
    }

    #[test]
    fn unknown_type_is_rejected_at_decode() {
        let raw = FULL.replace("OPINIONATED", "SATIRE");
        let err = ArticleReply::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("unknown reply type `SATIRE`"));
    }

    #[test]
    fn viewer_overlay_only_applies_to_matching_key() {
        let mut article_reply = ArticleReply::from_json(FULL).unwrap();
        let viewer = ArticleReplyForUser {
            article_id: "a1".into(),
            reply_id: "r1".into(),
            can_update_status: false,
            own_article_reply_feedback: None,
        };
        assert!(article_reply.apply_viewer(&viewer));
        assert!(!article_reply.can_update_status);
        assert_eq!(article_reply.own_vote(), None);

        let other = ArticleReplyForUser {
            article_id: "a2".into(),
            can_update_status: true,
            ..viewer
        };
        assert!(!article_reply.apply_viewer(&other));
        assert!(!article_reply.can_update_status);
    }
}
