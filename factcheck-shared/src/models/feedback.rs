//! Viewer feedback on article replies.

use serde::{Deserialize, Serialize};

use super::ArticleReplyKey;

/// A viewer's vote on an article reply. Encoded as the score `1` / `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum FeedbackVote {
    /// "Helpful", score `1`.
    Upvote,
    /// "Not helpful", score `-1`.
    Downvote,
}

impl FeedbackVote {
    /// Wire score of the vote.
    #[must_use]
    pub fn score(self) -> i8 {
        match self {
            Self::Upvote => 1,
            Self::Downvote => -1,
        }
    }

    /// Vote to send when the viewer clicks `self` while holding `current`.
    ///
    /// Clicking the vote already cast withdraws it.
    #[must_use]
    pub fn toggle(self, current: Option<Self>) -> Option<Self> {
        if current == Some(self) { None } else { Some(self) }
    }
}

impl TryFrom<i8> for FeedbackVote {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Upvote),
            -1 => Ok(Self::Downvote),
            other => Err(format!("invalid feedback score {other}")),
        }
    }
}

impl From<FeedbackVote> for i8 {
    fn from(value: FeedbackVote) -> Self {
        value.score()
    }
}

/// The viewer's own feedback on an article reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReplyFeedback {
    /// Direction of the vote.
    pub score: FeedbackVote,
    /// Optional remark left with the vote.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Emitted upward when the viewer votes; `vote: None` withdraws the vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRequest {
    /// Article reply being voted on.
    pub key: ArticleReplyKey,
    /// New vote, or `None` to withdraw.
    pub vote: Option<FeedbackVote>,
}
