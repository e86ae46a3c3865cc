//! Replies and their classification.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

use super::{Hyperlink, ModelError, User};

/// Classification an editor assigns to a message through a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "String", into = "String")]
pub enum ReplyType {
    /// The message contains misinformation.
    Rumor,
    /// The message is factually correct.
    NotRumor,
    /// The message is personal opinion.
    Opinionated,
    /// The message is outside the fact-checking scope.
    NotArticle,
}

impl ReplyType {
    /// Wire value used by the query layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rumor => "RUMOR",
            Self::NotRumor => "NOT_RUMOR",
            Self::Opinionated => "OPINIONATED",
            Self::NotArticle => "NOT_ARTICLE",
        }
    }

    /// Segment used in translation keys (`reply_type.<key>.name`).
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Rumor => "rumor",
            Self::NotRumor => "not_rumor",
            Self::Opinionated => "opinionated",
            Self::NotArticle => "not_article",
        }
    }

    /// Translation key of the badge label.
    #[must_use]
    pub fn name_key(self) -> String {
        format!("reply_type.{}.name", self.i18n_key())
    }

    /// Translation key of the badge tooltip.
    #[must_use]
    pub fn description_key(self) -> String {
        format!("reply_type.{}.description", self.i18n_key())
    }

    /// English badge label, used where no catalog is available.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Rumor => "Contains misinformation",
            Self::NotRumor => "Contains true information",
            Self::Opinionated => "Contains personal perspective",
            Self::NotArticle => "Invalid request",
        }
    }

    /// English tooltip text.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Rumor => "One or more claims in the message are not true.",
            Self::NotRumor => "The claims in the message are consistent with the facts.",
            Self::Opinionated => {
                "The message expresses personal views that cannot be verified as facts."
            }
            Self::NotArticle => "The message is outside the scope of fact-checking.",
        }
    }
}

impl fmt::Display for ReplyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplyType {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "RUMOR" => Ok(Self::Rumor),
            "NOT_RUMOR" => Ok(Self::NotRumor),
            "OPINIONATED" => Ok(Self::Opinionated),
            "NOT_ARTICLE" => Ok(Self::NotArticle),
            other => {
                tracing::warn!(reply_type = other, "reply type outside the known enumeration");
                Err(ModelError::UnknownReplyType(other.to_string()))
            }
        }
    }
}

impl TryFrom<String> for ReplyType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReplyType> for String {
    fn from(value: ReplyType) -> Self {
        value.as_str().to_string()
    }
}

/// The reusable fact-check text an editor wrote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Reply identifier, also the permalink segment.
    pub id: String,

    /// Classification the reply assigns.
    #[serde(rename = "type")]
    pub reply_type: ReplyType,

    /// Rationale shown under "Reason".
    #[serde(default)]
    pub text: String,

    /// Citation text; blank or absent means "no reference".
    #[serde(default)]
    pub reference: Option<String>,

    /// Original author of the reply.
    #[serde(default)]
    pub user: Option<User>,

    /// Link previews extracted from the text and reference.
    #[serde(default)]
    pub hyperlinks: Vec<Hyperlink>,
}

impl Reply {
    /// Reference text when it carries any non-whitespace content.
    #[must_use]
    pub fn reference_text(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .filter(|reference| !reference.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn wire_values_round_trip_through_from_str() {
        for reply_type in ReplyType::iter() {
            assert_eq!(reply_type.as_str().parse::<ReplyType>().unwrap(), reply_type);
        }
    }

    #[test]
    fn unknown_wire_value_is_a_contract_violation() {
        let err = "SATIRE".parse::<ReplyType>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownReplyType(ref v) if v == "SATIRE"));

        let decoded = serde_json::from_str::<ReplyType>("\"SATIRE\"");
        assert!(decoded.unwrap_err().to_string().contains("unknown reply type"));
    }

    #[test]
    fn every_type_has_distinct_labels_and_keys() {
        let names: std::collections::HashSet<_> =
            ReplyType::iter().map(ReplyType::display_name).collect();
        assert_eq!(names.len(), 4);
        assert_eq!(ReplyType::Opinionated.name_key(), "reply_type.opinionated.name");
        assert_eq!(
            ReplyType::NotArticle.description_key(),
            "reply_type.not_article.description"
        );
    }

    #[test]
    fn blank_reference_counts_as_missing() {
        let reply = Reply {
            id: "r1".into(),
            reply_type: ReplyType::Rumor,
            text: "text".into(),
            reference: Some(" \n ".into()),
            user: None,
            hyperlinks: vec![],
        };
        assert_eq!(reply.reference_text(), None);
    }

    #[test]
    fn decodes_reply_with_type_field() {
        let reply: Reply = serde_json::from_str(
            r#"{"id":"r1","type":"NOT_ARTICLE","text":"hi","reference":null}"#,
        )
        .unwrap();
        assert_eq!(reply.reply_type, ReplyType::NotArticle);
        assert!(reply.hyperlinks.is_empty());
    }
}
