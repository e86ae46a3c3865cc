//! Who gets credit in a reply card's header sentence.

use crate::models::{ArticleReply, User};

/// Name and level of an editor as rendered by `EditorName`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorLabel {
    /// `None` renders the "Someone" placeholder.
    pub name: Option<String>,
    /// Reputation level; `0` hides the badge.
    pub level: u32,
}

impl EditorLabel {
    /// Label for `user`, or an anonymous label when absent.
    #[must_use]
    pub fn from_user(user: Option<&User>) -> Self {
        Self {
            name: user.and_then(User::display_name).map(str::to_string),
            level: user.map_or(0, |user| user.level),
        }
    }
}

/// Resolved author clause of the card header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribution {
    /// The annotator wrote the reply (or the original author is unknown).
    Single {
        /// Editor who connected the reply.
        editor: EditorLabel,
    },
    /// The annotator reused someone else's reply:
    /// "{editor} uses {original author}'s reply to".
    Reused {
        /// Editor who connected the reply.
        editor: EditorLabel,
        /// Editor who wrote the reply.
        original_author: EditorLabel,
        /// Reply linked from the original author's clause.
        reply_id: String,
    },
}

impl Attribution {
    /// Decide the clause for one article reply.
    ///
    /// It is a reuse when the reply's author has a name and is not the
    /// connecting editor; a missing connecting editor counts as different.
    #[must_use]
    pub fn resolve(article_reply: &ArticleReply) -> Self {
        let annotator = article_reply.user.as_ref();
        let editor = EditorLabel::from_user(annotator);

        let Some(reply) = article_reply.reply.as_ref() else {
            return Self::Single { editor };
        };
        let Some(author) = reply.user.as_ref() else {
            return Self::Single { editor };
        };

        let same_person = annotator.is_some_and(|annotator| annotator.id == author.id);
        if author.display_name().is_none() || same_person {
            return Self::Single { editor };
        }

        Self::Reused {
            editor,
            original_author: EditorLabel::from_user(Some(author)),
            reply_id: reply.id.clone(),
        }
    }

    /// The connecting editor, present in both forms.
    #[must_use]
    pub fn editor(&self) -> &EditorLabel {
        match self {
            Self::Single { editor } | Self::Reused { editor, .. } => editor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Reply, ReplyType};

    fn user(id: &str, name: Option<&str>) -> User {
        User {
            id: id.into(),
            name: name.map(str::to_string),
            level: 2,
            email: None,
        }
    }

    fn article_reply(annotator: Option<User>, author: Option<User>) -> ArticleReply {
        ArticleReply {
            article_id: "a1".into(),
            reply_id: "r1".into(),
            user: annotator,
            reply: Some(Reply {
                id: "r1".into(),
                reply_type: ReplyType::Rumor,
                text: String::new(),
                reference: None,
                user: author,
                hyperlinks: vec![],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn different_author_with_name_is_a_reuse() {
        let attribution = Attribution::resolve(&article_reply(
            Some(user("u1", Some("Bob"))),
            Some(user("u2", Some("Alice"))),
        ));
        assert_eq!(
            attribution,
            Attribution::Reused {
                editor: EditorLabel {
                    name: Some("Bob".into()),
                    level: 2
                },
                original_author: EditorLabel {
                    name: Some("Alice".into()),
                    level: 2
                },
                reply_id: "r1".into(),
            }
        );
    }

    #[test]
    fn same_author_renders_annotator_only() {
        let attribution = Attribution::resolve(&article_reply(
            Some(user("u1", Some("Bob"))),
            Some(user("u1", Some("Bob"))),
        ));
        assert!(matches!(attribution, Attribution::Single { .. }));
        assert_eq!(attribution.editor().name.as_deref(), Some("Bob"));
    }

    #[test]
    fn nameless_original_author_is_not_credited() {
        let attribution = Attribution::resolve(&article_reply(
            Some(user("u1", Some("Bob"))),
            Some(user("u2", None)),
        ));
        assert!(matches!(attribution, Attribution::Single { .. }));
    }

    #[test]
    fn missing_annotator_name_leaves_placeholder_to_renderer() {
        let attribution = Attribution::resolve(&article_reply(None, None));
        assert_eq!(attribution.editor(), &EditorLabel::default());
    }

    #[test]
    fn anonymous_annotator_still_credits_named_author() {
        let attribution =
            Attribution::resolve(&article_reply(None, Some(user("u2", Some("Alice")))));
        assert!(matches!(attribution, Attribution::Reused { .. }));
    }

    #[test]
    fn snapshot_without_reply_is_single() {
        let snapshot = ArticleReply {
            user: Some(user("u1", Some("Bob"))),
            ..Default::default()
        };
        assert!(matches!(
            Attribution::resolve(&snapshot),
            Attribution::Single { .. }
        ));
    }
}
