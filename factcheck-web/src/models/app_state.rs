use serde::Deserialize;
use shared::models::{
    ArticleReply, ArticleReplyForUser, ArticleReplyKey, FeedbackRequest, ModelError, User,
};
use yewdux::Store;

/// Page data as delivered by the query layer: the shared snapshots plus
/// the viewer-scoped overlay fetched separately.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    article_replies: Vec<ArticleReply>,
    #[serde(default)]
    viewer: Vec<ArticleReplyForUser>,
}

/// Session and page data shared across the tree.
///
/// The query client fills `article_replies` and `user`; the requests are
/// picked up by the mutation layer.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<User>,
    pub side_menu_open: bool,
    pub login_prompt_open: bool,
    pub article_replies: Vec<ArticleReply>,
    pub pending_status_change: Option<ArticleReplyKey>,
    pub pending_feedback: Option<FeedbackRequest>,
}

impl AppState {
    /// Build the initial state from a serialized snapshot.
    ///
    /// # Errors
    /// Returns [`ModelError::Decode`] when the payload is malformed or names
    /// an unknown reply type.
    pub fn from_snapshot(raw: &str) -> Result<Self, ModelError> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        let mut state = Self {
            user: snapshot.user,
            article_replies: snapshot.article_replies,
            ..Self::default()
        };
        state.apply_viewer(&snapshot.viewer);
        Ok(state)
    }

    /// Merge viewer-scoped fields into the matching snapshots.
    pub fn apply_viewer(&mut self, viewer: &[ArticleReplyForUser]) {
        for article_reply in &mut self.article_replies {
            if let Some(fields) = viewer
                .iter()
                .find(|fields| {
                    fields.article_id == article_reply.article_id
                        && fields.reply_id == article_reply.reply_id
                })
            {
                article_reply.apply_viewer(fields);
            }
        }
    }

    /// Header menu toggle.
    pub fn toggle_side_menu(&mut self) {
        self.side_menu_open = !self.side_menu_open;
    }

    /// Header login button.
    pub fn request_login(&mut self) {
        self.login_prompt_open = true;
    }

    /// Profile menu "Logout": drops the session and anything queued for it.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.pending_feedback = None;
        self.pending_status_change = None;
        self.side_menu_open = false;
    }

    /// Replies connected to one collected message.
    pub fn replies_for_article<'a>(
        &'a self,
        article_id: &'a str,
    ) -> impl Iterator<Item = &'a ArticleReply> + 'a {
        self.article_replies
            .iter()
            .filter(move |article_reply| article_reply.article_id == article_id)
    }

    /// Every connection of one reply, across messages.
    pub fn connections_of_reply<'a>(
        &'a self,
        reply_id: &'a str,
    ) -> impl Iterator<Item = &'a ArticleReply> + 'a {
        self.article_replies
            .iter()
            .filter(move |article_reply| article_reply.reply_id == reply_id)
    }

    /// Distinct article ids in first-seen order.
    pub fn article_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for article_reply in &self.article_replies {
            if !ids.contains(&article_reply.article_id.as_str()) {
                ids.push(&article_reply.article_id);
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(article_id: &str, reply_id: &str) -> ArticleReply {
        ArticleReply {
            article_id: article_id.into(),
            reply_id: reply_id.into(),
            ..Default::default()
        }
    }

    fn state() -> AppState {
        AppState {
            article_replies: vec![
                connection("a1", "r1"),
                connection("a2", "r1"),
                connection("a1", "r2"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn groups_by_article_in_first_seen_order() {
        assert_eq!(state().article_ids(), vec!["a1", "a2"]);
        assert_eq!(state().replies_for_article("a1").count(), 2);
    }

    #[test]
    fn finds_every_connection_of_a_reply() {
        let state = state();
        let articles: Vec<_> = state
            .connections_of_reply("r1")
            .map(|article_reply| article_reply.article_id.as_str())
            .collect();
        assert_eq!(articles, vec!["a1", "a2"]);
    }

    #[test]
    fn bundled_snapshot_decodes_with_viewer_overlay() {
        let state = AppState::from_snapshot(include_str!("../../fixtures/snapshot.json"))
            .expect("bundled snapshot decodes");
        assert_eq!(state.article_ids(), vec!["article-1", "article-2"]);
        assert!(state.article_replies[0].can_update_status);
        assert!(!state.article_replies[1].can_update_status);
        assert!(state.user.is_some());
    }

    #[test]
    fn snapshot_with_unknown_type_is_rejected() {
        let raw = r#"{"articleReplies":[{"reply":{"id":"r","type":"SPAM","text":""}}]}"#;
        assert!(matches!(
            AppState::from_snapshot(raw),
            Err(ModelError::Decode(_))
        ));
    }

    #[test]
    fn header_actions_update_session_flags() {
        let mut state = state();
        state.toggle_side_menu();
        assert!(state.side_menu_open);
        state.toggle_side_menu();
        assert!(!state.side_menu_open);

        state.request_login();
        assert!(state.login_prompt_open);
    }

    #[test]
    fn sign_out_clears_session_and_pending_requests() {
        let mut state = AppState {
            user: Some(User {
                id: "u1".into(),
                ..Default::default()
            }),
            side_menu_open: true,
            pending_status_change: Some(connection("a1", "r1").key()),
            pending_feedback: Some(FeedbackRequest {
                key: connection("a1", "r1").key(),
                vote: None,
            }),
            ..state()
        };
        state.sign_out();
        assert_eq!(state.user, None);
        assert_eq!(state.pending_status_change, None);
        assert_eq!(state.pending_feedback, None);
        assert!(!state.side_menu_open);
        assert_eq!(state.article_replies.len(), 3);
    }

    #[test]
    fn viewer_fields_apply_by_key() {
        let mut state = state();
        state.apply_viewer(&[ArticleReplyForUser {
            article_id: "a2".into(),
            reply_id: "r1".into(),
            can_update_status: true,
            own_article_reply_feedback: None,
        }]);
        let permitted: Vec<_> = state
            .article_replies
            .iter()
            .map(|article_reply| article_reply.can_update_status)
            .collect();
        assert_eq!(permitted, vec![false, true, false]);
    }
}
