//! Editors and authors.

use serde::{Deserialize, Serialize};

/// A signed-in editor or an author referenced by a reply.
///
/// Supplied by the session provider or nested in query results; the
/// components read it and never mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque user identifier.
    pub id: String,

    /// Display name, absent for anonymous or not-yet-loaded users.
    #[serde(default)]
    pub name: Option<String>,

    /// Reputation level shown as `LV. n`.
    #[serde(default)]
    pub level: u32,

    /// Email address, used only to derive the avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// The display name when it is present and not blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_not_display_names() {
        let user = User {
            id: "u1".into(),
            name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), None);
    }

    #[test]
    fn decodes_partial_graphql_user() {
        let user: User = serde_json::from_str(r#"{"id":"u1","name":"Mary"}"#).unwrap();
        assert_eq!(user.display_name(), Some("Mary"));
        assert_eq!(user.level, 0);
        assert_eq!(user.email, None);
    }
}
