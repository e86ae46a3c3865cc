//! Avatar image URLs derived from a user's email.

use sha2::{Digest, Sha256};
use std::fmt::Write as _;

use crate::{config::SiteLinks, models::User};

/// Produces an image URL for a user.
pub trait AvatarSource {
    /// Image URL for `user`; users without an email get a generated image.
    fn avatar_url(&self, user: &User) -> String;
}

/// Gravatar-compatible service addressed by the SHA-256 of the email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gravatar {
    base_url: String,
    /// Pixel size requested from the service.
    size: u16,
}

impl Gravatar {
    /// Service at the configured base URL, at the default size.
    #[must_use]
    pub fn new(links: &SiteLinks) -> Self {
        Self {
            base_url: links.avatar_base_url.clone(),
            size: 80,
        }
    }

    /// Request images of `size` pixels square.
    #[must_use]
    pub fn with_size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }
}

/// Hex SHA-256 of the trimmed, lowercased address.
#[must_use]
pub fn email_hash(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    digest.iter().fold(String::with_capacity(64), |mut hex, byte| {
        let _ = write!(hex, "{byte:02x}");
        hex
    })
}

impl AvatarSource for Gravatar {
    fn avatar_url(&self, user: &User) -> String {
        let hash = email_hash(user.email.as_deref().unwrap_or_default());
        let separator = if self.base_url.ends_with('/') { "" } else { "/" };
        format!(
            "{}{separator}{hash}?s={}&d=identicon",
            self.base_url, self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_ignores_case_and_whitespace() {
        assert_eq!(email_hash(" Mary@Example.com "), email_hash("mary@example.com"));
        assert_eq!(email_hash("mary@example.com").len(), 64);
    }

    #[test]
    fn hash_matches_known_digest() {
        assert_eq!(
            email_hash(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn url_joins_base_hash_and_size() {
        let links = SiteLinks {
            avatar_base_url: "https://avatars.example.org/avatar".into(),
            ..SiteLinks::default()
        };
        let user = User {
            id: "u1".into(),
            email: Some("mary@example.com".into()),
            ..Default::default()
        };
        let url = Gravatar::new(&links).with_size(40).avatar_url(&user);
        assert_eq!(
            url,
            format!(
                "https://avatars.example.org/avatar/{}?s=40&d=identicon",
                email_hash("mary@example.com")
            )
        );
    }
}
