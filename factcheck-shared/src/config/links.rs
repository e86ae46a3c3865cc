//! Links to the editor forum, project folder, manual and avatar service.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Problems with a site-links override file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The override is not valid TOML for [`SiteLinks`].
    #[error("failed to parse site links: {0}")]
    Parse(#[from] toml::de::Error),

    /// A link is relative or uses another scheme.
    #[error("`{field}` must be an absolute http(s) URL, got `{value}`")]
    InvalidUrl {
        /// Offending key.
        field: &'static str,
        /// Value as given.
        value: String,
    },
}

/// External URLs shared by the header and the reply card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteLinks {
    /// Community forum for editors.
    pub editor_forum_url: String,
    /// Informational folder about the project.
    pub project_folder_url: String,
    /// Manual describing what is in scope for fact-checking.
    pub editor_manual_url: String,
    /// Avatar service endpoint; the email hash is appended to it.
    pub avatar_base_url: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            editor_forum_url: option_env!("FACTCHECK_EDITOR_FORUM_URL")
                .unwrap_or("https://www.facebook.com/groups/cofacts/")
                .to_string(),
            project_folder_url: option_env!("FACTCHECK_PROJECT_FOLDER_URL")
                .unwrap_or("https://g0v.hackmd.io/@cofacts/README")
                .to_string(),
            editor_manual_url: option_env!("FACTCHECK_EDITOR_MANUAL_URL")
                .unwrap_or("https://hackmd.io/@cofacts/editor-manual")
                .to_string(),
            avatar_base_url: option_env!("FACTCHECK_AVATAR_BASE_URL")
                .unwrap_or("https://www.gravatar.com/avatar/")
                .to_string(),
        }
    }
}

impl SiteLinks {
    /// Parse an override file; keys left out keep their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::InvalidUrl`] when a value is not an http(s) URL.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let links: Self = toml::from_str(raw)?;
        links.validate()?;
        Ok(links)
    }

    /// Check every link is an absolute http(s) URL.
    ///
    /// # Errors
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("editor_forum_url", &self.editor_forum_url),
            ("project_folder_url", &self.project_folder_url),
            ("editor_manual_url", &self.editor_manual_url),
            ("avatar_base_url", &self.avatar_base_url),
        ] {
            let valid = Url::parse(value)
                .map(|url| matches!(url.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !valid {
                return Err(ConfigError::InvalidUrl {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
