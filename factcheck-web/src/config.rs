//! Frontend configuration module
//!
//! Site links and avatar settings, provided to the component tree as a
//! context so tests can inject their own.

use shared::{
    avatar::Gravatar,
    config::{ConfigError, SiteLinks},
};

/// Frontend configuration for external links and avatars
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    pub site_links: SiteLinks,
    /// Avatar edge length in CSS pixels.
    pub avatar_size: u16,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            site_links: SiteLinks::default(),
            avatar_size: 40,
        }
    }
}

impl FrontendConfig {
    /// Build the configuration, applying the TOML embedded at compile time
    /// through `FACTCHECK_SITE_LINKS` when present.
    pub fn load() -> Self {
        match option_env!("FACTCHECK_SITE_LINKS") {
            Some(raw) => Self::with_overrides(raw).unwrap_or_else(|err| {
                log::warn!("ignoring site link overrides: {err}");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Apply a TOML site-links override on top of the defaults.
    pub fn with_overrides(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            site_links: SiteLinks::from_toml_str(raw)?,
            ..Self::default()
        })
    }

    /// Avatar source sized for the header.
    pub fn avatar_source(&self) -> Gravatar {
        Gravatar::new(&self.site_links).with_size(self.avatar_size.saturating_mul(2))
    }
}
