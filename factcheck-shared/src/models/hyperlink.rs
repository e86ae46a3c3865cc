//! Link previews attached to replies.

use serde::{Deserialize, Serialize};

/// Link metadata the backend extracted from a reply's text or reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hyperlink {
    /// Link target as written in the reply.
    pub url: String,
    /// Page title found by the scraper.
    #[serde(default)]
    pub title: Option<String>,
    /// Short excerpt of the page.
    #[serde(default)]
    pub summary: Option<String>,
    /// Preview image of the page.
    #[serde(default)]
    pub top_image_url: Option<String>,
    /// Fetch status reported by the scraper, e.g. `FETCHING` or `SUCCESS`.
    #[serde(default)]
    pub status: Option<String>,
    /// Scraper error code, when fetching failed.
    #[serde(default)]
    pub error: Option<String>,
}

impl Hyperlink {
    /// Title when the scraper found one, the raw URL otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(&self.url)
    }

    /// Whether the scraper is still working on this link.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status.as_deref() == Some("FETCHING")
    }
}
