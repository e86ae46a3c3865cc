//! Plain-text summary copied from a reply card.

use crate::models::Reply;

/// Localized labels used inside the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLabels {
    /// Classification name, e.g. "Contains misinformation".
    pub type_name: String,
    /// Heading before the reply text.
    pub reason: String,
    /// Heading before the page URL.
    pub details: String,
    /// Heading before the reference.
    pub reference: String,
}

impl SummaryLabels {
    /// English labels for the given reply.
    #[must_use]
    pub fn english(reply: &Reply) -> Self {
        Self {
            type_name: reply.reply_type.display_name().to_string(),
            reason: "Reason".into(),
            details: "Details".into(),
            reference: "Reference".into(),
        }
    }
}

/// Compose the clipboard payload.
///
/// `page_url` is the current location; without a browsing context the
/// details line stays empty. The reference is copied verbatim.
#[must_use]
pub fn compose_summary(reply: &Reply, labels: &SummaryLabels, page_url: Option<&str>) -> String {
    format!(
        "{} \n【{}】{}\n↓{}↓\n{}\n↓{}↓\n{}",
        labels.type_name,
        labels.reason,
        reply.text.trim(),
        labels.details,
        page_url.unwrap_or_default(),
        labels.reference,
        reply.reference.as_deref().unwrap_or_default(),
    )
}
