//! Translated sentences with markup in their placeholders.

use shared::template::{TemplatePart, fill, parse_template};
use shared::time::RelativeTime;
use yew::{Html, html};

/// Render `template`, substituting each `{slot}` with its markup.
///
/// Slots without markup are rendered verbatim so a catalog typo stays
/// visible instead of silently dropping words.
pub fn interpolate(template: &str, slots: Vec<(&str, Html)>) -> Html {
    let parts = parse_template(template);
    html! {
        <>
            { for parts.into_iter().map(|part| match part {
                TemplatePart::Literal(text) => html! { { text.to_string() } },
                TemplatePart::Slot(name) => slots
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map_or_else(
                        || html! { { format!("{{{name}}}") } },
                        |(_, markup)| markup.clone(),
                    ),
            }) }
        </>
    }
}

/// Localized distance such as "3 days", from a `time.*` catalog entry.
pub fn relative_time_label(translate: impl Fn(&str) -> String, distance: RelativeTime) -> String {
    let template = translate(&distance.translation_key());
    let count = distance.count().map(|count| count.to_string()).unwrap_or_default();
    fill(&template, &[("count", &count)])
}
