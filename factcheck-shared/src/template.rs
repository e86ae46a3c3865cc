//! `{name}` placeholders in translated strings.
//!
//! Plain substitution covers text-only messages; [`parse_template`] lets a
//! component interleave markup (links, badges) into a translated sentence
//! without hard-coding the word order of any language.

/// A piece of a translated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    /// Text copied verbatim.
    Literal(&'a str),
    /// Name of a `{slot}` to substitute.
    Slot(&'a str),
}

/// Split `template` into literal runs and `{slot}` references.
///
/// An unmatched `{` is kept as literal text.
#[must_use]
pub fn parse_template(template: &str) -> Vec<TemplatePart<'_>> {
    let mut parts = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|offset| open + offset) else {
            break;
        };
        let name = &rest[open + 1..close];
        if name.is_empty() || name.contains('{') {
            parts.push(TemplatePart::Literal(&rest[..=open]));
            rest = &rest[open + 1..];
            continue;
        }
        if open > 0 {
            parts.push(TemplatePart::Literal(&rest[..open]));
        }
        parts.push(TemplatePart::Slot(name));
        rest = &rest[close + 1..];
    }
    if !rest.is_empty() {
        parts.push(TemplatePart::Literal(rest));
    }
    parts
}

/// Replace every `{name}` with its value; unknown slots stay verbatim.
#[must_use]
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    parse_template(template)
        .into_iter()
        .map(|part| match part {
            TemplatePart::Literal(text) => text.to_string(),
            TemplatePart::Slot(name) => values
                .iter()
                .find(|(key, _)| *key == name)
                .map_or_else(|| format!("{{{name}}}"), |(_, value)| (*value).to_string()),
        })
        .collect()
}
