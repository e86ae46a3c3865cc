//! Line-break normalisation and URL detection for user-written text.

use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[^\s<>()\[\]{}「」『』（），。、！？]+[^\s<>()\[\]{}「」『』（），。、！？.,;:!?'\x22]")
        .expect("URL pattern is valid")
});

/// A renderable run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    /// Plain text, rendered as is.
    Text(String),
    /// A detected URL; rendered as an anchor with the URL as its label.
    Link(String),
    /// A line break in the source text.
    LineBreak,
}

/// Split `text` into plain runs, links and line breaks.
///
/// `\r\n` and lone `\r` count as one line break.
#[must_use]
pub fn segment_text(text: &str) -> Vec<TextSegment> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut segments = Vec::new();
    for (index, line) in normalized.split('\n').enumerate() {
        if index > 0 {
            segments.push(TextSegment::LineBreak);
        }
        linkify_line(line, &mut segments);
    }
    segments
}

fn linkify_line(line: &str, out: &mut Vec<TextSegment>) {
    let mut cursor = 0;
    for found in URL_PATTERN.find_iter(line) {
        if found.start() > cursor {
            out.push(TextSegment::Text(line[cursor..found.start()].to_string()));
        }
        out.push(TextSegment::Link(found.as_str().to_string()));
        cursor = found.end();
    }
    if cursor < line.len() {
        out.push(TextSegment::Text(line[cursor..].to_string()));
    }
}
