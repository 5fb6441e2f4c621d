//! Advice outline formatter.
//!
//! The AI model returns a newline-delimited text blob with loose markdown:
//! numbered section headers (`1. **Sebäpler**`), bullet lines, emphasis and
//! code markers. This module turns that into an ordered list of titled
//! sections. Classification is a pure per-line function; accumulation is a
//! small state machine over the classified lines, so each half is testable
//! on its own.
//!
//! Malformed input never fails; it degrades to fewer (or zero) sections.
//! When no section header is detected at all, the caller is expected to
//! fall back to rendering [`strip_markdown`] of the whole text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Numbered section header: leading integer, period, optional whitespace,
/// bold-wrapped title. Matched against the raw line, before any stripping.
static SECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s*\*\*(.+?)\*\*").unwrap());

/// Leading bullet marker (`*` or `-`) with surrounding whitespace.
static BULLET_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[*-]\s*").unwrap());

/// Line-leading run of `#` heading markers, per line within the string.
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s*").unwrap());

/// One piece of section body content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// A bulleted line.
    Bullet { text: String },
    /// A plain text line.
    Text { text: String },
}

impl ContentItem {
    /// The markdown-stripped text of this item.
    pub fn text(&self) -> &str {
        match self {
            ContentItem::Bullet { text } | ContentItem::Text { text } => text,
        }
    }
}

/// A titled block of advice, one per detected numbered header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceSection {
    pub title: String,
    pub content: Vec<ContentItem>,
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Numbered section header; carries the stripped title (may be empty
    /// when the bold span held nothing but markers).
    Header(String),
    /// Bullet line; carries the stripped body text.
    Bullet(String),
    /// Any other non-empty line; carries the stripped text.
    Text(String),
    /// Nothing displayable survives stripping.
    Skip,
}

/// Remove markdown markers and trim.
///
/// Strips every `**`, then every remaining `*`, then line-leading `#` runs,
/// then backticks. Idempotent: stripping an already-stripped string is a
/// no-op.
pub fn strip_markdown(text: &str) -> String {
    let text = text.replace("**", "");
    let text = text.replace('*', "");
    let text = HEADING_RE.replace_all(&text, "");
    let text = text.replace('`', "");
    text.trim().to_string()
}

/// Classify one line. Pure; precedence is header, then bullet, then text.
///
/// Pattern matching happens on the raw line; stripping is applied only to
/// the extracted content. A line like `1. **Sebäpler**` is always a header,
/// never a bullet, even though its title carries emphasis markers.
pub fn classify_line(line: &str) -> LineClass {
    if line.trim().is_empty() {
        return LineClass::Skip;
    }
    if let Some(caps) = SECTION_RE.captures(line) {
        return LineClass::Header(strip_markdown(&caps[2]));
    }
    let trimmed = line.trim_start();
    if trimmed.starts_with('*') || trimmed.starts_with('-') {
        let body = strip_markdown(&BULLET_PREFIX_RE.replace(line, ""));
        return if body.is_empty() {
            LineClass::Skip
        } else {
            LineClass::Bullet(body)
        };
    }
    let body = strip_markdown(line);
    if body.is_empty() {
        LineClass::Skip
    } else {
        LineClass::Text(body)
    }
}

/// Structure raw advice text into ordered sections.
///
/// Content lines appearing before the first header belong to no section
/// and are dropped; an untitled accumulator is never emitted. Returns an
/// empty vector when no header is detected, in which case the caller renders the
/// stripped raw text as unstructured prose instead.
pub fn format_advice(text: &str) -> Vec<AdviceSection> {
    let mut sections = Vec::new();
    let mut current = AdviceSection::default();

    for line in text.split('\n').filter(|l| !l.trim().is_empty()) {
        match classify_line(line) {
            LineClass::Header(title) => {
                if !current.title.is_empty() {
                    sections.push(std::mem::take(&mut current));
                }
                current = AdviceSection {
                    title,
                    content: Vec::new(),
                };
            }
            LineClass::Bullet(text) => current.content.push(ContentItem::Bullet { text }),
            LineClass::Text(text) => current.content.push(ContentItem::Text { text }),
            LineClass::Skip => {}
        }
    }

    if !current.title.is_empty() {
        sections.push(current);
    }
    sections
}
