//! Structuring of raw AI advice text into displayable outlines.

pub mod outline;

pub use outline::{
    classify_line, format_advice, strip_markdown, AdviceSection, ContentItem, LineClass,
};
