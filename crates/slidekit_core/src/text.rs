//! Plain-text preview derivation for rich text content.
//!
//! # Responsibility
//! - Reduce rich/marked-up element text to a short plain summary for
//!   outline labels and diagnostics.
//!
//! # Invariants
//! - Derivation is pure and never fails; unusable input yields `None`.
//! - Previews carry no markup and are capped at a fixed length.

use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

static MARKUP_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derives a plain-text preview from rich text content.
///
/// Rules:
/// - markup tags are removed, their text content kept;
/// - common entities are decoded;
/// - whitespace is collapsed; the first 100 chars are retained.
///
/// Returns `None` when nothing readable remains.
pub fn plain_text_preview(content: &str) -> Option<String> {
    let without_tags = MARKUP_TAG_RE.replace_all(content, " ");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&");
    let normalized = WHITESPACE_RE.replace_all(&decoded, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
}
