//! Short opaque identifier generation.
//!
//! # Responsibility
//! - Produce the string ids used for slides, elements and table cells.
//!
//! # Invariants
//! - Ids are drawn uniformly from a 62-symbol alphanumeric alphabet.
//! - Ids are structural identifiers only, never security tokens.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Stable identifier for one slide.
pub type SlideId = String;
/// Stable identifier for one element on a slide.
pub type ElementId = String;
/// Stable identifier for one table cell.
pub type CellId = String;

/// Default id length; short enough for payload readability, long enough
/// that collision within one document lifetime is negligible (62^8).
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Generates a fresh id of [`DEFAULT_ID_LENGTH`] alphanumeric characters.
pub fn generate_id() -> String {
    generate_id_with_length(DEFAULT_ID_LENGTH)
}

/// Generates a fresh id with an explicit character length.
pub fn generate_id_with_length(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
