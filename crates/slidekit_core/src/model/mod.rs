//! Presentation document model.
//!
//! # Responsibility
//! - Define the slide/element/selection data structures and invariants.
//! - Keep one canonical in-memory shape for every UI projection.
//!
//! # Invariants
//! - Every slide, element and cell id is unique within its scope.
//! - Element geometry always lies inside the 960x540 reference-frame
//!   envelope (plus the allowed overhang margin).

pub mod element;
pub mod id;
pub mod presentation;
pub mod slide;
