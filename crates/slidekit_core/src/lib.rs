//! Core document model and mutation engine for a slide-deck editor.
//! This crate is the single source of truth for document invariants,
//! command semantics and undo/redo history.

pub mod engine;
pub mod logging;
pub mod model;
pub mod text;

pub use engine::EditorState;
pub use engine::command::{Command, EffectClass};
pub use engine::dispatch::dispatch;
pub use engine::history::{History, MAX_HISTORY_ENTRIES, Snapshot};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::element::{
    ChartData, ChartSeries, ChartType, Element, ElementKind, MIN_ELEMENT_SIZE, POSITION_MARGIN,
    REF_HEIGHT, REF_WIDTH, ShapeKind, TableCell, TableProps, TextProps,
};
pub use model::id::{ElementId, SlideId, generate_id};
pub use model::presentation::{Presentation, PresentationError};
pub use model::slide::{Background, ImageBackground, Slide};
pub use text::plain_text_preview;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
