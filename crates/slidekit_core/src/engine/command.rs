//! Command surface consumed from UI collaborators.
//!
//! # Responsibility
//! - Define every edit request the dispatcher accepts, with serde-tagged
//!   payloads for UI transport.
//! - Classify each command into its history effect class explicitly and
//!   exhaustively, so no edit can slip past history recording by default.

use crate::model::element::Element;
use crate::model::id::{ElementId, SlideId};
use crate::model::presentation::Presentation;
use crate::model::slide::{Background, Slide};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a command interacts with the history store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectClass {
    /// Moves selection or the active slide; never touches history.
    Navigation,
    /// Changes document content; recorded as a snapshot when it lands.
    Structural,
    /// Moves the history cursor without creating a new snapshot.
    HistoryNavigation,
}

/// One discrete edit request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Insert a blank slide after the active one and make it current.
    AddSlide,
    /// Insert a template-provided slide (ids are regenerated) after the
    /// active one and make it current.
    AddSlideWithTemplate { slide: Slide },
    /// Remove one slide; rejected when it is the last remaining slide.
    DeleteSlide { id: SlideId },
    /// Insert a fresh-id copy right after the source slide.
    DuplicateSlide { id: SlideId },
    /// Switch the active slide.
    SetCurrentSlide { id: SlideId },
    /// Replace one slide's background by id.
    UpdateSlideBackground { slide_id: SlideId, background: Background },
    /// Swap one slide with its predecessor.
    MoveSlideUp { slide_id: SlideId },
    /// Swap one slide with its successor.
    MoveSlideDown { slide_id: SlideId },
    /// Move the slide at `from_index` so it lands at `to_index`.
    ReorderSlides { from_index: usize, to_index: usize },
    /// Append one element to the active slide and select it.
    AddElement { element: Element },
    /// Shallow-merge a patch onto one element of the active slide.
    UpdateElement { id: ElementId, patch: Value },
    /// Remove one element from the active slide.
    DeleteElement { id: ElementId },
    /// Change the selection; `None` clears it.
    SelectElement { id: Option<ElementId> },
    /// Set the active slide's background to a plain color.
    SetBackground { color: String },
    /// Replace the active slide's element set (fresh ids) and optionally
    /// its background.
    ApplyTemplate {
        elements: Vec<Element>,
        background: Option<Background>,
    },
    /// Replace the entire document and reset history to one entry.
    LoadPresentation { data: Presentation },
    Undo,
    Redo,
}

impl Command {
    /// Explicit, exhaustive effect classification. New commands must be
    /// placed here deliberately; there is no inferred default.
    pub fn effect_class(&self) -> EffectClass {
        match self {
            Self::SelectElement { .. } | Self::SetCurrentSlide { .. } => EffectClass::Navigation,
            Self::AddSlide
            | Self::AddSlideWithTemplate { .. }
            | Self::DeleteSlide { .. }
            | Self::DuplicateSlide { .. }
            | Self::UpdateSlideBackground { .. }
            | Self::MoveSlideUp { .. }
            | Self::MoveSlideDown { .. }
            | Self::ReorderSlides { .. }
            | Self::AddElement { .. }
            | Self::UpdateElement { .. }
            | Self::DeleteElement { .. }
            | Self::SetBackground { .. }
            | Self::ApplyTemplate { .. }
            | Self::LoadPresentation { .. } => EffectClass::Structural,
            Self::Undo | Self::Redo => EffectClass::HistoryNavigation,
        }
    }

    /// Stable command name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddSlide => "add_slide",
            Self::AddSlideWithTemplate { .. } => "add_slide_with_template",
            Self::DeleteSlide { .. } => "delete_slide",
            Self::DuplicateSlide { .. } => "duplicate_slide",
            Self::SetCurrentSlide { .. } => "set_current_slide",
            Self::UpdateSlideBackground { .. } => "update_slide_background",
            Self::MoveSlideUp { .. } => "move_slide_up",
            Self::MoveSlideDown { .. } => "move_slide_down",
            Self::ReorderSlides { .. } => "reorder_slides",
            Self::AddElement { .. } => "add_element",
            Self::UpdateElement { .. } => "update_element",
            Self::DeleteElement { .. } => "delete_element",
            Self::SelectElement { .. } => "select_element",
            Self::SetBackground { .. } => "set_background",
            Self::ApplyTemplate { .. } => "apply_template",
            Self::LoadPresentation { .. } => "load_presentation",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}
