//! Mutation engine: commands, dispatcher and undo/redo history.
//!
//! # Responsibility
//! - Own the editor state cell shape (document + history) and expose the
//!   single command entry point UI collaborators call.
//! - Keep history recording colocated with command application so no
//!   structural edit can go unrecorded.

pub mod command;
pub mod dispatch;
pub mod history;

use crate::engine::history::{History, Snapshot};
use crate::model::presentation::Presentation;

/// Full editor state: the document plus its undo/redo log.
///
/// Owned as a single cell by the application root; the dispatcher is the
/// only writer and always produces a new value, so readers holding a
/// previous state keep seeing a stable snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub presentation: Presentation,
    pub history: History,
}

impl EditorState {
    /// Fresh document (one slide, one default text element) with a
    /// seeded single-entry history.
    pub fn new() -> Self {
        let presentation = Presentation::new();
        let history = History::new(Snapshot {
            slides: presentation.slides.clone(),
            current_slide_id: presentation.current_slide_id.clone(),
        });
        Self {
            presentation,
            history,
        }
    }

    /// Number of recorded history entries (undo/redo UI affordance).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Current history cursor position (undo/redo UI affordance).
    pub fn history_index(&self) -> usize {
        self.history.cursor()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
