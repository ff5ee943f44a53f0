//! Command dispatcher: the single mutation entry point.
//!
//! # Responsibility
//! - Apply one command against the document model and produce the next
//!   editor state, recording history for structural edits.
//! - Degrade every anomaly (reference miss, invariant guard, bad patch)
//!   to a logged no-op; this layer never returns errors and never panics.
//!
//! # Invariants
//! - The input state is never mutated; readers holding the previous state
//!   keep a stable snapshot.
//! - A structural command appends exactly one history entry when the
//!   document actually changed, and none otherwise.
//! - Undo/redo move the history cursor only and always clear selection.

use crate::engine::command::{Command, EffectClass};
use crate::engine::history::Snapshot;
use crate::engine::EditorState;
use crate::model::element::Element;
use crate::model::id::generate_id;
use crate::model::presentation::Presentation;
use crate::model::slide::{Background, Slide};
use log::{debug, warn};

/// Pure reducer: `(state, command) -> state'`.
pub fn dispatch(state: &EditorState, command: Command) -> EditorState {
    match command.effect_class() {
        EffectClass::Navigation => apply_navigation(state, command),
        EffectClass::Structural => apply_structural(state, command),
        EffectClass::HistoryNavigation => apply_history_navigation(state, command),
    }
}

fn apply_navigation(state: &EditorState, command: Command) -> EditorState {
    let mut next = state.clone();
    match command {
        Command::SelectElement { id } => {
            // A dangling id is tolerated here; lookups resolve it to
            // "no selection" instead of failing.
            next.presentation.selected_element_id = id;
        }
        Command::SetCurrentSlide { id } => {
            if next.presentation.slide(&id).is_some() {
                if next.presentation.current_slide_id != id {
                    next.presentation.current_slide_id = id;
                    next.presentation.selected_element_id = None;
                }
            } else {
                warn!("event=command_ignored module=engine command=set_current_slide reason=slide_not_found id={id}");
            }
        }
        other => {
            warn!(
                "event=command_misrouted module=engine command={} expected_class=navigation",
                other.name()
            );
        }
    }
    next
}

fn apply_history_navigation(state: &EditorState, command: Command) -> EditorState {
    let mut next = state.clone();
    let moved = match command {
        Command::Undo => next.history.undo().cloned(),
        Command::Redo => next.history.redo().cloned(),
        other => {
            warn!(
                "event=command_misrouted module=engine command={} expected_class=history",
                other.name()
            );
            None
        }
    };
    if let Some(snapshot) = moved {
        next.presentation.slides = snapshot.slides;
        next.presentation.current_slide_id = snapshot.current_slide_id;
        // Selection is not restorable across undo/redo boundaries: an
        // undone element's id may reappear inconsistently.
        next.presentation.selected_element_id = None;
        debug!(
            "event=history_moved module=engine cursor={} entries={}",
            next.history.cursor(),
            next.history.len()
        );
    }
    next
}

fn apply_structural(state: &EditorState, command: Command) -> EditorState {
    let name = command.name();

    // Document load replaces everything and restarts history.
    let command = match command {
        Command::LoadPresentation { data } => return load_presentation(state, data),
        other => other,
    };

    let mut next = state.clone();
    let changed = apply_to_presentation(&mut next.presentation, command);
    if !changed {
        warn!("event=command_ignored module=engine command={name}");
        return state.clone();
    }

    next.history.record(Snapshot {
        slides: next.presentation.slides.clone(),
        current_slide_id: next.presentation.current_slide_id.clone(),
    });
    debug!(
        "event=command_applied module=engine command={name} slides={} history_entries={}",
        next.presentation.slides.len(),
        next.history.len()
    );
    next
}

fn load_presentation(state: &EditorState, data: Presentation) -> EditorState {
    match data.normalized() {
        Ok(presentation) => {
            let mut next = state.clone();
            next.history.reset(Snapshot {
                slides: presentation.slides.clone(),
                current_slide_id: presentation.current_slide_id.clone(),
            });
            next.presentation = presentation;
            debug!(
                "event=command_applied module=engine command=load_presentation slides={}",
                next.presentation.slides.len()
            );
            next
        }
        Err(err) => {
            warn!("event=command_ignored module=engine command=load_presentation reason={err}");
            state.clone()
        }
    }
}

/// Applies one structural command to the document. Returns whether the
/// document changed; partial mutations never leak out of a `false` return.
fn apply_to_presentation(p: &mut Presentation, command: Command) -> bool {
    match command {
        Command::AddSlide => {
            let slide = Slide::blank(format!("Slide {}", p.slides.len() + 1));
            insert_as_current(p, slide);
            true
        }
        Command::AddSlideWithTemplate { slide } => {
            let mut fresh = slide.with_fresh_ids();
            for element in &mut fresh.elements {
                element.clamp_geometry();
            }
            insert_as_current(p, fresh);
            true
        }
        Command::DeleteSlide { id } => {
            if p.slides.len() <= 1 {
                // A presentation must always contain at least one slide.
                return false;
            }
            let Some(index) = p.slide_index(&id) else {
                return false;
            };
            let was_current = p.current_slide_id == id;
            p.slides.remove(index);
            if was_current {
                let fallback = index.min(p.slides.len() - 1);
                p.current_slide_id = p.slides[fallback].id.clone();
                p.selected_element_id = None;
            }
            true
        }
        Command::DuplicateSlide { id } => {
            let Some(index) = p.slide_index(&id) else {
                return false;
            };
            let copy = p.slides[index].duplicated();
            p.current_slide_id = copy.id.clone();
            p.selected_element_id = None;
            p.slides.insert(index + 1, copy);
            true
        }
        Command::UpdateSlideBackground { slide_id, background } => {
            p.set_slide_background(&slide_id, background)
        }
        Command::MoveSlideUp { slide_id } => match p.slide_index(&slide_id) {
            Some(index) if index > 0 => {
                p.slides.swap(index, index - 1);
                true
            }
            _ => false,
        },
        Command::MoveSlideDown { slide_id } => match p.slide_index(&slide_id) {
            Some(index) if index + 1 < p.slides.len() => {
                p.slides.swap(index, index + 1);
                true
            }
            _ => false,
        },
        Command::ReorderSlides { from_index, to_index } => {
            if from_index == to_index
                || from_index >= p.slides.len()
                || to_index >= p.slides.len()
            {
                return false;
            }
            let slide = p.slides.remove(from_index);
            p.slides.insert(to_index, slide);
            true
        }
        Command::AddElement { mut element } => {
            element.clamp_geometry();
            let current_id = p.current_slide_id.clone();
            let Some(slide) = p.slide_mut(&current_id) else {
                return false;
            };
            if slide.element(&element.id).is_some() {
                // Id collision within the slide scope; keep uniqueness by
                // assigning a fresh one.
                element.id = generate_id();
            }
            let selected = element.id.clone();
            slide.elements.push(element);
            p.selected_element_id = Some(selected);
            true
        }
        Command::UpdateElement { id, patch } => p.merge_element_patch(&id, &patch),
        Command::DeleteElement { id } => {
            let current_id = p.current_slide_id.clone();
            let Some(slide) = p.slide_mut(&current_id) else {
                return false;
            };
            let Some(index) = slide.elements.iter().position(|e| e.id == id) else {
                return false;
            };
            slide.elements.remove(index);
            if p.selected_element_id.as_deref() == Some(id.as_str()) {
                p.selected_element_id = None;
            }
            true
        }
        Command::SetBackground { color } => {
            let current_id = p.current_slide_id.clone();
            p.set_slide_background(&current_id, Background::Color(color))
        }
        Command::ApplyTemplate { elements, background } => {
            let current_id = p.current_slide_id.clone();
            let fresh: Vec<Element> = elements
                .iter()
                .map(|e| {
                    let mut element = e.with_fresh_ids();
                    element.clamp_geometry();
                    element
                })
                .collect();
            if !p.set_slide_elements(&current_id, fresh) {
                return false;
            }
            if let Some(background) = background {
                p.set_slide_background(&current_id, background);
            }
            p.selected_element_id = None;
            true
        }
        // Handled by the other effect classes; kept exhaustive so new
        // commands cannot be routed here silently.
        Command::SelectElement { .. }
        | Command::SetCurrentSlide { .. }
        | Command::LoadPresentation { .. }
        | Command::Undo
        | Command::Redo => false,
    }
}

fn insert_as_current(p: &mut Presentation, slide: Slide) {
    let current_id = p.current_slide_id.clone();
    let at = p
        .slide_index(&current_id)
        .map(|i| i + 1)
        .unwrap_or(p.slides.len());
    p.current_slide_id = slide.id.clone();
    p.selected_element_id = None;
    p.slides.insert(at, slide);
}
