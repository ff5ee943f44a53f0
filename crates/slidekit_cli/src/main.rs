//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `slidekit_core` linkage.
//! - Run a small deterministic command sequence for quick sanity checks.

use slidekit_core::{Command, EditorState, Element, ShapeKind, dispatch};

fn main() {
    println!("slidekit_core ping={}", slidekit_core::ping());
    println!("slidekit_core version={}", slidekit_core::core_version());

    let mut state = EditorState::new();
    state = dispatch(&state, Command::AddSlide);
    state = dispatch(
        &state,
        Command::AddElement {
            element: Element::new_shape(ShapeKind::Star),
        },
    );
    state = dispatch(&state, Command::Undo);

    println!(
        "slides={} history_entries={} history_index={} can_undo={} can_redo={}",
        state.presentation.slides.len(),
        state.history_len(),
        state.history_index(),
        state.can_undo(),
        state.can_redo()
    );
    for slide in &state.presentation.slides {
        println!("outline: {}", slide.outline_label());
    }
}
