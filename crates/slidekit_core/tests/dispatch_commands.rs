use slidekit_core::model::slide::{Background, Slide};
use slidekit_core::{Command, EditorState, Element, Presentation, ShapeKind, dispatch};

fn slide_ids(state: &EditorState) -> Vec<String> {
    state
        .presentation
        .slides
        .iter()
        .map(|s| s.id.clone())
        .collect()
}

#[test]
fn new_editor_state_has_one_slide_with_one_text_element() {
    let state = EditorState::new();
    assert_eq!(state.presentation.slides.len(), 1);
    assert_eq!(state.presentation.slides[0].elements.len(), 1);
    assert_eq!(
        state.presentation.current_slide_id,
        state.presentation.slides[0].id
    );
    assert!(state.presentation.selected_element_id.is_none());
}

#[test]
fn dispatch_never_mutates_the_input_state() {
    let state = EditorState::new();
    let before = state.clone();
    let _next = dispatch(&state, Command::AddSlide);
    assert_eq!(state, before);
}

#[test]
fn add_slide_inserts_after_current_and_activates_it() {
    let state = EditorState::new();
    let first_id = state.presentation.current_slide_id.clone();

    let state = dispatch(&state, Command::AddSlide);
    assert_eq!(state.presentation.slides.len(), 2);
    assert_eq!(state.presentation.slides[1].id, state.presentation.current_slide_id);
    assert_ne!(state.presentation.current_slide_id, first_id);

    // Going back to the first slide and adding again inserts in the middle.
    let state = dispatch(&state, Command::SetCurrentSlide { id: first_id.clone() });
    let state = dispatch(&state, Command::AddSlide);
    assert_eq!(state.presentation.slides.len(), 3);
    assert_eq!(state.presentation.slide_index(&state.presentation.current_slide_id), Some(1));
}

#[test]
fn delete_slide_on_last_remaining_slide_is_a_no_op() {
    let state = EditorState::new();
    let id = state.presentation.current_slide_id.clone();
    let history_before = state.history_len();

    let state = dispatch(&state, Command::DeleteSlide { id });
    assert_eq!(state.presentation.slides.len(), 1);
    assert_eq!(state.history_len(), history_before);
}

#[test]
fn delete_current_slide_moves_the_active_pointer() {
    let state = EditorState::new();
    let state = dispatch(&state, Command::AddSlide);
    let state = dispatch(&state, Command::AddSlide);
    let ids = slide_ids(&state);

    // Current is the middle slide after stepping back.
    let state = dispatch(&state, Command::SetCurrentSlide { id: ids[1].clone() });
    let state = dispatch(&state, Command::DeleteSlide { id: ids[1].clone() });

    assert_eq!(state.presentation.slides.len(), 2);
    assert_eq!(state.presentation.current_slide_id, ids[2]);
    assert!(state.presentation.current_slide().is_some());
}

#[test]
fn delete_unknown_slide_is_a_no_op() {
    let state = EditorState::new();
    let state = dispatch(&state, Command::AddSlide);
    let before = state.clone();

    let state = dispatch(&state, Command::DeleteSlide { id: "missing0".into() });
    assert_eq!(state, before);
}

#[test]
fn duplicate_slide_copies_content_with_fresh_ids() {
    let state = EditorState::new();
    let source_id = state.presentation.current_slide_id.clone();
    let state = dispatch(&state, Command::DuplicateSlide { id: source_id.clone() });

    assert_eq!(state.presentation.slides.len(), 2);
    let copy = &state.presentation.slides[1];
    assert_eq!(state.presentation.current_slide_id, copy.id);
    assert_ne!(copy.id, source_id);
    assert_eq!(copy.elements.len(), 1);
    assert_ne!(copy.elements[0].id, state.presentation.slides[0].elements[0].id);
}

#[test]
fn reorder_slides_moves_first_to_last() {
    let state = EditorState::new();
    let state = dispatch(&state, Command::AddSlide);
    let state = dispatch(&state, Command::AddSlide);
    let [a, b, c] = slide_ids(&state).try_into().unwrap();

    let state = dispatch(
        &state,
        Command::ReorderSlides {
            from_index: 0,
            to_index: 2,
        },
    );
    assert_eq!(slide_ids(&state), vec![b, c, a]);
}

#[test]
fn reorder_with_equal_or_out_of_range_indices_is_a_no_op() {
    let state = EditorState::new();
    let state = dispatch(&state, Command::AddSlide);
    let before = state.clone();

    let state = dispatch(&state, Command::ReorderSlides { from_index: 1, to_index: 1 });
    assert_eq!(state, before);
    let state = dispatch(&state, Command::ReorderSlides { from_index: 0, to_index: 7 });
    assert_eq!(state, before);
}

#[test]
fn move_slide_up_and_down_swap_neighbors() {
    let state = EditorState::new();
    let state = dispatch(&state, Command::AddSlide);
    let [a, b] = slide_ids(&state).try_into().unwrap();

    let state = dispatch(&state, Command::MoveSlideUp { slide_id: b.clone() });
    assert_eq!(slide_ids(&state), vec![b.clone(), a.clone()]);

    // Already at the top edge: no-op.
    let before = state.clone();
    let state = dispatch(&state, Command::MoveSlideUp { slide_id: b.clone() });
    assert_eq!(state, before);

    let state = dispatch(&state, Command::MoveSlideDown { slide_id: b.clone() });
    assert_eq!(slide_ids(&state), vec![a, b]);
}

#[test]
fn add_element_appends_to_active_slide_and_selects_it() {
    let state = EditorState::new();
    let element = Element::new_shape(ShapeKind::Circle);
    let element_id = element.id.clone();

    let state = dispatch(&state, Command::AddElement { element });
    let slide = state.presentation.current_slide().unwrap();
    assert_eq!(slide.elements.len(), 2);
    assert_eq!(state.presentation.selected_element_id.as_deref(), Some(element_id.as_str()));
    assert!(state.presentation.selected_element().is_some());
}

#[test]
fn add_element_with_colliding_id_gets_a_fresh_one() {
    let state = EditorState::new();
    let existing_id = state.presentation.slides[0].elements[0].id.clone();
    let mut element = Element::new_shape(ShapeKind::Rect);
    element.id = existing_id.clone();

    let state = dispatch(&state, Command::AddElement { element });
    let slide = state.presentation.current_slide().unwrap();
    assert_eq!(slide.elements.len(), 2);
    assert!(slide.has_unique_element_ids());
    assert_ne!(slide.elements[1].id, existing_id);
}

#[test]
fn delete_element_clears_matching_selection() {
    let state = EditorState::new();
    let element = Element::new_shape(ShapeKind::Triangle);
    let element_id = element.id.clone();
    let state = dispatch(&state, Command::AddElement { element });
    assert!(state.presentation.selected_element_id.is_some());

    let state = dispatch(&state, Command::DeleteElement { id: element_id });
    assert_eq!(state.presentation.current_slide().unwrap().elements.len(), 1);
    assert!(state.presentation.selected_element_id.is_none());
}

#[test]
fn delete_unknown_element_is_a_no_op() {
    let state = EditorState::new();
    let before = state.clone();
    let state = dispatch(&state, Command::DeleteElement { id: "gone1234".into() });
    assert_eq!(state, before);
}

#[test]
fn select_element_tolerates_dangling_ids_on_lookup() {
    let state = EditorState::new();
    let state = dispatch(
        &state,
        Command::SelectElement {
            id: Some("dangling".into()),
        },
    );
    assert_eq!(state.presentation.selected_element_id.as_deref(), Some("dangling"));
    assert!(state.presentation.selected_element().is_none());
}

#[test]
fn set_background_applies_to_the_active_slide() {
    let state = EditorState::new();
    let state = dispatch(&state, Command::AddSlide);
    let state = dispatch(
        &state,
        Command::SetBackground {
            color: "#102030".to_string(),
        },
    );
    assert_eq!(
        state.presentation.current_slide().unwrap().background,
        Background::Color("#102030".to_string())
    );
    // The inactive slide keeps its default background.
    assert_eq!(state.presentation.slides[0].background, Background::default());
}

#[test]
fn update_slide_background_targets_any_slide_by_id() {
    let state = EditorState::new();
    let state = dispatch(&state, Command::AddSlide);
    let first_id = state.presentation.slides[0].id.clone();

    let state = dispatch(
        &state,
        Command::UpdateSlideBackground {
            slide_id: first_id.clone(),
            background: Background::Color("#aabbcc".to_string()),
        },
    );
    assert_eq!(
        state.presentation.slide(&first_id).unwrap().background,
        Background::Color("#aabbcc".to_string())
    );

    let before = state.clone();
    let state = dispatch(
        &state,
        Command::UpdateSlideBackground {
            slide_id: "missing0".into(),
            background: Background::Color("#000000".to_string()),
        },
    );
    assert_eq!(state, before);
}

#[test]
fn apply_template_replaces_elements_with_fresh_ids() {
    let state = EditorState::new();
    let template = vec![Element::new_text(), Element::new_shape(ShapeKind::Star)];
    let template_ids: Vec<String> = template.iter().map(|e| e.id.clone()).collect();

    let state = dispatch(
        &state,
        Command::ApplyTemplate {
            elements: template,
            background: Some(Background::Color("#fafafa".to_string())),
        },
    );
    let slide = state.presentation.current_slide().unwrap();
    assert_eq!(slide.elements.len(), 2);
    assert_eq!(slide.background, Background::Color("#fafafa".to_string()));
    for (fresh, old) in slide.elements.iter().zip(&template_ids) {
        assert_ne!(&fresh.id, old);
    }
    assert!(state.presentation.selected_element_id.is_none());
}

#[test]
fn add_slide_with_template_regenerates_ids_and_activates_the_slide() {
    let state = EditorState::new();
    let mut template = Slide::blank("Title layout");
    template.elements.push(Element::new_text());
    let template_id = template.id.clone();

    let state = dispatch(&state, Command::AddSlideWithTemplate { slide: template });
    assert_eq!(state.presentation.slides.len(), 2);
    let added = &state.presentation.slides[1];
    assert_eq!(state.presentation.current_slide_id, added.id);
    assert_ne!(added.id, template_id);
    assert_eq!(added.name, "Title layout");
}

#[test]
fn load_presentation_replaces_document_and_resets_history() {
    let state = EditorState::new();
    let state = dispatch(&state, Command::AddSlide);
    assert!(state.history_len() > 1);

    let mut deck = Presentation::new();
    deck.title = "Loaded deck".to_string();
    deck.current_slide_id = String::new(); // repaired on load

    let state = dispatch(&state, Command::LoadPresentation { data: deck });
    assert_eq!(state.presentation.title, "Loaded deck");
    assert_eq!(state.history_len(), 1);
    assert_eq!(state.history_index(), 0);
    assert!(!state.can_undo());
    assert_eq!(
        state.presentation.current_slide_id,
        state.presentation.slides[0].id
    );
}

#[test]
fn load_presentation_without_slides_is_a_no_op() {
    let state = EditorState::new();
    let mut deck = Presentation::new();
    deck.slides.clear();
    let before = state.clone();

    let state = dispatch(&state, Command::LoadPresentation { data: deck });
    assert_eq!(state, before);
}

#[test]
fn set_current_slide_clears_selection_and_ignores_unknown_ids() {
    let state = EditorState::new();
    let first_id = state.presentation.slides[0].id.clone();
    let state = dispatch(&state, Command::AddSlide);
    let element = Element::new_shape(ShapeKind::Diamond);
    let state = dispatch(&state, Command::AddElement { element });
    assert!(state.presentation.selected_element_id.is_some());

    let state = dispatch(&state, Command::SetCurrentSlide { id: first_id.clone() });
    assert_eq!(state.presentation.current_slide_id, first_id);
    assert!(state.presentation.selected_element_id.is_none());

    let before = state.clone();
    let state = dispatch(&state, Command::SetCurrentSlide { id: "nope".into() });
    assert_eq!(state, before);
}
