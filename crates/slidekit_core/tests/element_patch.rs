use serde_json::json;
use slidekit_core::model::element::{ElementKind, MIN_ELEMENT_SIZE};
use slidekit_core::{Command, EditorState, Element, ShapeKind, dispatch};

fn state_with_shape() -> (EditorState, String) {
    let state = EditorState::new();
    let shape = Element::new_shape(ShapeKind::Rect);
    let id = shape.id.clone();
    (dispatch(&state, Command::AddElement { element: shape }), id)
}

#[test]
fn patch_shallow_merges_onto_wire_fields() {
    let (state, id) = state_with_shape();
    let state = dispatch(
        &state,
        Command::UpdateElement {
            id: id.clone(),
            patch: json!({ "x": 10.0, "fill": "#ff0000", "text": "label" }),
        },
    );
    let element = state.presentation.element(&id).unwrap();
    assert_eq!(element.x, 10.0);
    let ElementKind::Shape(shape) = &element.kind else {
        panic!("expected shape");
    };
    assert_eq!(shape.fill, "#ff0000");
    assert_eq!(shape.text, "label");
    // Untouched fields survive the merge.
    assert_eq!(shape.shape, ShapeKind::Rect);
}

#[test]
fn patch_geometry_is_clamped_to_the_envelope() {
    let (state, id) = state_with_shape();
    let state = dispatch(
        &state,
        Command::UpdateElement {
            id: id.clone(),
            patch: json!({ "x": 99999.0, "y": -99999.0, "w": 99999.0, "h": -5.0 }),
        },
    );
    let element = state.presentation.element(&id).unwrap();
    assert_eq!(element.x, 1010.0);
    assert_eq!(element.y, -50.0);
    assert_eq!(element.w, 1060.0);
    assert_eq!(element.h, MIN_ELEMENT_SIZE);
    assert!(element.h <= 640.0);
}

#[test]
fn patch_cannot_change_id_or_variant() {
    let (state, id) = state_with_shape();
    let before = state.presentation.element(&id).unwrap().clone();
    let state = dispatch(
        &state,
        Command::UpdateElement {
            id: id.clone(),
            patch: json!({ "id": "hijacked", "type": "image" }),
        },
    );
    // Identity and variant are fixed; the merge itself is a no-op here
    // but the document may still record the (unchanged) element.
    let element = state.presentation.element(&id).unwrap();
    assert_eq!(element.id, before.id);
    assert_eq!(element.kind.name(), "shape");
    assert!(state.presentation.element("hijacked").is_none());
}

#[test]
fn undecodable_patch_is_dropped_without_recording_history() {
    let (state, id) = state_with_shape();
    let len = state.history_len();
    let before = state.presentation.element(&id).unwrap().clone();

    let state = dispatch(
        &state,
        Command::UpdateElement {
            id: id.clone(),
            patch: json!({ "rotation": "sideways" }),
        },
    );
    assert_eq!(state.presentation.element(&id).unwrap(), &before);
    assert_eq!(state.history_len(), len);

    // Non-object patches are rejected outright.
    let state = dispatch(
        &state,
        Command::UpdateElement {
            id: id.clone(),
            patch: json!(42),
        },
    );
    assert_eq!(state.presentation.element(&id).unwrap(), &before);
    assert_eq!(state.history_len(), len);
}

#[test]
fn patch_on_unknown_element_is_a_no_op() {
    let state = EditorState::new();
    let before = state.clone();
    let state = dispatch(
        &state,
        Command::UpdateElement {
            id: "missing0".into(),
            patch: json!({ "x": 1.0 }),
        },
    );
    assert_eq!(state, before);
}

#[test]
fn patch_only_reaches_elements_on_the_active_slide() {
    let (state, id) = state_with_shape();
    let state = dispatch(&state, Command::AddSlide);
    let before = state.clone();

    // The shape lives on the first slide, which is no longer active.
    let state = dispatch(
        &state,
        Command::UpdateElement {
            id,
            patch: json!({ "x": 0.0 }),
        },
    );
    assert_eq!(state, before);
}

#[test]
fn patch_records_one_history_entry_when_applied() {
    let (state, id) = state_with_shape();
    let len = state.history_len();
    let state = dispatch(
        &state,
        Command::UpdateElement {
            id,
            patch: json!({ "rotation": 45.0 }),
        },
    );
    assert_eq!(state.history_len(), len + 1);
    assert_eq!(state.history_index(), len);
}

#[test]
fn styles_replacement_is_shallow_not_deep() {
    let state = EditorState::new();
    let text_id = state.presentation.slides[0].elements[0].id.clone();
    let state = dispatch(
        &state,
        Command::UpdateElement {
            id: text_id.clone(),
            patch: json!({ "styles": { "bold": true } }),
        },
    );
    let element = state.presentation.element(&text_id).unwrap();
    let ElementKind::Text(text) = &element.kind else {
        panic!("expected text");
    };
    // The styles object was replaced wholesale; unspecified fields fall
    // back to defaults rather than keeping prior values.
    assert!(text.styles.bold);
    assert_eq!(text.styles.font_family, "Arial");
}
