//! Presentation root aggregate and its query/patch surface.
//!
//! # Responsibility
//! - Hold the ordered slide deck plus active-slide/selection pointers.
//! - Provide the read operations and mutation primitives every command
//!   is expressed through.
//!
//! # Invariants
//! - `current_slide_id` always references an existing slide once the
//!   document is initialized.
//! - A dangling `selected_element_id` resolves to "no selection" on
//!   lookup, never to an error.
//! - Patching an unknown slide or element id is a silent no-op; stale
//!   references from asynchronous UI callbacks are expected.

use crate::model::element::{Element, ElementKind};
use crate::model::id::{ElementId, SlideId};
use crate::model::slide::{Background, Slide};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection reasons for a loaded presentation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    /// The deck must always contain at least one slide.
    NoSlides,
    /// A slide id occurs more than once.
    DuplicateSlideId(SlideId),
    /// An element id occurs more than once within one slide.
    DuplicateElementId { slide_id: SlideId, element_id: ElementId },
}

impl Display for PresentationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSlides => write!(f, "presentation must contain at least one slide"),
            Self::DuplicateSlideId(id) => write!(f, "duplicate slide id: {id}"),
            Self::DuplicateElementId { slide_id, element_id } => {
                write!(f, "duplicate element id {element_id} in slide {slide_id}")
            }
        }
    }
}

impl Error for PresentationError {}

/// Root document: ordered slides plus active/selection pointers.
///
/// Selection and clipboard are transient editor state: they are skipped by
/// serialization and excluded from history snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    #[serde(default)]
    pub title: String,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub current_slide_id: SlideId,
    #[serde(skip)]
    pub selected_element_id: Option<ElementId>,
    /// Single-level clipboard carried as an opaque payload.
    #[serde(skip)]
    pub clipboard: Option<Value>,
}

impl Presentation {
    /// New document with one slide containing one default text element.
    pub fn new() -> Self {
        let mut slide = Slide::blank("Slide 1");
        slide.elements.push(Element::new_text());
        let current_slide_id = slide.id.clone();
        Self {
            title: "Untitled presentation".to_string(),
            slides: vec![slide],
            current_slide_id,
            selected_element_id: None,
            clipboard: None,
        }
    }

    /// Validates structural invariants and repairs the active-slide pointer.
    ///
    /// Used on loaded payloads before they replace the document: a pointer
    /// to a missing slide falls back to the first slide, while an empty
    /// deck or duplicated ids reject the payload outright.
    pub fn normalized(mut self) -> Result<Self, PresentationError> {
        if self.slides.is_empty() {
            return Err(PresentationError::NoSlides);
        }
        let mut slide_ids: HashSet<&str> = HashSet::with_capacity(self.slides.len());
        for slide in &self.slides {
            if !slide_ids.insert(slide.id.as_str()) {
                return Err(PresentationError::DuplicateSlideId(slide.id.clone()));
            }
            if !slide.has_unique_element_ids() {
                let mut seen = HashSet::new();
                let element_id = slide
                    .elements
                    .iter()
                    .find(|e| !seen.insert(e.id.as_str()))
                    .map(|e| e.id.clone())
                    .unwrap_or_default();
                return Err(PresentationError::DuplicateElementId {
                    slide_id: slide.id.clone(),
                    element_id,
                });
            }
        }
        if self.slide_index(&self.current_slide_id).is_none() {
            self.current_slide_id = self.slides[0].id.clone();
        }
        self.selected_element_id = None;
        self.clipboard = None;
        Ok(self)
    }

    /// Finds one slide by id.
    pub fn slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// Finds one slide by id for mutation.
    pub fn slide_mut(&mut self, id: &str) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id == id)
    }

    /// Position of one slide in display order.
    pub fn slide_index(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// The currently active slide.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slide(&self.current_slide_id)
    }

    fn current_slide_mut(&mut self) -> Option<&mut Slide> {
        let id = self.current_slide_id.clone();
        self.slide_mut(&id)
    }

    /// Finds one element by id within the active slide.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.current_slide().and_then(|s| s.element(id))
    }

    /// Resolves the selection to an element, or `None` when nothing is
    /// selected or the stored id no longer exists on the active slide.
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected_element_id
            .as_deref()
            .and_then(|id| self.element(id))
    }

    /// Replaces one slide's background. No-op on a reference miss.
    pub fn set_slide_background(&mut self, slide_id: &str, background: Background) -> bool {
        match self.slide_mut(slide_id) {
            Some(slide) => {
                slide.background = background;
                true
            }
            None => {
                warn!("event=patch_ignored module=model reason=slide_not_found id={slide_id}");
                false
            }
        }
    }

    /// Replaces one slide's element array wholesale (template application,
    /// structural slide edits). No-op on a reference miss.
    pub fn set_slide_elements(&mut self, slide_id: &str, elements: Vec<Element>) -> bool {
        match self.slide_mut(slide_id) {
            Some(slide) => {
                slide.elements = elements;
                true
            }
            None => {
                warn!("event=patch_ignored module=model reason=slide_not_found id={slide_id}");
                false
            }
        }
    }

    /// Shallow-merges a patch object onto one element of the active slide.
    ///
    /// Semantics:
    /// - top-level patch keys replace the element's wire fields;
    /// - `id` and `type` keys are ignored so identity and variant stay fixed;
    /// - geometry is clamped to the reference-frame envelope after merging;
    /// - a merge that fails to decode, or that breaks the table
    ///   `rows * cols` cell invariant, drops the whole patch.
    ///
    /// Returns whether the element was replaced.
    pub fn merge_element_patch(&mut self, element_id: &str, patch: &Value) -> bool {
        let Value::Object(patch_map) = patch else {
            warn!("event=patch_ignored module=model reason=patch_not_object id={element_id}");
            return false;
        };
        let Some(slide) = self.current_slide_mut() else {
            return false;
        };
        let Some(element) = slide.element_mut(element_id) else {
            warn!("event=patch_ignored module=model reason=element_not_found id={element_id}");
            return false;
        };

        let mut repr = match serde_json::to_value(&*element) {
            Ok(Value::Object(map)) => map,
            _ => return false,
        };
        for (key, value) in patch_map {
            if key == "id" || key == "type" {
                continue;
            }
            repr.insert(key.clone(), value.clone());
        }

        match serde_json::from_value::<Element>(Value::Object(repr)) {
            Ok(mut next) => {
                next.id = element.id.clone();
                next.clamp_geometry();
                if let ElementKind::Table(table) = &next.kind {
                    if !table.is_consistent() {
                        warn!(
                            "event=patch_ignored module=model reason=table_grid_mismatch \
                             id={element_id} rows={} cols={} cells={}",
                            table.rows,
                            table.cols,
                            table.cells.len()
                        );
                        return false;
                    }
                }
                *element = next;
                true
            }
            Err(err) => {
                warn!("event=patch_ignored module=model reason=decode_failed id={element_id} error={err}");
                false
            }
        }
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}
