//! Slide model: background plus an ordered element list.
//!
//! # Responsibility
//! - Define one slide page and its background descriptor.
//! - Provide element lookup and fresh-id duplication helpers.
//!
//! # Invariants
//! - Element order is z-order; later entries render on top.
//! - Every element id is unique within the slide.

use crate::model::element::Element;
use crate::model::id::{SlideId, generate_id};
use crate::text::plain_text_preview;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How an image background fills the slide box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundFillMode {
    #[default]
    Cover,
    Contain,
    Repeat,
}

/// Structured image-background descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBackground {
    pub src: String,
    #[serde(default)]
    pub mode: BackgroundFillMode,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub pos_x: f64,
    #[serde(default)]
    pub pos_y: f64,
}

fn default_scale() -> f64 {
    1.0
}

fn default_opacity() -> f64 {
    1.0
}

/// Slide background: a plain color string or an image descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Background {
    Color(String),
    Image(ImageBackground),
}

impl Default for Background {
    fn default() -> Self {
        Self::Color("#ffffff".to_string())
    }
}

/// One page of the presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    pub name: String,
    #[serde(default)]
    pub background: Background,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Slide {
    /// Creates an empty slide with a default background.
    pub fn blank(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            background: Background::default(),
            elements: Vec::new(),
        }
    }

    /// Finds one element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Finds one element by id for mutation.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Returns whether every element id is unique within this slide.
    pub fn has_unique_element_ids(&self) -> bool {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.elements.len());
        self.elements.iter().all(|e| seen.insert(e.id.as_str()))
    }

    /// Deep copy with fresh slide, element and cell ids, keeping the name.
    /// Used when instantiating template slides.
    pub fn with_fresh_ids(&self) -> Self {
        Self {
            id: generate_id(),
            name: self.name.clone(),
            background: self.background.clone(),
            elements: self.elements.iter().map(Element::with_fresh_ids).collect(),
        }
    }

    /// Deep copy with fresh ids and a "copy" suffix on the name.
    pub fn duplicated(&self) -> Self {
        let mut copy = self.with_fresh_ids();
        copy.name = format!("{} copy", self.name);
        copy
    }

    /// Outline label: preview of the first text-bearing element, falling
    /// back to the slide name.
    pub fn outline_label(&self) -> String {
        self.elements
            .iter()
            .filter_map(|e| e.content_text())
            .find_map(plain_text_preview)
            .unwrap_or_else(|| self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{Background, Slide};
    use crate::model::element::{Element, ElementKind, ShapeKind};

    #[test]
    fn background_wire_form_is_color_string_or_image_object() {
        let color: Background = serde_json::from_value(serde_json::json!("#1a2b3c")).unwrap();
        assert_eq!(color, Background::Color("#1a2b3c".to_string()));

        let image: Background = serde_json::from_value(serde_json::json!({
            "src": "data:image/png;base64,xyz",
            "mode": "contain",
            "opacity": 0.5
        }))
        .unwrap();
        match image {
            Background::Image(bg) => {
                assert_eq!(bg.opacity, 0.5);
                assert_eq!(bg.scale, 1.0);
            }
            other => panic!("unexpected background: {other:?}"),
        }
    }

    #[test]
    fn duplicated_slide_regenerates_every_id() {
        let mut slide = Slide::blank("Original");
        slide.elements.push(Element::new_text());
        slide.elements.push(Element::new_table(2, 2, 0.0, 0.0, 400.0, 200.0));

        let copy = slide.duplicated();
        assert_ne!(copy.id, slide.id);
        assert_eq!(copy.name, "Original copy");
        for (old, new) in slide.elements.iter().zip(&copy.elements) {
            assert_ne!(old.id, new.id);
        }
        let (ElementKind::Table(old), ElementKind::Table(new)) =
            (&slide.elements[1].kind, &copy.elements[1].kind)
        else {
            panic!("expected table elements");
        };
        for (a, b) in old.cells.iter().zip(&new.cells) {
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn outline_label_prefers_text_content_over_name() {
        let mut slide = Slide::blank("Slide 1");
        assert_eq!(slide.outline_label(), "Slide 1");
        let mut shape = Element::new_shape(ShapeKind::Star);
        if let ElementKind::Shape(props) = &mut shape.kind {
            props.text = "<b>Quarterly</b> plan".to_string();
        }
        slide.elements.push(shape);
        assert_eq!(slide.outline_label(), "Quarterly plan");
    }
}
