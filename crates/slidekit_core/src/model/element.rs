//! Slide element model and factories.
//!
//! # Responsibility
//! - Define the closed set of element variants placed on slides.
//! - Provide fully-populated default constructors per element kind.
//! - Enforce the reference-frame geometry envelope on every mutation.
//!
//! # Invariants
//! - All geometry is expressed in the fixed 960x540 reference frame.
//! - `x,y` stay within `[-POSITION_MARGIN, dimension + POSITION_MARGIN]`.
//! - `w,h` never exceed `dimension + 2 * POSITION_MARGIN` and never drop
//!   below `MIN_ELEMENT_SIZE`.
//! - A table always holds exactly `rows * cols` cells in row-major order.

use crate::model::id::{CellId, ElementId, generate_id};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical slide width all element geometry is expressed against.
pub const REF_WIDTH: f64 = 960.0;
/// Logical slide height (16:9 against [`REF_WIDTH`]).
pub const REF_HEIGHT: f64 = 540.0;
/// How far an element may hang off the slide edge in reference units.
pub const POSITION_MARGIN: f64 = 50.0;
/// Smallest legal element dimension; blocks zero/negative-size elements.
pub const MIN_ELEMENT_SIZE: f64 = 1.0;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical text alignment inside the element box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// List rendering mode for text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    #[default]
    None,
    Bullet,
    Number,
}

/// Stroke/border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Drop shadow descriptor shared by text and image elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub h: f64,
    pub v: f64,
    pub blur: f64,
    pub color: String,
}

/// Border/stroke descriptor shared by text, shape and cell styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f64,
    pub color: String,
    #[serde(default)]
    pub style: LineStyle,
}

/// Full styling block for a text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyles {
    pub font_family: String,
    pub font_size: f64,
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub line_height: f64,
    pub opacity: f64,
    pub list_style: ListStyle,
    pub shadow: Option<Shadow>,
    pub border: Option<Border>,
}

impl Default for TextStyles {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 20.0,
            color: "#333333".to_string(),
            bold: false,
            italic: false,
            underline: false,
            align: TextAlign::Left,
            vertical_align: VerticalAlign::Top,
            line_height: 1.5,
            opacity: 1.0,
            list_style: ListStyle::None,
            shadow: None,
            border: None,
        }
    }
}

/// Text element payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextProps {
    /// Plain or rich/marked-up content string.
    pub text: String,
    pub bg_color: Option<String>,
    pub styles: TextStyles,
}

/// Closed set of shape geometries sharing one shape schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Rect,
    RoundRect,
    Circle,
    Ellipse,
    Triangle,
    RightTriangle,
    Diamond,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Arrow,
    DoubleArrow,
    Parallelogram,
    Trapezoid,
    Cross,
}

/// Shape element payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeProps {
    pub shape: ShapeKind,
    pub fill: String,
    pub stroke: Option<Border>,
    /// Optional label rendered inside the shape.
    pub text: String,
    pub text_color: String,
    pub font_size: f64,
    pub bold: bool,
    pub align: TextAlign,
}

impl Default for ShapeProps {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Rect,
            fill: "#5b9bd5".to_string(),
            stroke: None,
            text: String::new(),
            text_color: "#ffffff".to_string(),
            font_size: 18.0,
            bold: false,
            align: TextAlign::Center,
        }
    }
}

/// Per-corner radius for image framing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerRadius {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

/// Named image filter presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPreset {
    Grayscale,
    Sepia,
    Blur,
    Brightness,
    Contrast,
}

/// Filter preset with a 0..=1 strength.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFilter {
    pub preset: FilterPreset,
    pub strength: f64,
}

/// Clip mask applied to the image box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageClipShape {
    #[default]
    None,
    Circle,
    RoundRect,
    Diamond,
}

/// Caption text shown under an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCaption {
    pub text: String,
    pub color: String,
    pub font_size: f64,
}

/// Image element payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProps {
    /// Data URI of the image, or `None` for an empty placeholder.
    pub src: Option<String>,
    pub caption: Option<ImageCaption>,
    pub corner_radius: CornerRadius,
    pub shadow: Option<Shadow>,
    pub filter: Option<ImageFilter>,
    pub clip_shape: ImageClipShape,
}

/// Styling block copied by value into each table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyles {
    pub font_size: f64,
    pub color: String,
    pub bg_color: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub align: TextAlign,
}

impl Default for CellStyles {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            color: "#333333".to_string(),
            bg_color: None,
            bold: false,
            italic: false,
            underline: false,
            align: TextAlign::Left,
        }
    }
}

/// One table cell; created and destroyed only via row/column operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub id: CellId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub styles: CellStyles,
}

impl TableCell {
    fn blank() -> Self {
        Self {
            id: generate_id(),
            text: String::new(),
            // Copied by value so later per-cell edits never alias.
            styles: CellStyles::default(),
        }
    }
}

/// Table element payload: a flat row-major cell grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableProps {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<TableCell>,
}

impl TableProps {
    /// Allocates a `rows x cols` grid of blank cells with distinct ids.
    ///
    /// Degenerate dimensions are raised to 1 so the grid invariant holds
    /// from construction onward.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let cells = (0..rows * cols).map(|_| TableCell::blank()).collect();
        Self { rows, cols, cells }
    }

    /// Returns whether the flat cell array matches `rows * cols`.
    pub fn is_consistent(&self) -> bool {
        self.rows >= 1 && self.cols >= 1 && self.cells.len() == self.rows * self.cols
    }

    /// Looks up one cell by grid position.
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Inserts a blank row before `index` (clamped to `0..=rows`).
    ///
    /// The flat cell array is rebuilt in row-major order as one transition.
    pub fn insert_row(&mut self, index: usize) {
        let index = index.min(self.rows);
        let at = index * self.cols;
        let fresh: Vec<TableCell> = (0..self.cols).map(|_| TableCell::blank()).collect();
        self.cells.splice(at..at, fresh);
        self.rows += 1;
    }

    /// Inserts a blank column before `index` (clamped to `0..=cols`).
    pub fn insert_column(&mut self, index: usize) {
        let index = index.min(self.cols);
        let mut next = Vec::with_capacity(self.rows * (self.cols + 1));
        for row in 0..self.rows {
            for col in 0..=self.cols {
                if col == index {
                    next.push(TableCell::blank());
                }
                if col < self.cols {
                    next.push(self.cells[row * self.cols + col].clone());
                }
            }
        }
        self.cols += 1;
        self.cells = next;
    }

    /// Removes the row at `index`; rejected when it would leave zero rows
    /// or when `index` is out of range. Returns whether anything changed.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.rows <= 1 || index >= self.rows {
            return false;
        }
        let at = index * self.cols;
        self.cells.drain(at..at + self.cols);
        self.rows -= 1;
        true
    }

    /// Removes the column at `index`; rejected when it would leave zero
    /// columns or when `index` is out of range.
    pub fn remove_column(&mut self, index: usize) -> bool {
        if self.cols <= 1 || index >= self.cols {
            return false;
        }
        let cols = self.cols;
        let mut position = 0usize;
        self.cells.retain(|_| {
            let keep = position % cols != index;
            position += 1;
            keep
        });
        self.cols -= 1;
        true
    }

    /// Renders the atomic rows/cols/cells replacement patch used with the
    /// element-update command, so structural table edits land as a single
    /// grid transition instead of incremental per-cell edits.
    pub fn as_patch(&self) -> Value {
        serde_json::json!({
            "rows": self.rows,
            "cols": self.cols,
            "cells": serde_json::to_value(&self.cells).expect("cells serialize"),
        })
    }
}

/// Chart family rendered from the element data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
}

/// Chart render variant within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStyle {
    #[default]
    Standard,
    Stacked,
    Smooth,
}

/// Legend placement relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// Legend visibility and placement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub visible: bool,
    pub position: LegendPosition,
}

/// One named series of a structured chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<f64>,
}

/// Structured multi-series chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Chart element payload.
///
/// `labels`/`data` keep the legacy flat single-series form alongside the
/// richer `structured_data`; collaborators may read either.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartProps {
    pub chart_type: ChartType,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub structured_data: Option<ChartData>,
    pub chart_style: ChartStyle,
    pub legend: LegendOptions,
}

/// Variant-specific element payload, discriminated by a `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    Text(TextProps),
    Shape(ShapeProps),
    Image(ImageProps),
    Table(TableProps),
    Chart(ChartProps),
}

impl ElementKind {
    /// Stable variant name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Shape(_) => "shape",
            Self::Image(_) => "image",
            Self::Table(_) => "table",
            Self::Chart(_) => "chart",
        }
    }
}

/// One placeable object on a slide.
///
/// All variants share the positional envelope; variant payloads live in
/// [`ElementKind`] and are flattened onto the same wire object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    fn with_kind(x: f64, y: f64, w: f64, h: f64, kind: ElementKind) -> Self {
        let mut element = Self {
            id: generate_id(),
            x,
            y,
            w,
            h,
            rotation: 0.0,
            kind,
        };
        element.clamp_geometry();
        element
    }

    /// Default text box across the upper middle of the slide.
    pub fn new_text() -> Self {
        Self::with_kind(
            REF_WIDTH * 0.125,
            REF_HEIGHT / 3.0,
            REF_WIDTH * 0.75,
            REF_HEIGHT / 6.0,
            ElementKind::Text(TextProps {
                text: "New text".to_string(),
                ..TextProps::default()
            }),
        )
    }

    /// Default shape centered on the slide.
    pub fn new_shape(shape: ShapeKind) -> Self {
        let size = REF_HEIGHT * 0.4;
        Self::with_kind(
            (REF_WIDTH - size) / 2.0,
            (REF_HEIGHT - size) / 2.0,
            size,
            size,
            ElementKind::Shape(ShapeProps {
                shape,
                ..ShapeProps::default()
            }),
        )
    }

    /// Default image box centered on the slide; `None` src is a placeholder.
    pub fn new_image(src: Option<String>) -> Self {
        let w = REF_WIDTH * 0.3;
        let h = REF_HEIGHT * 0.4;
        Self::with_kind(
            (REF_WIDTH - w) / 2.0,
            (REF_HEIGHT - h) / 2.0,
            w,
            h,
            ElementKind::Image(ImageProps {
                src,
                ..ImageProps::default()
            }),
        )
    }

    /// Table with exactly `rows * cols` freshly-identified cells.
    pub fn new_table(rows: usize, cols: usize, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::with_kind(x, y, w, h, ElementKind::Table(TableProps::new(rows, cols)))
    }

    /// Chart seeded with representative sample data for its type.
    pub fn new_chart(chart_type: ChartType, x: f64, y: f64, w: f64, h: f64) -> Self {
        let structured = match chart_type {
            // Pie charts carry one series of category/value pairs.
            ChartType::Pie => ChartData {
                categories: vec![
                    "Segment A".to_string(),
                    "Segment B".to_string(),
                    "Segment C".to_string(),
                    "Segment D".to_string(),
                ],
                series: vec![ChartSeries {
                    name: "Share".to_string(),
                    data: vec![30.0, 25.0, 25.0, 20.0],
                }],
            },
            ChartType::Bar | ChartType::Line => ChartData {
                categories: vec![
                    "Q1".to_string(),
                    "Q2".to_string(),
                    "Q3".to_string(),
                    "Q4".to_string(),
                ],
                series: vec![
                    ChartSeries {
                        name: "Series 1".to_string(),
                        data: vec![12.0, 19.0, 5.0, 8.0],
                    },
                    ChartSeries {
                        name: "Series 2".to_string(),
                        data: vec![7.0, 11.0, 13.0, 6.0],
                    },
                ],
            },
        };
        let first = &structured.series[0];
        let props = ChartProps {
            chart_type,
            labels: structured.categories.clone(),
            data: first.data.clone(),
            structured_data: Some(structured),
            chart_style: ChartStyle::Standard,
            legend: LegendOptions {
                visible: true,
                position: LegendPosition::Bottom,
            },
        };
        Self::with_kind(x, y, w, h, ElementKind::Chart(props))
    }

    /// Clamps the positional envelope into the legal reference-frame range.
    ///
    /// Non-finite values are reset rather than propagated so a malformed
    /// patch can never poison later arithmetic.
    pub fn clamp_geometry(&mut self) {
        if !self.x.is_finite() {
            self.x = 0.0;
        }
        if !self.y.is_finite() {
            self.y = 0.0;
        }
        if !self.w.is_finite() {
            self.w = MIN_ELEMENT_SIZE;
        }
        if !self.h.is_finite() {
            self.h = MIN_ELEMENT_SIZE;
        }
        if !self.rotation.is_finite() {
            self.rotation = 0.0;
        }
        self.x = self.x.clamp(-POSITION_MARGIN, REF_WIDTH + POSITION_MARGIN);
        self.y = self.y.clamp(-POSITION_MARGIN, REF_HEIGHT + POSITION_MARGIN);
        self.w = self
            .w
            .clamp(MIN_ELEMENT_SIZE, REF_WIDTH + 2.0 * POSITION_MARGIN);
        self.h = self
            .h
            .clamp(MIN_ELEMENT_SIZE, REF_HEIGHT + 2.0 * POSITION_MARGIN);
    }

    /// Copy of this element with a fresh id (and fresh cell ids for tables),
    /// used by slide duplication and template instantiation so id uniqueness
    /// holds for the lifetime of the document.
    pub fn with_fresh_ids(&self) -> Self {
        let mut copy = self.clone();
        copy.id = generate_id();
        if let ElementKind::Table(table) = &mut copy.kind {
            for cell in &mut table.cells {
                cell.id = generate_id();
            }
        }
        copy
    }

    /// Plain content string of text-bearing variants, if any.
    pub fn content_text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text(text) => Some(text.text.as_str()),
            ElementKind::Shape(shape) if !shape.text.is_empty() => Some(shape.text.as_str()),
            _ => None,
        }
    }
}
