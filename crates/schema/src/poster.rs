//! Serialized form of a poster: `{ "canvas": {...}, "layers": [...] }`.
//!
//! Key names follow the front end's document format, which mixes camelCase
//! (`fontSize`, `backgroundColor`) with `z_index`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Canvas {
    pub width: i64,
    pub height: i64,
    pub background_color: String,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PosterData {
    pub canvas: Canvas,
    pub layers: Vec<Layer>,
}

/// Fields shared by every layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerBase {
    pub id: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub x: i64,
    #[serde(default)]
    pub y: i64,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    #[serde(default)]
    pub rotation: i64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Stacking order, higher is drawn later.
    #[serde(default)]
    pub z_index: i64,
}

fn default_name() -> String {
    "Layer".to_string()
}

fn default_opacity() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayer {
    #[serde(flatten)]
    pub base: LayerBase,
    pub content: String,
    #[serde(default = "default_font_size")]
    pub font_size: i64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_text_align")]
    pub text_align: String,
    #[serde(default = "default_font_weight")]
    pub font_weight: String,
}

fn default_font_size() -> i64 {
    24
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_font_family() -> String {
    "Yuanti TC".to_string()
}

fn default_text_align() -> String {
    "left".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayer {
    #[serde(flatten)]
    pub base: LayerBase,
    #[serde(default)]
    pub src: String,
}

/// A filled rectangle. Never produced by the layout engine, but accepted
/// in precomputed layer lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeLayer {
    #[serde(flatten)]
    pub base: LayerBase,
    #[serde(default = "default_shape_fill")]
    pub background_color: String,
}

fn default_shape_fill() -> String {
    "transparent".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Layer {
    Text(TextLayer),
    Image(ImageLayer),
    Rect(ShapeLayer),
}

impl Layer {
    pub fn type_name(&self) -> &'static str {
        match self {
            Layer::Text(_) => "text",
            Layer::Image(_) => "image",
            Layer::Rect(_) => "rect",
        }
    }

    pub fn base(&self) -> &LayerBase {
        match self {
            Layer::Text(l) => &l.base,
            Layer::Image(l) => &l.base,
            Layer::Rect(l) => &l.base,
        }
    }
}
