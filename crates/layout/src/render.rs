//! Attribute maps produced by `render()`.
//!
//! These are the only serialization boundary of the engine. Serialized with
//! serde, each variant becomes a flat map tagged by `type`, using the key
//! names the poster document projection reads (`fontSize`, `textAlign`,
//! `z_index`, ...).

use posterflow_style::{FontWeight, TextAlign};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderedElement {
    Text(RenderedText),
    Image(RenderedImage),
    Container(RenderedContainer),
}

impl RenderedElement {
    pub fn type_name(&self) -> &'static str {
        match self {
            RenderedElement::Text(_) => "text",
            RenderedElement::Image(_) => "image",
            RenderedElement::Container(_) => "container",
        }
    }

    pub fn x(&self) -> f64 {
        match self {
            RenderedElement::Text(t) => t.x,
            RenderedElement::Image(i) => i.x,
            RenderedElement::Container(c) => c.x,
        }
    }

    pub fn y(&self) -> f64 {
        match self {
            RenderedElement::Text(t) => t.y,
            RenderedElement::Image(i) => i.y,
            RenderedElement::Container(c) => c.y,
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, RenderedElement::Container(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedText {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub content: String,
    pub font_size: u32,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub color: String,
    pub text_align: TextAlign,
    pub opacity: f64,
    pub rotation: f64,
    #[serde(rename = "z_index")]
    pub z_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedImage {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub src: String,
    pub opacity: f64,
    pub rotation: f64,
    pub z_index: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedContainer {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub gap: f64,
    pub elements: Vec<RenderedElement>,
}
