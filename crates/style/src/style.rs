//! The visual attribute bag attached to every layout element.

use crate::font::FontWeight;
use crate::text::TextAlign;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_SIZE: u32 = 16;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_COLOR: &str = "#000000";

/// Visual attributes of an element.
///
/// Values are stored as given. Nothing is validated or clamped, so an
/// `opacity` outside `0.0..=1.0` is carried through to the output unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub font_size: u32,
    pub font_family: String,
    pub font_weight: FontWeight,
    /// Hex color string, e.g. `#FF6600`.
    pub color: String,
    pub text_align: TextAlign,
    pub background_color: Option<String>,
    pub opacity: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_weight: FontWeight::default(),
            color: DEFAULT_COLOR.to_string(),
            text_align: TextAlign::default(),
            background_color: None,
            opacity: 1.0,
            rotation: 0.0,
        }
    }
}

impl Style {
    /// The default style with the given font size.
    pub fn with_font_size(font_size: u32) -> Self {
        Self {
            font_size,
            ..Default::default()
        }
    }
}
