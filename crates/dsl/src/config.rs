//! Presets the adapter falls back to when an instruction leaves a field out.

use crate::instruction::InstructionKind;
use posterflow_style::{FontWeight, TextAlign};
use serde::{Deserialize, Deserializer, Serialize};

/// Defaults for one kind of text instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPreset {
    pub font_size: u32,
    /// For titles this is only used when the design brief has no main color.
    pub color: String,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
    /// When set, an instruction's own `text_align` is ignored.
    pub lock_alignment: bool,
    pub line_height: f64,
    /// Placeholder used when the instruction has no content.
    pub content: String,
}

impl TextPreset {
    pub fn title() -> Self {
        Self {
            font_size: 48,
            color: "#000000".to_string(),
            font_weight: FontWeight::Bold,
            text_align: TextAlign::Center,
            lock_alignment: false,
            line_height: 1.5,
            content: "Title".to_string(),
        }
    }

    pub fn subtitle() -> Self {
        Self {
            font_size: 32,
            color: "#666666".to_string(),
            font_weight: FontWeight::Normal,
            text_align: TextAlign::Center,
            lock_alignment: false,
            line_height: 1.5,
            content: "Subtitle".to_string(),
        }
    }

    pub fn body() -> Self {
        Self {
            font_size: 24,
            color: "#333333".to_string(),
            font_weight: FontWeight::Normal,
            text_align: TextAlign::Left,
            lock_alignment: false,
            line_height: 1.6,
            content: "Body text".to_string(),
        }
    }

    pub fn cta() -> Self {
        Self {
            font_size: 28,
            color: "#0066FF".to_string(),
            font_weight: FontWeight::Bold,
            text_align: TextAlign::Center,
            lock_alignment: true,
            line_height: 1.5,
            content: "Learn more →".to_string(),
        }
    }
}

/// Canvas geometry and per-kind defaults of the instruction adapter.
///
/// A preset given in a config file only overrides the fields it names; the
/// rest keep the built-in values for that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdapterConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Padding of the root container.
    pub padding: f64,
    /// Gap between the root container's children.
    pub gap: f64,
    /// Width given to blocks when the canvas leaves no room inside the padding.
    pub fallback_width: f64,
    pub image_width: f64,
    pub image_height: f64,
    #[serde(deserialize_with = "title_preset")]
    pub title: TextPreset,
    #[serde(deserialize_with = "subtitle_preset")]
    pub subtitle: TextPreset,
    #[serde(deserialize_with = "body_preset")]
    pub body: TextPreset,
    #[serde(deserialize_with = "cta_preset")]
    pub cta: TextPreset,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1080.0,
            canvas_height: 1920.0,
            padding: 40.0,
            gap: 20.0,
            fallback_width: 800.0,
            image_width: 800.0,
            image_height: 600.0,
            title: TextPreset::title(),
            subtitle: TextPreset::subtitle(),
            body: TextPreset::body(),
            cta: TextPreset::cta(),
        }
    }
}

/// The fields of a [`TextPreset`] as they appear in a config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PresetOverride {
    font_size: Option<u32>,
    color: Option<String>,
    font_weight: Option<FontWeight>,
    text_align: Option<TextAlign>,
    lock_alignment: Option<bool>,
    line_height: Option<f64>,
    content: Option<String>,
}

impl PresetOverride {
    fn apply(self, base: TextPreset) -> TextPreset {
        TextPreset {
            font_size: self.font_size.unwrap_or(base.font_size),
            color: self.color.unwrap_or(base.color),
            font_weight: self.font_weight.unwrap_or(base.font_weight),
            text_align: self.text_align.unwrap_or(base.text_align),
            lock_alignment: self.lock_alignment.unwrap_or(base.lock_alignment),
            line_height: self.line_height.unwrap_or(base.line_height),
            content: self.content.unwrap_or(base.content),
        }
    }
}

fn title_preset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TextPreset, D::Error> {
    Ok(PresetOverride::deserialize(deserializer)?.apply(TextPreset::title()))
}

fn subtitle_preset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TextPreset, D::Error> {
    Ok(PresetOverride::deserialize(deserializer)?.apply(TextPreset::subtitle()))
}

fn body_preset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TextPreset, D::Error> {
    Ok(PresetOverride::deserialize(deserializer)?.apply(TextPreset::body()))
}

fn cta_preset<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TextPreset, D::Error> {
    Ok(PresetOverride::deserialize(deserializer)?.apply(TextPreset::cta()))
}

impl AdapterConfig {
    /// The text preset for `kind`, or `None` for images.
    pub fn preset(&self, kind: InstructionKind) -> Option<&TextPreset> {
        match kind {
            InstructionKind::Title => Some(&self.title),
            InstructionKind::Subtitle => Some(&self.subtitle),
            InstructionKind::Body => Some(&self.body),
            InstructionKind::Cta => Some(&self.cta),
            InstructionKind::Image => None,
        }
    }

    /// The widest a block may be inside a root container of `canvas_width`.
    pub fn content_width(&self, canvas_width: f64) -> f64 {
        let available = canvas_width - 2.0 * self.padding;
        if available > 0.0 {
            available
        } else {
            self.fallback_width
        }
    }
}
