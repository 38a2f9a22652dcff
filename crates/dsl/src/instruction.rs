//! A single decoded layout instruction.

use crate::error::DslError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The element an instruction produces, resolved from its command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Title,
    Subtitle,
    Body,
    Image,
    Cta,
}

impl InstructionKind {
    /// Maps a command name, including its aliases, to a kind.
    pub fn from_command(command: &str) -> Option<Self> {
        match command {
            "add_title" | "add_heading" | "add_main_title" => Some(Self::Title),
            "add_subtitle" | "add_subheading" => Some(Self::Subtitle),
            "add_text" | "add_body_text" | "add_description" => Some(Self::Body),
            "add_image" | "add_hero_image" | "add_background_image" => Some(Self::Image),
            "add_cta" | "add_button_text" => Some(Self::Cta),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Image)
    }
}

/// The fields an instruction may carry. Every field is optional; the
/// adapter fills the gaps from its presets.
///
/// Numeric fields accept numbers or numeric strings (`"48"`, `"800px"`).
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Instruction {
    pub command: Option<String>,
    pub content: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub font_size: Option<f64>,
    pub color: Option<String>,
    pub text_align: Option<String>,
    /// Only read for body text.
    #[serde(deserialize_with = "lenient_number")]
    pub line_height: Option<f64>,
    pub src: Option<String>,
    /// Key handed to the asset resolver when no `src` is given.
    pub asset: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub width: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub height: Option<f64>,
}

impl Instruction {
    pub fn from_value(value: &Value) -> Result<Self, DslError> {
        Ok(Instruction::deserialize(value)?)
    }

    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or("<none>")
    }

    pub fn kind(&self) -> Result<InstructionKind, DslError> {
        let command = self.command.as_deref().ok_or(DslError::MissingCommand)?;
        InstructionKind::from_command(command)
            .ok_or_else(|| DslError::UnknownCommand(command.to_string()))
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_number))
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            s.strip_suffix("px").unwrap_or(s).trim().parse().ok()
        }
        _ => None,
    }
}
