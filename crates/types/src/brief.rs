//! Values handed to the layout pipeline by the planning and asset stages.

use serde::{Deserialize, Serialize};

/// Design decisions produced by the planning stage.
///
/// Only the fields the layout and projection stages read are modelled; any
/// other keys in the incoming JSON are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignBrief {
    pub title: Option<String>,
    pub main_color: Option<String>,
    pub background_color: Option<String>,
}

impl DesignBrief {
    pub fn main_color_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.main_color.as_deref().unwrap_or(fallback)
    }

    pub fn background_color_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.background_color.as_deref().unwrap_or(fallback)
    }
}

/// A single visual asset selected for the poster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetRef {
    pub src: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// The assets chosen by the visual stage, by layer role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetList {
    pub background_layer: Option<AssetRef>,
    pub foreground_layer: Option<AssetRef>,
}

impl AssetList {
    /// The source used to fill an image layer that has none of its own.
    ///
    /// The background layer wins over the foreground layer.
    pub fn fallback_src(&self) -> Option<&str> {
        self.background_layer
            .as_ref()
            .or(self.foreground_layer.as_ref())
            .map(|asset| asset.src.as_str())
    }
}
