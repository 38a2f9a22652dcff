//! The state handed over by the planning and layout agents.

use crate::error::PipelineError;
use posterflow_schema::Layer;
use posterflow_types::{AssetList, DesignBrief};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Input of a full render. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowState {
    pub design_brief: DesignBrief,
    pub asset_list: Option<AssetList>,
    pub final_poster: FinalPoster,
    /// Overrides the configured canvas width.
    pub canvas_width: Option<f64>,
    /// Overrides the configured canvas height. Only used for precomputed layers.
    pub canvas_height: Option<f64>,
}

/// The layout agent's output: instructions to lay out, or layers that were
/// already positioned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalPoster {
    /// Kept as raw values so one malformed instruction does not reject the
    /// whole state.
    pub dsl_instructions: Vec<Value>,
    pub layers: Option<Vec<Layer>>,
}

impl WorkflowState {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let source = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&source)?)
    }
}
