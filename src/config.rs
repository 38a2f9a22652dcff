use crate::error::PipelineError;
use posterflow_dsl::AdapterConfig;
use posterflow_schema::poster::DEFAULT_BACKGROUND;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Settings of a [`crate::PosterRenderer`], loadable from a JSON file.
///
/// Every key is optional:
///
/// ```json
/// { "backgroundColor": "#FAFAFA", "adapter": { "canvasWidth": 720, "padding": 24 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub adapter: AdapterConfig,
    /// Canvas color used when the design brief has none.
    pub background_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            adapter: AdapterConfig::default(),
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        Self::from_json(&source)
            .map_err(|e| PipelineError::Config(format!("'{}': {}", path_ref.display(), e)))
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}
