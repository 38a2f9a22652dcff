// src/error.rs
use posterflow_dsl::DslError;
use posterflow_layout::LayoutError;
use thiserror::Error;

/// Errors of the instruction-to-poster pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Instruction parsing failed: {0}")]
    Dsl(#[from] DslError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}
