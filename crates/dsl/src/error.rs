use posterflow_layout::LayoutError;
use posterflow_traits::AssetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DslError {
    #[error("Instruction is not a valid object: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Instruction has no command")]
    MissingCommand,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Image asset '{0}' requested but no asset resolver is configured")]
    NoResolver(String),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl DslError {
    /// True for instructions that were understood but are not supported,
    /// as opposed to instructions that failed while being built.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, DslError::MissingCommand | DslError::UnknownCommand(_))
    }
}
