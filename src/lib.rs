//! Poster layout pipeline.
//!
//! Layout instructions from a planning stage are parsed into a flow layout
//! ([`posterflow_layout`]), arranged on a fixed-width canvas and projected onto
//! the poster document model ([`posterflow_schema`]).

pub mod config;
pub mod error;
pub mod renderer;
pub mod workflow;

pub use config::RenderConfig;
pub use error::PipelineError;
pub use renderer::PosterRenderer;
pub use workflow::{FinalPoster, WorkflowState};

pub use posterflow_dsl::{AdapterConfig, DslParser, ParsedLayout, TextPreset};
pub use posterflow_layout::{Element, ElementId, ImageBlock, LayoutError, LayoutTree, TextBlock};
pub use posterflow_schema::{Canvas, Layer, PosterData, SchemaConverter};
pub use posterflow_style::{FontWeight, Style, TextAlign};
pub use posterflow_traits::{AssetResolver, InMemoryAssetResolver, ResolvedAsset};
pub use posterflow_types::{AssetList, AssetRef, DesignBrief};
