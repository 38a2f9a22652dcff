pub mod fixtures;

use posterflow::{PipelineError, PosterData, PosterRenderer, WorkflowState};
use posterflow_schema::{ImageLayer, Layer, TextLayer};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Render a workflow state given as JSON with a default renderer
pub fn render_state(state: Value) -> Result<PosterData, PipelineError> {
    let state: WorkflowState = serde_json::from_value(state)?;
    PosterRenderer::new().render_workflow(&state)
}

pub fn text_layer(layer: &Layer) -> &TextLayer {
    match layer {
        Layer::Text(text) => text,
        other => panic!("expected a text layer, got {}", other.type_name()),
    }
}

pub fn image_layer(layer: &Layer) -> &ImageLayer {
    match layer {
        Layer::Image(image) => image,
        other => panic!("expected an image layer, got {}", other.type_name()),
    }
}
