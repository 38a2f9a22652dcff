use crate::config::RenderConfig;
use crate::error::PipelineError;
use crate::workflow::WorkflowState;
use posterflow_dsl::{DslParser, ParsedLayout};
use posterflow_layout::{ElementId, LayoutTree};
use posterflow_schema::{Canvas, PosterData, SchemaConverter};
use posterflow_traits::AssetResolver;
use posterflow_types::{AssetList, DesignBrief};
use serde_json::{json, Value};
use std::sync::Arc;

/// Turns layout instructions into a finished [`PosterData`].
///
/// ```ignore
/// let poster = PosterRenderer::new()
///     .with_config(RenderConfig::from_file("poster.json")?)
///     .render_workflow(&WorkflowState::from_file("state.json")?)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PosterRenderer {
    parser: DslParser,
    converter: SchemaConverter,
}

impl PosterRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.parser = self.parser.with_config(config.adapter);
        self.converter = self
            .converter
            .with_default_background(config.background_color);
        self
    }

    /// Resolver for image instructions that name an `asset` key.
    pub fn with_resolver(mut self, resolver: Arc<dyn AssetResolver>) -> Self {
        self.parser = self.parser.with_resolver(resolver);
        self
    }

    pub fn canvas_width(&self) -> f64 {
        self.parser.config().canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.parser.config().canvas_height
    }

    /// Parses and arranges `instructions`. `canvas_width` defaults to the
    /// configured width.
    pub fn build_layout(
        &self,
        instructions: &[Value],
        canvas_width: Option<f64>,
        brief: &DesignBrief,
    ) -> Result<ParsedLayout, PipelineError> {
        let width = canvas_width.unwrap_or_else(|| self.canvas_width());
        Ok(self.parser.parse_with_width(instructions, width, brief)?)
    }

    pub fn convert(
        &self,
        tree: &LayoutTree,
        root: ElementId,
        brief: &DesignBrief,
    ) -> Result<PosterData, PipelineError> {
        Ok(self.converter.convert(tree, root, brief)?)
    }

    pub fn merge_with_design_brief(
        &self,
        poster: PosterData,
        brief: &DesignBrief,
        assets: Option<&AssetList>,
    ) -> PosterData {
        self.converter.merge_with_design_brief(poster, brief, assets)
    }

    /// Runs the whole flow for one workflow state: layout, projection and
    /// merge.
    ///
    /// A state without instructions but with precomputed layers is passed
    /// through on a canvas of the requested size.
    pub fn render_workflow(&self, state: &WorkflowState) -> Result<PosterData, PipelineError> {
        log::info!("Rendering poster from workflow state");
        let brief = &state.design_brief;
        let final_poster = &state.final_poster;

        let precomputed = final_poster
            .layers
            .as_ref()
            .filter(|_| final_poster.dsl_instructions.is_empty());
        if let Some(layers) = precomputed {
            log::info!("No layout instructions, using {} precomputed layers", layers.len());
            let canvas = Canvas {
                width: state.canvas_width.unwrap_or_else(|| self.canvas_width()) as i64,
                height: state.canvas_height.unwrap_or_else(|| self.canvas_height()) as i64,
                background_color: brief
                    .background_color_or(self.converter.default_background())
                    .to_string(),
            };
            return Ok(PosterData {
                canvas,
                layers: layers.clone(),
            });
        }

        let layout =
            self.build_layout(&final_poster.dsl_instructions, state.canvas_width, brief)?;
        let poster = self.convert(&layout.tree, layout.root, brief)?;
        let poster = self.merge_with_design_brief(poster, brief, state.asset_list.as_ref());

        log::info!(
            "Poster rendered: {} x {} with {} layers",
            poster.canvas.width,
            poster.canvas.height,
            poster.layers.len()
        );
        Ok(poster)
    }

    /// A title, an optional subtitle and an optional 800x600 image, without a
    /// design brief.
    pub fn simple_poster(
        &self,
        title: &str,
        subtitle: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<PosterData, PipelineError> {
        let mut instructions = vec![json!({
            "command": "add_title",
            "content": title,
            "font_size": 48
        })];
        if let Some(subtitle) = subtitle {
            instructions.push(json!({
                "command": "add_subtitle",
                "content": subtitle,
                "font_size": 32
            }));
        }
        if let Some(src) = image_url {
            instructions.push(json!({
                "command": "add_image",
                "src": src,
                "width": 800,
                "height": 600
            }));
        }

        let brief = DesignBrief::default();
        let layout = self.build_layout(&instructions, None, &brief)?;
        self.convert(&layout.tree, layout.root, &brief)
    }
}
