use crate::poster::{
    Canvas, DEFAULT_BACKGROUND, ImageLayer, Layer, LayerBase, PosterData, TextLayer,
};
use posterflow_layout::{ElementId, LayoutError, LayoutTree, RenderedElement};
use posterflow_types::{AssetList, DesignBrief};

/// Projects arranged layouts onto [`PosterData`].
#[derive(Debug, Clone)]
pub struct SchemaConverter {
    default_background: String,
}

impl Default for SchemaConverter {
    fn default() -> Self {
        Self {
            default_background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl SchemaConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas color used when the design brief does not name one.
    pub fn with_default_background(mut self, color: impl Into<String>) -> Self {
        self.default_background = color.into();
        self
    }

    pub fn default_background(&self) -> &str {
        &self.default_background
    }

    /// Flattens the layout below `root` into layers and sizes the canvas
    /// after `root`.
    ///
    /// Layer `i` gets the id `<type>_<i>` and the name `<Type> <i>`; all
    /// geometry is truncated to whole pixels.
    pub fn convert(
        &self,
        tree: &LayoutTree,
        root: ElementId,
        brief: &DesignBrief,
    ) -> Result<PosterData, LayoutError> {
        let layers: Vec<Layer> = tree
            .get_all_elements(root)?
            .iter()
            .enumerate()
            .filter_map(|(index, element)| to_layer(element, index))
            .collect();

        let root = tree.get(root)?;
        let canvas = Canvas {
            width: root.width() as i64,
            height: root.height() as i64,
            background_color: brief
                .background_color_or(&self.default_background)
                .to_string(),
        };

        log::info!("Converted layout to {} layers", layers.len());
        Ok(PosterData { canvas, layers })
    }

    /// Fills what the layout could not know from the design brief and the
    /// selected assets.
    ///
    /// The brief's background color replaces the canvas color, text layers
    /// without content get the brief's title, and image layers without a
    /// source get the background asset, or the foreground asset when there is
    /// no background asset.
    pub fn merge_with_design_brief(
        &self,
        mut poster: PosterData,
        brief: &DesignBrief,
        assets: Option<&AssetList>,
    ) -> PosterData {
        if let Some(background) = &brief.background_color {
            poster.canvas.background_color = background.clone();
        }

        let fallback_src = assets.and_then(AssetList::fallback_src);
        for layer in &mut poster.layers {
            match layer {
                Layer::Text(text) if text.content.is_empty() => {
                    if let Some(title) = &brief.title {
                        text.content = title.clone();
                    }
                }
                Layer::Image(image) if image.src.is_empty() => {
                    if let Some(src) = fallback_src {
                        log::debug!("Filling {} with asset {}", image.base.id, src);
                        image.src = src.to_string();
                    }
                }
                _ => {}
            }
        }

        poster
    }
}

fn to_layer(element: &RenderedElement, index: usize) -> Option<Layer> {
    let type_name = element.type_name();
    let layer = match element {
        RenderedElement::Text(text) => Layer::Text(TextLayer {
            base: base(
                type_name,
                index,
                [text.x, text.y, text.width, text.height],
                text.rotation,
                text.opacity,
                text.z_index,
            ),
            content: text.content.clone(),
            font_size: i64::from(text.font_size),
            color: text.color.clone(),
            font_family: text.font_family.clone(),
            text_align: text.text_align.to_string(),
            font_weight: text.font_weight.to_string(),
        }),
        RenderedElement::Image(image) => Layer::Image(ImageLayer {
            base: base(
                type_name,
                index,
                [image.x, image.y, image.width, image.height],
                image.rotation,
                image.opacity,
                image.z_index,
            ),
            src: image.src.clone(),
        }),
        RenderedElement::Container(_) => {
            log::warn!("Skipping unexpected {} at layer {}", type_name, index);
            return None;
        }
    };
    Some(layer)
}

fn base(
    type_name: &str,
    index: usize,
    [x, y, width, height]: [f64; 4],
    rotation: f64,
    opacity: f64,
    z_index: i32,
) -> LayerBase {
    LayerBase {
        id: format!("{}_{}", type_name, index),
        name: format!("{} {}", capitalize(type_name), index),
        x: x as i64,
        y: y as i64,
        width: width as i64,
        height: height as i64,
        rotation: rotation as i64,
        opacity,
        z_index: i64::from(z_index),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
