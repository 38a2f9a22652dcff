use crate::config::{AdapterConfig, TextPreset};
use crate::error::DslError;
use crate::instruction::{Instruction, InstructionKind};
use posterflow_layout::{Element, ElementId, ImageBlock, LayoutTree, TextBlock};
use posterflow_style::{Style, TextAlign};
use posterflow_traits::AssetResolver;
use posterflow_types::DesignBrief;
use serde_json::Value;
use std::sync::Arc;

/// The arranged result of one parse: the tree and its root container.
#[derive(Debug)]
pub struct ParsedLayout {
    pub tree: LayoutTree,
    pub root: ElementId,
}

impl ParsedLayout {
    pub fn width(&self) -> f64 {
        self.tree.get(self.root).map(Element::width).unwrap_or_default()
    }

    pub fn height(&self) -> f64 {
        self.tree.get(self.root).map(Element::height).unwrap_or_default()
    }

    /// Number of elements placed directly in the root container.
    pub fn len(&self) -> usize {
        self.tree.children(self.root).map(<[_]>::len).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds layouts from instruction lists.
#[derive(Debug, Clone, Default)]
pub struct DslParser {
    config: AdapterConfig,
    resolver: Option<Arc<dyn AssetResolver>>,
}

impl DslParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolver used for image instructions that name an `asset` instead of
    /// a `src`.
    pub fn with_resolver(mut self, resolver: Arc<dyn AssetResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Parses `instructions` onto a canvas of the configured width.
    pub fn parse(
        &self,
        instructions: &[Value],
        brief: &DesignBrief,
    ) -> Result<ParsedLayout, DslError> {
        self.parse_with_width(instructions, self.config.canvas_width, brief)
    }

    /// Parses `instructions` onto a canvas `canvas_width` wide.
    ///
    /// The root is a vertical container at the origin. Instructions that fail
    /// are logged and skipped; the container is arranged once at the end.
    pub fn parse_with_width(
        &self,
        instructions: &[Value],
        canvas_width: f64,
        brief: &DesignBrief,
    ) -> Result<ParsedLayout, DslError> {
        log::info!("Parsing {} layout instructions", instructions.len());

        let mut tree = LayoutTree::new();
        let root = tree.insert(
            Element::vertical(canvas_width)
                .with_padding(self.config.padding)
                .with_gap(self.config.gap),
        );
        let max_width = self.config.content_width(canvas_width);

        for (index, value) in instructions.iter().enumerate() {
            let position = index + 1;
            let instruction = match Instruction::from_value(value) {
                Ok(instruction) => instruction,
                Err(e) => {
                    log::error!("[{}] Failed to decode instruction: {}", position, e);
                    continue;
                }
            };

            match self.build_element(&instruction, brief, max_width) {
                Ok(element) => {
                    let id = tree.insert(element);
                    tree.add(root, id)?;
                    log::debug!("[{}] {} added", position, instruction.command());
                }
                Err(e) if e.is_unsupported() => {
                    log::warn!("[{}] Skipping instruction: {}", position, e);
                }
                Err(e) => {
                    log::error!("[{}] {} failed: {}", position, instruction.command(), e);
                }
            }
        }

        tree.arrange(root)?;
        let layout = ParsedLayout { tree, root };
        log::info!(
            "Layout complete: {} x {:.1} with {} elements",
            layout.width(),
            layout.height(),
            layout.len()
        );
        Ok(layout)
    }

    fn build_element(
        &self,
        instruction: &Instruction,
        brief: &DesignBrief,
        max_width: f64,
    ) -> Result<Element, DslError> {
        let kind = instruction.kind()?;
        match self.config.preset(kind) {
            Some(preset) => Ok(text_element(kind, preset, instruction, brief, max_width)),
            None => self.image_element(instruction, max_width),
        }
    }

    fn image_element(
        &self,
        instruction: &Instruction,
        max_width: f64,
    ) -> Result<Element, DslError> {
        let (src, natural) = match (&instruction.src, &instruction.asset) {
            (Some(src), _) => (src.clone(), None),
            (None, Some(key)) => {
                let resolver = self
                    .resolver
                    .as_ref()
                    .ok_or_else(|| DslError::NoResolver(key.clone()))?;
                let asset = resolver.resolve(key)?;
                log::debug!("Resolved asset '{}' with {}", key, resolver.name());
                (asset.src, Some((asset.width, asset.height)))
            }
            (None, None) => (String::new(), None),
        };

        let mut width = instruction
            .width
            .or(natural.map(|(w, _)| w))
            .unwrap_or(self.config.image_width);
        let mut height = instruction
            .height
            .or(natural.map(|(_, h)| h))
            .unwrap_or(self.config.image_height);

        if width > max_width {
            let scale = max_width / width;
            width = max_width.trunc();
            height = (height * scale).trunc();
        }

        Ok(Element::image(ImageBlock::new(src), width, height))
    }
}

fn text_element(
    kind: InstructionKind,
    preset: &TextPreset,
    instruction: &Instruction,
    brief: &DesignBrief,
    max_width: f64,
) -> Element {
    let content = instruction
        .content
        .clone()
        .unwrap_or_else(|| preset.content.clone());
    // Fractional sizes are truncated to whole pixels.
    let font_size = instruction
        .font_size
        .map(|size| size.max(0.0) as u32)
        .unwrap_or(preset.font_size);
    let line_height = match instruction.line_height {
        Some(line_height) if kind == InstructionKind::Body => line_height,
        _ => preset.line_height,
    };

    let color = match &instruction.color {
        Some(color) => color.clone(),
        None if kind == InstructionKind::Title => {
            brief.main_color_or(&preset.color).to_string()
        }
        None => preset.color.clone(),
    };

    let text_align = match instruction.text_align.as_deref() {
        Some(align) if !preset.lock_alignment => align.parse().unwrap_or_else(|e| {
            log::warn!("{}, using {}", e, preset.text_align);
            preset.text_align
        }),
        _ => preset.text_align,
    };

    Element::text(
        TextBlock::new(content)
            .with_font_size(font_size)
            .with_max_width(max_width)
            .with_line_height(line_height),
    )
    .with_style(text_style(font_size, color, preset, text_align))
}

fn text_style(font_size: u32, color: String, preset: &TextPreset, text_align: TextAlign) -> Style {
    Style {
        font_size,
        color,
        font_weight: preset.font_weight,
        text_align,
        ..Style::default()
    }
}
