//! The common geometry contract shared by every layout element.

use crate::nodes::{Container, Direction, ImageBlock, TextBlock};
use crate::render::{RenderedImage, RenderedText};
use crate::tree::ElementId;
use posterflow_style::Style;
use posterflow_types::geometry::{Bounds, Size};

/// The closed set of element variants the engine knows how to arrange.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Text(TextBlock),
    Image(ImageBlock),
    Container(Container),
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text(_) => "text",
            ElementKind::Image(_) => "image",
            ElementKind::Container(c) => match c.direction() {
                Direction::Vertical => "vertical container",
                Direction::Horizontal => "horizontal container",
            },
        }
    }
}

/// A positioned, sized and styled node of the layout tree.
///
/// Elements are built standalone and handed to [`crate::LayoutTree::insert`].
/// Geometry can only be changed through the tree: `set_position`, a parent's
/// `arrange`, or the content operations of the leaf kinds. A text block's
/// height is always derived from its content.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    z_index: i32,
    style: Style,
    pub(crate) parent: Option<ElementId>,
    pub(crate) kind: ElementKind,
}

impl Element {
    fn with_kind(kind: ElementKind, width: f64, height: f64, style: Style) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            z_index: 0,
            style,
            parent: None,
            kind,
        }
    }

    /// A text element. Its width is the block's `max_width` and its height
    /// the estimate from [`TextBlock::calculate_height`].
    pub fn text(block: TextBlock) -> Self {
        let style = Style::with_font_size(block.font_size());
        let (width, height) = (block.max_width(), block.calculate_height());
        Self::with_kind(ElementKind::Text(block), width, height, style)
    }

    pub fn image(block: ImageBlock, width: f64, height: f64) -> Self {
        Self::with_kind(ElementKind::Image(block), width, height, Style::default())
    }

    /// A top-to-bottom container of the given width.
    ///
    /// Starts with `padding = 20`, `gap = 10` and a zero height, which is
    /// recomputed on every arrangement.
    pub fn vertical(width: f64) -> Self {
        Self::with_kind(
            ElementKind::Container(Container::vertical()),
            width,
            0.0,
            Style::default(),
        )
    }

    /// A left-to-right container, sized `400 x 600` until first arranged,
    /// with no padding and no gap.
    pub fn horizontal() -> Self {
        Self::with_kind(
            ElementKind::Container(Container::horizontal()),
            Container::DEFAULT_WIDTH,
            Container::DEFAULT_HEIGHT,
            Style::default(),
        )
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.set_position(x, y);
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Overrides the container padding. Has no effect on leaf elements.
    pub fn with_padding(mut self, padding: f64) -> Self {
        if let ElementKind::Container(c) = &mut self.kind {
            c.padding = padding;
        }
        self
    }

    /// Overrides the container gap. Has no effect on leaf elements.
    pub fn with_gap(mut self, gap: f64) -> Self {
        if let ElementKind::Container(c) = &mut self.kind {
            c.gap = gap;
        }
        self
    }

    /// Overrides the size of a container or an image. Text elements keep
    /// their derived size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        if !matches!(self.kind, ElementKind::Text(_)) {
            self.width = width;
            self.height = height;
        }
        self
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn as_text(&self) -> Option<&TextBlock> {
        match &self.kind {
            ElementKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageBlock> {
        match &self.kind {
            ElementKind::Image(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match &self.kind {
            ElementKind::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, ElementKind::Container(_))
    }

    /// Stores the new coordinates. Never triggers a reflow.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }

    pub(crate) fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub(crate) fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub(crate) fn kind_mut(&mut self) -> &mut ElementKind {
        &mut self.kind
    }

    pub(crate) fn render_text(&self, block: &TextBlock) -> RenderedText {
        RenderedText {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            content: block.content().to_string(),
            font_size: self.style.font_size,
            font_family: self.style.font_family.clone(),
            font_weight: self.style.font_weight,
            color: self.style.color.clone(),
            text_align: self.style.text_align,
            opacity: self.style.opacity,
            rotation: self.style.rotation,
            z_index: self.z_index,
        }
    }

    pub(crate) fn render_image(&self, block: &ImageBlock) -> RenderedImage {
        RenderedImage {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            src: block.src().to_string(),
            opacity: self.style.opacity,
            rotation: self.style.rotation,
            z_index: self.z_index,
        }
    }
}

impl From<TextBlock> for Element {
    fn from(block: TextBlock) -> Self {
        Element::text(block)
    }
}
