//! Flow layout engine.
//!
//! Content blocks (text and images) are stacked by containers that compute
//! concrete pixel positions for their direct children. Text blocks estimate
//! their own height from the character count, so growing a title pushes the
//! blocks below it down on the next arrangement.
//!
//! ```ignore
//! let mut tree = LayoutTree::new();
//! let root = tree.insert(Element::vertical(1080.0).with_padding(40.0).with_gap(20.0));
//! let title = tree.insert(
//!     TextBlock::new("Summer Sale")
//!         .with_font_size(48)
//!         .with_max_width(1000.0),
//! );
//! let hero = tree.insert(Element::image(ImageBlock::new("hero.png"), 800.0, 600.0));
//! tree.add(root, title)?.add(root, hero)?;
//! tree.arrange(root)?;
//! let layers = tree.get_all_elements(root)?;
//! ```

use thiserror::Error;

pub mod element;
pub mod nodes;
pub mod render;
pub mod tree;

pub use self::element::{Element, ElementKind};
pub use self::nodes::{Container, Direction, ImageBlock, TextBlock};
pub use self::render::{RenderedContainer, RenderedElement, RenderedImage, RenderedText};
pub use self::tree::{ElementId, LayoutTree};

// Re-export geometry types used by elements to prevent type mismatches
pub use posterflow_types::geometry::{Bounds, Size};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Unknown element {0:?}: it was never inserted or has been discarded.")]
    UnknownElement(ElementId),
    #[error("Kind mismatch for {id:?}: expected {expected}, got {actual}.")]
    KindMismatch {
        id: ElementId,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Adding {child:?} to {container:?} would make the container its own descendant.")]
    Cycle {
        container: ElementId,
        child: ElementId,
    },
    #[error("Cannot preserve the aspect ratio of image {0:?}: its current width is zero.")]
    DegenerateAspectRatio(ElementId),
}

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tree_test;
