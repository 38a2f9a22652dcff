//! The poster document handed to the front end.
//!
//! A [`PosterData`] is a canvas plus a flat, ordered list of layers with
//! integer geometry. [`SchemaConverter`] projects an arranged layout tree
//! onto that model and fills the gaps left by the layout from the design
//! brief and asset list.

pub mod converter;
pub mod poster;

pub use converter::SchemaConverter;
pub use poster::{Canvas, ImageLayer, Layer, LayerBase, PosterData, ShapeLayer, TextLayer};
