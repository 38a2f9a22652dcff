pub mod brief;
pub mod geometry;

pub use brief::{AssetList, AssetRef, DesignBrief};
pub use geometry::{Bounds, Size};
