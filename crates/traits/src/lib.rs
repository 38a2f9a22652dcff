pub mod asset;

pub use asset::{AssetError, AssetResolver, InMemoryAssetResolver, ResolvedAsset};
