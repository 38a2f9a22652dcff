//! AssetResolver trait for abstracting visual asset lookup.
//!
//! Asset search, generation and background removal live outside the layout
//! pipeline. The pipeline only needs an image reference and its natural size,
//! which is what this trait hands back.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for asset resolution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to resolve asset '{key}': {message}")]
    ResolveFailed { key: String, message: String },
}

/// An image reference together with its natural size in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAsset {
    /// URL or embedded data reference.
    pub src: String,
    pub width: f64,
    pub height: f64,
}

impl ResolvedAsset {
    pub fn new(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            src: src.into(),
            width,
            height,
        }
    }
}

/// A source of resolved image assets.
///
/// # Implementations
///
/// - `InMemoryAssetResolver`: answers from a pre-populated map (always available)
///
/// # Example
///
/// ```ignore
/// let resolver = InMemoryAssetResolver::new();
/// resolver.add("hero", ResolvedAsset::new("https://cdn/hero.png", 1600.0, 900.0))?;
/// let asset = resolver.resolve("hero")?;
/// ```
pub trait AssetResolver: Send + Sync + Debug {
    /// Resolve an asset key (a search query, an asset id, ...) to an image.
    fn resolve(&self, key: &str) -> Result<ResolvedAsset, AssetError>;

    /// Returns a human-readable name for this resolver (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory asset resolver.
///
/// Assets must be registered before use.
#[derive(Debug, Default)]
pub struct InMemoryAssetResolver {
    assets: RwLock<HashMap<String, ResolvedAsset>>,
}

impl InMemoryAssetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `AssetError::ResolveFailed` if the internal lock is poisoned.
    pub fn add(&self, key: impl Into<String>, asset: ResolvedAsset) -> Result<(), AssetError> {
        let key = key.into();
        let mut assets = self
            .assets
            .write()
            .map_err(|_| AssetError::ResolveFailed {
                key: key.clone(),
                message: "asset store lock poisoned".to_string(),
            })?;
        assets.insert(key, asset);
        Ok(())
    }

    /// Get the number of registered assets.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.assets.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AssetResolver for InMemoryAssetResolver {
    fn resolve(&self, key: &str) -> Result<ResolvedAsset, AssetError> {
        let assets = self.assets.read().map_err(|_| AssetError::ResolveFailed {
            key: key.to_string(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets
            .get(key)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(key.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryAssetResolver"
    }
}
