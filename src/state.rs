//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! icon registry is built once at startup and shared read-only; the render
//! cache is the only mutable piece and sits behind an async mutex that is
//! never held across file I/O.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use haven_icons::{IconRegistry, IconRenderer};
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::error::StartupError;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<IconRegistry>,
    pub renderer: Arc<Mutex<IconRenderer>>,
    pub assets_dir: Arc<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(registry: IconRegistry, cache_capacity: usize, assets_dir: PathBuf) -> Self {
        Self {
            registry: Arc::new(registry),
            renderer: Arc::new(Mutex::new(IconRenderer::new(cache_capacity))),
            assets_dir: Arc::new(assets_dir),
        }
    }

    /// Build state from config, loading the manifest override if one is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the override manifest cannot be read or is invalid.
    pub fn from_config(config: &ServerConfig) -> Result<Self, StartupError> {
        let registry = load_registry(config.icon_manifest.as_deref())?;
        tracing::info!(icons = registry.len(), "icon registry loaded");
        Ok(Self::new(registry, config.icon_cache_capacity, config.assets_dir.clone()))
    }

    /// On-disk location of an icon asset file.
    #[must_use]
    pub fn icon_path(&self, file: &str) -> PathBuf {
        self.assets_dir.join("icons").join(file)
    }

    #[must_use]
    pub fn illustrations_dir(&self) -> PathBuf {
        self.assets_dir.join("illustrations")
    }
}

/// Load the manifest at `path`, or the bundled manifest when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub fn load_registry(path: Option<&Path>) -> Result<IconRegistry, StartupError> {
    let Some(path) = path else {
        return Ok(IconRegistry::bundled().clone());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|source| StartupError::ManifestRead { path: path.to_path_buf(), source })?;
    IconRegistry::from_json(&raw).map_err(|source| StartupError::ManifestInvalid { path: path.to_path_buf(), source })
}
