//! Startup errors for the server binary.

use std::path::PathBuf;

use haven_icons::ManifestError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read icon manifest {path}: {source}")]
    ManifestRead { path: PathBuf, source: std::io::Error },

    #[error("invalid icon manifest {path}: {source}")]
    ManifestInvalid { path: PathBuf, source: ManifestError },

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
