//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;
use std::str::FromStr;

use haven_icons::IconRenderer;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is set but does not parse.
    #[error("invalid {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding `icons/` and `illustrations/<1x|2x>/`.
    pub assets_dir: PathBuf,
    /// Manifest to load instead of the bundled one.
    pub icon_manifest: Option<PathBuf>,
    pub icon_cache_capacity: usize,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: default `public`
    /// - `ICON_MANIFEST`: path to a manifest JSON overriding the bundled one
    /// - `ICON_CACHE_CAPACITY`: default 256
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;
        let assets_dir = std::env::var("ASSETS_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);
        let icon_manifest = std::env::var("ICON_MANIFEST")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let icon_cache_capacity = env_parse("ICON_CACHE_CAPACITY", IconRenderer::DEFAULT_CAPACITY)?;

        Ok(Self { port, assets_dir, icon_manifest, icon_cache_capacity })
    }
}

fn env_parse<T: FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        _ => Ok(default),
    }
}
