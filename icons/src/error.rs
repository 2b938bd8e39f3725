//! Error types for manifest loading and icon rendering.
//!
//! ERROR HANDLING
//! ==============
//! Every failure here is local to one icon. The UI layer logs these and
//! renders nothing; the typed variants exist so callers that care can tell
//! a missing icon apart from a failed fetch.

/// Errors produced while loading or validating an icon manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest JSON could not be deserialized.
    #[error("manifest parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// An icon entry lists no sizes.
    #[error("icon '{name}' has no sizes")]
    NoSizes { name: String },

    /// An icon entry lists a zero pixel size.
    #[error("icon '{name}' lists size 0")]
    ZeroSize { name: String },

    /// An icon size maps to an empty file name.
    #[error("icon '{name}' size {size} has an empty file name")]
    EmptyFile { name: String, size: u32 },
}

/// Errors produced while resolving, parsing, or rendering an icon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IconError {
    /// The icon name is not present in the registry.
    #[error("icon not found: {name}")]
    UnknownIcon { name: String },

    /// The asset could not be retrieved.
    #[error("icon fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The asset markup is not well-formed SVG.
    #[error("icon parse failed: {0}")]
    Parse(String),

    /// The asset parsed but has no `<svg>` root.
    #[error("icon asset has no <svg> root")]
    EmptyDocument,
}
