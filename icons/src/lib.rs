//! Icon and illustration core shared by the Haven server and client.
//!
//! This crate owns the icon manifest, the nearest-size resolution policy,
//! asset URL construction, and the parse → recolor → render pipeline for
//! SVG icons. It performs no I/O: callers fetch asset markup themselves
//! (`gloo-net` in the browser, `tokio::fs` on the server) and hand it to
//! [`IconRenderer`].

pub mod assets;
pub mod error;
pub mod manifest;
pub mod renderer;
pub mod svg;

pub use assets::{Resolution, icon_file_name, icon_url, illustration_srcset, illustration_url};
pub use error::{IconError, ManifestError};
pub use manifest::{IconDescriptor, IconRegistry, ResolvedAsset, nearest_size};
pub use renderer::{IconRenderer, RenderKey, RenderedIcon};
pub use svg::{IconColor, Placeholder, SvgDocument, SvgElement};
