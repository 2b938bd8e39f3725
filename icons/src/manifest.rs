//! Icon manifest and registry.
//!
//! DESIGN
//! ======
//! The registry is an immutable name → descriptor map built once at startup
//! from a static JSON manifest. Descriptors keep their sizes in a `BTreeMap`
//! keyed by pixel size, so every listed size has exactly one file and sizes
//! iterate in ascending order for nearest-size resolution.

#[cfg(test)]
#[path = "manifest_test.rs"]
mod manifest_test;

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::Deserialize;

use crate::assets::icon_url;
use crate::error::{IconError, ManifestError};

/// Manifest bundled with the crate, mirroring the files under `public/icons`.
const BUNDLED_MANIFEST: &str = include_str!("../manifest.json");

static BUNDLED: LazyLock<IconRegistry> = LazyLock::new(|| match IconRegistry::from_json(BUNDLED_MANIFEST) {
    Ok(registry) => registry,
    Err(e) => {
        tracing::error!(error = %e, "bundled icon manifest is invalid; icons disabled");
        IconRegistry::default()
    }
});

#[derive(Debug, Deserialize)]
struct RawManifest {
    icons: HashMap<String, BTreeMap<u32, String>>,
}

/// Pick the asset size to use for a requested pixel size.
///
/// Exact match wins; otherwise the smallest available size above the request;
/// otherwise the largest available size. Returns `None` only when `available`
/// is empty.
pub fn nearest_size<I>(available: I, requested: u32) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut above: Option<u32> = None;
    let mut largest: Option<u32> = None;
    for size in available {
        if size >= requested && above.is_none_or(|best| size < best) {
            above = Some(size);
        }
        if largest.is_none_or(|best| size > best) {
            largest = Some(size);
        }
    }
    above.or(largest)
}

/// One named icon and the sizes it ships in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconDescriptor {
    name: String,
    sizes: BTreeMap<u32, String>,
}

impl IconDescriptor {
    /// Build a validated descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if `sizes` is empty, contains a zero size, or maps a
    /// size to an empty file name.
    pub fn new(name: impl Into<String>, sizes: BTreeMap<u32, String>) -> Result<Self, ManifestError> {
        let name = name.into();
        if sizes.is_empty() {
            return Err(ManifestError::NoSizes { name });
        }
        for (size, file) in &sizes {
            if *size == 0 {
                return Err(ManifestError::ZeroSize { name });
            }
            if file.trim().is_empty() {
                return Err(ManifestError::EmptyFile { name, size: *size });
            }
        }
        Ok(Self { name, sizes })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Available sizes in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.sizes.keys().copied()
    }

    /// File name for an exact size, if shipped.
    #[must_use]
    pub fn file(&self, size: u32) -> Option<&str> {
        self.sizes.get(&size).map(String::as_str)
    }

    /// Resolve a requested size against this descriptor.
    #[must_use]
    pub fn resolve(&self, requested_size: u32) -> Option<ResolvedAsset> {
        let resolved_size = nearest_size(self.sizes(), requested_size)?;
        let file = self.file(resolved_size)?.to_owned();
        Some(ResolvedAsset { name: self.name.clone(), requested_size, resolved_size, file })
    }
}

/// Outcome of resolving a `(name, size)` request against the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedAsset {
    pub name: String,
    pub requested_size: u32,
    pub resolved_size: u32,
    pub file: String,
}

impl ResolvedAsset {
    /// Public URL of the asset, e.g. `/icons/heart-24.svg`.
    #[must_use]
    pub fn url(&self) -> String {
        icon_url(&self.file)
    }

    /// Whether a different size was substituted for the requested one.
    #[must_use]
    pub fn is_substituted(&self) -> bool {
        self.requested_size != self.resolved_size
    }
}

/// Read-only lookup from icon name to descriptor.
#[derive(Clone, Debug, Default)]
pub struct IconRegistry {
    icons: HashMap<String, IconDescriptor>,
}

impl IconRegistry {
    /// Parse and validate a manifest document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any entry fails
    /// [`IconDescriptor::new`] validation.
    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        let manifest: RawManifest = serde_json::from_str(raw)?;
        let mut icons = HashMap::with_capacity(manifest.icons.len());
        for (name, sizes) in manifest.icons {
            let descriptor = IconDescriptor::new(name.clone(), sizes)?;
            icons.insert(name, descriptor);
        }
        Ok(Self { icons })
    }

    /// Registry built from the manifest bundled into this crate.
    ///
    /// Parsed on first use and shared for the life of the process.
    #[must_use]
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IconDescriptor> {
        self.icons.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Descriptors sorted by name.
    #[must_use]
    pub fn descriptors(&self) -> Vec<&IconDescriptor> {
        let mut out = self.icons.values().collect::<Vec<_>>();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Resolve `name` at `requested_size` using the nearest-size policy.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::UnknownIcon`] if `name` is not registered.
    pub fn resolve(&self, name: &str, requested_size: u32) -> Result<ResolvedAsset, IconError> {
        let resolved = self
            .get(name)
            .and_then(|descriptor| descriptor.resolve(requested_size))
            .ok_or_else(|| IconError::UnknownIcon { name: name.to_owned() })?;
        if resolved.is_substituted() {
            tracing::debug!(
                icon = name,
                requested = requested_size,
                resolved = resolved.resolved_size,
                "icon size substituted"
            );
        }
        Ok(resolved)
    }
}
