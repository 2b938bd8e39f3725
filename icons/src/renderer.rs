//! Cached icon render pipeline.
//!
//! DESIGN
//! ======
//! Two LRU layers: parsed documents keyed by asset file, and finished renders
//! keyed by `(name, requested size, color)`. Fetching stays with the caller:
//! `lookup` answers from cache, and on a miss the caller retrieves the asset
//! markup and hands it to `render`.

#[cfg(test)]
#[path = "renderer_test.rs"]
mod renderer_test;

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::error::IconError;
use crate::manifest::ResolvedAsset;
use crate::svg::{IconColor, SvgDocument, group_markup, svg_markup};

/// Cache key for a finished render.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderKey {
    pub name: String,
    pub size: u32,
    pub color: IconColor,
}

impl RenderKey {
    #[must_use]
    pub fn new(asset: &ResolvedAsset, color: &IconColor) -> Self {
        Self { name: asset.name.clone(), size: asset.requested_size, color: color.clone() }
    }
}

/// A recolored icon ready to display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedIcon {
    pub asset: ResolvedAsset,
    pub color: IconColor,
    pub view_box: String,
    /// Recolored presentation attributes from the asset's root `<svg>`.
    pub root_attrs: Vec<(String, String)>,
    /// Element tree only, without the root's attributes.
    pub inner: String,
}

impl RenderedIcon {
    /// Rendered width and height in pixels.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.asset.requested_size
    }

    /// Standalone `<svg>` markup.
    #[must_use]
    pub fn markup(&self) -> String {
        svg_markup(self.size(), &self.view_box, &self.root_attrs, &self.inner)
    }

    /// Content for an `<svg>` element owned by the caller: the element tree,
    /// wrapped in a group carrying the root's paint when it has any.
    #[must_use]
    pub fn embedded_markup(&self) -> String {
        group_markup(&self.root_attrs, &self.inner)
    }
}

/// Parse/recolor pipeline with bounded caches.
pub struct IconRenderer {
    parsed: LruCache<String, Arc<SvgDocument>>,
    rendered: LruCache<RenderKey, Arc<RenderedIcon>>,
}

impl IconRenderer {
    pub const DEFAULT_CAPACITY: usize = 256;

    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { parsed: LruCache::new(cap), rendered: LruCache::new(cap) }
    }

    /// Answer from cache without touching the network.
    ///
    /// A parsed-but-unrendered asset is recolored and cached on the way out.
    pub fn lookup(&mut self, asset: &ResolvedAsset, color: &IconColor) -> Option<Arc<RenderedIcon>> {
        let key = RenderKey::new(asset, color);
        if let Some(hit) = self.rendered.get(&key) {
            return Some(Arc::clone(hit));
        }
        let doc = Arc::clone(self.parsed.get(&asset.file)?);
        Some(self.finish(key, asset, color, &doc))
    }

    /// Parse freshly fetched markup for `asset` and render it in `color`.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Parse`] or [`IconError::EmptyDocument`] if the
    /// markup is not a usable SVG.
    pub fn render(
        &mut self,
        asset: &ResolvedAsset,
        markup: &str,
        color: &IconColor,
    ) -> Result<Arc<RenderedIcon>, IconError> {
        let doc = Arc::new(SvgDocument::parse(markup)?);
        self.parsed.put(asset.file.clone(), Arc::clone(&doc));
        Ok(self.finish(RenderKey::new(asset, color), asset, color, &doc))
    }

    /// Number of finished renders held.
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.rendered.len()
    }

    fn finish(
        &mut self,
        key: RenderKey,
        asset: &ResolvedAsset,
        color: &IconColor,
        doc: &SvgDocument,
    ) -> Arc<RenderedIcon> {
        let recolored = doc.recolor(color);
        let view_box = recolored
            .effective_view_box()
            .unwrap_or_else(|| format!("0 0 {0} {0}", asset.resolved_size));
        let icon = Arc::new(RenderedIcon {
            asset: asset.clone(),
            color: color.clone(),
            view_box,
            inner: recolored.inner_markup(),
            root_attrs: recolored.root_attrs,
        });
        self.rendered.put(key, Arc::clone(&icon));
        icon
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
