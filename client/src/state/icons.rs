//! Per-thread icon pipeline state for the `Icon` component.
//!
//! DESIGN
//! ======
//! The registry is the process-wide bundled manifest. Renders are cached in a
//! thread-local `IconRenderer`, which on the browser main thread means one
//! cache per page: an icon shown twice is fetched and parsed once. Icons that
//! mount together before the first fetch lands queue on the asset file and
//! share that single request.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use haven_icons::{IconColor, IconError, IconRegistry, IconRenderer, Placeholder, RenderedIcon, ResolvedAsset};

/// Receives an icon's settled view; a no-op once the icon has unmounted.
pub type Deliver = Box<dyn FnOnce(IconView)>;

struct Waiter {
    asset: ResolvedAsset,
    color: IconColor,
    deliver: Deliver,
}

thread_local! {
    static RENDERER: RefCell<IconRenderer> = RefCell::new(IconRenderer::default());
    /// Icons waiting on a fetch, keyed by asset file.
    static IN_FLIGHT: RefCell<HashMap<String, Vec<Waiter>>> = RefCell::new(HashMap::new());
}

/// What an icon should draw right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconView {
    /// Unknown icon or failed load: draw nothing.
    Hidden,
    /// Asset in flight: draw an empty box of the final size.
    Placeholder(Placeholder),
    Ready(Arc<RenderedIcon>),
}

/// First view for `(name, size, color)`, plus the asset to fetch if the cache
/// cannot answer.
pub fn initial_view(registry: &IconRegistry, name: &str, size: u32, color: &IconColor) -> (IconView, Option<ResolvedAsset>) {
    let asset = match registry.resolve(name, size) {
        Ok(asset) => asset,
        Err(e) => {
            leptos::logging::warn!("icon: {e}");
            return (IconView::Hidden, None);
        }
    };
    if let Some(icon) = RENDERER.with_borrow_mut(|r| r.lookup(&asset, color)) {
        return (IconView::Ready(icon), None);
    }
    (IconView::Placeholder(Placeholder::for_asset(&asset)), Some(asset))
}

/// View after the fetch for `asset` settles.
pub fn settled_view(asset: &ResolvedAsset, fetched: Result<String, IconError>, color: &IconColor) -> IconView {
    let rendered = fetched.and_then(|markup| RENDERER.with_borrow_mut(|r| r.render(asset, &markup, color)));
    match rendered {
        Ok(icon) => IconView::Ready(icon),
        Err(e) => {
            leptos::logging::warn!("icon '{}': {e}", asset.name);
            IconView::Hidden
        }
    }
}

/// Queue an icon on its asset's fetch.
///
/// Returns `true` when no fetch for `asset.file` is in flight yet, meaning the
/// caller must start one and later hand its outcome to [`settle`].
pub fn enqueue(asset: ResolvedAsset, color: IconColor, deliver: Deliver) -> bool {
    IN_FLIGHT.with_borrow_mut(|pending| match pending.entry(asset.file.clone()) {
        Entry::Occupied(mut waiting) => {
            waiting.get_mut().push(Waiter { asset, color, deliver });
            false
        }
        Entry::Vacant(slot) => {
            slot.insert(vec![Waiter { asset, color, deliver }]);
            true
        }
    })
}

/// Finish the fetch for `file` and deliver a view to every queued icon.
///
/// The markup is parsed once; later waiters render from the parse cache.
pub fn settle(file: &str, fetched: Result<String, IconError>) {
    let waiters = IN_FLIGHT.with_borrow_mut(|pending| pending.remove(file)).unwrap_or_default();
    for Waiter { asset, color, deliver } in waiters {
        let cached = if fetched.is_ok() {
            RENDERER.with_borrow_mut(|r| r.lookup(&asset, &color))
        } else {
            None
        };
        let next = match cached {
            Some(icon) => IconView::Ready(icon),
            None => settled_view(&asset, fetched.clone(), &color),
        };
        deliver(next);
    }
}
