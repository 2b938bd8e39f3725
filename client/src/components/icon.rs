//! Named, size-resolved, recolorable SVG icon.
//!
//! DESIGN
//! ======
//! The first render is always synchronous: either a cached icon or an empty
//! `<svg>` with the final width, height and viewBox, so layout never shifts
//! when the asset lands. On the client the asset is then fetched once (icons
//! sharing an asset share the request) and the view re-renders at most one
//! more time. Paint declared on the asset's root `<svg>` is carried on a
//! wrapping group inside the component's own `<svg>`. Unknown names and
//! failed fetches render nothing and only log.

use haven_icons::{IconColor, IconRegistry};
use leptos::prelude::*;

use crate::state::icons::{IconView, initial_view};

/// Render icon `name` at `size` pixels.
///
/// `color` is any CSS color; when absent the icon follows `currentColor`.
#[component]
pub fn Icon(
    #[prop(into)] name: String,
    #[prop(default = 24)] size: u32,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let color = IconColor::from_option(color.as_deref());
    let (initial, pending) = initial_view(IconRegistry::bundled(), &name, size, &color);
    let view_state = RwSignal::new(initial);

    #[cfg(feature = "hydrate")]
    if let Some(asset) = pending {
        let file = asset.file.clone();
        let url = asset.url();
        // The icon may have unmounted while the fetch was in flight.
        let deliver = Box::new(move |next: IconView| {
            let _ = view_state.try_set(next);
        });
        if crate::state::icons::enqueue(asset, color, deliver) {
            leptos::task::spawn_local(async move {
                let fetched = crate::net::assets::fetch_icon_markup(&url).await;
                crate::state::icons::settle(&file, fetched);
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (pending, color);

    let aria_hidden = if label.is_some() { "false" } else { "true" };
    let role = label.as_ref().map(|_| "img");

    move || match view_state.get() {
        IconView::Hidden => ().into_any(),
        IconView::Placeholder(placeholder) => view! {
            <svg
                class="icon icon--pending"
                data-icon=name.clone()
                width=placeholder.size.to_string()
                height=placeholder.size.to_string()
                viewBox=placeholder.view_box
                aria-hidden=aria_hidden
                role=role
                aria-label=label.clone()
            ></svg>
        }
        .into_any(),
        IconView::Ready(icon) => view! {
            <svg
                class="icon"
                data-icon=name.clone()
                width=icon.size().to_string()
                height=icon.size().to_string()
                viewBox=icon.view_box.clone()
                aria-hidden=aria_hidden
                role=role
                aria-label=label.clone()
                inner_html=icon.embedded_markup()
            ></svg>
        }
        .into_any(),
    }
}
