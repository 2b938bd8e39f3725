//! Raster illustration with 1x/2x density variants.

use haven_icons::{Resolution, illustration_srcset, illustration_url};
use leptos::prelude::*;

/// Render `/illustrations/<1x|2x>/<file>.png`, letting the browser pick the
/// density. A failed load hides the image instead of showing a broken icon.
#[component]
pub fn Illustration(
    #[prop(into)] file: String,
    #[prop(into)] alt: String,
    #[prop(optional)] width: Option<u32>,
) -> impl IntoView {
    let src = illustration_url(&file, Resolution::X1);
    let srcset = illustration_srcset(&file);
    let failed = RwSignal::new(false);

    view! {
        <img
            class="illustration"
            class:illustration--failed=move || failed.get()
            src=src.clone()
            srcset=srcset
            alt=alt
            width=width.map(|w| w.to_string())
            loading="lazy"
            on:error=move |_| {
                leptos::logging::warn!("illustration failed to load: {src}");
                failed.set(true);
            }
        />
    }
}
