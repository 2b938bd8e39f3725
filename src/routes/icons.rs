//! Icon API routes.
//!
//! `GET /api/icons` lists the registry. `GET /api/icons/{name}` serves the
//! icon resolved to the nearest available size and recolored, for consumers
//! that want a finished asset instead of fetching and patching it themselves.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use haven_icons::{IconColor, IconError};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub const DEFAULT_ICON_SIZE: u32 = 24;
const MAX_COLOR_LEN: usize = 64;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct IconSummary {
    pub name: String,
    pub sizes: Vec<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IconQuery {
    pub size: Option<u32>,
    pub color: Option<String>,
}

/// `GET /api/icons`: every registered icon with its sizes, sorted by name.
pub async fn list_icons(State(state): State<AppState>) -> Json<Vec<IconSummary>> {
    let icons = state
        .registry
        .descriptors()
        .into_iter()
        .map(|d| IconSummary { name: d.name().to_owned(), sizes: d.sizes().collect() })
        .collect();
    Json(icons)
}

/// `GET /api/icons/{name}?size=&color=`: resolved, recolored SVG.
pub async fn render_icon(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<IconQuery>,
) -> Result<Response, StatusCode> {
    let size = query.size.unwrap_or(DEFAULT_ICON_SIZE);
    if let Some(color) = query.color.as_deref() {
        if !is_safe_color(color) {
            return Err(StatusCode::BAD_REQUEST);
        }
    }
    let color = IconColor::from_option(query.color.as_deref());

    let asset = state.registry.resolve(&name, size).map_err(|e| {
        tracing::warn!(icon = %name, size, error = %e, "icon not rendered");
        icon_error_to_status(&e)
    })?;

    let cached = state.renderer.lock().await.lookup(&asset, &color);
    if let Some(icon) = cached {
        return Ok(svg_response(icon.markup()));
    }

    let path = state.icon_path(&asset.file);
    let markup = tokio::fs::read_to_string(&path).await.map_err(|e| {
        let err = IconError::Fetch { url: asset.url(), reason: e.to_string() };
        tracing::warn!(icon = %name, path = %path.display(), error = %err, "icon asset unreadable");
        icon_error_to_status(&err)
    })?;

    let icon = state.renderer.lock().await.render(&asset, &markup, &color).map_err(|e| {
        tracing::warn!(icon = %name, file = %asset.file, error = %e, "icon asset unusable");
        icon_error_to_status(&e)
    })?;
    Ok(svg_response(icon.markup()))
}

pub(crate) fn icon_error_to_status(err: &IconError) -> StatusCode {
    match err {
        IconError::UnknownIcon { .. } => StatusCode::NOT_FOUND,
        IconError::Fetch { .. } | IconError::Parse(_) | IconError::EmptyDocument => StatusCode::BAD_GATEWAY,
    }
}

/// CSS color values that are safe to write into an SVG attribute.
pub(crate) fn is_safe_color(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.len() <= MAX_COLOR_LEN
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-'))
}

fn svg_response(markup: String) -> Response {
    (
        [(header::CONTENT_TYPE, "image/svg+xml"), (header::CACHE_CONTROL, "public, max-age=3600")],
        markup,
    )
        .into_response()
}
