use super::*;

use std::path::PathBuf;

use haven_icons::IconRegistry;

const DOT: &str = r##"<svg viewBox="0 0 16 16"><circle cx="8" cy="8" r="4" fill="#000" stroke="none"/></svg>"##;

fn state_with_assets(tag: &str) -> (AppState, PathBuf) {
    let dir = std::env::temp_dir().join(format!("haven-icons-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("icons")).unwrap();
    std::fs::write(dir.join("icons/dot-16.svg"), DOT).unwrap();
    let registry = IconRegistry::from_json(
        r#"{ "icons": { "dot": { "16": "dot-16.svg" }, "ghost": { "24": "ghost-24.svg" } } }"#,
    )
    .unwrap();
    (AppState::new(registry, 8, dir.clone()), dir)
}

async fn body_text(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn icon_error_to_status_maps_not_found() {
    let err = IconError::UnknownIcon { name: "x".to_owned() };
    assert_eq!(icon_error_to_status(&err), StatusCode::NOT_FOUND);
}

#[test]
fn icon_error_to_status_maps_asset_failures_to_bad_gateway() {
    let fetch = IconError::Fetch { url: "/icons/x.svg".to_owned(), reason: "gone".to_owned() };
    assert_eq!(icon_error_to_status(&fetch), StatusCode::BAD_GATEWAY);
    assert_eq!(icon_error_to_status(&IconError::EmptyDocument), StatusCode::BAD_GATEWAY);
    assert_eq!(icon_error_to_status(&IconError::Parse("bad".to_owned())), StatusCode::BAD_GATEWAY);
}

#[test]
fn is_safe_color_accepts_css_colors() {
    assert!(is_safe_color("#7b61ff"));
    assert!(is_safe_color("rebeccapurple"));
    assert!(is_safe_color("rgb(10, 20, 30)"));
    assert!(is_safe_color("hsl(120, 50%, 40.5%)"));
}

#[test]
fn is_safe_color_rejects_markup() {
    assert!(!is_safe_color("red\"/><script>"));
    assert!(!is_safe_color("url(javascript:x)"));
    assert!(!is_safe_color(&"a".repeat(MAX_COLOR_LEN + 1)));
}

// =============================================================
// Handlers
// =============================================================

#[tokio::test]
async fn list_icons_returns_sorted_summaries() {
    let (state, dir) = state_with_assets("list");
    let Json(icons) = list_icons(State(state)).await;
    assert_eq!(
        icons,
        vec![
            IconSummary { name: "dot".to_owned(), sizes: vec![16] },
            IconSummary { name: "ghost".to_owned(), sizes: vec![24] },
        ]
    );
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn render_icon_serves_recolored_svg_at_nearest_size() {
    let (state, dir) = state_with_assets("render");
    let query = IconQuery { size: Some(20), color: Some("#ff0000".to_owned()) };
    let resp = render_icon(State(state), Path("dot".to_owned()), Query(query)).await.unwrap();

    assert_eq!(resp.headers()[header::CONTENT_TYPE], "image/svg+xml");
    let body = body_text(resp).await;
    assert_eq!(
        body,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 16 16"><circle cx="8" cy="8" r="4" fill="#ff0000" stroke="none"/></svg>"##
    );
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn render_icon_is_identical_on_repeat() {
    let (state, dir) = state_with_assets("repeat");
    let first = render_icon(State(state.clone()), Path("dot".to_owned()), Query(IconQuery::default()))
        .await
        .unwrap();
    let first = body_text(first).await;

    // Second request is answered from cache even with the file gone.
    std::fs::remove_file(dir.join("icons/dot-16.svg")).unwrap();
    let second = render_icon(State(state), Path("dot".to_owned()), Query(IconQuery::default()))
        .await
        .unwrap();
    assert_eq!(first, body_text(second).await);
    assert!(first.contains(r#"fill="currentColor""#));
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn render_icon_unknown_name_is_not_found() {
    let (state, dir) = state_with_assets("unknown");
    let status = render_icon(State(state), Path("nope".to_owned()), Query(IconQuery::default()))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn render_icon_missing_asset_is_bad_gateway() {
    let (state, dir) = state_with_assets("missing");
    let status = render_icon(State(state), Path("ghost".to_owned()), Query(IconQuery::default()))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    std::fs::remove_dir_all(dir).unwrap();
}

#[tokio::test]
async fn render_icon_rejects_unsafe_color() {
    let (state, dir) = state_with_assets("unsafe");
    let query = IconQuery { size: None, color: Some("\"><script>".to_owned()) };
    let status = render_icon(State(state), Path("dot".to_owned()), Query(query)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    std::fs::remove_dir_all(dir).unwrap();
}
