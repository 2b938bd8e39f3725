use super::*;

const HEART: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none">
  <g id="layer">
    <path d="M12 21l-1.5-1.3C5.4 15.4 2 12.3 2 8.5" fill="#1A2B3C" fill-rule="evenodd"/>
    <path d="M4 4h16" stroke="#000" stroke-width="2" fill="none"/>
  </g>
  <circle cx="12" cy="12" r="3" fill="red" opacity="0.5"></circle>
  <text x="0" y="0" fill="blue">ignored</text>
</svg>"##;

fn parsed() -> SvgDocument {
    SvgDocument::parse(HEART).expect("parse")
}

/// Drawables in document order, descending into groups.
fn drawables(doc: &SvgDocument) -> Vec<&SvgElement> {
    fn walk<'a>(elements: &'a [SvgElement], out: &mut Vec<&'a SvgElement>) {
        for element in elements {
            if element.tag == "g" {
                walk(&element.children, out);
            } else {
                out.push(element);
            }
        }
    }
    let mut out = Vec::new();
    walk(&doc.elements, &mut out);
    out
}

// =============================================================
// parse
// =============================================================

#[test]
fn parse_captures_root_dimensions() {
    let doc = parsed();
    assert_eq!(doc.width.as_deref(), Some("24"));
    assert_eq!(doc.height.as_deref(), Some("24"));
    assert_eq!(doc.view_box.as_deref(), Some("0 0 24 24"));
}

#[test]
fn parse_collects_drawables_in_order_at_any_depth() {
    let doc = parsed();
    let tags = drawables(&doc).iter().map(|e| e.tag.as_str()).collect::<Vec<_>>();
    assert_eq!(tags, vec!["path", "path", "circle"]);
}

#[test]
fn parse_keeps_group_structure() {
    let doc = parsed();
    let top = doc.elements.iter().map(|e| e.tag.as_str()).collect::<Vec<_>>();
    assert_eq!(top, vec!["g", "circle"]);
    assert_eq!(doc.elements[0].attr("id"), Some("layer"));
    assert_eq!(doc.elements[0].children.len(), 2);
}

#[test]
fn parse_keeps_attributes_in_source_order() {
    let doc = parsed();
    let keys = drawables(&doc)[0].attrs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["d", "fill", "fill-rule"]);
}

#[test]
fn parse_keeps_root_presentation_attributes() {
    let doc = SvgDocument::parse(
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" id="a" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#1F2A44" stroke-width="2"><path d="M4 4h16v16H4z"/></svg>"##,
    )
    .expect("parse");
    let keys = doc.root_attrs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["fill", "stroke", "stroke-width"]);
}

#[test]
fn parse_rejects_missing_root() {
    assert_eq!(SvgDocument::parse("<div><path d=\"M0 0\"/></div>"), Err(IconError::EmptyDocument));
    assert_eq!(SvgDocument::parse(""), Err(IconError::EmptyDocument));
}

#[test]
fn parse_rejects_mismatched_tags() {
    let err = SvgDocument::parse("<svg><g></svg>").unwrap_err();
    assert!(matches!(err, IconError::Parse(_)));
}

// =============================================================
// recolor
// =============================================================

#[test]
fn recolor_inherit_uses_current_color_token() {
    let doc = parsed().recolor(&IconColor::Inherit);
    let elements = drawables(&doc);
    assert_eq!(elements[0].attr("fill"), Some(INHERIT_COLOR));
    assert_eq!(elements[1].attr("stroke"), Some(INHERIT_COLOR));
    assert_eq!(elements[2].attr("fill"), Some(INHERIT_COLOR));
}

#[test]
fn recolor_applies_to_root_paint_but_keeps_none() {
    let doc = SvgDocument::parse(r##"<svg viewBox="0 0 24 24" fill="none" stroke="#1F2A44" stroke-width="2"><path d="M4 4h16v16H4z"/></svg>"##)
        .expect("parse");
    let out = doc.recolor(&IconColor::Explicit("#7b61ff".to_owned()));
    assert_eq!(
        out.root_attrs,
        vec![
            ("fill".to_owned(), "none".to_owned()),
            ("stroke".to_owned(), "#7b61ff".to_owned()),
            ("stroke-width".to_owned(), "2".to_owned()),
        ]
    );
}

#[test]
fn recolor_descends_into_groups() {
    let doc = SvgDocument::parse(r#"<svg><g stroke="black" transform="rotate(45 12 12)"><path d="M0 0" fill="red"/></g></svg>"#)
        .expect("parse");
    let out = doc.recolor(&IconColor::Inherit);
    assert_eq!(out.elements[0].attr("stroke"), Some(INHERIT_COLOR));
    assert_eq!(out.elements[0].attr("transform"), Some("rotate(45 12 12)"));
    assert_eq!(out.elements[0].children[0].attr("fill"), Some(INHERIT_COLOR));
}

#[test]
fn recolor_explicit_replaces_every_non_none_paint() {
    let color = IconColor::Explicit("#7b61ff".to_owned());
    let doc = parsed().recolor(&color);
    let elements = drawables(&doc);
    for element in &elements {
        for key in ["fill", "stroke"] {
            if let Some(value) = element.attr(key) {
                assert!(value == "#7b61ff" || value == "none", "{key}={value}");
            }
        }
    }
    assert_eq!(elements[1].attr("fill"), Some("none"));
}

#[test]
fn recolor_preserves_other_attributes_and_order() {
    let source = parsed();
    let recolored = source.recolor(&IconColor::Explicit("teal".to_owned()));
    for (before, after) in drawables(&source).into_iter().zip(drawables(&recolored)) {
        assert_eq!(before.tag, after.tag);
        assert_eq!(before.attrs.len(), after.attrs.len());
        for ((bk, bv), (ak, av)) in before.attrs.iter().zip(&after.attrs) {
            assert_eq!(bk, ak);
            if bk != "fill" && bk != "stroke" {
                assert_eq!(bv, av);
            }
        }
    }
}

#[test]
fn recolor_leaves_source_untouched() {
    let source = parsed();
    let _ = source.recolor(&IconColor::Inherit);
    assert_eq!(drawables(&source)[0].attr("fill"), Some("#1A2B3C"));
}

#[test]
fn recolor_treats_none_case_insensitively() {
    let doc = SvgDocument::parse(r#"<svg><path d="M0 0" fill=" NONE "/></svg>"#).expect("parse");
    let out = doc.recolor(&IconColor::Inherit);
    assert_eq!(out.elements[0].attr("fill"), Some(" NONE "));
}

// =============================================================
// IconColor
// =============================================================

#[test]
fn icon_color_from_option_treats_blank_as_inherit() {
    assert_eq!(IconColor::from_option(None), IconColor::Inherit);
    assert_eq!(IconColor::from_option(Some("  ")), IconColor::Inherit);
    assert_eq!(IconColor::from_option(Some(" #fff ")), IconColor::Explicit("#fff".to_owned()));
}

// =============================================================
// markup
// =============================================================

#[test]
fn inner_markup_emits_self_closing_elements() {
    let doc = SvgDocument::parse(r#"<svg><path d="M0 0" fill="red"/><rect width="2"/></svg>"#).expect("parse");
    assert_eq!(doc.inner_markup(), r#"<path d="M0 0" fill="red"/><rect width="2"/>"#);
}

#[test]
fn inner_markup_nests_groups() {
    let doc = SvgDocument::parse(r#"<svg><g transform="scale(2)"><path d="M0 0"/><g/></g><rect width="2"/></svg>"#)
        .expect("parse");
    assert_eq!(doc.inner_markup(), r#"<g transform="scale(2)"><path d="M0 0"/><g/></g><rect width="2"/>"#);
}

#[test]
fn inner_markup_keeps_entities_escaped() {
    let doc = SvgDocument::parse(r#"<svg><path d="a&amp;b" data-x='say "hi"'/></svg>"#).expect("parse");
    assert_eq!(doc.inner_markup(), r#"<path d="a&amp;b" data-x="say &quot;hi&quot;"/>"#);
}

#[test]
fn effective_view_box_falls_back_to_dimensions() {
    let doc = SvgDocument::parse(r#"<svg width="16px" height="16"></svg>"#).expect("parse");
    assert_eq!(doc.effective_view_box().as_deref(), Some("0 0 16 16"));
    let bare = SvgDocument::parse("<svg></svg>").expect("parse");
    assert_eq!(bare.effective_view_box(), None);
}

#[test]
fn placeholder_matches_requested_box() {
    let asset = ResolvedAsset {
        name: "leaf".to_owned(),
        requested_size: 32,
        resolved_size: 48,
        file: "leaf-48.svg".to_owned(),
    };
    let placeholder = Placeholder::for_asset(&asset);
    assert_eq!(placeholder.size, 32);
    assert_eq!(placeholder.view_box, "0 0 48 48");
}
