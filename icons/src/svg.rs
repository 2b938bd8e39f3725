//! SVG icon parsing, recoloring, and markup rendering.
//!
//! DESIGN
//! ======
//! Asset markup is parsed into a tree of `<g>` groups and drawable elements
//! with their attributes kept as raw (still-escaped) text, in source order.
//! Presentation attributes on the root `<svg>` (paint, stroke width, line
//! caps) are kept alongside, since most stroke icons declare their paint
//! there. Recoloring is a pure transform that returns a new document, so a
//! parsed asset can be cached and shared across colors without mutation.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::IconError;
use crate::manifest::ResolvedAsset;

/// Paint value that makes an icon follow the surrounding text color.
pub const INHERIT_COLOR: &str = "currentColor";

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const GROUP_TAG: &str = "g";
const DRAWABLE_TAGS: &[&str] = &["path", "circle", "rect", "ellipse", "line", "polyline", "polygon"];
const PAINT_ATTRS: &[&str] = &["fill", "stroke"];
/// Root attributes owned by the embedding `<svg>` rather than the artwork.
const ROOT_OWNED_ATTRS: &[&str] = &["width", "height", "viewBox", "xmlns", "version", "id", "class"];

/// Color applied to an icon's painted attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconColor {
    /// Follow the consumer's `color` via `currentColor`.
    #[default]
    Inherit,
    /// Use this CSS color value verbatim.
    Explicit(String),
}

impl IconColor {
    /// Build from an optional caller color; blank strings count as absent.
    #[must_use]
    pub fn from_option(color: Option<&str>) -> Self {
        match color.map(str::trim) {
            Some(c) if !c.is_empty() => Self::Explicit(c.to_owned()),
            _ => Self::Inherit,
        }
    }

    /// Attribute value this color writes.
    #[must_use]
    pub fn paint(&self) -> &str {
        match self {
            Self::Inherit => INHERIT_COLOR,
            Self::Explicit(c) => c,
        }
    }
}

/// One drawable element or `<g>` group, with attributes in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgElement {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    /// Nested elements; only groups have any.
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Copy of this element (and its children) with non-`none` fill/stroke
    /// replaced by `color`.
    #[must_use]
    pub fn recolored(&self, color: &IconColor) -> Self {
        Self {
            tag: self.tag.clone(),
            attrs: recolor_attrs(&self.attrs, color),
            children: self.children.iter().map(|c| c.recolored(color)).collect(),
        }
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attrs {
            write_attr(out, key, value);
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Parsed icon asset: root dimensions, root presentation attributes, and the
/// group/drawable tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SvgDocument {
    pub width: Option<String>,
    pub height: Option<String>,
    pub view_box: Option<String>,
    /// Root attributes other than sizing, namespaces and identity.
    pub root_attrs: Vec<(String, String)>,
    pub elements: Vec<SvgElement>,
}

impl SvgDocument {
    /// Parse SVG markup into groups and drawables.
    ///
    /// Drawables inside other containers (`<a>`, `<switch>`, ...) are lifted
    /// into the nearest enclosing group.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Parse`] for malformed XML and
    /// [`IconError::EmptyDocument`] when there is no `<svg>` root.
    pub fn parse(markup: &str) -> Result<Self, IconError> {
        let mut reader = Reader::from_str(markup);
        let mut doc = Self::default();
        let mut seen_root = false;
        // Open `<g>` elements, innermost last.
        let mut groups: Vec<SvgElement> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let tag = local_name(e.local_name().as_ref())?;
                    if !seen_root {
                        if tag == "svg" {
                            seen_root = true;
                            doc.read_root(&e)?;
                        }
                        continue;
                    }
                    if tag == GROUP_TAG {
                        groups.push(SvgElement { tag, attrs: read_attrs(&e)?, children: Vec::new() });
                    } else if DRAWABLE_TAGS.contains(&tag.as_str()) {
                        doc.push_element(&mut groups, SvgElement { tag, attrs: read_attrs(&e)?, children: Vec::new() });
                    }
                }
                Ok(Event::Empty(e)) => {
                    let tag = local_name(e.local_name().as_ref())?;
                    if !seen_root {
                        if tag == "svg" {
                            seen_root = true;
                            doc.read_root(&e)?;
                        }
                        continue;
                    }
                    if tag == GROUP_TAG || DRAWABLE_TAGS.contains(&tag.as_str()) {
                        doc.push_element(&mut groups, SvgElement { tag, attrs: read_attrs(&e)?, children: Vec::new() });
                    }
                }
                Ok(Event::End(e)) => {
                    if local_name(e.local_name().as_ref())? == GROUP_TAG {
                        if let Some(group) = groups.pop() {
                            doc.push_element(&mut groups, group);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(IconError::Parse(format!(
                        "at byte {}: {e}",
                        reader.error_position()
                    )));
                }
            }
        }

        if seen_root { Ok(doc) } else { Err(IconError::EmptyDocument) }
    }

    fn read_root(&mut self, e: &BytesStart<'_>) -> Result<(), IconError> {
        let attrs = read_attrs(e)?;
        self.width = find_attr(&attrs, "width");
        self.height = find_attr(&attrs, "height");
        self.view_box = find_attr(&attrs, "viewBox");
        self.root_attrs = attrs.into_iter().filter(|(key, _)| !is_root_owned(key)).collect();
        Ok(())
    }

    fn push_element(&mut self, groups: &mut [SvgElement], element: SvgElement) {
        match groups.last_mut() {
            Some(parent) => parent.children.push(element),
            None => self.elements.push(element),
        }
    }

    /// New document with every paintable attribute recolored.
    #[must_use]
    pub fn recolor(&self, color: &IconColor) -> Self {
        Self {
            width: self.width.clone(),
            height: self.height.clone(),
            view_box: self.view_box.clone(),
            root_attrs: recolor_attrs(&self.root_attrs, color),
            elements: self.elements.iter().map(|e| e.recolored(color)).collect(),
        }
    }

    /// Markup of the element tree only, for embedding in an `<svg>`.
    #[must_use]
    pub fn inner_markup(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            element.write_markup(&mut out);
        }
        out
    }

    /// The document's own `viewBox`, or one derived from numeric width/height.
    #[must_use]
    pub fn effective_view_box(&self) -> Option<String> {
        if let Some(vb) = self.view_box.as_deref() {
            return Some(vb.to_owned());
        }
        let w = self.width.as_deref().and_then(parse_px)?;
        let h = self.height.as_deref().and_then(parse_px)?;
        Some(format!("0 0 {w} {h}"))
    }
}

/// Empty, correctly-sized stand-in shown while an asset loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    pub size: u32,
    pub view_box: String,
}

impl Placeholder {
    #[must_use]
    pub fn for_asset(asset: &ResolvedAsset) -> Self {
        Self {
            size: asset.requested_size,
            view_box: format!("0 0 {0} {0}", asset.resolved_size),
        }
    }
}

/// Full standalone `<svg>` markup.
pub(crate) fn svg_markup(size: u32, view_box: &str, root_attrs: &[(String, String)], inner: &str) -> String {
    let mut out = String::with_capacity(inner.len() + 96);
    out.push_str("<svg");
    write_attr(&mut out, "xmlns", SVG_NS);
    write_attr(&mut out, "width", &size.to_string());
    write_attr(&mut out, "height", &size.to_string());
    write_attr(&mut out, "viewBox", view_box);
    for (key, value) in root_attrs {
        write_attr(&mut out, key, value);
    }
    out.push('>');
    out.push_str(inner);
    out.push_str("</svg>");
    out
}

/// `inner` wrapped in a `<g>` carrying `attrs`, or `inner` alone when there
/// are none. Presentation attributes inherit from a group exactly as they do
/// from the root, so this suits embedding into an `<svg>` built elsewhere.
pub(crate) fn group_markup(attrs: &[(String, String)], inner: &str) -> String {
    if attrs.is_empty() {
        return inner.to_owned();
    }
    let mut out = String::with_capacity(inner.len() + 48);
    out.push_str("<g");
    for (key, value) in attrs {
        write_attr(&mut out, key, value);
    }
    out.push('>');
    out.push_str(inner);
    out.push_str("</g>");
    out
}

fn recolor_attrs(attrs: &[(String, String)], color: &IconColor) -> Vec<(String, String)> {
    attrs
        .iter()
        .map(|(key, value)| {
            if PAINT_ATTRS.contains(&key.as_str()) && !is_none_paint(value) {
                (key.clone(), color.paint().to_owned())
            } else {
                (key.clone(), value.clone())
            }
        })
        .collect()
}

fn is_root_owned(key: &str) -> bool {
    ROOT_OWNED_ATTRS.contains(&key) || key.starts_with("xmlns:") || key.starts_with("xml:")
}

fn write_attr(out: &mut String, key: &str, raw_value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    // Values are kept escaped from the source; only a bare quote from a
    // single-quoted source attribute needs escaping here.
    out.push_str(&raw_value.replace('"', "&quot;"));
    out.push('"');
}

fn is_none_paint(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("none")
}

fn parse_px(raw: &str) -> Option<f64> {
    raw.trim().trim_end_matches("px").parse::<f64>().ok().filter(|v| *v > 0.0)
}

fn local_name(raw: &[u8]) -> Result<String, IconError> {
    std::str::from_utf8(raw)
        .map(str::to_owned)
        .map_err(|err| IconError::Parse(err.to_string()))
}

fn read_attrs(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, IconError> {
    let mut out = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| IconError::Parse(err.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(|err| IconError::Parse(err.to_string()))?;
        let value = std::str::from_utf8(&attr.value).map_err(|err| IconError::Parse(err.to_string()))?;
        out.push((key.to_owned(), value.to_owned()));
    }
    Ok(out)
}

fn find_attr(attrs: &[(String, String)], key: &str) -> Option<String> {
    attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}
