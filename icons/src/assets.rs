//! Public asset URL construction for icons and illustrations.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

/// Pixel-density variant of a raster illustration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Resolution {
    #[default]
    X1,
    X2,
}

impl Resolution {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X1 => "1x",
            Self::X2 => "2x",
        }
    }
}

/// URL of an icon asset file served under `/icons`.
#[must_use]
pub fn icon_url(file: &str) -> String {
    format!("/icons/{file}")
}

/// Conventional icon file name for a `(name, size)` pair.
#[must_use]
pub fn icon_file_name(name: &str, size: u32) -> String {
    format!("{name}-{size}.svg")
}

/// URL of a raster illustration at the given density.
#[must_use]
pub fn illustration_url(file: &str, resolution: Resolution) -> String {
    format!("/illustrations/{}/{file}.png", resolution.as_str())
}

/// `srcset` value offering both densities so the browser can choose.
#[must_use]
pub fn illustration_srcset(file: &str) -> String {
    format!(
        "{} 1x, {} 2x",
        illustration_url(file, Resolution::X1),
        illustration_url(file, Resolution::X2)
    )
}
