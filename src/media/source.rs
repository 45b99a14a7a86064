// SPDX-License-Identifier: MPL-2.0
//! Classification of user-supplied image source strings.

use crate::error::ImageLoadError;
use std::path::PathBuf;

/// Where a layer's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local file, given as a plain path or a `file://` URL.
    File(PathBuf),
    /// `http://` or `https://` URL.
    Remote(String),
}

impl ImageSource {
    /// Parses a source string.
    ///
    /// # Errors
    ///
    /// Returns [`ImageLoadError::NotFound`] for an empty string and
    /// [`ImageLoadError::UnsupportedSource`] for any other URL scheme.
    pub fn parse(src: &str) -> Result<Self, ImageLoadError> {
        let src = src.trim();
        if src.is_empty() {
            return Err(ImageLoadError::NotFound(String::new()));
        }

        let lower = src.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(ImageSource::Remote(src.to_string()));
        }

        if lower.starts_with("file://") {
            return Ok(ImageSource::File(PathBuf::from(&src["file://".len()..])));
        }

        if src.contains("://") {
            return Err(ImageLoadError::UnsupportedSource(src.to_string()));
        }

        Ok(ImageSource::File(PathBuf::from(src)))
    }

    /// Whether the source name suggests an SVG document.
    #[must_use]
    pub fn has_svg_extension(&self) -> bool {
        match self {
            ImageSource::File(path) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg")),
            ImageSource::Remote(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                path.to_ascii_lowercase().ends_with(".svg")
            }
        }
    }
}
