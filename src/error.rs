// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Reasons a comparison layer could not be displayed.
///
/// These never escape the layer that produced them: the widget records the
/// failure and substitutes the fallback graphic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLoadError {
    /// Local file does not exist or cannot be read
    NotFound(String),

    /// Remote request failed or returned a non-success status
    Network(String),

    /// Bytes were fetched but are not a decodable raster image
    Decode(String),

    /// SVG source could not be parsed or rasterized
    Svg(String),

    /// Scheme other than a path, `file://`, `http://` or `https://`
    UnsupportedSource(String),
}

impl ImageLoadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageLoadError::NotFound(_) => "error-image-not-found",
            ImageLoadError::Network(_) => "error-image-network",
            ImageLoadError::Decode(_) => "error-image-decode",
            ImageLoadError::Svg(_) => "error-image-svg",
            ImageLoadError::UnsupportedSource(_) => "error-image-unsupported-source",
        }
    }
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::NotFound(msg) => write!(f, "Image not found: {}", msg),
            ImageLoadError::Network(msg) => write!(f, "Network error: {}", msg),
            ImageLoadError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
            ImageLoadError::Svg(msg) => write!(f, "SVG error: {}", msg),
            ImageLoadError::UnsupportedSource(src) => {
                write!(f, "Unsupported image source: {}", src)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn image_load_error_display_names_the_cause() {
        let err = ImageLoadError::Network("timeout".into());
        assert_eq!(format!("{}", err), "Network error: timeout");
    }

    #[test]
    fn image_error_i18n_keys() {
        assert_eq!(
            ImageLoadError::NotFound("a.png".into()).i18n_key(),
            "error-image-not-found"
        );
        assert_eq!(
            ImageLoadError::Decode(String::new()).i18n_key(),
            "error-image-decode"
        );
        assert_eq!(
            ImageLoadError::UnsupportedSource("ftp://x".into()).i18n_key(),
            "error-image-unsupported-source"
        );
    }
}
