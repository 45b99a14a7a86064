// SPDX-License-Identifier: MPL-2.0
//! Image fetching and decoding for the comparison layers (PNG, JPEG, WebP, SVG, etc.).

use super::source::ImageSource;
use crate::config::defaults::{MAX_REMOTE_IMAGE_BYTES, MAX_REMOTE_REDIRECTS};
use crate::error::ImageLoadError;
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Fetches and decodes the image behind `src`.
///
/// # Errors
///
/// - [`ImageLoadError::UnsupportedSource`] for unknown URL schemes
/// - [`ImageLoadError::NotFound`] when a local file cannot be read
/// - [`ImageLoadError::Network`] when a remote request fails
/// - [`ImageLoadError::Decode`] / [`ImageLoadError::Svg`] for undecodable bytes
pub async fn load(src: String) -> Result<ImageData, ImageLoadError> {
    let source = ImageSource::parse(&src)?;

    let bytes = match &source {
        ImageSource::File(path) => tokio::fs::read(path)
            .await
            .map_err(|e| ImageLoadError::NotFound(format!("{}: {e}", path.display())))?,
        ImageSource::Remote(url) => fetch_remote(url).await?,
    };

    decode(&bytes, source.has_svg_extension())
}

/// Decodes raster or SVG bytes into RGBA.
///
/// SVG is detected from `svg_hint` or by sniffing the document start.
///
/// # Errors
///
/// Returns [`ImageLoadError::Svg`] for unparsable SVG and
/// [`ImageLoadError::Decode`] for any other undecodable data.
pub fn decode(bytes: &[u8], svg_hint: bool) -> Result<ImageData, ImageLoadError> {
    if svg_hint || looks_like_svg(bytes) {
        return rasterize_svg(bytes);
    }

    let img =
        image_rs::load_from_memory(bytes).map_err(|e| ImageLoadError::Decode(e.to_string()))?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageData, ImageLoadError> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| ImageLoadError::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(ImageLoadError::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ImageLoadError::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(ImageData::from_rgba(width, height, pixmap.data().to_vec()))
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>, ImageLoadError> {
    use futures_util::StreamExt;

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REMOTE_REDIRECTS))
        .user_agent(concat!("TerraCompare/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ImageLoadError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ImageLoadError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ImageLoadError::Network(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    if response
        .content_length()
        .is_some_and(|len| len > MAX_REMOTE_IMAGE_BYTES)
    {
        return Err(ImageLoadError::Network("Response too large".into()));
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ImageLoadError::Network(e.to_string()))?;
        bytes.extend_from_slice(&chunk);
        if bytes.len() as u64 > MAX_REMOTE_IMAGE_BYTES {
            return Err(ImageLoadError::Network("Response too large".into()));
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load(image_path.to_string_lossy().into_owned())
            .await
            .expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[tokio::test]
    async fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="green" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load(format!("file://{}", svg_path.display()))
            .await
            .expect("svg should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
    }

    #[tokio::test]
    async fn load_missing_image_returns_not_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load(missing_path.to_string_lossy().into_owned()).await {
            Err(ImageLoadError::NotFound(_)) => {}
            other => panic!("expected NotFound error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn load_unsupported_scheme_fails_without_io() {
        match load("gopher://example.org/a.png".to_string()).await {
            Err(ImageLoadError::UnsupportedSource(_)) => {}
            other => panic!("expected UnsupportedSource error, got {other:?}"),
        }
    }

    #[test]
    fn decode_invalid_bytes_returns_decode_error() {
        match decode(b"not a png", false) {
            Err(ImageLoadError::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn decode_sniffs_svg_without_hint() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="5"></svg>"#;
        let data = decode(svg, false).expect("svg should be sniffed");
        assert_eq!((data.width, data.height), (2, 5));
    }

    #[test]
    fn decode_broken_svg_returns_svg_error() {
        match decode(b"<svg>oops", true) {
            Err(ImageLoadError::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }
}
