// SPDX-License-Identifier: MPL-2.0
//! Per-layer image load tracking.

use crate::error::ImageLoadError;
use crate::media::ImageData;

/// Outcome of loading one layer's source.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    /// Request in flight; the shimmer placeholder is shown.
    #[default]
    Pending,
    Loaded(ImageData),
    /// The fallback graphic is shown instead of the image.
    Failed(ImageLoadError),
}

/// One of the two compared images.
#[derive(Debug, Clone)]
pub struct Layer {
    src: String,
    label: String,
    load: LoadState,
}

impl Layer {
    #[must_use]
    pub fn new(src: String, label: String) -> Self {
        Self {
            src,
            label,
            load: LoadState::Pending,
        }
    }

    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.load, LoadState::Pending)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.load, LoadState::Loaded(_))
    }

    #[must_use]
    pub fn has_failed(&self) -> bool {
        matches!(self.load, LoadState::Failed(_))
    }

    /// Replaces the badge text, keeping the load state.
    pub fn relabel(&mut self, label: String) {
        self.label = label;
    }

    /// Records the load result. Failures are logged and kept local.
    pub fn finish(&mut self, result: Result<ImageData, ImageLoadError>) {
        self.load = match result {
            Ok(data) => {
                log::debug!("Loaded {} ({}x{})", self.src, data.width, data.height);
                LoadState::Loaded(data)
            }
            Err(err) => {
                log::warn!("Falling back to placeholder for {}: {}", self.src, err);
                LoadState::Failed(err)
            }
        };
    }
}
