// SPDX-License-Identifier: MPL-2.0
//! Loading of the images compared by the slider.

pub mod image;
pub mod source;

pub use image::{load, ImageData};
pub use source::ImageSource;
