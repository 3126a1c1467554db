//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! storage and the image pipeline.

mod image_filter_service;

pub use image_filter_service::{FilteredImage, ImageFilterService, ImageUpload};
