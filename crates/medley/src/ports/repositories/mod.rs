//! Repository Ports
//!
//! Abstract interfaces for storing filtered images.

mod image_store;

pub use image_store::*;
