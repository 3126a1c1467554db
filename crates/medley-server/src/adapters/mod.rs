//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod local_image_store;
pub mod tenor;

// Re-exports
pub use local_image_store::LocalImageStore;
pub use tenor::{GifSearchError, TenorGifSearch};
