//! Medley Domain Library
//!
//! Core types for the Medley demo pages: compliments, animal facts,
//! image filters and GIF search.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Fixed tables and pure logic
//!   - `entities/`: Compliments, animal facts, GIF results
//!   - `value_objects/`: Filter kinds, storage keys
//!   - `services/`: Sampling, lookup and the image pipeline
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Image storage
//!   - `services/`: GIF search
//!
//! # Usage
//!
//! ```rust,ignore
//! use medley::domain::{sample_compliments, FilterKind};
//! use medley::ports::{GifSearchService, ImageStore};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    apply_filter, decode_upload, fit_within, lookup_animals, render_filtered,
    sample_compliments, wants_compliments, AnimalFact, DecodedImage, DomainError, FilterKind,
    GifSearchQuery, GifSearchResults, ProcessedImage, StorageKey, ANIMAL_FACTS, COMPLIMENTS,
    DEFAULT_GIF_LIMIT, MAX_GIF_LIMIT, THUMBNAIL_BOUNDS,
};
pub use ports::{GifSearchService, ImageStore};
