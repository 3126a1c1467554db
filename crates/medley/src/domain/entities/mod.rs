//! Domain Entities
//!
//! Fixed, read-only tables and request-scoped records.
//! - Compliments: adjectives sampled per request
//! - AnimalFact: facts table keyed by animal name
//! - GifSearch: validated search query and its raw results

mod animal;
mod compliment;
mod gif;

pub use animal::*;
pub use compliment::*;
pub use gif::*;
