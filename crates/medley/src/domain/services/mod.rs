//! Domain Services
//!
//! Stateless operations over the fixed tables and uploaded images.

mod animal_facts;
mod compliments;
mod image_pipeline;

pub use animal_facts::*;
pub use compliments::*;
pub use image_pipeline::*;
