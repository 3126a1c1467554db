//! Service Ports
//!
//! Abstract interfaces for external services.

mod gif_search;

pub use gif_search::*;
