//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod filter_kind;
mod storage_key;

pub use filter_kind::*;
pub use storage_key::*;
