//! Medley Routes
//!
//! - / - Home page
//! - /compliments, /compliments_results - Compliments generator
//! - /animal_facts - Animal facts lookup
//! - /image_filter - Image filter uploader
//! - /gif_search - GIF search (Tenor)

pub mod animal_facts;
pub mod compliments;
pub mod gif_search;
pub mod home;
pub mod image_filter;
pub mod swagger;
