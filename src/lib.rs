//! # Booru Philomena
//!
//! booru_philomena is an image source for Philomena imageboards (Derpibooru, Trixiebooru,
//! Furbooru, ...).
//!
//! It searches the board once per request, in random order and with unwanted ratings excluded,
//! and maps the returned images into generic [`ImageResult`]s for a host bot or plugin framework.
//! It never downloads the images themselves.
pub mod config;
pub mod error;
pub mod imageboards;
mod macros;
pub mod prelude;

// Public Exports
pub use reqwest;

pub use config::PhilomenaConfig;
pub use error::{ConfigError, ExtractorError};
pub use imageboards::philomena::PhilomenaExtractor;
pub use imageboards::post::{nsfw::NsfwLevel, rating::NsfwRating, ImageResult, ImageUrls};
pub use imageboards::{ImageSource, Query};
