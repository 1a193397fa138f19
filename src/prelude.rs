pub use crate::config::PhilomenaConfig;
pub use crate::error::ExtractorError;
pub use crate::imageboards::philomena::PhilomenaExtractor;
pub use crate::imageboards::post::{nsfw::NsfwLevel, rating::NsfwRating, ImageResult};
pub use crate::imageboards::seed::{FixedSeed, SeedSource, ThreadRngSeed};
pub use crate::imageboards::{ImageSource, Query};
