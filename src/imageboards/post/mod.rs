//! Main representation of an image result
//!
//! # Image Result
//! An [`ImageResult`] is the generic, imageboard-agnostic shape handed back to the host.
//!
//! It only carries URLs and metadata; nothing here downloads the files themselves.
use serde::{Deserialize, Serialize};

use self::nsfw::NsfwLevel;

pub mod nsfw;
pub mod rating;

/// Direct URLs of every rendered size of an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub original: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub thumbnail: String,
}

/// Catchall model for the parts of an imageboard post the host needs to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    pub urls: ImageUrls,
    /// A short, truncated rendering of the image's tags.
    pub title: String,
    /// Description as written on the imageboard. May contain the board's markup.
    pub desc: String,
    /// The credited artists, or [`UNKNOWN_AUTHOR`](crate::imageboards::UNKNOWN_AUTHOR).
    pub author: String,
    pub nsfw: NsfwLevel,
    /// Every tag of the image, untouched and in the order the board returned them.
    pub tags: Vec<String>,
    /// Link to the image's page on the imageboard.
    pub page_url: String,
}
