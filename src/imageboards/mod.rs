//! Modules that search an imageboard API and map the results into [`ImageResult`]s.
//! # Image sources
//!
//! All modules implementing [`ImageSource`] work by sending one search request with the tags
//! supplied and turning the returned images into [`ImageResult`]s. They only ever return URLs
//! and metadata.
//!
//! ## Example with the `Philomena` image source
//! ```no_run
//! use booru_philomena::prelude::*;
//!
//! async fn test() -> Result<(), ExtractorError> {
//!     let source = PhilomenaExtractor::new(PhilomenaConfig::default())?;
//!
//!     let tags = source.tokenize("twilight sparkle, solo");
//!
//!     if let Some(images) = source.get(&Query::new(tags, 5)).await? {
//!         for image in images {
//!             println!("{} - {}", image.title, image.urls.original);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
use reqwest::Client;
use std::future::Future;

use crate::error::ExtractorError;

use self::post::ImageResult;

pub mod common;
pub mod philomena;
pub mod post;
pub mod seed;

/// Author placeholder for images that credit nobody.
pub const UNKNOWN_AUTHOR: &str = "(不详)";

/// A search as requested by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Normalized tags, usually produced by [`ImageSource::tokenize`].
    pub tags: Vec<String>,
    /// How many images to ask for.
    pub count: u32,
}

impl Query {
    pub fn new<S: ToString>(tags: impl IntoIterator<Item = S>, count: u32) -> Self {
        Self {
            tags: tags.into_iter().map(|t| t.to_string()).collect(),
            count,
        }
    }
}

/// This trait is the contract between the host and every image source.
///
/// Implementors hold no state that changes between calls, so `get` may run concurrently.
pub trait ImageSource {
    type Config;

    /// Name the host shows for this source.
    fn label(&self) -> &str;

    /// Languages the tags of this source are written in.
    fn languages(&self) -> &[&'static str];

    /// Splits a raw user query into tags this source understands.
    fn tokenize(&self, query: &str) -> Vec<String> {
        common::tokenize(query)
    }

    /// Runs a single search.
    ///
    /// Returns `Ok(None)` when the imageboard answered but found nothing. Transport and decoding
    /// failures are returned as errors and never retried.
    fn get(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<Option<Vec<ImageResult>>, ExtractorError>> + Send;

    /// Returns the used client for external use.
    fn client(&self) -> Client;

    /// Returns the configuration this source was built with.
    fn config(&self) -> &Self::Config;
}
