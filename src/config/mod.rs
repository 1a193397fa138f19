//! Settings for a Philomena image source.
//!
//! Values missing from a config file fall back to the [defaults](PhilomenaConfig::default), which
//! point at Trixiebooru with its public default filter.
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

use crate::error::ConfigError;
use crate::imageboards::post::rating::NsfwRating;

pub mod serialize;

pub const DEFAULT_LABEL: &str = "derpibooru";
pub const DEFAULT_ENDPOINT: &str = "https://trixiebooru.org/";
pub const DEFAULT_FILTER_ID: u64 = 191_275;
pub const DEFAULT_RESTRICTIONS: &str = "wilson_score.gte:0.93";
pub const DEFAULT_DISALLOWED_RATINGS: [NsfwRating; 4] = [
    NsfwRating::Questionable,
    NsfwRating::Explicit,
    NsfwRating::Grimdark,
    NsfwRating::Grotesque,
];

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhilomenaConfig {
    /// Name the host shows for this image source.
    pub label: String,
    /// Base URL of the imageboard.
    pub endpoint: String,
    /// Server-side filter applied to every search. Images hidden by it never show up.
    ///
    /// Other boards than Derpibooru use different ids, see the board's `/filters` page.
    pub filter_id: u64,
    /// Ratings excluded from every search.
    pub disallow_ratings: Vec<NsfwRating>,
    /// Extra search expression every result must satisfy. Blank means no restriction.
    pub restrictions: String,
    /// Optional user API key, sent as `key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for PhilomenaConfig {
    fn default() -> Self {
        Self {
            label: String::from(DEFAULT_LABEL),
            endpoint: String::from(DEFAULT_ENDPOINT),
            filter_id: DEFAULT_FILTER_ID,
            disallow_ratings: DEFAULT_DISALLOWED_RATINGS.to_vec(),
            restrictions: String::from(DEFAULT_RESTRICTIONS),
            api_key: None,
        }
    }
}

impl Display for PhilomenaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.endpoint)
    }
}

// The API key never ends up in logs.
impl Debug for PhilomenaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhilomenaConfig")
            .field("label", &self.label)
            .field("endpoint", &self.endpoint)
            .field("filter_id", &self.filter_id)
            .field("disallow_ratings", &self.disallow_ratings)
            .field("restrictions", &self.restrictions)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl PhilomenaConfig {
    /// Checks that the endpoint is an absolute `http` or `https` URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidEndpoint {
            url: self.endpoint.clone(),
        };

        let url = Url::parse(&self.endpoint).map_err(|_| invalid())?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid());
        }
        Ok(())
    }
}
