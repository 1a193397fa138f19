//! Content ratings used by Philomena imageboards
//! # Post Rating
//! Philomena boards tag every image with one or more rating tags. Besides `safe`, these are:
//! * `suggestive`: Sexually suggestive content without nudity.
//! * `questionable`: Nudity or strongly suggestive content.
//! * `explicit`: Explicitly pornographic content.
//! * `semi-grimdark`: Mildly disturbing or dark content.
//! * `grimdark`: Disturbing content such as violence or death.
//! * `grotesque`: Gore and other body horror.
//!
//! Any of these can be excluded from searches through
//! [`disallow_ratings`](crate::config::PhilomenaConfig::disallow_ratings).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum NsfwRating {
    Suggestive,
    Questionable,
    Explicit,
    SemiGrimdark,
    Grimdark,
    Grotesque,
}

impl NsfwRating {
    /// The rating tag exactly as written in search queries.
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Suggestive => "suggestive",
            Self::Questionable => "questionable",
            Self::Explicit => "explicit",
            Self::SemiGrimdark => "semi-grimdark",
            Self::Grimdark => "grimdark",
            Self::Grotesque => "grotesque",
        }
    }
}

impl Display for NsfwRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}
