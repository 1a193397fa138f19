use serde::{Deserialize, Serialize};
use std::fmt::Display;

const GURO_TAGS: [&str; 2] = ["grimdark", "grotesque"];
const SUGGESTIVE_TAGS: [&str; 2] = ["questionable", "explicit"];

/// How unsafe an image is, as reported to the host.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum NsfwLevel {
    #[default]
    Safe,
    /// Nudity or sexual content.
    Suggestive,
    /// Gore, violence or otherwise disturbing content.
    Guro,
}

impl NsfwLevel {
    /// Classifies an image by its tags. Guro tags win over suggestive ones.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        let has_any = |needles: &[&str]| tags.iter().any(|t| needles.contains(&t.as_ref()));

        if has_any(&GURO_TAGS) {
            Self::Guro
        } else if has_any(&SUGGESTIVE_TAGS) {
            Self::Suggestive
        } else {
            Self::Safe
        }
    }
}

impl Display for NsfwLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::Suggestive => write!(f, "Suggestive"),
            Self::Guro => write!(f, "Guro"),
        }
    }
}
