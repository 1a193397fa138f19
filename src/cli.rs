use booru_philomena::{
    config::serialize::default_config_path, ConfigError, NsfwRating, PhilomenaConfig,
};
use clap::Parser;
use log::debug;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "Booru Philomena", author, version, about, long_about = None)]
pub struct Cli {
    /// Comma separated tags to search for
    ///
    /// Example: "twilight sparkle, solo"
    #[clap(value_name = "TAGS", default_value = "")]
    pub query: String,

    /// Number of images to fetch
    ///
    /// [max: 50]
    #[clap(
        short = 'n',
        long,
        value_name = "NUMBER",
        value_parser(clap::value_parser!(u32).range(1..=50)),
        default_value_t = 1
    )]
    pub count: u32,

    /// Read settings from this file instead of the default config file
    #[clap(short, long, value_name = "PATH", help_heading = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the imageboard
    #[clap(long, value_name = "URL", help_heading = "SEARCH")]
    pub endpoint: Option<String>,

    /// Server-side filter id applied to the search
    #[clap(long, value_name = "ID", help_heading = "SEARCH")]
    pub filter_id: Option<u64>,

    /// Extra search expression every image must satisfy
    #[clap(long, value_name = "EXPR", help_heading = "SEARCH")]
    pub restrictions: Option<String>,

    /// Ratings to exclude, replacing the configured ones
    #[clap(
        long,
        value_name = "RATING",
        value_delimiter = ',',
        conflicts_with = "allow_all_ratings",
        help_heading = "SEARCH"
    )]
    pub disallow: Option<Vec<NsfwRating>>,

    /// Don't exclude any rating
    #[clap(long, action, help_heading = "SEARCH")]
    pub allow_all_ratings: bool,

    /// Print results as JSON
    #[clap(long, action, help_heading = "OUTPUT")]
    pub json: bool,
}

impl Cli {
    /// Loads the config file and applies the flags set on the command line on top of it.
    pub fn load_config(&self) -> Result<PhilomenaConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => PhilomenaConfig::load(path)?,
            None => PhilomenaConfig::load_or_create(&default_config_path()?)?,
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }

        if let Some(filter_id) = self.filter_id {
            config.filter_id = filter_id;
        }

        if let Some(restrictions) = &self.restrictions {
            config.restrictions.clone_from(restrictions);
        }

        if self.allow_all_ratings {
            config.disallow_ratings.clear();
        } else if let Some(ratings) = &self.disallow {
            config.disallow_ratings.clone_from(ratings);
        }

        config.validate()?;

        debug!("Effective config: {config:?}");
        Ok(config)
    }
}
