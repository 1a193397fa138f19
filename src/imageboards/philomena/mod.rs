//! Image source for imageboards running Philomena (`https://derpibooru.org`,
//! `https://trixiebooru.org`, `https://furbooru.org`, ...)
//!
//! Every search:
//! - Excludes the configured ratings through the query itself.
//! - Adds the configured restrictions, or matches everything when there are none.
//! - Applies the configured server-side filter.
//! - Asks the board for a random order, with a new seed each time.
use log::debug;
use reqwest::{Client, Url};
use tokio::time::Instant;

use crate::{
    client,
    config::PhilomenaConfig,
    error::ExtractorError,
    imageboards::{
        common::{extract_authors, format_truncated_list},
        post::{nsfw::NsfwLevel, rating::NsfwRating, ImageResult, ImageUrls},
        seed::{SeedSource, ThreadRngSeed},
        ImageSource, Query, UNKNOWN_AUTHOR,
    },
};

use self::models::{PhilomenaImage, PhilomenaSearchRequest, PhilomenaTopLevel};

pub mod models;

pub(crate) const EXTRACTOR_UA: &str =
    concat!("Rust Philomena Image Source/", env!("CARGO_PKG_VERSION"));

const SEARCH_PATH: &str = "api/v1/json/search/images";

/// Builds the boolean search expression sent as `q`.
///
/// ```rust
/// use booru_philomena::imageboards::{philomena::build_search_query, post::rating::NsfwRating};
///
/// let q = build_search_query(&["safe", "pony"], "", &[NsfwRating::Explicit]);
/// assert_eq!(q, "(safe, pony),(*), -explicit");
/// ```
pub fn build_search_query<S: AsRef<str>>(
    tags: &[S],
    restrictions: &str,
    disallow_ratings: &[NsfwRating],
) -> String {
    let tags = tags.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(", ");

    let restrictions = match restrictions.trim() {
        "" => "*",
        r => r,
    };

    let mut q = format!("({tags}),({restrictions})");
    for rating in disallow_ratings {
        q.push_str(", -");
        q.push_str(rating.as_tag());
    }
    q
}

/// Image source for a single Philomena board.
#[derive(Debug, Clone)]
pub struct PhilomenaExtractor<R = ThreadRngSeed> {
    client: Client,
    config: PhilomenaConfig,
    base_url: Url,
    seed_source: R,
}

impl PhilomenaExtractor {
    /// Sets up the image source with a fresh client, seeding every search from the thread RNG.
    pub fn new(config: PhilomenaConfig) -> Result<Self, ExtractorError> {
        Self::with_seed_source(config, ThreadRngSeed)
    }
}

impl<R: SeedSource> PhilomenaExtractor<R> {
    pub fn with_seed_source(
        config: PhilomenaConfig,
        seed_source: R,
    ) -> Result<Self, ExtractorError> {
        let base_url = match config.validate().map(|()| Url::parse(&config.endpoint)) {
            Ok(Ok(url)) => url,
            _ => {
                return Err(ExtractorError::InvalidEndpoint {
                    url: config.endpoint,
                })
            }
        };

        let client = client!(EXTRACTOR_UA);

        debug!("Set up image source {config}");

        Ok(Self {
            client,
            config,
            base_url,
            seed_source,
        })
    }

    /// Replaces the internal client with one provided by the host.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Builds the parameters for one search. Draws a new seed on every call.
    pub fn build_request(&self, query: &Query) -> PhilomenaSearchRequest {
        PhilomenaSearchRequest {
            q: build_search_query(
                &query.tags,
                &self.config.restrictions,
                &self.config.disallow_ratings,
            ),
            filter_id: self.config.filter_id,
            per_page: query.count,
            sf: format!("random:{}", self.seed_source.next_seed()),
            key: self.config.api_key.clone(),
        }
    }

    pub fn search_url(&self) -> Result<Url, ExtractorError> {
        self.join_endpoint(SEARCH_PATH)
    }

    pub fn page_url(&self, image_id: u64) -> Result<Url, ExtractorError> {
        self.join_endpoint(&format!("images/{image_id}"))
    }

    /// Maps a raw search response obtained through other means.
    ///
    /// A blank or `null` body counts as no data.
    pub fn map_posts(&self, raw_json: &str) -> Result<Option<Vec<ImageResult>>, ExtractorError> {
        if raw_json.trim().is_empty() {
            debug!("Search returned an empty body");
            return Ok(None);
        }

        match serde_json::from_str::<Option<PhilomenaTopLevel>>(raw_json)? {
            Some(response) => self.map_response(response),
            None => {
                debug!("Search returned a null body");
                Ok(None)
            }
        }
    }

    /// Maps every image of a search response. Returns `None` if there are no images.
    pub fn map_response(
        &self,
        response: PhilomenaTopLevel,
    ) -> Result<Option<Vec<ImageResult>>, ExtractorError> {
        let images = match response.images {
            Some(images) if !images.is_empty() => images,
            _ => {
                debug!("Search returned no images");
                return Ok(None);
            }
        };

        debug!(
            "Got {} images out of {} matches",
            images.len(),
            response.total.unwrap_or_default()
        );

        let start_point = Instant::now();

        let results = images
            .into_iter()
            .map(|image| self.map_image(image))
            .collect::<Result<Vec<ImageResult>, ExtractorError>>()?;

        debug!("Image mapping took {:?}", start_point.elapsed());
        Ok(Some(results))
    }

    fn map_image(&self, image: PhilomenaImage) -> Result<ImageResult, ExtractorError> {
        let author = match format_truncated_list(&extract_authors(&image.tags)) {
            authors if authors.is_empty() => UNKNOWN_AUTHOR.to_string(),
            authors => authors,
        };

        let reprs = image.representations;

        Ok(ImageResult {
            urls: ImageUrls {
                original: reprs.full,
                large: reprs.large,
                medium: reprs.medium,
                small: reprs.small,
                thumbnail: reprs.thumb_small,
            },
            title: format_truncated_list(&image.tags),
            desc: image.description.unwrap_or_default(),
            author,
            nsfw: NsfwLevel::from_tags(&image.tags),
            page_url: self.page_url(image.id)?.to_string(),
            tags: image.tags,
        })
    }

    fn join_endpoint(&self, path: &str) -> Result<Url, ExtractorError> {
        self.base_url
            .join(path)
            .map_err(|_| ExtractorError::InvalidEndpoint {
                url: self.config.endpoint.clone(),
            })
    }
}

impl<R: SeedSource> ImageSource for PhilomenaExtractor<R> {
    type Config = PhilomenaConfig;

    fn label(&self) -> &str {
        &self.config.label
    }

    fn languages(&self) -> &[&'static str] {
        &["en"]
    }

    async fn get(&self, query: &Query) -> Result<Option<Vec<ImageResult>>, ExtractorError> {
        debug!("Query: {query:?}");

        let params = self.build_request(query);
        debug!(
            "Search params: q={:?} filter_id={} per_page={} sf={}",
            params.q, params.filter_id, params.per_page, params.sf
        );

        let body = self
            .client
            .get(self.search_url()?)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        debug!("Response size: {} bytes", body.len());

        let results = self.map_posts(&body)?;
        debug!(
            "Mapped {} results",
            results.as_ref().map_or(0, Vec::len)
        );
        Ok(results)
    }

    fn client(&self) -> Client {
        self.client.clone()
    }

    fn config(&self) -> &PhilomenaConfig {
        &self.config
    }
}

#[cfg(test)]
mod test {
    use super::{build_search_query, PhilomenaExtractor};
    use crate::{
        config::PhilomenaConfig,
        error::ExtractorError,
        imageboards::{
            post::{nsfw::NsfwLevel, rating::NsfwRating, ImageUrls},
            seed::FixedSeed,
            ImageSource, Query, UNKNOWN_AUTHOR,
        },
    };

    static TEST_JSON: &str = include_str!("../../../assets/sample_responses/philomena_search.json");

    fn extractor(config: PhilomenaConfig) -> PhilomenaExtractor<FixedSeed> {
        PhilomenaExtractor::with_seed_source(config, FixedSeed(42)).unwrap()
    }

    fn image_json(id: u64, tags: &[&str]) -> String {
        serde_json::json!({
            "images": [{
                "id": id,
                "tags": tags,
                "description": "desc",
                "representations": {
                    "full": "F",
                    "large": "L",
                    "medium": "M",
                    "small": "S",
                    "thumb_small": "T",
                    "thumb": "unused"
                }
            }],
            "total": 1
        })
        .to_string()
    }

    #[test]
    fn query_with_blank_restrictions() {
        assert_eq!(
            build_search_query(&["safe", "pony"], "", &[NsfwRating::Explicit]),
            "(safe, pony),(*), -explicit"
        );
        assert_eq!(
            build_search_query(&["safe"], "  \n ", &[]),
            "(safe),(*)"
        );
    }

    #[test]
    fn query_with_restrictions_and_no_exclusions() {
        assert_eq!(
            build_search_query(&["tag1"], "score.gte:100", &[]),
            "(tag1),(score.gte:100)"
        );
    }

    #[test]
    fn query_keeps_rating_order() {
        assert_eq!(
            build_search_query(
                &Vec::<String>::new(),
                " wilson_score.gte:0.93 ",
                &[NsfwRating::Grotesque, NsfwRating::SemiGrimdark]
            ),
            "(),(wilson_score.gte:0.93), -grotesque, -semi-grimdark"
        );
    }

    #[test]
    fn request_uses_config_and_seed() {
        let ext = extractor(PhilomenaConfig {
            filter_id: 56_027,
            api_key: Some(String::from("secret")),
            ..Default::default()
        });

        let req = ext.build_request(&Query::new(["pony"], 3));
        assert_eq!(
            req.q,
            "(pony),(wilson_score.gte:0.93), -questionable, -explicit, -grimdark, -grotesque"
        );
        assert_eq!(req.filter_id, 56_027);
        assert_eq!(req.per_page, 3);
        assert_eq!(req.sf, "random:42");
        assert_eq!(req.key.as_deref(), Some("secret"));
    }

    #[test]
    fn request_serializes_as_query_params() {
        let ext = extractor(PhilomenaConfig {
            restrictions: String::new(),
            disallow_ratings: vec![NsfwRating::Explicit],
            ..Default::default()
        });
        let params = ext.build_request(&Query::new(["safe", "pony"], 5));

        let request = ext
            .client()
            .get(ext.search_url().unwrap())
            .query(&params)
            .build()
            .unwrap();

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert_eq!(
            pairs,
            [
                ("q".to_string(), "(safe, pony),(*), -explicit".to_string()),
                ("filter_id".to_string(), "191275".to_string()),
                ("per_page".to_string(), "5".to_string()),
                ("sf".to_string(), "random:42".to_string()),
            ]
        );
        assert_eq!(request.url().path(), "/api/v1/json/search/images");
    }

    #[test]
    fn endpoint_joining() {
        let ext = extractor(PhilomenaConfig::default());
        assert_eq!(
            ext.search_url().unwrap().as_str(),
            "https://trixiebooru.org/api/v1/json/search/images"
        );
        assert_eq!(
            ext.page_url(123).unwrap().as_str(),
            "https://trixiebooru.org/images/123"
        );

        let nested = extractor(PhilomenaConfig {
            endpoint: String::from("https://example.org/booru/"),
            ..Default::default()
        });
        assert_eq!(
            nested.page_url(7).unwrap().as_str(),
            "https://example.org/booru/images/7"
        );
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        for endpoint in ["not an url", "ftp://example.com/", "mailto:a@b.c"] {
            let res = PhilomenaExtractor::new(PhilomenaConfig {
                endpoint: endpoint.to_string(),
                ..Default::default()
            });
            assert!(
                matches!(res, Err(ExtractorError::InvalidEndpoint { .. })),
                "{endpoint} should be rejected"
            );
        }
    }

    #[test]
    fn maps_representations() {
        let ext = extractor(PhilomenaConfig::default());
        let results = ext
            .map_posts(&image_json(9, &["safe"]))
            .unwrap()
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].urls,
            ImageUrls {
                original: "F".into(),
                large: "L".into(),
                medium: "M".into(),
                small: "S".into(),
                thumbnail: "T".into(),
            }
        );
        assert_eq!(results[0].desc, "desc");
        assert_eq!(results[0].page_url, "https://trixiebooru.org/images/9");
    }

    #[test]
    fn author_from_artist_tags() {
        let ext = extractor(PhilomenaConfig::default());

        let credited = ext
            .map_posts(&image_json(1, &["artist:alice", "safe"]))
            .unwrap()
            .unwrap();
        assert_eq!(credited[0].author, "alice");

        let uncredited = ext.map_posts(&image_json(1, &["safe"])).unwrap().unwrap();
        assert_eq!(uncredited[0].author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn eight_tags_get_ellipsis_without_truncation() {
        let ext = extractor(PhilomenaConfig::default());
        let tags = ["a", "b", "c", "d", "e", "f", "g", "h"];

        let results = ext.map_posts(&image_json(1, &tags)).unwrap().unwrap();
        assert_eq!(results[0].title, "a, b, c, d, e, f, g, h ...");
        assert_eq!(results[0].tags, tags);
    }

    #[test]
    fn maps_sample_response() {
        let ext = extractor(PhilomenaConfig::default());
        let results = ext.map_posts(TEST_JSON).unwrap().unwrap();

        assert_eq!(results.len(), 3);

        let first = &results[0];
        assert_eq!(first.author, "alice, zephyr");
        assert_eq!(
            first.title,
            "artist:zephyr, artist:alice, safe, twilight sparkle, alicorn, book, female, mare, reading ..."
        );
        assert_eq!(first.nsfw, NsfwLevel::Safe);
        assert_eq!(
            first.desc,
            "Commission for a friend. [spoiler]Happy birthday![/spoiler]"
        );
        assert_eq!(
            first.urls.thumbnail,
            "https://derpicdn.net/img/2023/4/2/3071234/thumb_small.png"
        );
        assert_eq!(first.page_url, "https://trixiebooru.org/images/3071234");
        assert_eq!(first.tags.len(), 9);

        assert_eq!(results[1].nsfw, NsfwLevel::Guro);
        assert_eq!(results[1].author, UNKNOWN_AUTHOR);
        assert_eq!(results[1].title, "explicit, grimdark, oc");
        assert_eq!(results[1].desc, "");

        assert_eq!(results[2].nsfw, NsfwLevel::Suggestive);
    }

    #[test]
    fn empty_or_missing_images_is_no_data() {
        let ext = extractor(PhilomenaConfig::default());
        assert!(ext.map_posts(r#"{"images": [], "total": 0}"#).unwrap().is_none());
        assert!(ext.map_posts(r#"{"images": null}"#).unwrap().is_none());
        assert!(ext.map_posts("{}").unwrap().is_none());
    }

    #[test]
    fn blank_or_null_body_is_no_data() {
        let ext = extractor(PhilomenaConfig::default());
        assert!(ext.map_posts("").unwrap().is_none());
        assert!(ext.map_posts(" \r\n\t").unwrap().is_none());
        assert!(ext.map_posts("null").unwrap().is_none());
        assert!(ext.map_posts(" null\n").unwrap().is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let ext = extractor(PhilomenaConfig::default());
        assert!(matches!(
            ext.map_posts("<html>502 Bad Gateway</html>"),
            Err(ExtractorError::JsonSerializeFail(_))
        ));
    }

    #[test]
    fn source_metadata() {
        let ext = extractor(PhilomenaConfig::default());
        assert_eq!(ext.label(), "derpibooru");
        assert_eq!(ext.languages(), ["en"]);
        assert_eq!(ext.tokenize("Safe,  Pony "), ["safe", "pony"]);
        assert_eq!(ext.config().filter_id, 191_275);
    }
}
