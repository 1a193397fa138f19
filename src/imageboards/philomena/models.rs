use serde::{Deserialize, Serialize};

/// Query parameters of `GET /api/v1/json/search/images`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PhilomenaSearchRequest {
    pub q: String,
    pub filter_id: u64,
    pub per_page: u32,
    pub sf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PhilomenaTopLevel {
    #[serde(default)]
    pub images: Option<Vec<PhilomenaImage>>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PhilomenaImage {
    pub id: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub representations: Representations,
}

/// Every rendered size the board generates for an image.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct Representations {
    pub full: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub tall: Option<String>,
    pub thumb: Option<String>,
    pub thumb_small: String,
    pub thumb_tiny: Option<String>,
}
