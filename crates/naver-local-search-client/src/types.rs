//! Data types for local search API responses

use serde::Deserialize;

/// Ordering requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Provider-defined shuffled ranking; repeated calls may differ
    #[default]
    Random,
    /// Ordered by review count
    Comment,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Comment => "comment",
        }
    }
}

/// A single place from `/v1/search/local.json`
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalItem {
    /// Place name, may contain `<b>` highlight markup
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub road_address: String,
    /// KATECH / WGS84 x coordinate as sent by the provider
    #[serde(default)]
    pub mapx: String,
    #[serde(default)]
    pub mapy: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalSearchResponse {
    #[serde(default)]
    pub(crate) items: Vec<LocalItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) error_code: String,
    #[serde(default)]
    pub(crate) error_message: String,
}
