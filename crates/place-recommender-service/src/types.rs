//! Response types for the recommendation service

use place_recommender::{MapLinks, PipelineState, PlaceCandidate};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_cache: Option<CacheStats>,
}

#[derive(Debug, Serialize)]
pub struct CacheStats {
    pub entries: u64,
    pub hits: u64,
    pub misses: u64,
}

/// A recommended place with links to open it in the map app
#[derive(Debug, Serialize)]
pub struct PlaceView {
    #[serde(flatten)]
    pub place: PlaceCandidate,
    pub map: MapLinks,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub state: PipelineState,
    pub places: Vec<PlaceView>,
}
