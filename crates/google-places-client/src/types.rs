use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchTextRequest<'a> {
    pub(crate) text_query: &'a str,
    pub(crate) max_result_count: u32,
    pub(crate) language_code: &'a str,
    pub(crate) location_bias: LocationBias,
}

#[derive(Debug, Serialize)]
pub(crate) struct LocationBias {
    pub(crate) circle: Circle,
}

#[derive(Debug, Serialize)]
pub(crate) struct Circle {
    pub(crate) center: LatLng,
    pub(crate) radius: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct LatLng {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchTextResponse {
    #[serde(default)]
    pub(crate) places: Vec<Place>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Place {
    #[serde(default)]
    pub(crate) photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Photo {
    /// Resource name, "places/{place_id}/photos/{photo_ref}"
    pub(crate) name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PhotoMediaResponse {
    pub(crate) photo_uri: Option<String>,
}
