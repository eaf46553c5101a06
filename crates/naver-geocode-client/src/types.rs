use serde::Deserialize;

/// Administrative regions containing a coordinate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionAddress {
    /// Province or metropolitan city, e.g. "서울특별시"
    pub area1: String,
    /// District, e.g. "강남구"
    pub area2: String,
    /// Neighbourhood, e.g. "역삼동"
    pub area3: String,
    /// Sub-neighbourhood (ri), usually empty in cities
    pub area4: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReverseGeocodeResponse {
    pub(crate) status: ResponseStatus,
    #[serde(default)]
    pub(crate) results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseStatus {
    pub(crate) code: i32,
    #[serde(default)]
    pub(crate) message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    #[serde(default)]
    pub(crate) name: String,
    pub(crate) region: Region,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Region {
    pub(crate) area1: Option<Area>,
    pub(crate) area2: Option<Area>,
    pub(crate) area3: Option<Area>,
    pub(crate) area4: Option<Area>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Area {
    #[serde(default)]
    pub(crate) name: String,
}
