use std::time::Duration;

use tracing::{debug, warn};

use crate::error::GeocodeError;
use crate::types::{GeocodeResult, RegionAddress, ReverseGeocodeResponse};

const DEFAULT_BASE_URL: &str = "https://naveropenapi.apigw.ntruss.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const STATUS_OK: i32 = 0;
const STATUS_NO_RESULTS: i32 = 3;

/// Naver Cloud Maps reverse geocoding client
pub struct NaverGeocodeClient {
    client: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl NaverGeocodeClient {
    /// Create a new client against the public API gateway
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, client_id, client_secret)
    }

    /// Create a new client with a custom gateway URL
    pub fn with_base_url(base_url: &str, client_id: &str, client_secret: &str) -> Self {
        Self::with_base_url_and_timeout(
            base_url,
            client_id,
            client_secret,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a new client with a custom gateway URL and transport timeout
    pub fn with_base_url_and_timeout(
        base_url: &str,
        client_id: &str,
        client_secret: &str,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        }
    }

    /// Reverse geocode coordinates to the regions containing them
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> crate::Result<RegionAddress> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeocodeError::InvalidCoordinates(latitude, longitude));
        }

        // The API takes "x,y", i.e. longitude first
        let url = format!(
            "{}/map-reversegeocode/v2/gc?coords={},{}&output=json&orders=legalcode,admcode",
            self.base_url, longitude, latitude
        );

        let response = self
            .client
            .get(&url)
            .header("X-NCP-APIGW-API-KEY-ID", &self.client_id)
            .header("X-NCP-APIGW-API-KEY", &self.client_secret)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(
                lat = latitude,
                lon = longitude,
                status = %response.status(),
                "Reverse geocoder returned error status"
            );
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let data: ReverseGeocodeResponse = response.json().await?;

        match data.status.code {
            STATUS_OK => {}
            STATUS_NO_RESULTS => return Err(GeocodeError::NoAddressFound),
            code => {
                warn!(lat = latitude, lon = longitude, code, message = %data.status.message, "Reverse geocoder reported failure");
                return Err(GeocodeError::Provider {
                    code,
                    message: data.status.message,
                });
            }
        }

        let address = pick_region(&data.results).ok_or(GeocodeError::NoAddressFound)?;

        debug!(
            lat = latitude,
            lon = longitude,
            area1 = %address.area1,
            area2 = %address.area2,
            area3 = %address.area3,
            "Geocoded coordinates"
        );

        Ok(address)
    }
}

/// Prefer the legal-district result, falling back to the first result with a
/// named top-level area
fn pick_region(results: &[GeocodeResult]) -> Option<RegionAddress> {
    let preferred = results
        .iter()
        .find(|r| r.name == "legalcode")
        .into_iter()
        .chain(results.iter());

    preferred.filter_map(to_region_address).next()
}

fn to_region_address(result: &GeocodeResult) -> Option<RegionAddress> {
    let region = &result.region;
    let name = |area: &Option<crate::types::Area>| {
        area.as_ref()
            .map(|a| a.name.trim().to_string())
            .unwrap_or_default()
    };

    let area1 = name(&region.area1);
    if area1.is_empty() {
        return None;
    }

    let area4 = Some(name(&region.area4)).filter(|s| !s.is_empty());

    Some(RegionAddress {
        area1,
        area2: name(&region.area2),
        area3: name(&region.area3),
        area4,
    })
}
