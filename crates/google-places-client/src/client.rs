use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::error::PlacesError;
use crate::types::{
    Circle, LatLng, LocationBias, PhotoMediaResponse, SearchTextRequest, SearchTextResponse,
};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com";
const CACHE_TTL_SECS: u64 = 86400; // 24 hours
const FIELD_MASK: &str = "places.id,places.photos";

/// Tunables for photo lookups
#[derive(Debug, Clone)]
pub struct PhotoOptions {
    /// Width of the photo the returned URL points at
    pub max_width_px: u32,
    /// Radius of the circle around the origin used to bias the text search
    pub bias_radius_m: f64,
    pub language_code: String,
    pub timeout: Duration,
}

impl Default for PhotoOptions {
    fn default() -> Self {
        Self {
            max_width_px: 400,
            bias_radius_m: 2000.0,
            language_code: "ko".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Google Places photo lookup client with caching of successful lookups
pub struct PlacePhotoClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    options: PhotoOptions,
    cache: Cache<String, String>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PlacePhotoClient {
    /// Create a new client with default settings
    pub fn new(api_key: &str) -> Self {
        Self::with_options(DEFAULT_BASE_URL, api_key, PhotoOptions::default())
    }

    /// Create a new client with a custom base URL and options
    pub fn with_options(base_url: &str, api_key: &str, options: PhotoOptions) -> Self {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let cache = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(Duration::from_secs(CACHE_TTL_SECS))
            .build();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            options,
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Number of cached entries, cache hits and cache misses
    pub fn cache_stats(&self) -> (u64, u64, u64) {
        (
            self.cache.entry_count(),
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
        )
    }

    /// Find a photo URL for the place named `title` near the given coordinate
    ///
    /// Returns `Ok(None)` when the search finds no place or the place has no
    /// photos.
    pub async fn find_photo(
        &self,
        title: &str,
        latitude: f64,
        longitude: f64,
    ) -> crate::Result<Option<String>> {
        // Round to 4 decimal places for cache key (~10m precision)
        let cache_key = format!("{}|{:.4},{:.4}", title, latitude, longitude);

        if let Some(cached) = self.cache.get(&cache_key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Some(cached));
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let Some(photo_name) = self.search_photo_name(title, latitude, longitude).await? else {
            debug!(title, "No place photo found");
            return Ok(None);
        };

        let Some(photo_uri) = self.resolve_photo_uri(&photo_name).await? else {
            return Ok(None);
        };

        let parsed = url::Url::parse(&photo_uri)
            .map_err(|_| PlacesError::InvalidPhotoUrl(photo_uri.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PlacesError::InvalidPhotoUrl(photo_uri));
        }

        self.cache.insert(cache_key, photo_uri.clone()).await;
        debug!(title, photo_uri = %photo_uri, "Resolved place photo");

        Ok(Some(photo_uri))
    }

    /// Text search biased towards the origin; returns the first photo's resource name
    async fn search_photo_name(
        &self,
        title: &str,
        latitude: f64,
        longitude: f64,
    ) -> crate::Result<Option<String>> {
        let url = format!("{}/v1/places:searchText", self.base_url);
        let body = SearchTextRequest {
            text_query: title,
            max_result_count: 1,
            language_code: &self.options.language_code,
            location_bias: LocationBias {
                circle: Circle {
                    center: LatLng {
                        latitude,
                        longitude,
                    },
                    radius: self.options.bias_radius_m,
                },
            },
        };

        let response = self
            .client
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlacesError::Status(response.status().as_u16()));
        }

        let data: SearchTextResponse = response.json().await?;

        Ok(data
            .places
            .into_iter()
            .next()
            .and_then(|place| place.photos.into_iter().next())
            .map(|photo| photo.name))
    }

    async fn resolve_photo_uri(&self, photo_name: &str) -> crate::Result<Option<String>> {
        let url = format!(
            "{}/v1/{}/media?maxWidthPx={}&skipHttpRedirect=true",
            self.base_url, photo_name, self.options.max_width_px
        );

        let response = self
            .client
            .get(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PlacesError::Status(response.status().as_u16()));
        }

        let data: PhotoMediaResponse = response.json().await?;
        Ok(data.photo_uri.filter(|uri| !uri.is_empty()))
    }
}
