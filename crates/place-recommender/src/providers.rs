//! HTTP-backed provider implementations
//!
//! - [`NaverGeocodeClient`] for reverse geocoding
//! - [`NaverPlaceSearch`] wrapping [`LocalSearchClient`] for local search
//! - [`PlacePhotoClient`] for photo lookups

use async_trait::async_trait;
use google_places_client::PlacePhotoClient;
use naver_geocode_client::NaverGeocodeClient;
use naver_local_search_client::{LocalItem, LocalSearchClient, SortOrder};
use tracing::debug;

use crate::error::{PhotoLookupError, Result};
use crate::markup::strip_markup;
use crate::provider::{PhotoLookup, PlaceSearcher, ReverseGeocoder};
use crate::session::SessionContext;
use crate::types::{Address, Coordinate, PlaceCandidate};

/// Default number of candidates requested per search
pub const DEFAULT_DISPLAY: u32 = 10;

#[async_trait]
impl ReverseGeocoder for NaverGeocodeClient {
    async fn resolve(&self, ctx: &SessionContext, coordinate: Coordinate) -> Result<Address> {
        let region = self
            .reverse_geocode(coordinate.latitude, coordinate.longitude)
            .await?;

        debug!(request_id = %ctx.request_id, area1 = %region.area1, "Resolved address");

        Ok(Address {
            region1: region.area1,
            region2: region.area2,
            region3: region.area3,
        })
    }
}

/// Local search with a fixed result count and provider-randomized ordering
pub struct NaverPlaceSearch {
    client: LocalSearchClient,
    display: u32,
    sort: SortOrder,
}

impl NaverPlaceSearch {
    pub fn new(client: LocalSearchClient) -> Self {
        Self::with_display(client, DEFAULT_DISPLAY)
    }

    pub fn with_display(client: LocalSearchClient, display: u32) -> Self {
        Self {
            client,
            display,
            sort: SortOrder::Random,
        }
    }
}

#[async_trait]
impl PlaceSearcher for NaverPlaceSearch {
    async fn search(
        &self,
        ctx: &SessionContext,
        address: &Address,
        category: &str,
    ) -> Result<Vec<PlaceCandidate>> {
        let query = address.search_query(category);
        let items = self.client.search(&query, self.display, self.sort).await?;

        debug!(request_id = %ctx.request_id, query = %query, count = items.len(), "Searched places");

        Ok(items.into_iter().map(to_candidate).collect())
    }
}

/// Unenriched candidate from a search item
fn to_candidate(item: LocalItem) -> PlaceCandidate {
    PlaceCandidate {
        title: strip_markup(&item.title),
        link: item.link,
        road_address: item.road_address,
        address: item.address,
        category: item.category,
        telephone: item.telephone,
        photo_url: None,
    }
}

#[async_trait]
impl PhotoLookup for PlacePhotoClient {
    async fn find_photo(
        &self,
        _ctx: &SessionContext,
        title: &str,
        near: Coordinate,
    ) -> std::result::Result<Option<String>, PhotoLookupError> {
        Ok(PlacePhotoClient::find_photo(self, title, near.latitude, near.longitude).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_candidate_strips_title() {
        let item = LocalItem {
            title: "<b>Clinic</b>".to_string(),
            link: "https://example.com".to_string(),
            category: "병원,의원>내과".to_string(),
            description: String::new(),
            telephone: "02-000-0000".to_string(),
            address: "서울특별시 강남구 역삼동 1".to_string(),
            road_address: "서울특별시 강남구 테헤란로 1".to_string(),
            mapx: "1270300000".to_string(),
            mapy: "375000000".to_string(),
        };

        let candidate = to_candidate(item);
        assert_eq!(candidate.title, "Clinic");
        assert_eq!(candidate.road_address, "서울특별시 강남구 테헤란로 1");
        assert_eq!(candidate.photo_url, None);
    }
}
