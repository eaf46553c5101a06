//! Naver Reverse Geocoding Client
//!
//! A Rust client for the Naver Cloud Platform Maps
//! [reverse geocoding](https://api.ncloud-docs.com/docs/en/ai-naver-mapsreversegeocoding-gc)
//! API. Resolves a coordinate pair to the administrative regions
//! (`area1` province/city, `area2` district, `area3` neighbourhood) that
//! contain it.
//!
//! Every call re-queries the provider; nothing is cached.

mod client;
mod error;
mod types;

pub use client::NaverGeocodeClient;
pub use error::{GeocodeError, Result};
pub use types::RegionAddress;
