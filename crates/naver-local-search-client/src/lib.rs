//! Rust client for the Naver Search local API
//!
//! Queries Naver's local business index with a free-text query and returns
//! the matching places in the order the provider ranked them.
//!
//! # Example
//!
//! ```no_run
//! use naver_local_search_client::{LocalSearchClient, SortOrder};
//!
//! # async fn example() -> Result<(), naver_local_search_client::LocalSearchError> {
//! let client = LocalSearchClient::new("client-id", "client-secret");
//!
//! let items = client
//!     .search("서울 강남구 역삼동 정형외과", 10, SortOrder::Random)
//!     .await?;
//! for item in items {
//!     println!("{} - {}", item.title, item.road_address);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Titles are returned exactly as the provider sends them, which includes
//! `<b>` highlight markup around matched terms.
//!
//! # API Coverage
//!
//! - `GET /v1/search/local.json` - Local place search

mod client;
mod error;
mod types;

pub use client::LocalSearchClient;
pub use error::{LocalSearchError, Result};
pub use types::{LocalItem, SortOrder};
