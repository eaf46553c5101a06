//! HTTP server for recommendation endpoints

use crate::error::ApiError;
use crate::types::{CacheStats, HealthResponse, PlaceView, RecommendResponse};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::HeaderMap,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use google_places_client::PlacePhotoClient;
use place_recommender::{MapLinks, RecommendRequest, Recommender, SessionContext};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Shared state for the HTTP server
pub struct ServerState {
    pub recommender: Recommender,
    /// Kept for cache statistics on the health endpoint
    pub photo_client: Option<Arc<PlacePhotoClient>>,
    pub map_app_name: String,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(recommender: Recommender, map_app_name: &str) -> Self {
        Self {
            recommender,
            photo_client: None,
            map_app_name: map_app_name.to_string(),
            started_at: Utc::now(),
        }
    }

    pub fn with_photo_client(mut self, photo_client: Arc<PlacePhotoClient>) -> Self {
        self.photo_client = Some(photo_client);
        self
    }
}

pub type SharedState = Arc<ServerState>;

/// Recommendation query parameters
#[derive(Deserialize)]
pub struct RecommendQuery {
    lat: f64,
    lng: f64,
    category: String,
}

/// Create the HTTP router
pub fn create_router(state: SharedState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/places/recommend", get(recommend))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, cors: CorsLayer, port: u16) -> std::io::Result<()> {
    let router = create_router(state, cors);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds().max(0) as u64;
    let photo_cache = state.photo_client.as_ref().map(|client| {
        let (entries, hits, misses) = client.cache_stats();
        CacheStats {
            entries,
            hits,
            misses,
        }
    });

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        photo_cache,
    })
}

/// Recommend nearby places for a coordinate and category
async fn recommend(
    State(state): State<SharedState>,
    headers: HeaderMap,
    query: Result<Query<RecommendQuery>, QueryRejection>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let Query(params) = query?;
    let category = params.category.trim();
    if category.is_empty() {
        return Err(ApiError::BadRequest("category must not be empty".to_string()));
    }

    let ctx = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(SessionContext::new)
        .unwrap_or_else(SessionContext::anonymous);

    let request = RecommendRequest::new(params.lat, params.lng, category);
    let recommendation = state.recommender.recommend(&ctx, &request).await?;

    let places = recommendation
        .places
        .into_iter()
        .map(|place| PlaceView {
            map: MapLinks::for_title(&place.title, &state.map_app_name),
            place,
        })
        .collect();

    Ok(Json(RecommendResponse {
        state: recommendation.state,
        places,
    }))
}
