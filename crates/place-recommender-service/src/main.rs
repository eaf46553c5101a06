//! Place Recommender Service - nearby place recommendations over HTTP
//!
//! Resolves the caller's coordinate to an address, searches nearby places of
//! the requested category and attaches photos.

mod config;
mod error;
mod server;
mod types;

use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::server::{start_server, ServerState, SharedState};
use axum::http::{header, HeaderName, Method};
use google_places_client::{PhotoOptions, PlacePhotoClient};
use naver_geocode_client::NaverGeocodeClient;
use naver_local_search_client::LocalSearchClient;
use place_recommender::providers::NaverPlaceSearch;
use place_recommender::Recommender;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("place_recommender_service=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Place Recommender Service...");

    let config = Config::from_env()?;
    info!(port = config.port, display = config.search_display, "Loaded configuration");

    let geocoder = NaverGeocodeClient::with_base_url_and_timeout(
        &config.naver_map_base_url,
        &config.naver_map_client_id,
        &config.naver_map_client_secret,
        config.http_timeout,
    );

    let search = LocalSearchClient::with_timeout(
        &config.naver_search_base_url,
        &config.naver_search_client_id,
        &config.naver_search_client_secret,
        config.http_timeout,
    );

    let photos = Arc::new(PlacePhotoClient::with_options(
        &config.google_places_base_url,
        &config.google_places_api_key,
        PhotoOptions {
            max_width_px: config.photo_max_width,
            bias_radius_m: config.photo_bias_radius_m,
            timeout: config.http_timeout,
            ..PhotoOptions::default()
        },
    ));

    let recommender = Recommender::new(
        Arc::new(geocoder),
        Arc::new(NaverPlaceSearch::with_display(search, config.search_display)),
        photos.clone(),
    );

    let state: SharedState =
        Arc::new(ServerState::new(recommender, &config.map_app_name).with_photo_client(photos));

    // Start HTTP server (blocking)
    start_server(state, cors_layer(&config.cors_origins), config.port)
        .await
        .map_err(|e| ServiceError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(server::USER_ID_HEADER),
        ])
}
