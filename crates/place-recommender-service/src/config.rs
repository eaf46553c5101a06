use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, ServiceError};

/// Service configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub naver_map_client_id: String,
    pub naver_map_client_secret: String,
    pub naver_map_base_url: String,
    pub naver_search_client_id: String,
    pub naver_search_client_secret: String,
    pub naver_search_base_url: String,
    pub google_places_api_key: String,
    pub google_places_base_url: String,
    pub search_display: u32,
    pub photo_max_width: u32,
    pub photo_bias_radius_m: f64,
    pub http_timeout: Duration,
    /// Bundle id passed to `nmap://` deep links
    pub map_app_name: String,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            var(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ServiceError::Config(format!("missing {key}")))
        };
        let port = parse_var(&var, "PORT").unwrap_or(3005);

        let cors_origins = var("CORS_ORIGINS")
            .map(|s| s.split(',').map(|o| o.trim().to_string()).collect())
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            port,
            cors_origins,
            naver_map_client_id: required("NAVER_MAP_CLIENT_ID")?,
            naver_map_client_secret: required("NAVER_MAP_CLIENT_SECRET")?,
            naver_map_base_url: var("NAVER_MAP_BASE_URL")
                .unwrap_or_else(|| "https://naveropenapi.apigw.ntruss.com".to_string()),
            naver_search_client_id: required("NAVER_SEARCH_CLIENT_ID")?,
            naver_search_client_secret: required("NAVER_SEARCH_CLIENT_SECRET")?,
            naver_search_base_url: var("NAVER_SEARCH_BASE_URL")
                .unwrap_or_else(|| "https://openapi.naver.com".to_string()),
            google_places_api_key: required("GOOGLE_PLACES_API_KEY")?,
            google_places_base_url: var("GOOGLE_PLACES_BASE_URL")
                .unwrap_or_else(|| "https://places.googleapis.com".to_string()),
            search_display: parse_var(&var, "SEARCH_DISPLAY").unwrap_or(10),
            photo_max_width: parse_var(&var, "PHOTO_MAX_WIDTH").unwrap_or(400),
            photo_bias_radius_m: parse_var(&var, "PHOTO_BIAS_RADIUS_M").unwrap_or(2000.0),
            http_timeout: Duration::from_secs(parse_var(&var, "HTTP_TIMEOUT_SECS").unwrap_or(30)),
            map_app_name: var("MAP_APP_NAME").unwrap_or_else(|| "com.carebuddy.app".to_string()),
        })
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    var(key).and_then(|v| v.trim().parse().ok())
}
