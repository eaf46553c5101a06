//! Integration tests for `PlacePhotoClient` using wiremock HTTP mocks.

use google_places_client::{PhotoOptions, PlacePhotoClient, PlacesError};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacePhotoClient {
    PlacePhotoClient::with_options(base_url, "test-key", PhotoOptions::default())
}

async fn mount_photo(server: &MockServer, photo_name: &str, photo_uri: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/{photo_name}/media")))
        .and(query_param("maxWidthPx", "400"))
        .and(query_param("skipHttpRedirect", "true"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": format!("{photo_name}/media"),
            "photoUri": photo_uri
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn find_photo_returns_first_photo_uri() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "textQuery": "역삼정형외과의원",
            "maxResultCount": 1,
            "locationBias": { "circle": { "center": { "latitude": 37.5, "longitude": 127.03 } } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "places": [
                {
                    "id": "ChIJ123",
                    "photos": [
                        { "name": "places/ChIJ123/photos/AAA", "widthPx": 800, "heightPx": 600 },
                        { "name": "places/ChIJ123/photos/BBB", "widthPx": 800, "heightPx": 600 }
                    ]
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    mount_photo(
        &server,
        "places/ChIJ123/photos/AAA",
        "https://lh3.googleusercontent.com/photo-aaa",
    )
    .await;

    let client = test_client(&server.uri());
    let photo = client
        .find_photo("역삼정형외과의원", 37.5, 127.03)
        .await
        .expect("lookup should succeed");
    assert_eq!(
        photo.as_deref(),
        Some("https://lh3.googleusercontent.com/photo-aaa")
    );

    // Second lookup is served from cache (search mock expects a single call)
    let cached = client
        .find_photo("역삼정형외과의원", 37.5, 127.03)
        .await
        .unwrap();
    assert_eq!(cached, photo);
    let (_, hits, misses) = client.cache_stats();
    assert_eq!(hits, 1);
    assert_eq!(misses, 1);
}

#[tokio::test]
async fn place_without_photos_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "places": [ { "id": "ChIJ999" } ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let photo = client.find_photo("작은의원", 37.5, 127.0).await.unwrap();
    assert!(photo.is_none());
}

#[tokio::test]
async fn no_place_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.find_photo("없는병원", 37.5, 127.0).await.unwrap().is_none());
}

#[tokio::test]
async fn provider_failure_is_an_error_and_not_cached() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(403))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.find_photo("병원", 37.5, 127.0).await.unwrap_err();
    assert!(matches!(err, PlacesError::Status(403)));

    // Not cached: the provider is queried again
    assert!(client.find_photo("병원", 37.5, 127.0).await.is_err());
}

#[tokio::test]
async fn non_http_photo_uri_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "places": [ { "photos": [ { "name": "places/X/photos/Y" } ] } ]
        })))
        .mount(&server)
        .await;

    mount_photo(&server, "places/X/photos/Y", "ftp://example.com/photo.jpg").await;

    let client = test_client(&server.uri());
    let err = client.find_photo("병원", 37.5, 127.0).await.unwrap_err();
    assert!(matches!(err, PlacesError::InvalidPhotoUrl(_)));
}
