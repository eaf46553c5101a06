//! Integration tests for `LocalSearchClient` using wiremock HTTP mocks.

use naver_local_search_client::{LocalSearchClient, LocalSearchError, SortOrder};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> LocalSearchClient {
    LocalSearchClient::with_base_url(base_url, "test-id", "test-secret")
}

#[tokio::test]
async fn search_returns_items_in_provider_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "lastBuildDate": "Mon, 19 Oct 2026 10:00:00 +0900",
        "total": 2,
        "start": 1,
        "display": 2,
        "items": [
            {
                "title": "역삼<b>정형외과</b>의원",
                "link": "https://example.com/a",
                "category": "병원,의원>정형외과",
                "description": "",
                "telephone": "",
                "address": "서울특별시 강남구 역삼동 1",
                "roadAddress": "서울특별시 강남구 테헤란로 1",
                "mapx": "1270300000",
                "mapy": "375000000"
            },
            {
                "title": "강남<b>정형외과</b>",
                "link": "",
                "category": "병원,의원>정형외과",
                "address": "서울특별시 강남구 역삼동 2",
                "roadAddress": "서울특별시 강남구 테헤란로 2"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/v1/search/local.json"))
        .and(query_param("query", "서울 강남구 역삼동 정형외과"))
        .and(query_param("display", "10"))
        .and(query_param("sort", "random"))
        .and(header("X-Naver-Client-Id", "test-id"))
        .and(header("X-Naver-Client-Secret", "test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .search("서울 강남구 역삼동 정형외과", 10, SortOrder::Random)
        .await
        .expect("should parse items");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "역삼<b>정형외과</b>의원");
    assert_eq!(items[0].road_address, "서울특별시 강남구 테헤란로 1");
    assert_eq!(items[1].title, "강남<b>정형외과</b>");
    assert_eq!(items[1].telephone, "");
}

#[tokio::test]
async fn display_is_clamped_to_provider_maximum() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("display", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client.search("약국", 50, SortOrder::Comment).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn empty_items_is_not_an_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "total": 0, "start": 1, "display": 0, "items": [] });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let items = client
        .search("존재하지 않는 동네 치과", 10, SortOrder::Random)
        .await
        .expect("empty result should be ok");
    assert!(items.is_empty());
}

#[tokio::test]
async fn unauthorized_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "errorMessage": "Authentication failed",
            "errorCode": "024"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.search("내과", 10, SortOrder::Random).await.unwrap_err();
    assert!(matches!(err, LocalSearchError::Unauthorized));
}

#[tokio::test]
async fn error_body_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "errorMessage": "Incorrect query request",
            "errorCode": "SE01"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    match client.search("", 10, SortOrder::Random).await {
        Err(LocalSearchError::Provider { code, message }) => {
            assert_eq!(code, "SE01");
            assert_eq!(message, "Incorrect query request");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_without_body_maps_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.search("한의원", 10, SortOrder::Random).await.unwrap_err();
    assert!(matches!(err, LocalSearchError::Status(503)));
}
