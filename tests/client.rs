//! Transport and envelope tests against a mock OHGO server.

use ohgo::{ListOptions, OhgoClient, OhgoError, QueryParams, Region};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn envelope(results: serde_json::Value) -> serde_json::Value {
    json!({
        "links": [],
        "totalResultCount": results.as_array().unwrap().len(),
        "results": results,
        "rejectedFilters": []
    })
}

fn camera_record(id: &str) -> serde_json::Value {
    json!({
        "links": [],
        "id": id,
        "latitude": 39.96,
        "longitude": -83.0,
        "location": "I-70 at Broad St",
        "description": "",
        "cameraViews": []
    })
}

#[tokio::test]
async fn test_list_sends_api_key_and_hyphenated_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .and(header("Authorization", "APIKEY test-key"))
        .and(query_param("region", "columbus"))
        .and(query_param("map-bounds-sw", "39.9,-83.0"))
        .and(query_param("page-size", "50"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([camera_record("c1"), camera_record("c2")]))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let params = QueryParams {
        region: Some(Region::Columbus.into()),
        map_bounds_sw: Some((39.9, -83.0)),
        page_size: Some(50),
        ..Default::default()
    };
    let cameras = client
        .get_cameras(&params, &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(cameras.len(), 2);
    assert_eq!(cameras[0].id, "c1");
}

#[tokio::test]
async fn test_empty_list_is_a_valid_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let cameras = client
        .get_cameras(&QueryParams::default(), &ListOptions::default())
        .await
        .unwrap();

    assert!(cameras.is_empty());
}

#[tokio::test]
async fn test_http_404_is_a_status_error_with_single_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras/nope"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let err = client.get_camera("nope").await.unwrap_err();

    match err {
        OhgoError::Status { code, .. } => assert_eq!(code, 404),
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_item_from_empty_results_is_not_found() {
    let mock_server = MockServer::start().await;

    // The API answers single-resource lookups with an envelope too; a
    // missing resource is a 200 with zero results.
    Mock::given(method("GET"))
        .and(path("/cameras/ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let err = client.get_camera("ghost").await.unwrap_err();

    match err {
        OhgoError::NotFound { kind, id } => {
            assert_eq!(kind, "camera");
            assert_eq!(id, "ghost");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_item_lookup_returns_first_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([camera_record("c1")]))))
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let camera = client.get_camera("c1").await.unwrap();

    assert_eq!(camera.id, "c1");
    assert_eq!(camera.location, "I-70 at Broad St");
}

#[tokio::test]
async fn test_non_json_body_is_a_malformed_body_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let err = client
        .get_cameras(&QueryParams::default(), &ListOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, OhgoError::MalformedBody(_)), "{err:?}");
}

#[tokio::test]
async fn test_missing_envelope_key_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    // No rejectedFilters key: contract violation, not a zero value.
    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [],
            "totalResultCount": 0,
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let err = client
        .get_cameras(&QueryParams::default(), &ListOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, OhgoError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_rejected_filters_warn_but_do_not_fail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": [],
            "totalResultCount": 1,
            "results": [camera_record("c1")],
            "rejectedFilters": [
                {"key": "region", "value": "columbus-ish", "error": "Invalid region"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let cameras = client
        .get_cameras(&QueryParams::default(), &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(cameras.len(), 1);
}

#[tokio::test]
async fn test_etag_304_short_circuits_to_cached_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .and(header("If-None-Match", "\"v42\""))
        .respond_with(ResponseTemplate::new(304).insert_header("ETag", "\"v42\""))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let options = ListOptions {
        fetch_all: false,
        etag: Some("\"v42\"".to_string()),
    };
    let cameras = client
        .get_cameras(&QueryParams::default(), &options)
        .await
        .unwrap();

    assert!(cameras.cached());
    assert!(cameras.is_empty());
    assert_eq!(cameras.etag(), Some("\"v42\""));
}

#[tokio::test]
async fn test_etag_captured_from_fresh_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("ETag", "\"v1\"")
                .set_body_json(envelope(json!([camera_record("c1")]))),
        )
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let cameras = client
        .get_cameras(&QueryParams::default(), &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(cameras.etag(), Some("\"v1\""));
    assert!(!cameras.cached());
}
