//! Pagination walking tests against a mock OHGO server.

use ohgo::{ListOptions, OhgoClient, OhgoError, QueryParams};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn camera_record(id: &str) -> serde_json::Value {
    json!({
        "links": [],
        "id": id,
        "latitude": 39.96,
        "longitude": -83.0,
        "location": "somewhere",
        "description": "",
        "cameraViews": []
    })
}

fn page(results: Vec<serde_json::Value>, total: u64, next: Option<String>) -> serde_json::Value {
    let links = match next {
        Some(href) => json!([{"href": href, "rel": "next-page"}]),
        None => json!([]),
    };
    json!({
        "links": links,
        "totalResultCount": total,
        "results": results,
        "rejectedFilters": []
    })
}

#[tokio::test]
async fn test_fetch_all_merges_pages_in_order_and_stops() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    // Continuation links are absolute URLs, dispatched verbatim.
    // Specific page mocks are mounted first so the generic first-page
    // mock does not swallow them.
    Mock::given(method("GET"))
        .and(path("/cameras"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![camera_record("c3")],
            4,
            Some(format!("{uri}/cameras?page=3")),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cameras"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![camera_record("c4")],
            4,
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![camera_record("c1"), camera_record("c2")],
            4,
            Some(format!("{uri}/cameras?page=2")),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &uri).unwrap();
    let cameras = client
        .get_cameras(&QueryParams::default(), &ListOptions::all())
        .await
        .unwrap();

    let ids: Vec<&str> = cameras.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3", "c4"]);
}

#[tokio::test]
async fn test_fetch_all_on_terminal_page_issues_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![camera_record("c1")],
            1,
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let cameras = client
        .get_cameras(&QueryParams::default(), &ListOptions::all())
        .await
        .unwrap();

    assert_eq!(cameras.len(), 1);
}

#[tokio::test]
async fn test_without_fetch_all_next_page_is_not_followed() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![camera_record("c1")],
            2,
            Some(format!("{uri}/cameras?page=2")),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &uri).unwrap();
    let cameras = client
        .get_cameras(&QueryParams::default(), &ListOptions::default())
        .await
        .unwrap();

    assert_eq!(cameras.len(), 1);
}

#[tokio::test]
async fn test_mid_walk_failure_discards_accumulated_pages() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/cameras"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cameras"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![camera_record("c1")],
            2,
            Some(format!("{uri}/cameras?page=2")),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OhgoClient::with_base_url("test-key", &uri).unwrap();
    let err = client
        .get_cameras(&QueryParams::default(), &ListOptions::all())
        .await
        .unwrap_err();

    // The caller sees the page error, not a partial result.
    match err {
        OhgoError::Status { code, .. } => assert_eq!(code, 500),
        other => panic!("expected Status, got {other:?}"),
    }
}
