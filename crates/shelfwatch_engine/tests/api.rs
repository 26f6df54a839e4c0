use std::time::Duration;

use pretty_assertions::assert_eq;
use shelfwatch_engine::{ApiSettings, FailureKind, QueueService, ReqwestQueueService, StatsDto};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> ReqwestQueueService {
    let settings = ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    };
    ReqwestQueueService::new(&settings).expect("service")
}

#[tokio::test]
async fn fetch_queue_decodes_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/queue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "42",
                "status": "processing",
                "dirpath": "/incoming/ravens",
                "files": ["ravens.epub", "cover.jpg"],
                "metadata": { "title": "Ravens", "author": "J. Doe", "year": 2021 }
            },
            { "id": "7", "status": "pending" }
        ])))
        .mount(&server)
        .await;

    let items = service_for(&server).fetch_queue().await.expect("queue");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "42");
    assert_eq!(items[0].status, "processing");
    assert_eq!(items[0].files.len(), 2);
    let metadata = items[0].metadata.as_ref().expect("metadata");
    assert_eq!(metadata.title.as_deref(), Some("Ravens"));
    assert_eq!(metadata.year, Some(2021));
    // Absent fields fall back to defaults instead of failing the snapshot.
    assert_eq!(items[1].dirpath, "");
    assert_eq!(items[1].metadata, None);
}

#[tokio::test]
async fn fetch_queue_maps_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/queue"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = service_for(&server).fetch_queue().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn fetch_queue_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/queue"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!([])),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ApiSettings::default()
    };
    let service = ReqwestQueueService::new(&settings).expect("service");

    let err = service.fetch_queue().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetch_queue_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/queue"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let err = service_for(&server).fetch_queue().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetch_status_decodes_counters_with_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tracked_files_count": 2,
            "grouping_files_count": 3
        })))
        .mount(&server)
        .await;

    let stats = service_for(&server).fetch_status().await.expect("status");

    assert_eq!(
        stats,
        StatsDto {
            tracked_files_count: 2,
            grouping_files_count: 3,
            groups_count: 0,
        }
    );
}

#[tokio::test]
async fn trigger_rescan_posts_and_ignores_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_string("whatever"))
        .expect(1)
        .mount(&server)
        .await;

    service_for(&server).trigger_rescan().await.expect("rescan");
}

#[tokio::test]
async fn trigger_rescan_maps_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/refresh"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service_for(&server).trigger_rescan().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn malformed_base_url_is_rejected_up_front() {
    let settings = ApiSettings {
        base_url: "not a url".to_string(),
        ..ApiSettings::default()
    };

    let err = ReqwestQueueService::new(&settings).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
