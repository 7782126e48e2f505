//! Run history pagination tests against a mock backend.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jobdeck_client::JobdeckClient;
use jobdeck_pipeline::{RunFilters, RunHistory};

fn run_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "pipeline_name": "job_search",
        "status": status,
        "trigger_type": "manual",
        "created_at": "2025-06-01T12:00:00Z",
        "duration_ms": 1000
    })
}

async fn history(server: &MockServer, page_size: u32) -> RunHistory {
    let client = JobdeckClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    RunHistory::with_page_size(client, page_size)
}

#[tokio::test]
async fn load_more_accumulates_pages_and_stops_when_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pipeline-runs"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "runs": [run_json("r3", "success"), run_json("r2", "error")],
            "total": 3,
            "has_more": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pipeline-runs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "runs": [run_json("r1", "success")],
            "total": 3,
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut history = history(&server, 2).await;

    assert_eq!(history.load_more().await.unwrap(), 2);
    assert_eq!(history.runs().len(), 2);
    assert!(history.has_more());

    assert_eq!(history.load_more().await.unwrap(), 1);
    assert_eq!(history.total(), 3);
    assert!(!history.has_more());

    // Pages append in fetch order; nothing is re-sorted locally.
    let ids: Vec<&str> = history.runs().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r2", "r1"]);

    // Exhausted: no further request goes out (page 3 is not mounted).
    assert_eq!(history.load_more().await.unwrap(), 0);
    assert_eq!(history.runs().len(), 3);
}

#[tokio::test]
async fn changing_filters_drops_accumulated_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pipeline-runs"))
        .and(query_param("errors_only", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "runs": [run_json("r2", "error")],
            "total": 1,
            "has_more": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pipeline-runs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "runs": [run_json("r2", "error"), run_json("r1", "success")],
            "total": 2,
            "has_more": false
        })))
        .mount(&server)
        .await;

    let mut history = history(&server, 25).await;
    assert_eq!(history.load_more().await.unwrap(), 2);

    history.errors_only(true);
    assert!(history.runs().is_empty());
    assert!(history.has_more());

    // The next fetch starts over from page one under the new filters.
    assert_eq!(history.load_more().await.unwrap(), 1);
    assert_eq!(history.runs()[0].id, "r2");
    assert_eq!(history.total(), 1);
}

#[tokio::test]
async fn setting_identical_filters_keeps_accumulation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pipeline-runs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "runs": [run_json("r1", "success")],
            "total": 1,
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut history = history(&server, 25).await;
    assert_eq!(history.load_more().await.unwrap(), 1);

    history.set_filters(RunFilters::default());
    assert_eq!(history.runs().len(), 1);
    assert!(!history.has_more());
}
