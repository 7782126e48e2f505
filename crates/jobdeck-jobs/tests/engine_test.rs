//! Transition engine tests against a mock backend.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use jobdeck_client::JobdeckClient;
use jobdeck_jobs::{DocumentGenerator, GenerationError, StatusEngine, TransitionError};
use jobdeck_types::{Job, JobStatus, Timestamp};

fn job(status: JobStatus) -> Job {
    let t = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    Job {
        id: "j1".to_string(),
        title: "Systems Engineer".to_string(),
        company: "Acme".to_string(),
        status,
        notes: None,
        cover_letter: Some("Dear hiring manager".to_string()),
        cover_letter_generated_at: None,
        dismissed: false,
        created_at: t,
        updated_at: t,
    }
}

fn job_json(status: &str, generated_at: Option<&str>) -> serde_json::Value {
    json!({
        "id": "j1",
        "title": "Systems Engineer",
        "company": "Acme",
        "status": status,
        "cover_letter": "Dear hiring manager",
        "cover_letter_generated_at": generated_at,
        "dismissed": false,
        "created_at": "2025-06-01T09:00:00Z",
        "updated_at": "2025-06-01T09:05:00Z"
    })
}

async fn client(server: &MockServer) -> JobdeckClient {
    JobdeckClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

struct FailingGenerator;

#[async_trait]
impl DocumentGenerator for FailingGenerator {
    async fn generate_cover_letter(&self, _job_id: &str) -> Result<Timestamp, GenerationError> {
        Err(GenerationError("renderer crashed".to_string()))
    }
}

struct FixedGenerator(Timestamp);

#[async_trait]
impl DocumentGenerator for FixedGenerator {
    async fn generate_cover_letter(&self, _job_id: &str) -> Result<Timestamp, GenerationError> {
        Ok(self.0)
    }
}

#[tokio::test]
async fn illegal_transition_rejected_without_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/jobs/j1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let engine = StatusEngine::new(client(&server).await);
    let err = engine
        .apply_transition(&job(JobStatus::New), JobStatus::Applied)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TransitionError::Illegal {
            from: JobStatus::New,
            to: JobStatus::Applied
        }
    ));
}

#[tokio::test]
async fn plain_transition_patches_status_only() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/jobs/j1"))
        .and(body_partial_json(json!({"status": "prepped"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json("prepped", None)))
        .expect(1)
        .mount(&server)
        .await;

    let engine = StatusEngine::new(client(&server).await);
    let updated = engine
        .apply_transition(&job(JobStatus::New), JobStatus::Prepped)
        .await
        .unwrap();

    assert_eq!(updated.status, JobStatus::Prepped);
    assert!(updated.cover_letter_generated_at.is_none());
}

#[tokio::test]
async fn review_transition_commits_with_generation_timestamp() {
    let generated = Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 0).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/jobs/j1"))
        .and(body_partial_json(json!({
            "status": "reviewed",
            "cover_letter_generated_at": "2025-06-01T09:05:00Z"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(job_json("reviewed", Some("2025-06-01T09:05:00Z"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let engine =
        StatusEngine::with_generator(client(&server).await, Arc::new(FixedGenerator(generated)));
    let updated = engine
        .apply_transition(&job(JobStatus::Prepped), JobStatus::Reviewed)
        .await
        .unwrap();

    assert_eq!(updated.status, JobStatus::Reviewed);
    assert!(updated.cover_letter_generated_at.is_some());
}

#[tokio::test]
async fn generation_failure_aborts_before_any_write() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/jobs/j1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let engine = StatusEngine::with_generator(client(&server).await, Arc::new(FailingGenerator));
    let err = engine
        .apply_transition(&job(JobStatus::Prepped), JobStatus::Reviewed)
        .await
        .unwrap_err();

    // Distinct from Illegal: the caller offers "retry generation" here.
    assert!(matches!(err, TransitionError::Generation(_)));
}

#[tokio::test]
async fn review_from_other_edges_skips_generation() {
    // reviewed → applied is legal and must not touch the generator.
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/jobs/j1"))
        .and(body_partial_json(json!({"status": "applied"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(job_json("applied", None)))
        .expect(1)
        .mount(&server)
        .await;

    let engine = StatusEngine::with_generator(client(&server).await, Arc::new(FailingGenerator));
    let updated = engine
        .apply_transition(&job(JobStatus::Reviewed), JobStatus::Applied)
        .await
        .unwrap();
    assert_eq!(updated.status, JobStatus::Applied);
}

#[tokio::test]
async fn dismiss_by_status_returns_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jobs/dismiss-by-status"))
        .and(body_partial_json(json!({"status": "new"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 5})))
        .mount(&server)
        .await;

    let engine = StatusEngine::new(client(&server).await);
    let count = engine.dismiss_by_status(JobStatus::New).await.unwrap();
    assert_eq!(count, 5);
}
