//! Common test utilities for integration tests.
//!
//! Wires the app router to a wiremock exercise source so tests control
//! exactly what the configured source serves.

use std::sync::Arc;

use axum::Router;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lacuna_backend::source::SourceClient;
use lacuna_backend::{build_router, AppState};

pub struct TestContext {
    pub source: MockServer,
    app: Router,
}

impl TestContext {
    pub async fn new() -> Self {
        let source = MockServer::start().await;
        let app = Self::router_for(&format!("{}/exercises.json", source.uri()));
        Self { source, app }
    }

    /// Router pointed at an arbitrary source location, for tests that
    /// need an unreachable source.
    pub fn router_for(source_url: &str) -> Router {
        let state = AppState {
            source: Arc::new(SourceClient::new().expect("failed to build source client")),
            source_url: source_url.to_string(),
        };
        build_router(state)
    }

    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Serve a source document with the given exercise records.
    pub async fn mount_source(&self, exercises: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/exercises.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "exercises": exercises })),
            )
            .mount(&self.source)
            .await;
    }

    /// Make the source respond with a non-success status.
    pub async fn mount_source_failure(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/exercises.json"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.source)
            .await;
    }

    /// Two exercises: one fully specified, one relying on defaults.
    pub fn sample_exercises() -> serde_json::Value {
        json!([
            {
                "id": "geo-1",
                "title": "Capitales",
                "statement": "Compléter les capitales.",
                "textWithBlanks": "La France : rep{Paris}. L'Italie : rep{Rome}.",
                "notions": ["geographie"],
                "authors": ["Alice", "Bob"]
            },
            {
                "id": "conj-1",
                "textWithBlanks": "Ils rep{sont} partis hier.",
                "notions": ["conjugaison"]
            }
        ])
    }
}
