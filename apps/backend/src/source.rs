//! Client for the JSON exercise source.
//!
//! A source is any HTTP resource serving `{ "exercises": [...] }`. Fetch
//! failures stay typed so handlers can surface them to the user instead of
//! silently rendering nothing.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument};

use lacuna_core::ExerciseDefinition;

/// Top-level document served by an exercise source.
#[derive(Debug, Deserialize)]
pub struct SourceDocument {
    pub exercises: Vec<ExerciseDefinition>,
}

/// Failures while retrieving an exercise source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("la requête a échoué : {0}")]
    Request(#[from] reqwest::Error),

    #[error("la source a répondu avec le statut {0}")]
    Status(reqwest::StatusCode),
}

/// HTTP client for fetching exercise definitions.
#[derive(Debug, Clone)]
pub struct SourceClient {
    client: reqwest::Client,
}

impl SourceClient {
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch and decode all exercise definitions from the source.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<ExerciseDefinition>, SourceError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let document: SourceDocument = response.json().await?;
        info!(count = document.exercises.len(), "fetched exercise source");
        Ok(document.exercises)
    }
}
