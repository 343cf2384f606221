//! Exercise page endpoints.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Form;
use tracing::error;

use lacuna_core::{Catalog, Exercise, Submission};

use crate::error::{ApiError, Result};
use crate::html;
use crate::AppState;

/// Fetch the configured source and build the catalog for this request.
async fn load_catalog(state: &AppState) -> Result<Catalog> {
    let definitions = state
        .source
        .fetch(&state.source_url)
        .await
        .map_err(|err| {
            error!(%err, url = %state.source_url, "failed to load exercise source");
            err
        })?;
    Ok(Catalog::from_definitions(definitions)?)
}

fn page_of(title: &str, exercises: &[&Exercise]) -> Html<String> {
    let articles: Vec<String> = exercises
        .iter()
        .map(|exercise| html::exercise_article(&exercise.render(), None, None))
        .collect();
    Html(html::page(title, &articles.join("\n")))
}

/// GET /exercises
pub async fn show_all(State(state): State<AppState>) -> Result<Html<String>> {
    let catalog = load_catalog(&state).await?;
    let exercises: Vec<&Exercise> = catalog.all().iter().collect();
    Ok(page_of("Exercices", &exercises))
}

/// GET /exercises/:id
pub async fn show_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>> {
    let catalog = load_catalog(&state).await?;
    let exercise = catalog.by_id(&id).ok_or_else(|| {
        error!(%id, "exercise not found");
        ApiError::NotFound(format!("aucun exercice avec l'id {id}"))
    })?;
    Ok(page_of(exercise.title(), &[exercise]))
}

/// GET /notions/:notion
pub async fn show_by_notion(
    State(state): State<AppState>,
    Path(notion): Path<String>,
) -> Result<Html<String>> {
    let catalog = load_catalog(&state).await?;
    Ok(page_of(&notion, &catalog.by_notion(&notion)))
}

/// POST /exercises/:id/check
///
/// Stateless: every check re-grades the exercise from the submitted form
/// values and re-renders it with the feedback applied.
pub async fn check(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Html<String>> {
    let catalog = load_catalog(&state).await?;
    let exercise = catalog.by_id(&id).ok_or_else(|| {
        error!(%id, "exercise not found");
        ApiError::NotFound(format!("aucun exercice avec l'id {id}"))
    })?;

    let submission = Submission::from(fields);
    let report = exercise.check(&submission);
    let article = html::exercise_article(&exercise.render(), Some(&report), Some(&submission));
    Ok(Html(html::page(exercise.title(), &article)))
}
