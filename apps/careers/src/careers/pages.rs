//! Axum handlers for the server-rendered pages.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;

use crate::careers::form::NewCareer;
use crate::careers::service::{add_career, AddOutcome};
use crate::careers::views::{AddPage, DetailsPage, HomePage};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub career: Option<String>,
}

/// GET /
pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let document = state.store.load().await?;
    Ok(Html(HomePage::new(&document).render()?))
}

/// GET /details?career=<name>
pub async fn details_page(
    State(state): State<AppState>,
    Query(query): Query<DetailsQuery>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let document = state.store.load().await?;
    let requested = query.career.as_deref().filter(|name| !name.is_empty());
    let (status, page) = match DetailsPage::new(&document, requested) {
        Ok(page) => (StatusCode::OK, page),
        Err(page) => (StatusCode::NOT_FOUND, page),
    };
    Ok((status, Html(page.render()?)))
}

/// GET /add
pub async fn add_page() -> Result<Html<String>, AppError> {
    Ok(Html(AddPage::blank().render()?))
}

/// POST /add
pub async fn submit_add(
    State(state): State<AppState>,
    Form(input): Form<NewCareer>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let (status, page) = match add_career(state.store.as_ref(), &state.write_lock, &input).await? {
        AddOutcome::Added { message, .. } => (StatusCode::OK, AddPage::added(message)),
        AddOutcome::Rejected(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            AddPage::rejected(input, e.to_string()),
        ),
    };
    Ok((status, Html(page.render()?)))
}
