//! Axum route handlers for the careers JSON API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::careers::form::{FormError, NewCareer};
use crate::careers::service::{add_career, AddOutcome};
use crate::errors::AppError;
use crate::models::career::{CareerDocument, CareerRecord};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CareerResponse {
    pub name: String,
    #[serde(flatten)]
    pub record: CareerRecord,
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<CareerDocument>, AppError> {
    Ok(Json(state.store.load().await?))
}

/// GET /api/v1/careers/:name
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CareerResponse>, AppError> {
    let document = state.store.load().await?;
    let record = document
        .get(&name)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Career '{name}' not found")))?;
    Ok(Json(CareerResponse { name, record }))
}

/// POST /api/v1/careers
pub async fn handle_create_career(
    State(state): State<AppState>,
    Json(input): Json<NewCareer>,
) -> Result<(StatusCode, Json<CareerResponse>), AppError> {
    match add_career(state.store.as_ref(), &state.write_lock, &input).await? {
        AddOutcome::Added { name, record, .. } => {
            Ok((StatusCode::CREATED, Json(CareerResponse { name, record })))
        }
        AddOutcome::Rejected(e @ FormError::AlreadyExists) => {
            Err(AppError::Conflict(e.to_string()))
        }
        AddOutcome::Rejected(e @ FormError::MissingFields) => {
            Err(AppError::Validation(e.to_string()))
        }
    }
}
