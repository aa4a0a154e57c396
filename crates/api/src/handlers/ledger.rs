//! Handlers for the job-ledger resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fabtrack_core::error::CoreError;
use fabtrack_core::types::DbId;
use fabtrack_db::models::ledger::{CreateLedgerEntry, LedgerEntry, UpdateLedgerEntry};
use fabtrack_db::repositories::{LedgerRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects/{project_no}/ledger
pub async fn create(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
    Json(input): Json<CreateLedgerEntry>,
) -> AppResult<(StatusCode, Json<LedgerEntry>)> {
    ProjectRepo::find_by_project_no(&state.pool, &project_no)
        .await?
        .ok_or_else(|| AppError::not_found("Project", &project_no))?;

    if input.description.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "description must not be empty".into(),
        )));
    }

    let entry = LedgerRepo::create(&state.pool, &project_no, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/projects/{project_no}/ledger
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
) -> AppResult<Json<Vec<LedgerEntry>>> {
    let entries = LedgerRepo::list_by_project(&state.pool, &project_no).await?;
    Ok(Json(entries))
}

/// GET /api/v1/ledger/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LedgerEntry>> {
    let entry = LedgerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("LedgerEntry", id.to_string()))?;
    Ok(Json(entry))
}

/// PATCH /api/v1/ledger/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLedgerEntry>,
) -> AppResult<Json<LedgerEntry>> {
    let entry = LedgerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("LedgerEntry", id.to_string()))?;
    Ok(Json(entry))
}

/// DELETE /api/v1/ledger/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LedgerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("LedgerEntry", id.to_string()))
    }
}
