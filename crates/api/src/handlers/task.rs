//! Handlers for the per-category `/{slug}-tasks` resources.
//!
//! One set of handler functions serves every category; the category is
//! baked in by the closures in [`crate::routes::task::router`], so each
//! mounted router works against its own task table and counter pair.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fabtrack_core::category::TaskCategory;
use fabtrack_core::error::CoreError;
use fabtrack_core::types::DbId;
use fabtrack_db::models::task::{CreateTask, Task, UpdateTask};
use fabtrack_db::repositories::TaskRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for task listing (`?project_no=`).
#[derive(Debug, Deserialize)]
pub struct TaskListParams {
    pub project_no: Option<String>,
}

/// POST /api/v1/{slug}-tasks
pub async fn create(
    State(state): State<AppState>,
    category: TaskCategory,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    if input.project_no.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "project_no must not be empty".into(),
        )));
    }
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".into(),
        )));
    }

    let task = TaskRepo::create(&state.pool, category, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/{slug}-tasks[?project_no=]
pub async fn list(
    State(state): State<AppState>,
    category: TaskCategory,
    Query(params): Query<TaskListParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = match params.project_no {
        Some(project_no) => TaskRepo::list_by_project(&state.pool, category, &project_no).await?,
        None => TaskRepo::list(&state.pool, category).await?,
    };
    Ok(Json(tasks))
}

/// GET /api/v1/{slug}-tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    category: TaskCategory,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, category, id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id.to_string()))?;
    Ok(Json(task))
}

/// PATCH /api/v1/{slug}-tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    category: TaskCategory,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    if let Some(project_no) = &input.project_no {
        if project_no.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "project_no must not be empty".into(),
            )));
        }
    }
    if let Some(title) = &input.title {
        if title.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "title must not be empty".into(),
            )));
        }
    }

    let task = TaskRepo::update(&state.pool, category, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id.to_string()))?;
    Ok(Json(task))
}

/// DELETE /api/v1/{slug}-tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    category: TaskCategory,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, category, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Task", id.to_string()))
    }
}
