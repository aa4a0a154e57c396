//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fabtrack_core::completion::CompletionReport;
use fabtrack_core::error::CoreError;
use fabtrack_db::models::project::{CreateProject, Project, UpdateProject};
use fabtrack_db::repositories::{CompletionRepo, CounterRepo, ProjectRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A project row together with its freshly aggregated completion
/// report. The report is recomputed from the task tables on every read,
/// independent of the counter columns.
#[derive(Debug, Serialize)]
pub struct ProjectWithCompletion {
    #[serde(flatten)]
    pub project: Project,
    pub completion: CompletionReport,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if input.project_no.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "project_no must not be empty".into(),
        )));
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// Each project embeds its completion report. An aggregation failure
/// for one project degrades that report to all zeros rather than
/// failing the whole listing.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithCompletion>>> {
    let projects = ProjectRepo::list(&state.pool).await?;

    let mut out = Vec::with_capacity(projects.len());
    for project in projects {
        let completion = match CompletionRepo::calculate(&state.pool, &project.project_no).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(
                    project_no = %project.project_no,
                    error = %e,
                    "Completion aggregation failed, returning zeroed report"
                );
                CompletionReport::default()
            }
        };
        out.push(ProjectWithCompletion {
            project,
            completion,
        });
    }

    Ok(Json(out))
}

/// GET /api/v1/projects/{project_no}
pub async fn get_by_project_no(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
) -> AppResult<Json<ProjectWithCompletion>> {
    let project = ProjectRepo::find_by_project_no(&state.pool, &project_no)
        .await?
        .ok_or_else(|| AppError::not_found("Project", &project_no))?;

    let completion = CompletionRepo::calculate(&state.pool, &project_no).await?;
    Ok(Json(ProjectWithCompletion {
        project,
        completion,
    }))
}

/// PUT /api/v1/projects/{project_no}
pub async fn update(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, &project_no, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Project", &project_no))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{project_no}
///
/// Removes the project together with its tasks, attachments and ledger
/// entries.
pub async fn delete(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, &project_no).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project", &project_no))
    }
}

/// GET /api/v1/projects/{project_no}/completion
pub async fn completion(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
) -> AppResult<Json<CompletionReport>> {
    ProjectRepo::find_by_project_no(&state.pool, &project_no)
        .await?
        .ok_or_else(|| AppError::not_found("Project", &project_no))?;

    let report = CompletionRepo::calculate(&state.pool, &project_no).await?;
    Ok(Json(report))
}

/// POST /api/v1/projects/{project_no}/recount
///
/// Recomputes the denormalized counters from the task tables and writes
/// them back, returning the reconciled report.
pub async fn recount(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
) -> AppResult<Json<CompletionReport>> {
    let report = CounterRepo::reconcile(&state.pool, &project_no)
        .await?
        .ok_or_else(|| AppError::not_found("Project", &project_no))?;

    tracing::info!(project_no = %project_no, "Counters reconciled on request");
    Ok(Json(report))
}
