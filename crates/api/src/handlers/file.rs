//! Handlers for BLOB-backed file attachments.
//!
//! Uploads arrive as multipart forms with a required `file` field and
//! optional `task_category` / `task_no` fields linking the attachment
//! to one task row.

use axum::extract::{Multipart, Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use fabtrack_core::category::TaskCategory;
use fabtrack_core::types::DbId;
use fabtrack_db::models::file::{CreateProjectFile, ProjectFileMeta};
use fabtrack_db::repositories::{FileRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects/{project_no}/files
pub async fn upload(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ProjectFileMeta>)> {
    ProjectRepo::find_by_project_no(&state.pool, &project_no)
        .await?
        .ok_or_else(|| AppError::not_found("Project", &project_no))?;

    let mut file_part: Option<(String, String, Vec<u8>)> = None;
    let mut task_category: Option<String> = None;
    let mut task_no: Option<DbId> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("attachment").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_part = Some((file_name, content_type, data.to_vec()));
            }
            "task_category" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if TaskCategory::from_key(&text).is_none() {
                    return Err(AppError::BadRequest(format!(
                        "Unknown task category '{text}'"
                    )));
                }
                task_category = Some(text);
            }
            "task_no" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let id: DbId = text
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("Invalid task_no '{text}'")))?;
                task_no = Some(id);
            }
            _ => {} // ignore unknown fields
        }
    }

    let (file_name, content_type, content) =
        file_part.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    if content.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let input = CreateProjectFile {
        project_no,
        task_category,
        task_no,
        file_name,
        content_type,
        content,
    };
    let meta = FileRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(meta)))
}

/// GET /api/v1/projects/{project_no}/files
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_no): Path<String>,
) -> AppResult<Json<Vec<ProjectFileMeta>>> {
    let files = FileRepo::list_by_project(&state.pool, &project_no).await?;
    Ok(Json(files))
}

/// GET /api/v1/files/{id}
///
/// Streams the stored bytes back with the stored Content-Type and an
/// attachment Content-Disposition.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let file = FileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("File", id.to_string()))?;

    // Quotes stripped from the name to keep the header well-formed.
    let disposition = format!(
        "attachment; filename=\"{}\"",
        file.file_name.replace('"', "")
    );

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, file.content_type),
            (CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    ))
}

/// DELETE /api/v1/files/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = FileRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("File", id.to_string()))
    }
}
