//! Route definitions for file attachments.

use axum::routing::get;
use axum::Router;

use crate::handlers::file;
use crate::state::AppState;

/// Attachment routes: uploads/listing nested under a project, download
/// and delete addressed by file id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_no}/files",
            get(file::list_by_project).post(file::upload),
        )
        .route("/files/{id}", get(file::download).delete(file::delete))
}
