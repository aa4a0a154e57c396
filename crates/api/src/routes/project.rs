//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{project_no}",
            get(project::get_by_project_no)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/projects/{project_no}/completion",
            get(project::completion),
        )
        .route("/projects/{project_no}/recount", post(project::recount))
}
