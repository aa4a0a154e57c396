//! Route definitions for the per-category task resources.
//!
//! One router per category, mounted at `/{slug}-tasks`. The category is
//! captured by closures so the shared handler functions in
//! [`crate::handlers::task`] run against the right table.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use fabtrack_core::category::TaskCategory;
use fabtrack_core::types::DbId;
use fabtrack_db::models::task::{CreateTask, UpdateTask};

use crate::handlers::task::{self, TaskListParams};
use crate::state::AppState;

/// Routes for one category, mounted at `/{slug}-tasks`.
pub fn router(category: TaskCategory) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(move |state: State<AppState>, query: Query<TaskListParams>| {
                task::list(state, category, query)
            })
            .post(move |state: State<AppState>, body: Json<CreateTask>| {
                task::create(state, category, body)
            }),
        )
        .route(
            "/{id}",
            get(move |state: State<AppState>, path: Path<DbId>| {
                task::get_by_id(state, category, path)
            })
            .patch(
                move |state: State<AppState>, path: Path<DbId>, body: Json<UpdateTask>| {
                    task::update(state, category, path, body)
                },
            )
            .delete(move |state: State<AppState>, path: Path<DbId>| {
                task::delete(state, category, path)
            }),
        )
}
