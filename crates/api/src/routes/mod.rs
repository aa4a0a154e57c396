//! Route definitions.
//!
//! Route hierarchy under `/api/v1`:
//!
//! ```text
//! /projects                                GET list, POST create
//! /projects/{project_no}                   GET, PUT, DELETE
//! /projects/{project_no}/completion        GET aggregated completion
//! /projects/{project_no}/recount           POST reconcile counters
//! /projects/{project_no}/files             GET list, POST upload (multipart)
//! /projects/{project_no}/ledger            GET list, POST create
//! /files/{id}                              GET download, DELETE
//! /ledger/{id}                             GET, PATCH, DELETE
//!
//! /{slug}-tasks                            GET list, POST create
//! /{slug}-tasks/{id}                       GET, PATCH, DELETE
//!   for every category slug: panel, door, cutting, accessories,
//!   strip-curtain, system, transportation, quotation
//! ```
//!
//! `/health` is mounted at root level, outside `/api/v1`.

pub mod file;
pub mod health;
pub mod ledger;
pub mod project;
pub mod task;

use axum::Router;
use fabtrack_core::category::TaskCategory;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
pub fn api_routes() -> Router<AppState> {
    let mut router = Router::new()
        .merge(project::router())
        .merge(file::router())
        .merge(ledger::router());

    for category in TaskCategory::ALL {
        let prefix = format!("/{}-tasks", category.slug());
        router = router.nest(&prefix, task::router(category));
    }

    router
}
