//! Route definitions for the job-ledger resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::ledger;
use crate::state::AppState;

/// Ledger routes: creation/listing nested under a project, individual
/// entries addressed by id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_no}/ledger",
            get(ledger::list_by_project).post(ledger::create),
        )
        .route(
            "/ledger/{id}",
            get(ledger::get_by_id)
                .patch(ledger::update)
                .delete(ledger::delete),
        )
}
