//! Periodic reconciliation of the denormalized task counters.
//!
//! Counter maintenance is best-effort when a project row is missing, so
//! out-of-band writes or operator SQL can leave the `total_*` /
//! `completed_*` columns drifted from the task tables. This job sweeps
//! every project on a fixed interval, recomputing the counters from the
//! task rows and writing them back, which bounds how long any drift can
//! survive.

use std::time::Duration;

use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use fabtrack_db::repositories::{CounterRepo, ProjectRepo};

/// Run the counter reconciliation loop.
///
/// Sweeps all projects every `interval`; runs until `cancel` is
/// triggered. A failure on one project is logged and the sweep moves on.
pub async fn run(pool: PgPool, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Counter reconciliation job started"
    );

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Counter reconciliation job stopping");
                break;
            }
            _ = ticker.tick() => {
                sweep(&pool).await;
            }
        }
    }
}

/// Reconcile every project once.
async fn sweep(pool: &PgPool) {
    let projects = match ProjectRepo::list(pool).await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!(error = %e, "Counter reconciliation: project listing failed");
            return;
        }
    };

    let mut reconciled = 0usize;
    for project in &projects {
        match CounterRepo::reconcile(pool, &project.project_no).await {
            Ok(Some(_)) => reconciled += 1,
            // Deleted between listing and reconcile; nothing to repair.
            Ok(None) => {}
            Err(e) => {
                tracing::error!(
                    project_no = %project.project_no,
                    error = %e,
                    "Counter reconciliation failed for project"
                );
            }
        }
    }

    tracing::debug!(reconciled, total = projects.len(), "Counter reconciliation sweep done");
}
