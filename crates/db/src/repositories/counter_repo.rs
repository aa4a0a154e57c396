//! Denormalized task-counter maintenance on the `projects` row.

use fabtrack_core::category::{CounterKind, TaskCategory};
use fabtrack_core::completion::CompletionReport;
use sqlx::PgPool;

use crate::repositories::CompletionRepo;

/// Adjusts and repairs the `total_*` / `completed_*` counter columns.
pub struct CounterRepo;

impl CounterRepo {
    /// Apply a relative delta to one counter column of one project.
    ///
    /// The increment is expressed inside a single UPDATE, so concurrent
    /// adjustments to the same column cannot lose updates. Returns
    /// whether a project row matched; a missing project is a no-op, not
    /// an error. Values are not clamped at zero.
    pub async fn adjust<'e, E>(
        executor: E,
        project_no: &str,
        category: TaskCategory,
        kind: CounterKind,
        delta: i32,
    ) -> Result<bool, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let column = category.counter_column(kind);
        let query =
            format!("UPDATE projects SET {column} = {column} + $2 WHERE project_no = $1");
        let result = sqlx::query(&query)
            .bind(project_no)
            .bind(delta)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Recompute every counter pair from the task tables and write them
    /// back in one statement.
    ///
    /// This is the drift-repair path: it trusts the aggregation queries,
    /// never the current counter values. Returns `None` if no project
    /// row matches `project_no`.
    pub async fn reconcile(
        pool: &PgPool,
        project_no: &str,
    ) -> Result<Option<CompletionReport>, sqlx::Error> {
        let report = CompletionRepo::calculate(pool, project_no).await?;

        let result = sqlx::query(
            "UPDATE projects SET
                total_panel = $2, completed_panel = $3,
                total_door = $4, completed_door = $5,
                total_cutting = $6, completed_cutting = $7,
                total_accessories = $8, completed_accessories = $9,
                total_strip_curtain = $10, completed_strip_curtain = $11,
                total_system = $12, completed_system = $13,
                total_transportation = $14, completed_transportation = $15,
                total_quotation = $16, completed_quotation = $17
             WHERE project_no = $1",
        )
        .bind(project_no)
        .bind(report.panel.total as i32)
        .bind(report.panel.completed as i32)
        .bind(report.door.total as i32)
        .bind(report.door.completed as i32)
        .bind(report.cutting.total as i32)
        .bind(report.cutting.completed as i32)
        .bind(report.accessories.total as i32)
        .bind(report.accessories.completed as i32)
        .bind(report.strip_curtain.total as i32)
        .bind(report.strip_curtain.completed as i32)
        .bind(report.system.total as i32)
        .bind(report.system.completed as i32)
        .bind(report.transportation.total as i32)
        .bind(report.transportation.completed as i32)
        .bind(report.quotation.total as i32)
        .bind(report.quotation.completed as i32)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            Ok(Some(report))
        } else {
            Ok(None)
        }
    }
}
