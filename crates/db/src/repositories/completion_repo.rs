//! Read-side completion aggregation over the task tables.

use fabtrack_core::category::TaskCategory;
use fabtrack_core::completion::{CategoryCompletion, CompletionReport};
use fabtrack_core::status::COMPLETED_STATUSES;
use sqlx::PgPool;

/// Recomputes per-category completion by counting task rows directly.
///
/// Never reads or writes the counter columns, so it doubles as the
/// correctness oracle for them.
pub struct CompletionRepo;

impl CompletionRepo {
    /// Aggregate completion for one project across every category.
    ///
    /// One COUNT query per task table; the first failing category aborts
    /// the whole call. Callers listing many projects may degrade a
    /// failure to `CompletionReport::default()` instead of failing the
    /// listing.
    pub async fn calculate(
        pool: &PgPool,
        project_no: &str,
    ) -> Result<CompletionReport, sqlx::Error> {
        let statuses: Vec<String> = COMPLETED_STATUSES.iter().map(|s| s.to_string()).collect();

        let mut report = CompletionReport::default();
        for category in TaskCategory::ALL {
            let query = format!(
                "SELECT COUNT(*), COUNT(*) FILTER (WHERE LOWER(status) = ANY($2))
                 FROM {table} WHERE project_no = $1",
                table = category.table()
            );
            let (total, completed): (i64, i64) = sqlx::query_as(&query)
                .bind(project_no)
                .bind(&statuses)
                .fetch_one(pool)
                .await?;
            *report.category_mut(category) = CategoryCompletion::from_counts(completed, total);
        }
        Ok(report)
    }
}
