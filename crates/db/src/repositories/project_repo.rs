//! Repository for the `projects` table.

use fabtrack_core::category::TaskCategory;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_no, customer, remarks, start_date, due_date, status, \
     total_panel, completed_panel, total_door, completed_door, \
     total_cutting, completed_cutting, total_accessories, completed_accessories, \
     total_strip_curtain, completed_strip_curtain, total_system, completed_system, \
     total_transportation, completed_transportation, total_quotation, completed_quotation, \
     created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Counters start at zero; `status` defaults to "draft" if omitted.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (project_no, customer, remarks, start_date, due_date, status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.project_no)
            .bind(&input.customer)
            .bind(&input.remarks)
            .bind(input.start_date)
            .bind(input.due_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its business key.
    pub async fn find_by_project_no(
        pool: &PgPool,
        project_no: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE project_no = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(project_no)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// the business key and the counters are never touched here.
    ///
    /// Returns `None` if no row with the given `project_no` exists.
    pub async fn update(
        pool: &PgPool,
        project_no: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                customer = COALESCE($2, customer),
                remarks = COALESCE($3, remarks),
                start_date = COALESCE($4, start_date),
                due_date = COALESCE($5, due_date),
                status = COALESCE($6, status),
                updated_at = NOW()
             WHERE project_no = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(project_no)
            .bind(&input.customer)
            .bind(&input.remarks)
            .bind(input.start_date)
            .bind(input.due_date)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project together with its task rows, attachments and
    /// ledger entries, all in one transaction.
    ///
    /// The task tables carry no foreign key to `projects`, so the
    /// cascade is done here rather than by the database. Returns `true`
    /// if a project row was removed.
    pub async fn delete(pool: &PgPool, project_no: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for category in TaskCategory::ALL {
            let query = format!(
                "DELETE FROM {table} WHERE project_no = $1",
                table = category.table()
            );
            sqlx::query(&query)
                .bind(project_no)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("DELETE FROM project_files WHERE project_no = $1")
            .bind(project_no)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM job_ledger WHERE project_no = $1")
            .bind(project_no)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projects WHERE project_no = $1")
            .bind(project_no)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
