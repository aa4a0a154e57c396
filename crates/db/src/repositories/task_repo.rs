//! Per-category task CRUD with counter maintenance.
//!
//! Every mutating operation runs the task-row change and its counter
//! adjustments inside one transaction, so the `projects` counters and
//! the task tables commit atomically. A counter adjustment that matches
//! no project row is logged and does not fail the operation.

use fabtrack_core::category::{CounterKind, TaskCategory};
use fabtrack_core::status::is_completed_status;
use fabtrack_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::repositories::CounterRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_no, title, description, priority, status, due_date, approve_status, \
     created_at, updated_at";

/// Provides CRUD operations for the per-category task tables.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task and bump the owning project's counters.
    ///
    /// `total` always increments; `completed` too when the new row's
    /// status already classifies as completed.
    pub async fn create(
        pool: &PgPool,
        category: TaskCategory,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO {table} (project_no, title, description, priority, status, due_date, approve_status)
             VALUES ($1, $2, $3, COALESCE($4, 'normal'), COALESCE($5, 'pending'), $6, $7)
             RETURNING {COLUMNS}",
            table = category.table()
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(&input.project_no)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(&input.approve_status)
            .fetch_one(&mut *tx)
            .await?;

        adjust_logged(&mut tx, &task.project_no, category, CounterKind::Total, 1).await?;
        if is_completed_status(&task.status) {
            adjust_logged(&mut tx, &task.project_no, category, CounterKind::Completed, 1).await?;
        }

        tx.commit().await?;
        Ok(task)
    }

    /// Find a task by id within one category's table.
    pub async fn find_by_id(
        pool: &PgPool,
        category: TaskCategory,
        id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE id = $1",
            table = category.table()
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every task in one category, newest first.
    pub async fn list(pool: &PgPool, category: TaskCategory) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} ORDER BY created_at DESC, id DESC",
            table = category.table()
        );
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// List one project's tasks in one category, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        category: TaskCategory,
        project_no: &str,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE project_no = $1 ORDER BY created_at DESC, id DESC",
            table = category.table()
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_no)
            .fetch_all(pool)
            .await
    }

    /// Patch a task. Only non-`None` fields are applied; omitted fields
    /// keep their previous values for the before/after comparison.
    ///
    /// Counter effects, derived from old vs. new state:
    /// - status crossing the completed boundary moves `completed` by one;
    /// - a `project_no` change moves `total` (and `completed` when
    ///   applicable) from the old project to the new one.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        category: TaskCategory,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Lock the row so the before/after delta is computed against the
        // state no concurrent writer can change underneath us.
        let select = format!(
            "SELECT {COLUMNS} FROM {table} WHERE id = $1 FOR UPDATE",
            table = category.table()
        );
        let Some(old) = sqlx::query_as::<_, Task>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE {table} SET
                project_no = COALESCE($2, project_no),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                priority = COALESCE($5, priority),
                status = COALESCE($6, status),
                due_date = COALESCE($7, due_date),
                approve_status = COALESCE($8, approve_status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}",
            table = category.table()
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.project_no)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.due_date)
            .bind(&input.approve_status)
            .fetch_one(&mut *tx)
            .await?;

        let was_completed = is_completed_status(&old.status);
        let now_completed = is_completed_status(&task.status);

        if old.project_no != task.project_no {
            adjust_logged(&mut tx, &old.project_no, category, CounterKind::Total, -1).await?;
            if was_completed {
                adjust_logged(&mut tx, &old.project_no, category, CounterKind::Completed, -1)
                    .await?;
            }
            adjust_logged(&mut tx, &task.project_no, category, CounterKind::Total, 1).await?;
            if now_completed {
                adjust_logged(&mut tx, &task.project_no, category, CounterKind::Completed, 1)
                    .await?;
            }
        } else if was_completed != now_completed {
            let delta = if now_completed { 1 } else { -1 };
            adjust_logged(&mut tx, &task.project_no, category, CounterKind::Completed, delta)
                .await?;
        }

        tx.commit().await?;
        Ok(Some(task))
    }

    /// Delete a task and decrement the owning project's counters.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn delete(
        pool: &PgPool,
        category: TaskCategory,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "DELETE FROM {table} WHERE id = $1 RETURNING {COLUMNS}",
            table = category.table()
        );
        let Some(old) = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(false);
        };

        adjust_logged(&mut tx, &old.project_no, category, CounterKind::Total, -1).await?;
        if is_completed_status(&old.status) {
            adjust_logged(&mut tx, &old.project_no, category, CounterKind::Completed, -1).await?;
        }

        tx.commit().await?;
        Ok(true)
    }
}

/// Apply one counter delta inside the task transaction, logging the
/// no-op case (project row missing) instead of failing the operation.
async fn adjust_logged(
    tx: &mut Transaction<'_, Postgres>,
    project_no: &str,
    category: TaskCategory,
    kind: CounterKind,
    delta: i32,
) -> Result<(), sqlx::Error> {
    let applied = CounterRepo::adjust(&mut **tx, project_no, category, kind, delta).await?;
    if !applied {
        tracing::warn!(
            project_no,
            category = category.key(),
            counter = kind.as_str(),
            delta,
            "Counter adjustment matched no project row"
        );
    }
    Ok(())
}
