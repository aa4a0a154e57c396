//! Repository for the `job_ledger` table.

use fabtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::ledger::{CreateLedgerEntry, LedgerEntry, UpdateLedgerEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_no, description, quantity, amount_cents, approve_status, created_at, updated_at";

/// Provides CRUD operations for ledger entries.
pub struct LedgerRepo;

impl LedgerRepo {
    /// Insert a new ledger entry for a project.
    pub async fn create(
        pool: &PgPool,
        project_no: &str,
        input: &CreateLedgerEntry,
    ) -> Result<LedgerEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_ledger (project_no, description, quantity, amount_cents)
             VALUES ($1, $2, COALESCE($3, 1), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LedgerEntry>(&query)
            .bind(project_no)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.amount_cents)
            .fetch_one(pool)
            .await
    }

    /// Find a ledger entry by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LedgerEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_ledger WHERE id = $1");
        sqlx::query_as::<_, LedgerEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one project's ledger entries, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_no: &str,
    ) -> Result<Vec<LedgerEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_ledger
             WHERE project_no = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, LedgerEntry>(&query)
            .bind(project_no)
            .fetch_all(pool)
            .await
    }

    /// Patch a ledger entry. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        input: &UpdateLedgerEntry,
    ) -> Result<Option<LedgerEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE job_ledger SET
                description = COALESCE($2, description),
                quantity = COALESCE($3, quantity),
                amount_cents = COALESCE($4, amount_cents),
                approve_status = COALESCE($5, approve_status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LedgerEntry>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(input.amount_cents)
            .bind(&input.approve_status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a ledger entry by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_ledger WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
