//! Job ledger entity model and DTOs.

use fabtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `job_ledger` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LedgerEntry {
    pub id: DbId,
    pub project_no: String,
    pub description: String,
    pub quantity: i32,
    pub amount_cents: Option<i64>,
    pub approve_status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a ledger entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLedgerEntry {
    pub description: String,
    /// Defaults to 1 if omitted.
    pub quantity: Option<i32>,
    pub amount_cents: Option<i64>,
}

/// DTO for patching a ledger entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLedgerEntry {
    pub description: Option<String>,
    pub quantity: Option<i32>,
    pub amount_cents: Option<i64>,
    pub approve_status: Option<String>,
}
