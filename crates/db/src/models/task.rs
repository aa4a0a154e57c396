//! Task entity model and DTOs.
//!
//! All task tables are structurally identical, so one set of structs
//! serves every category; the category travels alongside as a
//! [`fabtrack_core::category::TaskCategory`] value.

use chrono::NaiveDate;
use fabtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task row from one of the `*_tasks` tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_no: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub approve_status: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_no: String,
    pub title: String,
    pub description: Option<String>,
    /// Defaults to "normal" if omitted.
    pub priority: Option<String>,
    /// Defaults to "pending" if omitted.
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub approve_status: Option<String>,
}

/// DTO for patching a task. Omitted fields keep their previous values;
/// a present `project_no` reassigns the task to another project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub project_no: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub approve_status: Option<String>,
}
