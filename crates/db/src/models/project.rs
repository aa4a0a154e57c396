//! Project entity model and DTOs.

use chrono::NaiveDate;
use fabtrack_core::category::{CounterKind, TaskCategory};
use fabtrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table, counters included.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub project_no: String,
    pub customer: Option<String>,
    pub remarks: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub status: String,

    pub total_panel: i32,
    pub completed_panel: i32,
    pub total_door: i32,
    pub completed_door: i32,
    pub total_cutting: i32,
    pub completed_cutting: i32,
    pub total_accessories: i32,
    pub completed_accessories: i32,
    pub total_strip_curtain: i32,
    pub completed_strip_curtain: i32,
    pub total_system: i32,
    pub completed_system: i32,
    pub total_transportation: i32,
    pub completed_transportation: i32,
    pub total_quotation: i32,
    pub completed_quotation: i32,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Read one counter value by category and kind.
    pub fn counter(&self, category: TaskCategory, kind: CounterKind) -> i32 {
        match kind {
            CounterKind::Total => match category {
                TaskCategory::Panel => self.total_panel,
                TaskCategory::Door => self.total_door,
                TaskCategory::Cutting => self.total_cutting,
                TaskCategory::Accessories => self.total_accessories,
                TaskCategory::StripCurtain => self.total_strip_curtain,
                TaskCategory::System => self.total_system,
                TaskCategory::Transportation => self.total_transportation,
                TaskCategory::Quotation => self.total_quotation,
            },
            CounterKind::Completed => match category {
                TaskCategory::Panel => self.completed_panel,
                TaskCategory::Door => self.completed_door,
                TaskCategory::Cutting => self.completed_cutting,
                TaskCategory::Accessories => self.completed_accessories,
                TaskCategory::StripCurtain => self.completed_strip_curtain,
                TaskCategory::System => self.completed_system,
                TaskCategory::Transportation => self.completed_transportation,
                TaskCategory::Quotation => self.completed_quotation,
            },
        }
    }
}

/// DTO for creating a new project. Counters always start at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub project_no: String,
    pub customer: Option<String>,
    pub remarks: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// Defaults to "draft" if omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing project. All fields are optional; the
/// `project_no` business key is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub customer: Option<String>,
    pub remarks: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
}
