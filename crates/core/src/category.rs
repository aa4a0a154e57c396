//! The closed set of fabrication task categories.
//!
//! Every category owns one task table and one pair of counter columns on
//! the `projects` row. All SQL identifiers derived from a category are
//! compile-time string literals resolved through the lookups below; no
//! identifier is ever assembled from request input.

use serde::{Deserialize, Serialize};

/// Which of the two counter columns an adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Total,
    Completed,
}

impl CounterKind {
    /// Lowercase label used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            CounterKind::Total => "total",
            CounterKind::Completed => "completed",
        }
    }
}

/// A task category. One variant per task table / counter-column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Panel,
    Door,
    Cutting,
    Accessories,
    StripCurtain,
    System,
    Transportation,
    Quotation,
}

impl TaskCategory {
    /// Every category, in display order. Drives all "per category" loops.
    pub const ALL: [TaskCategory; 8] = [
        TaskCategory::Panel,
        TaskCategory::Door,
        TaskCategory::Cutting,
        TaskCategory::Accessories,
        TaskCategory::StripCurtain,
        TaskCategory::System,
        TaskCategory::Transportation,
        TaskCategory::Quotation,
    ];

    /// snake_case key, matching the counter-column suffix and the JSON
    /// field names of the completion report.
    pub fn key(self) -> &'static str {
        match self {
            TaskCategory::Panel => "panel",
            TaskCategory::Door => "door",
            TaskCategory::Cutting => "cutting",
            TaskCategory::Accessories => "accessories",
            TaskCategory::StripCurtain => "strip_curtain",
            TaskCategory::System => "system",
            TaskCategory::Transportation => "transportation",
            TaskCategory::Quotation => "quotation",
        }
    }

    /// kebab-case route segment; mounted as `/{slug}-tasks`.
    pub fn slug(self) -> &'static str {
        match self {
            TaskCategory::Panel => "panel",
            TaskCategory::Door => "door",
            TaskCategory::Cutting => "cutting",
            TaskCategory::Accessories => "accessories",
            TaskCategory::StripCurtain => "strip-curtain",
            TaskCategory::System => "system",
            TaskCategory::Transportation => "transportation",
            TaskCategory::Quotation => "quotation",
        }
    }

    /// Name of this category's task table.
    pub fn table(self) -> &'static str {
        match self {
            TaskCategory::Panel => "panel_tasks",
            TaskCategory::Door => "door_tasks",
            TaskCategory::Cutting => "cutting_tasks",
            TaskCategory::Accessories => "accessories_tasks",
            TaskCategory::StripCurtain => "strip_curtain_tasks",
            TaskCategory::System => "system_tasks",
            TaskCategory::Transportation => "transportation_tasks",
            TaskCategory::Quotation => "quotation_tasks",
        }
    }

    /// Counter column on `projects` for the given kind.
    pub fn counter_column(self, kind: CounterKind) -> &'static str {
        match kind {
            CounterKind::Total => match self {
                TaskCategory::Panel => "total_panel",
                TaskCategory::Door => "total_door",
                TaskCategory::Cutting => "total_cutting",
                TaskCategory::Accessories => "total_accessories",
                TaskCategory::StripCurtain => "total_strip_curtain",
                TaskCategory::System => "total_system",
                TaskCategory::Transportation => "total_transportation",
                TaskCategory::Quotation => "total_quotation",
            },
            CounterKind::Completed => match self {
                TaskCategory::Panel => "completed_panel",
                TaskCategory::Door => "completed_door",
                TaskCategory::Cutting => "completed_cutting",
                TaskCategory::Accessories => "completed_accessories",
                TaskCategory::StripCurtain => "completed_strip_curtain",
                TaskCategory::System => "completed_system",
                TaskCategory::Transportation => "completed_transportation",
                TaskCategory::Quotation => "completed_quotation",
            },
        }
    }

    /// Parse a snake_case key back into a category (e.g. the
    /// `task_category` column of a file attachment).
    pub fn from_key(key: &str) -> Option<TaskCategory> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}
