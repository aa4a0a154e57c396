//! Completion report types and percentage math.

use serde::{Deserialize, Serialize};

use crate::category::TaskCategory;

/// Completion numbers for one task category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCompletion {
    pub completed: i64,
    pub total: i64,
    pub percentage: i32,
}

impl CategoryCompletion {
    /// Build from raw counts, deriving the percentage.
    pub fn from_counts(completed: i64, total: i64) -> Self {
        Self {
            completed,
            total,
            percentage: percentage(completed, total),
        }
    }
}

/// Per-category completion for one project. Serializes with one field
/// per category key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub panel: CategoryCompletion,
    pub door: CategoryCompletion,
    pub cutting: CategoryCompletion,
    pub accessories: CategoryCompletion,
    pub strip_curtain: CategoryCompletion,
    pub system: CategoryCompletion,
    pub transportation: CategoryCompletion,
    pub quotation: CategoryCompletion,
}

impl CompletionReport {
    pub fn category(&self, category: TaskCategory) -> &CategoryCompletion {
        match category {
            TaskCategory::Panel => &self.panel,
            TaskCategory::Door => &self.door,
            TaskCategory::Cutting => &self.cutting,
            TaskCategory::Accessories => &self.accessories,
            TaskCategory::StripCurtain => &self.strip_curtain,
            TaskCategory::System => &self.system,
            TaskCategory::Transportation => &self.transportation,
            TaskCategory::Quotation => &self.quotation,
        }
    }

    pub fn category_mut(&mut self, category: TaskCategory) -> &mut CategoryCompletion {
        match category {
            TaskCategory::Panel => &mut self.panel,
            TaskCategory::Door => &mut self.door,
            TaskCategory::Cutting => &mut self.cutting,
            TaskCategory::Accessories => &mut self.accessories,
            TaskCategory::StripCurtain => &mut self.strip_curtain,
            TaskCategory::System => &mut self.system,
            TaskCategory::Transportation => &mut self.transportation,
            TaskCategory::Quotation => &mut self.quotation,
        }
    }
}

/// Integer completion percentage, rounded half-up. 0 when `total` is 0.
pub fn percentage(completed: i64, total: i64) -> i32 {
    if total <= 0 {
        return 0;
    }
    // Integer half-up rounding; counts are small enough that the
    // intermediate product cannot overflow i64.
    ((100 * completed + total / 2) / total) as i32
}
