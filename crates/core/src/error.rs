/// Domain-level error type shared by the storage and HTTP layers.
///
/// `NotFound` carries the lookup key as a string because projects are
/// addressed by their `project_no` business key, not a numeric id.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
