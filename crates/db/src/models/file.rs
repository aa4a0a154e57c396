//! File attachment models.
//!
//! The full row (BLOB included) is only materialized for downloads;
//! listings use [`ProjectFileMeta`], which never selects `content`.

use fabtrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A complete `project_files` row, including the BLOB content.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectFile {
    pub id: DbId,
    pub project_no: String,
    pub task_category: Option<String>,
    pub task_no: Option<DbId>,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub content: Vec<u8>,
    pub uploaded_at: Timestamp,
}

/// Metadata-only view of a `project_files` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectFileMeta {
    pub id: DbId,
    pub project_no: String,
    pub task_category: Option<String>,
    pub task_no: Option<DbId>,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub uploaded_at: Timestamp,
}

/// Input for storing a new attachment. Built by the upload handler, not
/// deserialized from JSON (uploads arrive as multipart forms).
#[derive(Debug, Clone)]
pub struct CreateProjectFile {
    pub project_no: String,
    pub task_category: Option<String>,
    pub task_no: Option<DbId>,
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}
