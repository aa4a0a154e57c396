//! Repository for the `project_files` table.
//!
//! The `content` BLOB column is only fetched for downloads; every
//! listing query selects the metadata columns.

use fabtrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::file::{CreateProjectFile, ProjectFile, ProjectFileMeta};

/// Metadata columns, i.e. everything except `content`.
const META_COLUMNS: &str =
    "id, project_no, task_category, task_no, file_name, content_type, size_bytes, uploaded_at";

/// Provides storage operations for BLOB-backed file attachments.
pub struct FileRepo;

impl FileRepo {
    /// Store a new attachment, returning its metadata.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectFile,
    ) -> Result<ProjectFileMeta, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_files
                (project_no, task_category, task_no, file_name, content_type, size_bytes, content)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {META_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectFileMeta>(&query)
            .bind(&input.project_no)
            .bind(&input.task_category)
            .bind(input.task_no)
            .bind(&input.file_name)
            .bind(&input.content_type)
            .bind(input.content.len() as i64)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Fetch a full attachment row, BLOB included. Download path only.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProjectFile>, sqlx::Error> {
        let query = format!("SELECT {META_COLUMNS}, content FROM project_files WHERE id = $1");
        sqlx::query_as::<_, ProjectFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one project's attachments (metadata only), newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_no: &str,
    ) -> Result<Vec<ProjectFileMeta>, sqlx::Error> {
        let query = format!(
            "SELECT {META_COLUMNS} FROM project_files
             WHERE project_no = $1 ORDER BY uploaded_at DESC, id DESC"
        );
        sqlx::query_as::<_, ProjectFileMeta>(&query)
            .bind(project_no)
            .fetch_all(pool)
            .await
    }

    /// Delete an attachment by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_files WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
