//! Project Repository
//!
//! Handles all database operations related to projects.

use deckforge_core::domain::outline::SlidePlan;
use deckforge_core::domain::project::{Project, ProjectStatus};
use deckforge_core::text::truncate_chars;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::slide_repository;

/// Longest source-text prefix stored on the project row. Independent of the
/// larger cap applied when the text is sent to the model.
pub const SOURCE_TEXT_MAX_CHARS: usize = 5_000;

/// Create a project and its slide batch in a single transaction
///
/// Either both inserts commit or neither does, so a failed slide write
/// cannot leave an orphaned project row behind. Returns the id assigned
/// by the database.
pub async fn create_deck(
    pool: &PgPool,
    title: &str,
    source_text: &str,
    slides: &[SlidePlan],
) -> Result<Uuid, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let project_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO projects (title, source_text, status)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(truncate_chars(source_text, SOURCE_TEXT_MAX_CHARS))
    .bind(status_to_string(ProjectStatus::Generating))
    .fetch_one(&mut *tx)
    .await?;

    slide_repository::insert_batch(&mut tx, project_id, slides).await?;

    tx.commit().await?;

    Ok(project_id)
}

/// Find a project by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        SELECT id, title, source_text, status, created_at
        FROM projects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

// =============================================================================
// Helper Functions
// =============================================================================

fn status_to_string(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Generating => "generating",
        ProjectStatus::Ready => "ready",
        ProjectStatus::Failed => "failed",
    }
}

fn string_to_status(s: &str) -> ProjectStatus {
    match s {
        "ready" => ProjectStatus::Ready,
        "failed" => ProjectStatus::Failed,
        _ => ProjectStatus::Generating,
    }
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    title: String,
    source_text: String,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            source_text: row.source_text,
            status: string_to_status(&row.status),
            created_at: row.created_at,
        }
    }
}
