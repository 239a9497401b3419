//! Project domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level persisted record representing one generated deck
///
/// Created once per successful generation call. The id is assigned by the
/// store on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    /// Bounded prefix of the caller-supplied input, kept for reference.
    pub source_text: String,
    pub status: ProjectStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Project lifecycle status
///
/// The outline pipeline only ever writes `Generating`; `Ready` and `Failed`
/// belong to later lifecycle stages (slide editing, image generation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Generating,
    Ready,
    Failed,
}
