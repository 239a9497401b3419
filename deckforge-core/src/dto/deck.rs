//! Deck DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::project::Project;
use crate::domain::slide::{Slide, SlideContent};

/// Request body for POST /api/v1/generate-outline
///
/// A missing `text` field deserializes as empty and is rejected by the same
/// validation as an explicitly empty one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutlineRequest {
    #[serde(default)]
    pub text: String,
}

/// Success payload for POST /api/v1/generate-outline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutlineResponse {
    pub project_id: Uuid,
    pub message: String,
}

/// Payload for GET /api/v1/projects/{id}: the project plus its slides in
/// `sort_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub slides: Vec<Slide>,
}

/// Request body for PATCH /api/v1/slides/{id}
///
/// Only the editor-writable columns are accepted; absent fields keep their
/// stored values. At least one field must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSlideRequest {
    pub content: Option<SlideContent>,
    pub image_prompt: Option<String>,
    pub image_url: Option<String>,
}
