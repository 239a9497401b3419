//! Deck API Handlers
//!
//! HTTP endpoints for outline generation and project retrieval.

use axum::{
    Json,
    extract::{Path, State},
};
use deckforge_core::domain::slide::Slide;
use deckforge_core::dto::deck::{
    GenerateOutlineRequest, GenerateOutlineResponse, ProjectDetail, UpdateSlideRequest,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};
use crate::service::deck_service;

/// POST /api/v1/generate-outline
/// Generate an outline from raw text and persist it as a new deck
pub async fn generate_outline(
    State(state): State<AppState>,
    Json(req): Json<GenerateOutlineRequest>,
) -> ApiResult<Json<GenerateOutlineResponse>> {
    tracing::info!("Generating outline from {} chars of text", req.text.len());

    let project_id = deck_service::generate_deck(&state.pool, state.generator.as_ref(), &req.text)
        .await
        .map_err(|e| match e {
            deck_service::DeckError::EmptyText => {
                ApiError::BadRequest("Text is required".to_string())
            }
            deck_service::DeckError::GenerationFailed(_) => {
                ApiError::InternalError("AI failed to generate outline".to_string())
            }
            deck_service::DeckError::EmptyOutline => {
                ApiError::InternalError("AI failed to generate outline".to_string())
            }
            deck_service::DeckError::EmptyPatch => {
                ApiError::BadRequest("No fields to update".to_string())
            }
            deck_service::DeckError::DatabaseError(err) => ApiError::DatabaseError(err),
            deck_service::DeckError::NotFound(id) => {
                ApiError::NotFound(format!("Project {} not found", id))
            }
        })?;

    Ok(Json(GenerateOutlineResponse {
        project_id,
        message: "Outline created successfully".to_string(),
    }))
}

/// GET /api/v1/projects/{id}
/// Get a project and its slides in presentation order
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ProjectDetail>> {
    tracing::debug!("Getting project: {}", id);

    let detail = deck_service::get_project(&state.pool, id)
        .await
        .map_err(|e| match e {
            deck_service::DeckError::NotFound(id) => {
                ApiError::NotFound(format!("Project {} not found", id))
            }
            deck_service::DeckError::DatabaseError(err) => ApiError::DatabaseError(err),
            deck_service::DeckError::EmptyText => {
                ApiError::BadRequest("Text is required".to_string())
            }
            deck_service::DeckError::GenerationFailed(_) => {
                ApiError::InternalError("AI failed to generate outline".to_string())
            }
            deck_service::DeckError::EmptyOutline => {
                ApiError::InternalError("AI failed to generate outline".to_string())
            }
            deck_service::DeckError::EmptyPatch => {
                ApiError::BadRequest("No fields to update".to_string())
            }
        })?;

    Ok(Json(detail))
}

/// PATCH /api/v1/slides/{id}
/// Apply a partial edit to one slide
pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSlideRequest>,
) -> ApiResult<Json<Slide>> {
    tracing::info!("Updating slide: {}", id);

    let slide = deck_service::update_slide(&state.pool, id, req)
        .await
        .map_err(|e| match e {
            deck_service::DeckError::EmptyPatch => {
                ApiError::BadRequest("No fields to update".to_string())
            }
            deck_service::DeckError::NotFound(id) => {
                ApiError::NotFound(format!("Slide {} not found", id))
            }
            deck_service::DeckError::DatabaseError(err) => ApiError::DatabaseError(err),
            deck_service::DeckError::EmptyText => {
                ApiError::BadRequest("Text is required".to_string())
            }
            deck_service::DeckError::GenerationFailed(_) => {
                ApiError::InternalError("AI failed to generate outline".to_string())
            }
            deck_service::DeckError::EmptyOutline => {
                ApiError::InternalError("AI failed to generate outline".to_string())
            }
        })?;

    Ok(Json(slide))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use deckforge_core::domain::outline::{OutlineDraft, SlideDraft};
    use deckforge_gemini::{GeminiError, OutlineGenerator};
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted stand-in for the generation client: fixed outcome, counted
    /// calls.
    struct ScriptedGenerator {
        outline: Option<OutlineDraft>,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        fn succeeding(outline: OutlineDraft) -> Arc<Self> {
            Arc::new(Self {
                outline: Some(outline),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                outline: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl OutlineGenerator for ScriptedGenerator {
        async fn generate_outline(
            &self,
            _source_text: &str,
        ) -> deckforge_gemini::Result<OutlineDraft> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outline {
                Some(outline) => Ok(outline.clone()),
                None => Err(GeminiError::EmptyResponse),
            }
        }
    }

    fn sample_outline() -> OutlineDraft {
        OutlineDraft {
            deck_title: "Quarterly Review".to_string(),
            slides: vec![SlideDraft {
                title: Some("Intro".to_string()),
                ..SlideDraft::default()
            }],
        }
    }

    /// Pool that never connects; the paths under test must not reach it.
    fn lazy_pool() -> sqlx::PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/deckforge_test")
            .unwrap()
    }

    fn state_with(generator: Arc<ScriptedGenerator>) -> AppState {
        AppState {
            pool: lazy_pool(),
            generator,
        }
    }

    async fn error_parts(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (
            status,
            body["detail"].as_str().unwrap_or_default().to_string(),
        )
    }

    #[tokio::test]
    async fn test_empty_text_rejected_before_generation() {
        let generator = ScriptedGenerator::succeeding(sample_outline());

        let result = generate_outline(
            State(state_with(generator.clone())),
            Json(GenerateOutlineRequest {
                text: String::new(),
            }),
        )
        .await;

        let err = result.err().expect("empty text must be rejected");
        let (status, detail) = error_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail, "Text is required");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_text_field_rejected() {
        // Absent field deserializes to the empty default
        let req: GenerateOutlineRequest = serde_json::from_str("{}").unwrap();
        let generator = ScriptedGenerator::succeeding(sample_outline());

        let result = generate_outline(State(state_with(generator.clone())), Json(req)).await;

        let err = result.err().expect("missing text must be rejected");
        let (status, detail) = error_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail, "Text is required");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_generation_failure_maps_to_500() {
        let generator = ScriptedGenerator::failing();

        let result = generate_outline(
            State(state_with(generator.clone())),
            Json(GenerateOutlineRequest {
                text: "Our quarterly results were strong.".to_string(),
            }),
        )
        .await;

        let err = result.err().expect("generation failure must surface");
        let (status, detail) = error_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "AI failed to generate outline");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_outline_maps_to_500() {
        let generator = ScriptedGenerator::succeeding(OutlineDraft {
            deck_title: "Empty Deck".to_string(),
            slides: vec![],
        });

        let result = generate_outline(
            State(state_with(generator.clone())),
            Json(GenerateOutlineRequest {
                text: "Some perfectly fine input".to_string(),
            }),
        )
        .await;

        let err = result.err().expect("empty outline must surface");
        let (status, detail) = error_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "AI failed to generate outline");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_slide_patch_rejected_before_store() {
        // Absent fields deserialize to None
        let req: UpdateSlideRequest = serde_json::from_str("{}").unwrap();
        let generator = ScriptedGenerator::succeeding(sample_outline());

        let result = update_slide(
            State(state_with(generator.clone())),
            Path(Uuid::new_v4()),
            Json(req),
        )
        .await;

        let err = result.err().expect("empty patch must be rejected");
        let (status, detail) = error_parts(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail, "No fields to update");
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn test_slide_patch_wire_shape() {
        let req: UpdateSlideRequest = serde_json::from_str(
            r#"{
                "content": { "title": "Revenue", "body_points": ["Up 12%"] },
                "image_prompt": "A rising chart",
                "image_url": "https://images.example/render.png"
            }"#,
        )
        .unwrap();

        let content = req.content.expect("content present");
        assert_eq!(content.title, "Revenue");
        assert_eq!(content.body_points, vec!["Up 12%"]);
        assert_eq!(req.image_prompt.as_deref(), Some("A rising chart"));
        assert_eq!(
            req.image_url.as_deref(),
            Some("https://images.example/render.png")
        );
    }
}
