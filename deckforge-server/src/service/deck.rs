//! Deck Service
//!
//! Business logic for the outline pipeline: validate the source text, call
//! the generation client, normalize the draft, persist the deck.

use deckforge_core::domain::outline::{SlidePlan, normalize_slide};
use deckforge_core::domain::slide::Slide;
use deckforge_core::dto::deck::{ProjectDetail, UpdateSlideRequest};
use deckforge_gemini::{GeminiError, OutlineGenerator};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repository::{project_repository, slide_repository};

/// Service error type
#[derive(Debug)]
pub enum DeckError {
    EmptyText,
    GenerationFailed(GeminiError),
    EmptyOutline,
    EmptyPatch,
    NotFound(Uuid),
    DatabaseError(sqlx::Error),
}

impl From<sqlx::Error> for DeckError {
    fn from(err: sqlx::Error) -> Self {
        DeckError::DatabaseError(err)
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;

/// Run the outline pipeline for one request
///
/// Generation and normalization happen before anything touches the
/// database; a failed or empty generation writes no rows at all.
pub async fn generate_deck(
    pool: &PgPool,
    generator: &dyn OutlineGenerator,
    text: &str,
) -> Result<Uuid> {
    // Validate request
    validate_source_text(text)?;

    // Generate the outline draft
    let outline = generator.generate_outline(text).await.map_err(|e| {
        tracing::error!("Outline generation failed: {}", e);
        DeckError::GenerationFailed(e)
    })?;

    if outline.slides.is_empty() {
        tracing::warn!(
            "Model returned an outline with no slides: {:?}",
            outline.deck_title
        );
        return Err(DeckError::EmptyOutline);
    }

    // Normalize every slide
    let plans: Vec<SlidePlan> = outline.slides.into_iter().map(normalize_slide).collect();

    // Persist project and slides together
    let project_id =
        project_repository::create_deck(pool, &outline.deck_title, text, &plans).await?;

    tracing::info!("Deck created: {} ({} slides)", project_id, plans.len());

    Ok(project_id)
}

/// Get a project with its slides in presentation order
pub async fn get_project(pool: &PgPool, id: Uuid) -> Result<ProjectDetail> {
    let project = project_repository::find_by_id(pool, id)
        .await?
        .ok_or(DeckError::NotFound(id))?;

    let slides = slide_repository::list_by_project(pool, id).await?;

    Ok(ProjectDetail { project, slides })
}

/// Apply a slide edit
pub async fn update_slide(pool: &PgPool, id: Uuid, req: UpdateSlideRequest) -> Result<Slide> {
    // Validate request
    validate_slide_patch(&req)?;

    let slide = slide_repository::update(pool, id, req)
        .await?
        .ok_or(DeckError::NotFound(id))?;

    tracing::info!("Slide updated: {}", id);

    Ok(slide)
}

// =============================================================================
// Validation
// =============================================================================

fn validate_source_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(DeckError::EmptyText);
    }

    Ok(())
}

fn validate_slide_patch(req: &UpdateSlideRequest) -> Result<()> {
    if req.content.is_none() && req.image_prompt.is_none() && req.image_url.is_none() {
        return Err(DeckError::EmptyPatch);
    }

    Ok(())
}
