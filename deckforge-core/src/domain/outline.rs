//! Outline draft types and normalization
//!
//! `OutlineDraft` is the shape the generation model returns; every per-slide
//! field is optional on the wire. `normalize_slide` fills the gaps with
//! fixed defaults and produces the `SlidePlan` values the persistence
//! writer stores. Normalization never fails.

use serde::{Deserialize, Serialize};

use crate::domain::slide::LayoutType;

/// Title given to slides the model left untitled.
pub const DEFAULT_SLIDE_TITLE: &str = "Untitled Slide";

/// Structured outline produced by the generation step
///
/// A missing `slides` array is tolerated as empty; the pipeline only
/// proceeds when at least one slide is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineDraft {
    pub deck_title: String,
    #[serde(default)]
    pub slides: Vec<SlideDraft>,
}

/// One slide's raw fields before defaulting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideDraft {
    pub title: Option<String>,
    pub layout_type: Option<String>,
    pub body_points: Option<Vec<String>>,
    pub speaker_notes: Option<String>,
}

/// A slide ready to persist: defaults filled, image prompt synthesized
#[derive(Debug, Clone, PartialEq)]
pub struct SlidePlan {
    pub title: String,
    pub layout: LayoutType,
    pub body_points: Vec<String>,
    pub speaker_notes: String,
    pub image_prompt: String,
}

/// Normalize one slide draft
///
/// Present fields pass through; missing ones get fixed defaults. The layout
/// identifier is clamped to the closed `LayoutType` set, and the image
/// prompt is derived from the normalized title (it is never model-produced).
pub fn normalize_slide(draft: SlideDraft) -> SlidePlan {
    let title = draft
        .title
        .unwrap_or_else(|| DEFAULT_SLIDE_TITLE.to_string());
    let layout = draft
        .layout_type
        .as_deref()
        .and_then(LayoutType::parse)
        .unwrap_or_default();

    SlidePlan {
        image_prompt: image_prompt_for(&title),
        title,
        layout,
        body_points: draft.body_points.unwrap_or_default(),
        speaker_notes: draft.speaker_notes.unwrap_or_default(),
    }
}

/// Fixed template for the derived image prompt.
fn image_prompt_for(title: &str) -> String {
    format!(
        "Minimalist abstract representation of {}, professional, 4k",
        title
    )
}
