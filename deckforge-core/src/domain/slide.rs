//! Slide domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted deck page, linked to a Project
///
/// Slides are only ever created as a batch together with their parent
/// project; `sort_order` is 1-based and dense, reflecting the original
/// outline position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: Uuid,
    pub project_id: Uuid,
    pub sort_order: i32,
    pub layout_type: LayoutType,
    pub content: SlideContent,
    pub speaker_notes: String,
    pub image_prompt: String,
    /// Filled by a later rendering stage; this pipeline never writes it.
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Structured slide body stored in the `content` column
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideContent {
    pub title: String,
    #[serde(default)]
    pub body_points: Vec<String>,
}

/// Slide layout identifier
///
/// Closed set: the generation prompt asks the model for one of these four
/// identifiers, and normalization coerces anything else to `BulletList`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    TitleSlide,
    #[default]
    BulletList,
    ImageLeft,
    ImageRight,
}

impl LayoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::TitleSlide => "title_slide",
            LayoutType::BulletList => "bullet_list",
            LayoutType::ImageLeft => "image_left",
            LayoutType::ImageRight => "image_right",
        }
    }

    /// Parse the wire identifier; returns None for anything outside the set.
    pub fn parse(s: &str) -> Option<LayoutType> {
        match s {
            "title_slide" => Some(LayoutType::TitleSlide),
            "bullet_list" => Some(LayoutType::BulletList),
            "image_left" => Some(LayoutType::ImageLeft),
            "image_right" => Some(LayoutType::ImageRight),
            _ => None,
        }
    }
}
