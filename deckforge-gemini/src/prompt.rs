//! Outline prompt construction

use deckforge_core::text::truncate_chars;

/// Longest source-text prefix embedded in the prompt. Independent of the
/// shorter cap the persistence layer applies to the stored copy; do not
/// conflate the two.
pub const PROMPT_SOURCE_CHARS: usize = 10_000;

const ROLE: &str = "You are an expert Presentation Architect.\n\
Your goal is to transform the provided raw text into a structured PowerPoint outline.";

const RULES: &[&str] = &[
    "Extract the core theme for the \"deck_title\".",
    "Break the content into 5-8 logical slides.",
    "For each slide, choose the best layout: 'title_slide', 'bullet_list', 'image_left', or 'image_right'.",
    "Keep bullet points concise (under 15 words).",
    "Generate brief \"speaker_notes\" to help the presenter.",
    "OUTPUT MUST BE VALID JSON ONLY. No markdown formatting.",
];

const SCHEMA_EXAMPLE: &str = r#"{
    "deck_title": "String",
    "slides": [
        {
            "title": "String",
            "layout_type": "String",
            "body_points": ["String", "String"],
            "speaker_notes": "String"
        }
    ]
}"#;

/// Build the generation prompt around a bounded prefix of the source text.
pub fn build_outline_prompt(source_text: &str) -> String {
    let rules = RULES
        .iter()
        .enumerate()
        .map(|(i, rule)| format!("{}. {}", i + 1, rule))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\nRULES:\n{}\n\nRAW TEXT:\n{}\n\nJSON SCHEMA:\n{}",
        ROLE,
        rules,
        truncate_chars(source_text, PROMPT_SOURCE_CHARS),
        SCHEMA_EXAMPLE
    )
}
