//! Slide Repository
//!
//! Handles all database operations related to slides.

use deckforge_core::domain::outline::SlidePlan;
use deckforge_core::domain::slide::{LayoutType, Slide, SlideContent};
use deckforge_core::dto::deck::UpdateSlideRequest;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

/// Insert a project's slide batch inside the caller's transaction
///
/// One multi-row INSERT. `sort_order` is 1-based and follows the order of
/// the given plans.
pub async fn insert_batch(
    tx: &mut Transaction<'_, Postgres>,
    project_id: Uuid,
    slides: &[SlidePlan],
) -> Result<(), sqlx::Error> {
    if slides.is_empty() {
        return Ok(());
    }

    let mut builder = QueryBuilder::<Postgres>::new(
        "INSERT INTO slides (project_id, sort_order, layout_type, content, speaker_notes, image_prompt) ",
    );

    builder.push_values(batch_rows(project_id, slides), |mut b, row| {
        b.push_bind(row.project_id)
            .push_bind(row.sort_order)
            .push_bind(row.layout_type)
            .push_bind(row.content)
            .push_bind(row.speaker_notes)
            .push_bind(row.image_prompt);
    });

    builder.build().execute(&mut **tx).await?;

    Ok(())
}

/// Apply a partial edit to one slide
///
/// Absent fields keep their stored values; only the editor-writable columns
/// can change. Returns the updated slide, or None when no row matches.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    req: UpdateSlideRequest,
) -> Result<Option<Slide>, sqlx::Error> {
    let content = req
        .content
        .map(|content| serde_json::to_value(content).unwrap());

    let row = sqlx::query_as::<_, SlideRow>(
        r#"
        UPDATE slides
        SET content = COALESCE($1, content),
            image_prompt = COALESCE($2, image_prompt),
            image_url = COALESCE($3, image_url)
        WHERE id = $4
        RETURNING id, project_id, sort_order, layout_type, content, speaker_notes,
                  image_prompt, image_url, created_at
        "#,
    )
    .bind(content)
    .bind(req.image_prompt)
    .bind(req.image_url)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// List a project's slides in presentation order
pub async fn list_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Slide>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SlideRow>(
        r#"
        SELECT id, project_id, sort_order, layout_type, content, speaker_notes,
               image_prompt, image_url, created_at
        FROM slides
        WHERE project_id = $1
        ORDER BY sort_order ASC
        "#,
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Column values for one slide of a new batch
struct NewSlideRow<'a> {
    project_id: Uuid,
    sort_order: i32,
    layout_type: &'static str,
    content: serde_json::Value,
    speaker_notes: &'a str,
    image_prompt: &'a str,
}

fn batch_rows(project_id: Uuid, slides: &[SlidePlan]) -> Vec<NewSlideRow<'_>> {
    slides
        .iter()
        .enumerate()
        .map(|(index, plan)| NewSlideRow {
            project_id,
            sort_order: index as i32 + 1,
            layout_type: plan.layout.as_str(),
            content: slide_content_json(plan),
            speaker_notes: &plan.speaker_notes,
            image_prompt: &plan.image_prompt,
        })
        .collect()
}

fn slide_content_json(plan: &SlidePlan) -> serde_json::Value {
    serde_json::to_value(SlideContent {
        title: plan.title.clone(),
        body_points: plan.body_points.clone(),
    })
    .unwrap()
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct SlideRow {
    id: Uuid,
    project_id: Uuid,
    sort_order: i32,
    layout_type: String,
    content: serde_json::Value,
    speaker_notes: String,
    image_prompt: String,
    image_url: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<SlideRow> for Slide {
    fn from(row: SlideRow) -> Self {
        let content = serde_json::from_value(row.content).unwrap_or_default();

        Slide {
            id: row.id,
            project_id: row.project_id,
            sort_order: row.sort_order,
            layout_type: LayoutType::parse(&row.layout_type).unwrap_or_default(),
            content,
            speaker_notes: row.speaker_notes,
            image_prompt: row.image_prompt,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckforge_core::domain::outline::{SlideDraft, normalize_slide};

    fn plan(title: &str) -> SlidePlan {
        normalize_slide(SlideDraft {
            title: Some(title.to_string()),
            ..SlideDraft::default()
        })
    }

    #[test]
    fn test_batch_rows_sort_order_is_dense_and_one_based() {
        let plans = vec![plan("Intro"), plan("Middle"), plan("Close")];

        let rows = batch_rows(Uuid::new_v4(), &plans);

        let orders: Vec<i32> = rows.iter().map(|r| r.sort_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_batch_rows_attach_the_project_id() {
        let project_id = Uuid::new_v4();
        let plans = vec![plan("One"), plan("Two")];

        let rows = batch_rows(project_id, &plans);

        assert!(rows.iter().all(|r| r.project_id == project_id));
    }

    #[test]
    fn test_batch_rows_content_shape() {
        let plans = vec![SlidePlan {
            title: "Roadmap".to_string(),
            layout: LayoutType::ImageLeft,
            body_points: vec!["Ship beta".to_string()],
            speaker_notes: "Keep it short".to_string(),
            image_prompt: "A roadmap".to_string(),
        }];

        let rows = batch_rows(Uuid::new_v4(), &plans);

        assert_eq!(rows[0].layout_type, "image_left");
        assert_eq!(
            rows[0].content,
            serde_json::json!({ "title": "Roadmap", "body_points": ["Ship beta"] })
        );
        assert_eq!(rows[0].speaker_notes, "Keep it short");
        assert_eq!(rows[0].image_prompt, "A roadmap");
    }

    #[test]
    fn test_batch_rows_defaulted_plan_columns() {
        let plans = vec![normalize_slide(SlideDraft::default())];

        let rows = batch_rows(Uuid::new_v4(), &plans);

        assert_eq!(rows[0].layout_type, "bullet_list");
        assert_eq!(
            rows[0].content,
            serde_json::json!({ "title": "Untitled Slide", "body_points": [] })
        );
        assert_eq!(rows[0].speaker_notes, "");
    }

    #[test]
    fn test_slide_row_clamps_unknown_layout() {
        let row = SlideRow {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            sort_order: 1,
            layout_type: "hologram".to_string(),
            content: serde_json::json!({ "title": "T", "body_points": [] }),
            speaker_notes: String::new(),
            image_prompt: String::new(),
            image_url: None,
            created_at: chrono::Utc::now(),
        };

        let slide: Slide = row.into();

        assert_eq!(slide.layout_type, LayoutType::BulletList);
        assert_eq!(slide.content.title, "T");
    }
}
