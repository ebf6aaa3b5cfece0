//! Integration tests for the checklist template store.
//!
//! Exercises version incrementing, partial updates, defensive field-set
//! validation and unconditional deletion against a real database.

use assert_matches::assert_matches;
use comtrack_core::error::CoreError;
use comtrack_core::fields::{FieldType, SelectOption, TemplateField};
use comtrack_db::models::checklist_template::{CreateChecklistTemplate, UpdateChecklistTemplate};
use comtrack_db::repositories::ChecklistTemplateRepo;
use comtrack_db::StoreError;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn text_field(id: &str, label: &str, required: bool) -> TemplateField {
    TemplateField {
        id: id.to_string(),
        label: label.to_string(),
        field_type: FieldType::Text,
        required,
        options: None,
    }
}

fn select_field(id: &str, label: &str, values: &[&str]) -> TemplateField {
    TemplateField {
        id: id.to_string(),
        label: label.to_string(),
        field_type: FieldType::Select,
        required: false,
        options: Some(
            values
                .iter()
                .map(|v| SelectOption {
                    value: v.to_string(),
                    label: v.to_string(),
                })
                .collect(),
        ),
    }
}

fn new_template(name: &str, fields: Vec<TemplateField>) -> CreateChecklistTemplate {
    CreateChecklistTemplate {
        name: name.to_string(),
        description: None,
        fields,
    }
}

// ---------------------------------------------------------------------------
// Test: creation starts at version 1
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_starts_at_version_one(pool: PgPool) {
    let input = new_template(
        "Inspecao Visual",
        vec![
            text_field("nome", "Nome", true),
            select_field("resultado", "Resultado", &["ok", "nok"]),
        ],
    );
    let template = ChecklistTemplateRepo::create(&pool, &input, "user-1")
        .await
        .unwrap();

    assert_eq!(template.version, 1);
    assert_eq!(template.name, "Inspecao Visual");
    assert_eq!(template.created_by, "user-1");
    assert_eq!(template.fields.0.len(), 2);
    assert_eq!(template.fields.0[1].options.as_ref().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Test: every update bumps version by exactly 1
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn update_always_bumps_version(pool: PgPool) {
    let input = new_template("Checklist", vec![text_field("nome", "Nome", false)]);
    let template = ChecklistTemplateRepo::create(&pool, &input, "user-1")
        .await
        .unwrap();

    // Metadata-only update: version still bumps.
    let updated = ChecklistTemplateRepo::update(
        &pool,
        template.id,
        &UpdateChecklistTemplate {
            name: Some("Checklist v2".into()),
            description: None,
            fields: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.version, 2);
    assert_eq!(updated.fields.0.len(), 1);
    assert!(updated.updated_at >= template.updated_at);

    // An update that changes nothing at all still bumps.
    let updated = ChecklistTemplateRepo::update(
        &pool,
        template.id,
        &UpdateChecklistTemplate {
            name: None,
            description: None,
            fields: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.version, 3);

    // Field-set update.
    let updated = ChecklistTemplateRepo::update(
        &pool,
        template.id,
        &UpdateChecklistTemplate {
            name: None,
            description: None,
            fields: Some(vec![
                text_field("nome", "Nome", false),
                text_field("serie", "Serie", true),
            ]),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.version, 4);
    assert_eq!(updated.fields.0.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: update on an absent id returns None
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn update_absent_returns_none(pool: PgPool) {
    let result = ChecklistTemplateRepo::update(
        &pool,
        9999,
        &UpdateChecklistTemplate {
            name: Some("x".into()),
            description: None,
            fields: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: duplicate field ids are rejected defensively
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_rejects_duplicate_field_ids(pool: PgPool) {
    let input = new_template(
        "Broken",
        vec![
            text_field("nome", "Nome", false),
            text_field("nome", "Nome de novo", false),
        ],
    );
    let err = ChecklistTemplateRepo::create(&pool, &input, "user-1")
        .await
        .unwrap_err();
    assert_matches!(err, StoreError::Domain(CoreError::Validation(_)));

    assert!(ChecklistTemplateRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_rejects_select_without_options(pool: PgPool) {
    let template = ChecklistTemplateRepo::create(
        &pool,
        &new_template("Checklist", vec![text_field("nome", "Nome", false)]),
        "user-1",
    )
    .await
    .unwrap();

    let err = ChecklistTemplateRepo::update(
        &pool,
        template.id,
        &UpdateChecklistTemplate {
            name: None,
            description: None,
            fields: Some(vec![TemplateField {
                id: "sel".into(),
                label: "Sel".into(),
                field_type: FieldType::Select,
                required: false,
                options: None,
            }]),
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, StoreError::Domain(CoreError::Validation(_)));

    // Rejected update must not bump the stored version.
    let stored = ChecklistTemplateRepo::find_by_id(&pool, template.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.version, 1);
}

// ---------------------------------------------------------------------------
// Test: list is newest-created first; delete is unconditional
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn list_and_delete(pool: PgPool) {
    let first = ChecklistTemplateRepo::create(
        &pool,
        &new_template("Primeiro", vec![text_field("a", "A", false)]),
        "user-1",
    )
    .await
    .unwrap();
    let second = ChecklistTemplateRepo::create(
        &pool,
        &new_template("Segundo", vec![text_field("a", "A", false)]),
        "user-1",
    )
    .await
    .unwrap();

    let listed = ChecklistTemplateRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);

    assert!(ChecklistTemplateRepo::delete(&pool, first.id).await.unwrap());
    assert!(!ChecklistTemplateRepo::delete(&pool, first.id).await.unwrap());
    assert!(ChecklistTemplateRepo::find_by_id(&pool, first.id)
        .await
        .unwrap()
        .is_none());
}
