//! Checklist template field types and pure field utilities.
//!
//! Field ids and select-option values are slugs derived from the
//! human-entered label. Editing a label therefore changes the generated id,
//! and historical responses keyed by the old id are orphaned. That is a
//! documented caller contract, not something to fix here: decoupling ids
//! from labels would break compatibility with stored documents.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;

/// Fallback slug when a field label reduces to nothing.
pub const FIELD_SLUG_FALLBACK: &str = "campo";

/// Fallback slug when a select-option label is blank.
pub const OPTION_SLUG_FALLBACK: &str = "opcao";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input kind of a checklist template field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    Select,
}

/// One choice of a select field. `value` is a slug unique within the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One configurable question in a checklist template.
///
/// Stored as a JSONB array element inside the template document, so the
/// serde shape is the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateField {
    /// Stable identifier, unique within the template. Blank on input means
    /// "assign one from the label" (see [`prepare_template_fields`]).
    #[serde(default)]
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Present only for select fields.
    #[serde(
        default,
        deserialize_with = "deserialize_options",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Vec<SelectOption>>,
}

/// Accept both the legacy bare-string options array and the current
/// `{value, label}` array when decoding stored documents.
fn deserialize_options<'de, D>(deserializer: D) -> Result<Option<Vec<SelectOption>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.map(|value| normalize_field_options(&value)))
}

// ---------------------------------------------------------------------------
// Slug generation
// ---------------------------------------------------------------------------

/// Derive an identifier-safe slug from a human label.
///
/// Trim, lowercase, NFD-decompose and strip combining marks, replace each
/// whitespace run with a single underscore, drop anything outside
/// `[a-z0-9_]`. Returns `"campo"` when nothing survives.
///
/// Idempotent on its own output.
pub fn label_to_slug(label: &str) -> String {
    let lowered = label.trim().to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut slug = String::with_capacity(stripped.len());
    let mut pending_separator = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            pending_separator = true;
            continue;
        }
        if pending_separator {
            slug.push('_');
            pending_separator = false;
        }
        if matches!(c, 'a'..='z' | '0'..='9' | '_') {
            slug.push(c);
        }
    }

    if slug.is_empty() {
        FIELD_SLUG_FALLBACK.to_string()
    } else {
        slug
    }
}

fn dedupe(base: String, existing: &[String]) -> String {
    let taken: HashSet<&str> = existing.iter().map(String::as_str).collect();
    if !taken.contains(base.as_str()) {
        return base;
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}_{n}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        n += 1;
    }
}

/// Generate a field id from `label`, unique against `existing_ids`.
///
/// Collisions take the first free `_2`, `_3`, ... suffix.
pub fn unique_field_id(label: &str, existing_ids: &[String]) -> String {
    dedupe(label_to_slug(label), existing_ids)
}

/// Generate a select-option value from `label`, unique against
/// `existing_values`. A blank label falls back to `"opcao"`.
pub fn unique_option_value(label: &str, existing_values: &[String]) -> String {
    let trimmed = label.trim();
    let base = if trimmed.is_empty() {
        OPTION_SLUG_FALLBACK.to_string()
    } else {
        label_to_slug(trimmed)
    };
    dedupe(base, existing_values)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize a raw options value into `{value, label}` pairs.
///
/// Legacy documents stored options as bare strings; those are slugified into
/// a value with the original string kept as the label. Current-format
/// objects pass through unchanged. Anything else yields an empty list.
pub fn normalize_field_options(raw: &serde_json::Value) -> Vec<SelectOption> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            serde_json::Value::String(s) => Some(SelectOption {
                value: label_to_slug(s),
                label: s.clone(),
            }),
            serde_json::Value::Object(_) => serde_json::from_value(item.clone()).ok(),
            _ => None,
        })
        .collect()
}

/// Normalize one template field: non-select fields lose `options` entirely,
/// select fields collapse an empty option list to `None`.
pub fn normalize_template_field(mut field: TemplateField) -> TemplateField {
    if field.field_type != FieldType::Select {
        field.options = None;
        return field;
    }
    field.options = field.options.filter(|opts| !opts.is_empty());
    field
}

// ---------------------------------------------------------------------------
// Authoring
// ---------------------------------------------------------------------------

/// Finish a field set coming from a caller: normalize each field, assign ids
/// to fields that arrived without one, fill blank select-option values, then
/// validate the result.
pub fn prepare_template_fields(fields: Vec<TemplateField>) -> Result<Vec<TemplateField>, CoreError> {
    let mut prepared: Vec<TemplateField> = Vec::with_capacity(fields.len());
    let mut used_ids: Vec<String> = Vec::with_capacity(fields.len());

    for field in fields {
        let mut field = normalize_template_field(field);

        if field.id.trim().is_empty() {
            field.id = unique_field_id(&field.label, &used_ids);
        }
        used_ids.push(field.id.clone());

        if let Some(options) = field.options.take() {
            let mut used_values: Vec<String> = Vec::with_capacity(options.len());
            let mut filled = Vec::with_capacity(options.len());
            for mut option in options {
                if option.value.trim().is_empty() {
                    option.value = unique_option_value(&option.label, &used_values);
                }
                used_values.push(option.value.clone());
                filled.push(option);
            }
            field.options = Some(filled);
        }

        prepared.push(field);
    }

    validate_template_fields(&prepared)?;
    Ok(prepared)
}

/// Validate a finished field set.
///
/// Rejects blank labels, blank or duplicate ids, and select fields with no
/// options. Repositories apply this defensively as well, so a malformed
/// field set can never reach storage.
pub fn validate_template_fields(fields: &[TemplateField]) -> Result<(), CoreError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(fields.len());
    for field in fields {
        if field.label.trim().is_empty() {
            return Err(CoreError::Validation(
                "checklist field label cannot be blank".into(),
            ));
        }
        if field.id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "checklist field '{}' has no id",
                field.label
            )));
        }
        if !seen.insert(field.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "duplicate checklist field id: {}",
                field.id
            )));
        }
        if field.field_type == FieldType::Select
            && field.options.as_ref().map_or(true, |opts| opts.is_empty())
        {
            return Err(CoreError::Validation(format!(
                "select field '{}' must have at least one option",
                field.id
            )));
        }
    }
    Ok(())
}
