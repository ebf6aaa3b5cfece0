//! Checklist execution status machine and embedded audit trail types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Audit trail action recorded when an execution is created.
pub const ACTION_CREATED: &str = "created";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Status of a checklist execution.
///
/// The usual path is draft -> submitted -> approved | rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl ExecutionStatus {
    /// Return the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse a status string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// All valid status values.
    pub const ALL: &'static [&'static str] = &["draft", "submitted", "approved", "rejected"];
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single store-enforced mutation rule: responses and status may only
/// change while the execution is a draft.
///
/// Deliberately permissive beyond that. The store does not lock terminal
/// states or check transition shape (a draft may go straight to approved),
/// leaving room for flows like reopening a rejected checklist to stay
/// possible at the data layer.
pub fn ensure_editable(status: ExecutionStatus) -> Result<(), CoreError> {
    if status == ExecutionStatus::Draft {
        Ok(())
    } else {
        Err(CoreError::InvalidState(
            "only draft executions are editable".into(),
        ))
    }
}

// ---------------------------------------------------------------------------
// Audit trail
// ---------------------------------------------------------------------------

/// One entry of the append-only audit trail embedded in an execution
/// document. Serde names match the stored JSONB shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrailEntry {
    pub user_id: String,
    /// Free-text tag such as "created", "draft_saved", "submitted".
    pub action: String,
    pub timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<ExecutionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_fields: Option<Vec<String>>,
}

/// Caller-supplied metadata for the audit entry appended by an execution
/// update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    pub action: String,
    pub previous_status: Option<ExecutionStatus>,
    pub changed_fields: Option<Vec<String>>,
}

/// A single response value: the only JSON scalars a responses map may hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Text(String),
    Number(f64),
    Boolean(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips() {
        for name in ExecutionStatus::ALL {
            let status = ExecutionStatus::from_str(name).unwrap();
            assert_eq!(status.as_str(), *name);
        }
        assert!(ExecutionStatus::from_str("archived").is_none());
    }

    #[test]
    fn draft_is_editable() {
        assert!(ensure_editable(ExecutionStatus::Draft).is_ok());
    }

    #[test]
    fn non_draft_is_frozen() {
        for status in [
            ExecutionStatus::Submitted,
            ExecutionStatus::Approved,
            ExecutionStatus::Rejected,
        ] {
            let err = ensure_editable(status).unwrap_err();
            assert!(matches!(err, CoreError::InvalidState(_)));
        }
    }

    #[test]
    fn trail_entry_serializes_camel_case() {
        let entry = AuditTrailEntry {
            user_id: "u1".into(),
            action: "submitted".into(),
            timestamp: chrono::Utc::now(),
            previous_status: Some(ExecutionStatus::Draft),
            changed_fields: Some(vec!["nome".into()]),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["previousStatus"], "draft");
        assert_eq!(json["changedFields"][0], "nome");
    }

    #[test]
    fn trail_entry_optional_fields_default() {
        let entry: AuditTrailEntry = serde_json::from_value(serde_json::json!({
            "userId": "u1",
            "action": "created",
            "timestamp": "2025-03-01T12:00:00Z",
        }))
        .unwrap();
        assert!(entry.previous_status.is_none());
        assert!(entry.changed_fields.is_none());
    }

    #[test]
    fn response_value_accepts_the_three_scalars() {
        let map: std::collections::HashMap<String, ResponseValue> =
            serde_json::from_value(serde_json::json!({
                "nome": "ok",
                "pressao": 4.5,
                "aprovado": true,
            }))
            .unwrap();
        assert_eq!(map["nome"], ResponseValue::Text("ok".into()));
        assert_eq!(map["pressao"], ResponseValue::Number(4.5));
        assert_eq!(map["aprovado"], ResponseValue::Boolean(true));
    }
}
