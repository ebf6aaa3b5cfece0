//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod asset;
pub mod audit_log;
pub mod checklist_execution;
pub mod checklist_template;
pub mod component;
pub mod dashboard;
pub mod project;
pub mod stage;
