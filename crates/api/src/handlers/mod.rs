//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `comtrack_db`, map
//! errors via [`crate::error::AppError`], and record best-effort global
//! audit entries for mutations.

pub mod asset;
pub mod audit_log;
pub mod checklist_execution;
pub mod checklist_template;
pub mod component;
pub mod dashboard;
pub mod project;
pub mod stage;
