//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod asset_repo;
pub mod audit_log_repo;
pub mod checklist_execution_repo;
pub mod checklist_template_repo;
pub mod component_repo;
pub mod dashboard_repo;
pub mod project_repo;
pub mod stage_repo;

pub use asset_repo::AssetRepo;
pub use audit_log_repo::AuditLogRepo;
pub use checklist_execution_repo::ChecklistExecutionRepo;
pub use checklist_template_repo::ChecklistTemplateRepo;
pub use component_repo::ComponentRepo;
pub use dashboard_repo::DashboardRepo;
pub use project_repo::ProjectRepo;
pub use stage_repo::StageRepo;
