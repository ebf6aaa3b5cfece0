//! Dashboard aggregate counters.

use serde::Serialize;
use sqlx::FromRow;

/// Aggregate counters for the dashboard screen. All values are real SQL
/// counts computed in one round-trip.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardStats {
    pub total_projects: i64,
    pub active_projects: i64,
    pub completed_projects: i64,
    pub on_hold_projects: i64,
    pub total_assets: i64,
    pub total_templates: i64,
    pub total_executions: i64,
    pub draft_executions: i64,
    pub submitted_executions: i64,
    pub approved_executions: i64,
    pub rejected_executions: i64,
}
