//! Aggregate queries backing the dashboard screen.

use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

/// Provides aggregate counters in a single round-trip.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute project, asset, template and execution counters.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT
                (SELECT COUNT(*) FROM projects) AS total_projects,
                (SELECT COUNT(*) FROM projects WHERE status = 'active') AS active_projects,
                (SELECT COUNT(*) FROM projects WHERE status = 'completed') AS completed_projects,
                (SELECT COUNT(*) FROM projects WHERE status = 'on_hold') AS on_hold_projects,
                (SELECT COUNT(*) FROM assets) AS total_assets,
                (SELECT COUNT(*) FROM checklist_templates) AS total_templates,
                (SELECT COUNT(*) FROM checklist_executions) AS total_executions,
                (SELECT COUNT(*) FROM checklist_executions WHERE status = 'draft') AS draft_executions,
                (SELECT COUNT(*) FROM checklist_executions WHERE status = 'submitted') AS submitted_executions,
                (SELECT COUNT(*) FROM checklist_executions WHERE status = 'approved') AS approved_executions,
                (SELECT COUNT(*) FROM checklist_executions WHERE status = 'rejected') AS rejected_executions",
        )
        .fetch_one(pool)
        .await
    }
}
