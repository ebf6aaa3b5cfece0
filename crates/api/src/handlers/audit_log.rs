//! Handlers for the global audit log (read-only over HTTP).

use axum::extract::{Query, State};
use axum::Json;
use comtrack_db::models::audit_log::{AuditLogPage, AuditLogQuery};
use comtrack_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/audit-logs
///
/// Filters combine with AND; `total` counts all matches regardless of the
/// page window so clients can paginate.
pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<AuditLogQuery>,
) -> AppResult<Json<AuditLogPage>> {
    let items = AuditLogRepo::query(&state.pool, &params).await?;
    let total = AuditLogRepo::count(&state.pool, &params).await?;
    Ok(Json(AuditLogPage { items, total }))
}
