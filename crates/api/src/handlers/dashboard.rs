//! Handler for aggregated dashboard statistics.

use axum::extract::State;
use axum::Json;
use comtrack_db::models::dashboard::DashboardStats;
use comtrack_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
