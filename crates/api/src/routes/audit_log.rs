//! Route definitions for the `/audit-logs` resource (read-only).

use axum::routing::get;
use axum::Router;

use crate::handlers::audit_log;
use crate::state::AppState;

/// Routes mounted at `/audit-logs`.
///
/// ```text
/// GET    /     -> query (filters + pagination)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(audit_log::query))
}
