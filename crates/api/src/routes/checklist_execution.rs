//! Route definitions for the `/checklist-executions` resource.
//!
//! Stage- and project-scoped listings live under their parents; executions
//! have no delete route.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::checklist_execution;
use crate::state::AppState;

/// Routes mounted at `/checklist-executions`.
///
/// ```text
/// POST   /         -> create
/// GET    /{id}     -> get_by_id
/// PATCH  /{id}     -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(checklist_execution::create))
        .route(
            "/{id}",
            get(checklist_execution::get_by_id).patch(checklist_execution::update),
        )
}
