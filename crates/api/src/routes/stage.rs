//! Route definitions for the `/stages` resource.
//!
//! Listing and creation are project-scoped and live under
//! `/projects/{project_id}/stages`; only id-addressed operations and the
//! stage-scoped execution listing are mounted here.

use axum::routing::get;
use axum::Router;

use crate::handlers::{checklist_execution, stage};
use crate::state::AppState;

/// Routes mounted at `/stages`.
///
/// ```text
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{stage_id}/checklist-executions   -> list_by_stage
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(stage::get_by_id)
                .put(stage::update)
                .delete(stage::delete),
        )
        .route(
            "/{stage_id}/checklist-executions",
            get(checklist_execution::list_by_stage),
        )
}
