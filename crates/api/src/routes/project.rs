//! Route definitions for the `/projects` resource.
//!
//! Also nests stage, asset and execution listings under
//! `/projects/{project_id}/...`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{asset, checklist_execution, project, stage};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                        -> list
/// POST   /                                        -> create
/// GET    /{id}                                    -> get_by_id
/// PUT    /{id}                                    -> update
/// DELETE /{id}                                    -> delete
///
/// GET    /{project_id}/stages                     -> list_by_project
/// POST   /{project_id}/stages                     -> create
/// PUT    /{project_id}/stages/reorder             -> reorder
///
/// GET    /{project_id}/assets                     -> list_by_project
/// POST   /{project_id}/assets                     -> create
///
/// GET    /{project_id}/checklist-executions       -> list_by_project
/// ```
pub fn router() -> Router<AppState> {
    let stage_routes = Router::new()
        .route("/", get(stage::list_by_project).post(stage::create))
        .route("/reorder", put(stage::reorder));

    let asset_routes = Router::new().route("/", get(asset::list_by_project).post(asset::create));

    let execution_routes = Router::new().route("/", get(checklist_execution::list_by_project));

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .nest("/{project_id}/stages", stage_routes)
        .nest("/{project_id}/assets", asset_routes)
        .nest("/{project_id}/checklist-executions", execution_routes)
}
