//! Route definitions for the `/checklist-templates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::checklist_template;
use crate::state::AppState;

/// Routes mounted at `/checklist-templates`.
///
/// ```text
/// GET    /         -> list
/// POST   /         -> create
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(checklist_template::list).post(checklist_template::create),
        )
        .route(
            "/{id}",
            get(checklist_template::get_by_id)
                .put(checklist_template::update)
                .delete(checklist_template::delete),
        )
}
