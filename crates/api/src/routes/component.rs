//! Route definitions for the `/components` resource.
//!
//! Creation and listing are asset-scoped and live under
//! `/assets/{asset_id}/components`.

use axum::routing::get;
use axum::Router;

use crate::handlers::component;
use crate::state::AppState;

/// Routes mounted at `/components`.
///
/// ```text
/// GET    /{id}     -> get_by_id
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(component::get_by_id)
            .put(component::update)
            .delete(component::delete),
    )
}
