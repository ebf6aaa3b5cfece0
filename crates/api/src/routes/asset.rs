//! Route definitions for the `/assets` resource.
//!
//! Project-scoped creation and listing live under
//! `/projects/{project_id}/assets`; component routes nest here.

use axum::routing::get;
use axum::Router;

use crate::handlers::{asset, component};
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET    /                                  -> list
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
///
/// GET    /{asset_id}/components             -> list_by_asset
/// POST   /{asset_id}/components             -> create
/// ```
pub fn router() -> Router<AppState> {
    let component_routes =
        Router::new().route("/", get(component::list_by_asset).post(component::create));

    Router::new()
        .route("/", get(asset::list))
        .route(
            "/{id}",
            get(asset::get_by_id)
                .put(asset::update)
                .delete(asset::delete),
        )
        .nest("/{asset_id}/components", component_routes)
}
