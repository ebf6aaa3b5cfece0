pub mod asset;
pub mod audit_log;
pub mod checklist_execution;
pub mod checklist_template;
pub mod component;
pub mod dashboard;
pub mod health;
pub mod project;
pub mod stage;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
/// /projects/{project_id}/stages                    list, create
/// /projects/{project_id}/stages/reorder            reorder (PUT)
/// /projects/{project_id}/assets                    list, create
/// /projects/{project_id}/checklist-executions      list by project
///
/// /stages/{id}                                     get, update, delete
/// /stages/{stage_id}/checklist-executions          list by stage
///
/// /assets                                          list all
/// /assets/{id}                                     get, update, delete
/// /assets/{asset_id}/components                    list, create
///
/// /components/{id}                                 get, update, delete
///
/// /checklist-templates                             list, create
/// /checklist-templates/{id}                        get, update, delete
///
/// /checklist-executions                            create
/// /checklist-executions/{id}                       get, update (PATCH)
///
/// /audit-logs                                      filtered query
/// /dashboard/stats                                 aggregate counters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/stages", stage::router())
        .nest("/assets", asset::router())
        .nest("/components", component::router())
        .nest("/checklist-templates", checklist_template::router())
        .nest("/checklist-executions", checklist_execution::router())
        .nest("/audit-logs", audit_log::router())
        .nest("/dashboard", dashboard::router())
}
