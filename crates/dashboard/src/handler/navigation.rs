use crate::{middleware::session::CurrentSession, state::AppState};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use shared::{
    domain::responses::{
        ApiResponse, NavigationGroupResponse, NavigationResponse, PermissionResponse,
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::debug;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Sidebar menu for the session role", body = ApiResponse<NavigationResponse>),
        (status = 401, description = "No session", body = ErrorResponse)
    ),
    tag = "Navigation"
)]
pub async fn get_navigation_handler(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Result<impl IntoResponse, HttpError> {
    let groups: Vec<NavigationGroupResponse> = state
        .navigation
        .menu_for(session.role)
        .iter()
        .map(NavigationGroupResponse::from)
        .collect();

    debug!(role = %session.role, groups = groups.len(), "navigation menu built");

    let response = ApiResponse::success(
        "Navigation retrieved",
        NavigationResponse {
            role: session.role,
            groups,
        },
    );

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/permissions",
    responses(
        (status = 200, description = "Capability flags of the session role", body = ApiResponse<PermissionResponse>),
        (status = 401, description = "No session", body = ErrorResponse)
    ),
    tag = "Navigation"
)]
pub async fn get_permissions_handler(
    CurrentSession(session): CurrentSession,
) -> Result<impl IntoResponse, HttpError> {
    let response = ApiResponse::success(
        "Permissions retrieved",
        PermissionResponse::from(session.role),
    );
    Ok((StatusCode::OK, Json(response)))
}

pub fn navigation_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/navigation", get(get_navigation_handler))
        .route("/api/permissions", get(get_permissions_handler))
        .with_state(app_state)
}
