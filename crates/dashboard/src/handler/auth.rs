use crate::{
    middleware::{session::CurrentSession, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{
    abstract_trait::DynAuthService,
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, AuthData},
    },
    errors::{ErrorResponse, HttpError},
    model::{SESSION_COOKIE, SessionUser},
};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "CyberClaim dashboard gate is up";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

fn session_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned)
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<AuthData>),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    State(state): State<Arc<AppState>>,
    Extension(service): Extension<DynAuthService>,
    cookie_jar: CookieJar,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&body).await?;

    let session = serde_json::to_string(&SessionUser::from(&response.data.user))
        .map_err(|e| HttpError::Internal(format!("Failed to encode session: {e}")))?;

    let cookie_jar = cookie_jar.add(session_cookie(session, state.secure_cookie));

    Ok((StatusCode::OK, cookie_jar, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<bool>),
        (status = 401, description = "Unusable token", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth"
)]
pub async fn logout_user_handler(
    Extension(service): Extension<DynAuthService>,
    cookie_jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    // the cookie goes away whatever the remote side says
    let cookie_jar = cookie_jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/"));
    let token = bearer_token(&headers);

    match service.logout(token.as_deref()).await {
        Ok(response) => (StatusCode::OK, cookie_jar, Json(response)).into_response(),
        Err(e) => {
            warn!("Logout failed, session cookie cleared anyway: {e}");
            (cookie_jar, HttpError::from(e)).into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session user", body = ApiResponse<SessionUser>),
        (status = 401, description = "No session", body = ErrorResponse)
    ),
    tag = "Auth",
)]
pub async fn get_me_handler(
    CurrentSession(session): CurrentSession,
) -> Result<impl IntoResponse, HttpError> {
    let response = ApiResponse::success("Session resolved", session.user());
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/auth/login", post(login_user_handler))
        .route("/api/auth/logout", post(logout_user_handler))
        .route("/api/auth/me", get(get_me_handler))
        .route("/api/healthchecker", get(health_checker_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .with_state(app_state)
}
