use axum::{
    Json,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use shared::{
    model::{SESSION_COOKIE, SessionUser},
    service::resolve_cookie,
};

/// Stand-in for a rendered dashboard page. Reaching it means the edge guard
/// let the request through.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub status: String,
    pub page: String,
    pub user: Option<SessionUser>,
}

pub async fn page_handler(uri: Uri, cookie_jar: CookieJar) -> impl IntoResponse {
    let user = resolve_cookie(cookie_jar.get(SESSION_COOKIE).map(|cookie| cookie.value()))
        .map(|session| session.user());

    (
        StatusCode::OK,
        Json(PageResponse {
            status: "success".to_string(),
            page: uri.path().to_string(),
            user,
        }),
    )
}
