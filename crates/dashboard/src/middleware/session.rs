use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use shared::{
    errors::HttpError,
    model::{SESSION_COOKIE, Session},
    service::resolve_cookie,
};

/// Session read from the `session` cookie. Rejects with `401` when the cookie
/// is missing or unreadable.
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(SESSION_COOKIE).map(|cookie| cookie.value());

        resolve_cookie(cookie).map(CurrentSession).ok_or_else(|| {
            HttpError::Unauthorized("You are not logged in, please sign in first".to_string())
        })
    }
}
