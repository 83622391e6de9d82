use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use shared::{model::SESSION_COOKIE, service::EdgeDecision};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs before every page. Either lets the request through untouched or
/// answers with a temporary redirect to the landing page.
pub async fn edge_guard_middleware(
    State(state): State<Arc<AppState>>,
    cookie_jar: CookieJar,
    req: Request<Body>,
    next: Next,
) -> Response {
    let cookie = cookie_jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string());

    let path = req.uri().path().to_string();
    let decision = state.edge_guard.decide(cookie.as_deref(), &path);

    state.guard_metrics.record(decision.outcome());

    match decision {
        EdgeDecision::Redirect { location } => {
            info!(%path, %location, "🚫 Segment not permitted for role, redirecting");
            Redirect::temporary(&location).into_response()
        }
        other => {
            debug!(%path, outcome = ?other.outcome(), "edge guard pass");
            next.run(req).await
        }
    }
}
