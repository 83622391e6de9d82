use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use dashboard::{config::Config, handler::AppRouter, state::AppState};
use serde_json::Value;
use shared::model::RouteAccessConfig;
use tower::ServiceExt;

async fn app() -> Router {
    let config = Config {
        port: 0,
        jwt_secret: "router-test-secret".into(),
        route_access: RouteAccessConfig::default(),
        demo_password: "123456".into(),
        bcrypt_cost: 4,
        secure_cookie: false,
    };
    let state = AppState::new(&config).await.unwrap();
    AppRouter::router(state)
}

fn session_cookie(id: &str, role: &str) -> String {
    format!(r#"session={{"id":"{id}","name":"Tester","email":"t@cyberclaim.id","role":"{role}"}}"#)
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text_body(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn set_cookie(resp: &Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn faskes_is_redirected_from_users_to_dashboard() {
    let cookie = session_cookie("3", "faskes");
    let resp = app().await.oneshot(get("/users", Some(&cookie))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/dashboard");
}

#[tokio::test]
async fn slash_and_dot_variants_of_users_are_redirected() {
    let app = app().await;
    let cookie = session_cookie("3", "faskes");
    for path in ["//users", "///users/3", "/./users", "/claim/../users"] {
        let resp = app.clone().oneshot(get(path, Some(&cookie))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/dashboard");
    }
}

#[tokio::test]
async fn anonymous_request_passes_through() {
    let resp = app().await.oneshot(get("/dashboard/claims", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["page"], "/dashboard/claims");
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn malformed_cookie_passes_through() {
    let app = app().await;
    let unknown_role = session_cookie("9", "auditor");
    for cookie in ["session=not-json", "session={}", unknown_role.as_str()] {
        let resp = app.clone().oneshot(get("/users", Some(cookie))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{cookie}");
    }
}

#[tokio::test]
async fn permitted_role_reaches_the_page() {
    let cookie = session_cookie("1", "admin");
    let resp = app().await.oneshot(get("/users/7", Some(&cookie))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["page"], "/users/7");
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn public_segments_are_never_redirected() {
    let app = app().await;
    let cookie = session_cookie("3", "faskes");
    for path in ["/", "/auth/login"] {
        let resp = app.clone().oneshot(get(path, Some(&cookie))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn login_sets_session_cookie() {
    let resp = app()
        .await
        .oneshot(post_json(
            "/api/auth/login",
            r#"{"username":"admin","password":"123456","remember_me":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("session="), "{cookie}");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));

    let body = json_body(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["user"]["role"], "admin");
    assert_eq!(body["data"]["expires_in"], 3600);
}

#[tokio::test]
async fn login_cookie_is_honoured_by_the_edge_guard() {
    let app = app().await;
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            r#"{"username":"faskes","password":"123456"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let issued = set_cookie(&resp);
    let cookie = issued.split(';').next().unwrap().to_string();
    assert!(cookie.starts_with("session="), "{issued}");

    let resp = app.clone().oneshot(get("/users", Some(&cookie))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/dashboard");

    let resp = app.oneshot(get("/claim", Some(&cookie))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["user"]["role"], "faskes");
}

#[tokio::test]
async fn login_validates_and_checks_credentials() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(post_json("/api/auth/login", r#"{"username":"admin","password":"123"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "error");
    assert!(
        body["message"].as_str().unwrap().starts_with("Validation failed: password"),
        "{body}"
    );

    let resp = app
        .oneshot(post_json(
            "/api/auth/login",
            r#"{"username":"admin","password":"654321"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_clears_cookie_even_with_bad_token() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/logout")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .header(header::COOKIE, session_cookie("1", "admin"))
        .body(Body::empty())
        .unwrap();

    let resp = app().await.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("session="), "{cookie}");
    assert!(cookie.contains("Max-Age=0"), "{cookie}");
}

#[tokio::test]
async fn me_requires_a_session() {
    let app = app().await;

    let resp = app.clone().oneshot(get("/api/auth/me", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let cookie = session_cookie("2", "superadmin");
    let resp = app.oneshot(get("/api/auth/me", Some(&cookie))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["data"]["role"], "superadmin");
}

#[tokio::test]
async fn navigation_is_filtered_by_role() {
    let cookie = session_cookie("3", "faskes");
    let resp = app()
        .await
        .oneshot(get("/api/navigation", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["data"]["role"], "faskes");

    let hrefs: Vec<&str> = body["data"]["groups"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|group| group["items"].as_array().unwrap())
        .filter_map(|item| item["href"].as_str())
        .collect();
    assert!(!hrefs.is_empty());
    assert!(!hrefs.contains(&"/users"));
}

#[tokio::test]
async fn permissions_follow_the_role() {
    let cookie = session_cookie("1", "admin");
    let resp = app()
        .await
        .oneshot(get("/api/permissions", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    let flags = &body["data"]["permissions"];
    assert_eq!(flags["canManageUsers"], false);
    assert_eq!(flags["canUploadDocuments"], true);
    assert_eq!(flags["canVerifyBPJS"], false);
}

#[tokio::test]
async fn metrics_count_guard_decisions() {
    let app = app().await;
    let cookie = session_cookie("3", "faskes");
    app.clone().oneshot(get("/users", Some(&cookie))).await.unwrap();

    let resp = app.oneshot(get("/metrics", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let text = text_body(resp).await;
    assert!(text.contains(r#"edge_guard_decisions_total{outcome="redirect"} 1"#), "{text}");
}

#[tokio::test]
async fn healthchecker_answers() {
    let resp = app().await.oneshot(get("/api/healthchecker", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
