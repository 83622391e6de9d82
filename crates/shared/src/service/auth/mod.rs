use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynJwtService},
    config::AccountDirectory,
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, AuthData},
    },
    errors::ServiceError,
    model::SessionUser,
    utils::{Method, Metrics, Status},
};
use async_trait::async_trait;
use chrono::Utc;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{error, info, warn};

pub struct AuthService {
    hash: DynHashing,
    jwt: DynJwtService,
    directory: Arc<AccountDirectory>,
    metrics: Arc<Mutex<Metrics>>,
}

pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub directory: Arc<AccountDirectory>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            hash,
            jwt,
            directory,
            metrics,
            registry,
        } = deps;

        registry.lock().await.register(
            "auth_service_request_counter",
            "Total number of requests to the AuthService",
            metrics.lock().await.request_counter.clone(),
        );
        registry.lock().await.register(
            "auth_service_request_duration",
            "Histogram of request durations for the AuthService",
            metrics.lock().await.request_duration.clone(),
        );

        Self {
            hash,
            jwt,
            directory,
            metrics,
        }
    }

    async fn complete(&self, started: Instant, status: Status) {
        let elapsed = started.elapsed().as_secs_f64();
        self.metrics
            .lock()
            .await
            .record(Method::Post, status, elapsed);
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, input: &LoginRequest) -> Result<ApiResponse<AuthData>, ServiceError> {
        let started = Instant::now();
        let username = &input.username;

        info!("🔐 Attempting login for username: {username}");

        let Some(account) = self.directory.find_by_username(username) else {
            warn!("❌ Unknown username: {username}");
            self.complete(started, Status::Error).await;
            return Err(ServiceError::InvalidCredentials);
        };

        if let Err(e) = self
            .hash
            .compare_password(&account.password_hash, &input.password)
            .await
        {
            warn!("❌ Invalid password for username: {username}");
            self.complete(started, Status::Error).await;
            return Err(e);
        }

        let mut user = account.user.clone();
        user.last_login = Some(Utc::now().to_rfc3339());

        let (token, expires_in) = match self.jwt.generate_token(&SessionUser::from(&user)) {
            Ok(issued) => issued,
            Err(e) => {
                error!("❌ Failed to generate access token: {e:?}");
                self.complete(started, Status::Error).await;
                return Err(e);
            }
        };

        info!(role = %user.role, "✅ Login successful for username: {username}");
        self.complete(started, Status::Success).await;

        Ok(ApiResponse::success(
            "Login successful",
            AuthData {
                user,
                token,
                expires_in,
            },
        ))
    }

    async fn logout(&self, token: Option<&str>) -> Result<ApiResponse<bool>, ServiceError> {
        let started = Instant::now();

        if let Some(token) = token {
            match self.jwt.verify_token(token) {
                Ok(claims) => info!(user_id = %claims.sub, "👋 Logged out"),
                Err(e) => {
                    warn!("❌ Logout with unusable token: {e}");
                    self.complete(started, Status::Error).await;
                    return Err(e);
                }
            }
        }

        self.complete(started, Status::Success).await;

        Ok(ApiResponse::success("Successfully logged out", true))
    }
}
