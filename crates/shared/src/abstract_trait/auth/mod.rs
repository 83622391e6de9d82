use crate::{
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, AuthData},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

/// Remote side of the auth flow: checks credentials and invalidates tokens.
#[async_trait]
pub trait AuthServiceTrait {
    async fn login(&self, input: &LoginRequest) -> Result<ApiResponse<AuthData>, ServiceError>;
    async fn logout(&self, token: Option<&str>) -> Result<ApiResponse<bool>, ServiceError>;
}
