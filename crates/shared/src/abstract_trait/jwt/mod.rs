use crate::{config::Claims, errors::ServiceError, model::SessionUser};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    /// Returns the signed token and its lifetime in seconds.
    fn generate_token(&self, user: &SessionUser) -> Result<(String, i64), ServiceError>;
    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError>;
}
