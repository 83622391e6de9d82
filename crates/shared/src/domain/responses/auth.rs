use crate::model::StoredUser;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of a successful login, mirrored into client storage.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthData {
    pub user: StoredUser,
    pub token: String,
    pub expires_in: i64,
}
