use crate::model::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SESSION_COOKIE: &str = "session";

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";
pub const REMEMBER_ME_KEY: &str = "remember_me";

/// Payload of the `session` cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// User object kept under the `user` storage key after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub facility_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl From<&StoredUser> for SessionUser {
    fn from(user: &StoredUser) -> Self {
        SessionUser {
            id: user.id.clone(),
            name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// The authenticated actor, however it was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: Option<String>,
}

impl Session {
    pub fn from_stored(user: StoredUser, token: String) -> Self {
        Session {
            id: user.id,
            name: user.full_name,
            email: user.email,
            role: user.role,
            token: Some(token),
        }
    }

    pub fn user(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

impl From<SessionUser> for Session {
    fn from(user: SessionUser) -> Self {
        Session {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            token: None,
        }
    }
}
