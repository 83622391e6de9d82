use crate::model::{CapabilityFlags, Role, permissions_for};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PermissionResponse {
    pub role: Role,
    pub permissions: CapabilityFlags,
}

impl From<Role> for PermissionResponse {
    fn from(role: Role) -> Self {
        Self {
            role,
            permissions: permissions_for(role),
        }
    }
}
