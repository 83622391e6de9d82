mod api;
mod auth;
mod navigation;
mod permission;

pub use self::api::ApiResponse;
pub use self::auth::AuthData;
pub use self::navigation::{NavigationGroupResponse, NavigationItemResponse, NavigationResponse};
pub use self::permission::PermissionResponse;
