mod auth;
mod edge_guard;
mod session;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::edge_guard::{DEFAULT_LANDING, EdgeDecision, EdgeGuard};
pub use self::session::{resolve_cookie, resolve_storage};
