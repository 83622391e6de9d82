//! Client-side half of the gate: web storage, the router, the auth hook and
//! the protected-route state machine.

mod auth;
mod guard;
mod history;
mod storage;

pub use self::auth::ClientAuth;
pub use self::guard::{GuardInput, GuardState, LOGIN_ROUTE, ProtectedRoute, Render, evaluate};
pub use self::history::HistoryNavigator;
pub use self::storage::MemoryStorage;
