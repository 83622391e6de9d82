mod auth;
mod hashing;
mod jwt;
mod navigator;
mod storage;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::navigator::{DynNavigator, NavigatorTrait};
pub use self::storage::{ClientStorageTrait, DynClientStorage};
