mod accounts;
mod hashing;
mod jwt;

pub use self::accounts::{Account, AccountDirectory};
pub use self::hashing::Hashing;
pub use self::jwt::{ACCESS_TOKEN_TTL_SECS, Claims, JwtConfig};
