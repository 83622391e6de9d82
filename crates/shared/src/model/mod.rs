mod navigation;
mod permission;
mod role;
mod route_access;
mod session;

pub use self::navigation::{
    NAVIGATION, NavigationEntry, NavigationGroup, NavigationRegistry, filter_for_role,
    group_entries,
};
pub use self::permission::{
    Capability, CapabilityFlags, has_permission, permissions_for, role_has,
};
pub use self::role::Role;
pub use self::route_access::{
    PUBLIC_SEGMENTS, RouteAccessConfig, RouteAccessTable, first_segment, is_public_segment,
};
pub use self::session::{
    REMEMBER_ME_KEY, SESSION_COOKIE, Session, SessionUser, StoredUser, TOKEN_KEY, USER_KEY,
};
