pub mod edge_guard;
pub mod session;
pub mod validate;
