pub mod abstract_trait;
pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod model;
pub mod service;
pub mod utils;
