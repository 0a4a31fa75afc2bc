//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it carries the config loader, the API state
//! registry, the error envelope, and the auth-token plumbing every slice uses.

pub mod config;
pub mod prelude;
pub mod server;

pub use aivo_domain as domain;
pub use aivo_gateway as gateway;
