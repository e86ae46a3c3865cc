//! # Configuration
//!
//! External links the front-end points at, resolved at compile time with
//! optional TOML overrides.

pub mod links;

pub use links::{ConfigError, SiteLinks};
