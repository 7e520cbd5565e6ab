//! Configuration
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from built-in defaults, an
//! optional TOML file and `XDEPS__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
