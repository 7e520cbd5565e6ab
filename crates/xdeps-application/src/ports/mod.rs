//! Application ports
//!
//! Service interfaces implemented by this crate, plus re-exports of the
//! domain provider ports the services consume.

/// Provider ports (re-exported from the domain)
pub mod providers {
    pub use xdeps_domain::ports::providers::*;
}
/// Service interfaces
pub mod services;

pub use services::DefsServiceInterface;
