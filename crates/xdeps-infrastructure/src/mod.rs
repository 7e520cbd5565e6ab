// Allow collapsible_if for nested conditional logic
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers. Concrete collaborators live in `xdeps-providers`; this crate
//! decides which ones to build and wires them together.
//!
//! ## Module Categories
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, environment |
//! | [`di`] | Provider factories and the application context |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`instrumentation`] | Spans and metrics around the defs service |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod instrumentation;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use instrumentation::InstrumentedDefsService;
pub use utils::TimedOperation;
