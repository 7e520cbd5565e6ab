//! Wiring
//!
//! Provider factories turn configuration sections into port
//! implementations; [`init_app`] composes them into the defs service.
//!
//! ```text
//! AppConfig ─▶ factory::create_* ─▶ Arc<dyn Port> ─▶ DefsServiceImpl ─▶ InstrumentedDefsService
//! ```

pub mod bootstrap;
pub mod factory;

pub use bootstrap::{AppContext, init_app};
pub use factory::LanguageBackend;
