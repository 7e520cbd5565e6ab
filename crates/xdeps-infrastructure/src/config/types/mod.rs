//! Configuration types module

pub mod app;
pub mod cache;
pub mod index;
pub mod language;
pub mod logging;
pub mod request;

// Re-export main types
pub use app::AppConfig;
pub use cache::{CacheConfig, CacheProviderKind};
pub use index::IndexConfig;
pub use language::LanguageConfig;
pub use logging::LoggingConfig;
pub use request::RequestConfig;
