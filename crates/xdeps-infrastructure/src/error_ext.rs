//! Error extension utilities
//!
//! Converts foreign errors (figment, toml, I/O) into domain errors with a
//! context string.

use std::fmt;
use xdeps_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```
/// use xdeps_infrastructure::error_ext::ErrorContext;
///
/// let result: xdeps_domain::Result<String> =
///     std::fs::read_to_string("/nonexistent/xdeps.toml").context("Failed to read config");
/// assert!(result.is_err());
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to an infrastructure error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context with lazy evaluation
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::infrastructure_with_source(format!("{context}: {err}"), err))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::infrastructure_with_source(format!("{}: {}", f(), err), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
