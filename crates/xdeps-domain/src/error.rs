//! Error handling types

use std::fmt;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by context-rich variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Why the access gate refused a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenial {
    /// The repository does not exist (or must not be revealed to exist)
    NotFound,
    /// The repository exists but the caller may not read it
    Forbidden,
}

impl fmt::Display for AccessDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("not found"),
            Self::Forbidden => f.write_str("forbidden"),
        }
    }
}

/// Main error type for xdeps
#[derive(Error, Debug)]
pub enum Error {
    /// The access gate refused the source repository
    #[error("Unauthorized: repository {repository} {reason}")]
    Unauthorized {
        /// Repository id or URI as supplied by the caller
        repository: String,
        /// Refusal reason
        reason: AccessDenial,
    },

    /// The language backend failed, or found nothing at the position
    #[error("Resolution failed: {message}")]
    ResolutionFailed {
        /// Description including the operation and document
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A referenceable symbol yielded no package descriptor
    #[error("Package descriptor unavailable for {language} symbol {symbol}")]
    DescriptorUnavailable {
        /// Language of the symbol
        language: String,
        /// Serialized symbol descriptor
        symbol: String,
    },

    /// Reverse-dependency index lookup or refresh failed
    #[error("Index query failed ({operation}): {message}")]
    IndexQueryFailed {
        /// Index operation name
        operation: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// An existing cache entry could not be decoded
    #[error("Cache entry corrupt for key {key}: {source}")]
    CacheCorrupt {
        /// Cache key of the entry
        key: String,
        /// Decoding error
        #[source]
        source: serde_json::Error,
    },

    /// The caller cancelled the request
    #[error("Operation cancelled: {operation}")]
    Cancelled {
        /// Step that was in flight
        operation: String,
    },

    /// The request deadline passed
    #[error("Deadline exceeded: {operation}")]
    DeadlineExceeded {
        /// Step that was in flight
        operation: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Cache operation error
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },
}

// Resolution pipeline error creation methods
impl Error {
    /// Create an unauthorized error
    pub fn unauthorized<S: Into<String>>(repository: S, reason: AccessDenial) -> Self {
        Self::Unauthorized {
            repository: repository.into(),
            reason,
        }
    }

    /// Create a resolution error
    pub fn resolution<S: Into<String>>(message: S) -> Self {
        Self::ResolutionFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a resolution error wrapping a backend error
    pub fn resolution_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::ResolutionFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a descriptor-unavailable error
    pub fn descriptor_unavailable<L: Into<String>, S: Into<String>>(language: L, symbol: S) -> Self {
        Self::DescriptorUnavailable {
            language: language.into(),
            symbol: symbol.into(),
        }
    }

    /// Create an index query error
    pub fn index_query<O: Into<String>, S: Into<String>>(operation: O, message: S) -> Self {
        Self::IndexQueryFailed {
            operation: operation.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a cache-corrupt error
    pub fn cache_corrupt<S: Into<String>>(key: S, source: serde_json::Error) -> Self {
        Self::CacheCorrupt {
            key: key.into(),
            source,
        }
    }

    /// Create a cancellation error
    pub fn cancelled<S: Into<String>>(operation: S) -> Self {
        Self::Cancelled {
            operation: operation.into(),
        }
    }

    /// Create a deadline error
    pub fn deadline_exceeded<S: Into<String>>(operation: S) -> Self {
        Self::DeadlineExceeded {
            operation: operation.into(),
        }
    }

    /// True for cancellation and deadline errors
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled { .. } | Self::DeadlineExceeded { .. })
    }

    /// Rewrap a collaborator error as `ResolutionFailed`
    ///
    /// Cancellation and authorization errors pass through untouched.
    pub fn into_resolution_failure<S: Into<String>>(self, context: S) -> Self {
        match self {
            Self::ResolutionFailed { .. }
            | Self::Unauthorized { .. }
            | Self::Cancelled { .. }
            | Self::DeadlineExceeded { .. } => self,
            other => Self::resolution_with_source(format!("{}: {}", context.into(), other), other),
        }
    }

    /// Rewrap a collaborator error as `IndexQueryFailed`
    ///
    /// Cancellation and authorization errors pass through untouched.
    pub fn into_index_failure<S: Into<String>>(self, operation: S) -> Self {
        match self {
            Self::IndexQueryFailed { .. }
            | Self::Unauthorized { .. }
            | Self::Cancelled { .. }
            | Self::DeadlineExceeded { .. } => self,
            other => Self::IndexQueryFailed {
                operation: operation.into(),
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal and infrastructure error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
