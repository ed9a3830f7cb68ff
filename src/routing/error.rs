//! Routing error types.

use thiserror::Error;

/// Caller contract violations when building action URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlBuildError {
    /// GET parameters must come as key/value pairs.
    #[error("odd number of GET parameters ({count}) for url '{url}': expected key/value pairs")]
    OddQueryParameters { url: String, count: usize },

    /// A required argument was empty.
    #[error("the argument '{0}' must not be empty")]
    EmptyArgument(&'static str),
}

/// Result type for URL building.
pub type UrlResult<T> = Result<T, UrlBuildError>;
