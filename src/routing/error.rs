//! Routing error definitions.

use thiserror::Error;

use crate::routing::method::Method;

/// Errors that end a dispatch. None of them are retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No pattern in the table matched the path.
    #[error("URL, {path}, not found")]
    RouteNotFound { path: String },

    /// A pattern matched but its handler is not registered.
    #[error("Handler, {handler}, not found (matched by {pattern:?})")]
    HandlerNotFound { handler: String, pattern: String },

    /// The handler exists but has no operation for the verb.
    #[error("Method, {method}, not supported by {handler}")]
    MethodNotSupported { method: Method, handler: String },
}

impl DispatchError {
    /// Conventional HTTP status for the front-end to answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            DispatchError::RouteNotFound { .. } => 404,
            DispatchError::HandlerNotFound { .. } => 500,
            DispatchError::MethodNotSupported { .. } => 405,
        }
    }
}

/// A route pattern that does not compile.
#[derive(Debug, Error)]
#[error("invalid route pattern {pattern:?}: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Result type for dispatch.
pub type DispatchResult<T> = Result<T, DispatchError>;
