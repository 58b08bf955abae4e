//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every route pattern compiles under the normalization rules
//! - Every route names a handler
//! - Log level is one the subscriber understands
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Handler names are not checked against a registry here; an unknown
//!   handler is a dispatch-time error

use thiserror::Error;

use crate::config::schema::DispatchConfig;
use crate::routing::Pattern;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route {pattern:?} does not compile: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("route {pattern:?} has an empty handler name")]
    EmptyHandler { pattern: String },

    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &DispatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (pattern, handler) in &config.routes {
        if let Err(e) = Pattern::compile(pattern.as_str()) {
            errors.push(ValidationError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.source.to_string(),
            });
        }
        if handler.trim().is_empty() {
            errors.push(ValidationError::EmptyHandler {
                pattern: pattern.clone(),
            });
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
