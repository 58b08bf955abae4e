//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the dispatcher.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::routing::{PatternError, RequestContext, RouteTable};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Ambient request defaults used when a request omits path or method.
    pub request: RequestContext,

    /// Pattern → handler name.
    pub routes: BTreeMap<String, String>,
}

impl DispatchConfig {
    /// Compile the configured routes.
    pub fn route_table(&self) -> Result<RouteTable, PatternError> {
        RouteTable::from_pairs(
            self.routes
                .iter()
                .map(|(pattern, handler)| (pattern.as_str(), handler.as_str())),
        )
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
