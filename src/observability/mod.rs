//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / config / handlers produce:
//!     → tracing events (structured fields: path, method, pattern, handler)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary decides whether and how to
//!   record them
//! - Routing emits at debug/trace so the hot path stays quiet by default

pub mod logging;
