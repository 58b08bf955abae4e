//! Handler subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     registry.register::<Page>("page")
//!     → name → factory map (immutable once the router is built)
//!
//! Dispatch:
//!     matched route's handler name
//!     → registry.create(name)    (fresh instance per request)
//!     → Handler::call(method, captures)
//!     → Ok(output) | Err(Unsupported) (verb not implemented)
//! ```
//!
//! # Design Decisions
//! - A handler is a type with one operation per verb; unimplemented verbs
//!   answer `Err(Unsupported)`, which only the provided defaults can build
//! - Handlers are never shared between requests
//! - The output type is chosen by the application

pub mod registry;

pub use registry::Registry;

use crate::routing::{Captures, Method};

/// Marker returned by the provided verb operations.
///
/// It can only be built inside this module, so a handler's own operation can
/// never report itself as missing: `Err(Unsupported)` always means the
/// provided body ran, which does nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported {
    _private: (),
}

const UNSUPPORTED: Unsupported = Unsupported { _private: () };

/// Outcome of a verb operation.
pub type Operation<O> = Result<O, Unsupported>;

/// A request handler exposing one operation per supported verb.
///
/// Every operation has a provided implementation answering
/// `Err(Unsupported)`, which the router reports as "method not supported".
/// Implement only the verbs the handler serves; whatever they return inside
/// `Ok` is handed back to the caller untouched.
pub trait Handler<O> {
    fn get(&mut self, _captures: &Captures<'_>) -> Operation<O> {
        Err(UNSUPPORTED)
    }

    fn post(&mut self, _captures: &Captures<'_>) -> Operation<O> {
        Err(UNSUPPORTED)
    }

    fn put(&mut self, _captures: &Captures<'_>) -> Operation<O> {
        Err(UNSUPPORTED)
    }

    fn delete(&mut self, _captures: &Captures<'_>) -> Operation<O> {
        Err(UNSUPPORTED)
    }

    fn cli(&mut self, _captures: &Captures<'_>) -> Operation<O> {
        Err(UNSUPPORTED)
    }

    /// Route `method` to its operation.
    fn call(&mut self, method: Method, captures: &Captures<'_>) -> Operation<O> {
        match method {
            Method::Get => self.get(captures),
            Method::Post => self.post(captures),
            Method::Put => self.put(captures),
            Method::Delete => self.delete(captures),
            Method::Cli => self.cli(captures),
        }
    }
}
