//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route table construction (at startup or reload):
//!     (pattern, handler) pairs
//!     → pattern.rs (escape '/', anchor, optional trailing slash, /i)
//!     → table.rs (compiled routes keyed by pattern)
//!
//! Dispatch (per request):
//!     Request (path?, method?) + RequestContext
//!     → request.rs / method.rs (fill defaults, normalize verb)
//!     → table.rs (descending pattern order, first match wins)
//!     → router.rs (registry lookup, verb operation, invoke once)
//!     → handler output | DispatchError
//! ```
//!
//! # Design Decisions
//! - Patterns compiled once, immutable afterwards
//! - Deterministic: same input always matches the same route
//! - Precedence is plain reverse string order, not route specificity

pub mod captures;
pub mod error;
pub mod method;
pub mod pattern;
pub mod request;
pub mod router;
pub mod table;

pub use captures::Captures;
pub use error::{DispatchError, DispatchResult, PatternError};
pub use method::Method;
pub use pattern::Pattern;
pub use request::{Request, RequestContext, Resolved};
pub use router::Router;
pub use table::{Route, RouteTable};
