//! Regex URL dispatcher library.
//!
//! Map pattern strings to handler names, then dispatch `(path, method)`
//! pairs to a fresh handler instance:
//!
//! ```
//! use glue_dispatch::handler::{Handler, Operation, Registry};
//! use glue_dispatch::routing::{Captures, Request, RequestContext, RouteTable, Router};
//!
//! #[derive(Default)]
//! struct Page;
//!
//! impl Handler<Option<String>> for Page {
//!     fn get(&mut self, captures: &Captures<'_>) -> Operation<Option<String>> {
//!         Ok(captures.get(1).map(|n| format!("page {n}")))
//!     }
//! }
//!
//! let table = RouteTable::from_pairs([(r"/page/?(\d+)?", "page")]).unwrap();
//! let mut registry: Registry<Option<String>> = Registry::new();
//! registry.register::<Page>("page");
//! let router = Router::new(registry);
//! let ctx = RequestContext::default();
//!
//! let out = router.dispatch(&table, Request::new("/page/7", "GET"), &ctx).unwrap();
//! assert_eq!(out.as_deref(), Some("page 7"));
//!
//! // The operation exists; an empty answer is still its answer.
//! let out = router.dispatch(&table, Request::new("/page", "GET"), &ctx).unwrap();
//! assert_eq!(out, None);
//! ```

pub mod config;
pub mod handler;
pub mod handlers;
pub mod observability;
pub mod routing;

pub use config::DispatchConfig;
pub use handler::{Handler, Registry};
pub use routing::{DispatchError, Router, RouteTable};
