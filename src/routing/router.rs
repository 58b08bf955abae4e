//! Request dispatch.
//!
//! # Responsibilities
//! - Resolve path and method against the ambient context
//! - Select the first matching route in table order
//! - Resolve the route's handler through the registry
//! - Invoke the verb's operation exactly once with the captures
//!
//! # Design Decisions
//! - Stateless: the table is borrowed per call and never mutated
//! - The first match is final, even if its handler then fails to resolve
//! - Only `debug`/`trace` events; nothing is written by the router itself

use std::fmt;

use crate::handler::Registry;
use crate::routing::error::{DispatchError, DispatchResult};
use crate::routing::request::{Request, RequestContext};
use crate::routing::table::RouteTable;

/// Dispatches requests to handlers registered under the names a route table
/// refers to.
pub struct Router<O> {
    registry: Registry<O>,
}

impl<O: 'static> fmt::Debug for Router<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("registry", &self.registry)
            .finish()
    }
}

impl<O: 'static> Default for Router<O> {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}

impl<O: 'static> Router<O> {
    pub fn new(registry: Registry<O>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry<O> {
        &self.registry
    }

    /// Match `request` against `table` and invoke the selected handler.
    ///
    /// Returns whatever the handler operation returns.
    pub fn dispatch(
        &self,
        table: &RouteTable,
        request: Request<'_>,
        ctx: &RequestContext,
    ) -> DispatchResult<O> {
        let resolved = request.resolve(ctx);
        let (path, method) = (resolved.path, resolved.method);

        let (route, captures) = table.find(path).ok_or_else(|| {
            tracing::debug!(path = %path, method = %method, "No route matched");
            DispatchError::RouteNotFound {
                path: path.to_owned(),
            }
        })?;

        tracing::debug!(
            path = %path,
            method = %method,
            pattern = %route.pattern(),
            handler = %route.handler(),
            "Route matched"
        );

        let mut handler =
            self.registry
                .create(route.handler())
                .ok_or_else(|| DispatchError::HandlerNotFound {
                    handler: route.handler().to_owned(),
                    pattern: route.pattern().to_owned(),
                })?;

        handler
            .call(method, &captures)
            .map_err(|_| DispatchError::MethodNotSupported {
                method,
                handler: route.handler().to_owned(),
            })
    }
}
