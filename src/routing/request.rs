//! Request tuple and ambient request context.
//!
//! The front-end hands the dispatcher an explicit `(path, method)` pair,
//! either part of which may be missing. Missing parts are filled from the
//! [`RequestContext`], which plays the role of "the current request" that a
//! web server would otherwise expose globally.

use serde::{Deserialize, Serialize};

use crate::routing::method::Method;

/// Defaults for requests that do not carry their own path or method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestContext {
    /// Current request path (e.g. the requested URI).
    pub path: Option<String>,

    /// Current request method.
    pub method: Option<String>,
}

impl RequestContext {
    pub fn new(path: Option<String>, method: Option<String>) -> Self {
        Self { path, method }
    }
}

/// A single dispatch request. Borrowed for the duration of one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Request<'a> {
    pub path: Option<&'a str>,
    pub method: Option<&'a str>,
}

impl<'a> Request<'a> {
    pub fn new(path: &'a str, method: &'a str) -> Self {
        Self {
            path: Some(path),
            method: Some(method),
        }
    }

    /// Request for `path` with the method left to the context.
    pub fn path(path: &'a str) -> Self {
        Self {
            path: Some(path),
            method: None,
        }
    }

    /// Fill in the missing parts from `ctx`.
    ///
    /// An empty explicit path counts as missing. With neither an explicit nor
    /// an ambient path the empty string is used.
    pub fn resolve(&self, ctx: &'a RequestContext) -> Resolved<'a> {
        let path = self
            .path
            .filter(|p| !p.is_empty())
            .or(ctx.path.as_deref())
            .unwrap_or_default();

        Resolved {
            path,
            method: Method::normalize(self.method, ctx.method.as_deref()),
        }
    }
}

/// A request with path and method settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub path: &'a str,
    pub method: Method,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_win() {
        let ctx = RequestContext::new(Some("/ambient".into()), Some("POST".into()));
        let resolved = Request::new("/explicit", "put").resolve(&ctx);
        assert_eq!(resolved.path, "/explicit");
        assert_eq!(resolved.method, Method::Put);
    }

    #[test]
    fn test_missing_values_come_from_context() {
        let ctx = RequestContext::new(Some("/ambient".into()), Some("delete".into()));
        let resolved = Request::default().resolve(&ctx);
        assert_eq!(resolved.path, "/ambient");
        assert_eq!(resolved.method, Method::Delete);

        let resolved = Request::new("", "").resolve(&ctx);
        assert_eq!(resolved.path, "/ambient");
        assert_eq!(resolved.method, Method::Delete);
    }

    #[test]
    fn test_nothing_anywhere() {
        let ctx = RequestContext::default();
        let resolved = Request::default().resolve(&ctx);
        assert_eq!(resolved.path, "");
        assert_eq!(resolved.method, Method::Get);
    }
}
