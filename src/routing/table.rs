//! Route table and the matching loop.
//!
//! # Design Decisions
//! - Keys are unique; inserting an existing pattern replaces its handler
//! - Patterns are compiled once on insert, never during a lookup
//! - Lookup walks patterns in descending byte-wise order and stops at the
//!   first hit. This is a plain string ordering, not a specificity ranking:
//!   `/page/2` is tried before `/page/(\d+)` only because `'2'` > `'('`.

use std::collections::BTreeMap;

use crate::routing::captures::Captures;
use crate::routing::error::PatternError;
use crate::routing::pattern::Pattern;

/// A pattern together with the name of the handler it routes to.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: Pattern,
    handler: String,
}

impl Route {
    pub fn pattern(&self) -> &str {
        self.pattern.source()
    }

    pub fn handler(&self) -> &str {
        &self.handler
    }
}

/// Mapping from pattern to handler identifier.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeMap<String, Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(pattern, handler)` pairs. Later duplicates win.
    pub fn from_pairs<I, P, H>(pairs: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (P, H)>,
        P: Into<String>,
        H: Into<String>,
    {
        let mut table = Self::new();
        for (pattern, handler) in pairs {
            table.insert(pattern, handler)?;
        }
        Ok(table)
    }

    /// Add or replace a route. The table is left untouched if the pattern
    /// does not compile.
    pub fn insert(
        &mut self,
        pattern: impl Into<String>,
        handler: impl Into<String>,
    ) -> Result<(), PatternError> {
        let pattern = Pattern::compile(pattern)?;
        let key = pattern.source().to_owned();
        self.routes.insert(
            key,
            Route {
                pattern,
                handler: handler.into(),
            },
        );
        Ok(())
    }

    pub fn remove(&mut self, pattern: &str) -> Option<Route> {
        self.routes.remove(pattern)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in match order (descending by pattern).
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.values().rev()
    }

    /// First route in match order whose pattern matches `path`.
    pub fn find<'t, 'p>(&'t self, path: &'p str) -> Option<(&'t Route, Captures<'p>)> {
        self.iter().find_map(|route| {
            tracing::trace!(pattern = %route.pattern(), path = %path, "Trying route");
            route
                .pattern
                .regex()
                .captures(path)
                .map(|caps| (route, Captures::new(caps)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(table: &RouteTable) -> Vec<&str> {
        table.iter().map(Route::pattern).collect()
    }

    #[test]
    fn test_descending_order() {
        let table = RouteTable::from_pairs([
            ("/a", "A"),
            ("/z", "Z"),
            (r"/page/(\d+)", "Page"),
            ("/page/2", "Two"),
            ("/", "Index"),
        ])
        .unwrap();

        assert_eq!(
            order(&table),
            vec!["/z", "/page/2", r"/page/(\d+)", "/a", "/"]
        );
    }

    #[test]
    fn test_regex_route_sorted_after_literal_with_larger_byte() {
        // 'a' (0x61) > '(' (0x28), so the literal is tried first.
        let table =
            RouteTable::from_pairs([(r"/page/(\w+)", "Regex"), ("/page/archive", "Archive")])
                .unwrap();

        let (route, _) = table.find("/page/archive").unwrap();
        assert_eq!(route.handler(), "Archive");

        let (route, caps) = table.find("/page/other").unwrap();
        assert_eq!(route.handler(), "Regex");
        assert_eq!(caps.get(1), Some("other"));
    }

    #[test]
    fn test_regex_route_shadows_literal_with_smaller_byte() {
        // '!' (0x21) < '(' (0x28): the regex route comes first and wins.
        let table =
            RouteTable::from_pairs([(r"/page/(.+)", "Regex"), ("/page/!", "Bang")]).unwrap();

        let (route, caps) = table.find("/page/!").unwrap();
        assert_eq!(route.handler(), "Regex");
        assert_eq!(caps.get(1), Some("!"));
    }

    #[test]
    fn test_duplicate_pattern_replaces_handler() {
        let mut table = RouteTable::new();
        table.insert("/x", "First").unwrap();
        table.insert("/x", "Second").unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.find("/x").unwrap().0.handler(), "Second");
    }

    #[test]
    fn test_invalid_pattern_leaves_table_untouched() {
        let mut table = RouteTable::from_pairs([("/x", "X")]).unwrap();
        assert!(table.insert("/y(", "Y").is_err());
        assert_eq!(order(&table), vec!["/x"]);
    }

    #[test]
    fn test_empty_table_matches_nothing() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert!(table.find("/").is_none());
    }

    #[test]
    fn test_remove() {
        let mut table = RouteTable::from_pairs([("/x", "X"), ("/y", "Y")]).unwrap();
        assert_eq!(table.remove("/x").unwrap().handler(), "X");
        assert!(table.find("/x").is_none());
        assert!(table.remove("/x").is_none());
    }
}
