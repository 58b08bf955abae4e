//! Handler registry: resolves handler names to fresh instances.

use std::collections::HashMap;
use std::fmt;

use crate::handler::Handler;

/// Builds a new handler instance.
pub type Factory<O> = Box<dyn Fn() -> Box<dyn Handler<O>> + Send + Sync>;

/// Name → factory map, populated at startup.
///
/// Lookups are exact (case-sensitive).
pub struct Registry<O> {
    factories: HashMap<String, Factory<O>>,
}

impl<O: 'static> Registry<O> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a handler type constructed through `Default`.
    pub fn register<H>(&mut self, name: impl Into<String>) -> &mut Self
    where
        H: Handler<O> + Default + 'static,
    {
        self.register_with(name, || Box::new(H::default()) as Box<dyn Handler<O>>)
    }

    /// Register a custom factory. Replaces any previous entry for `name`.
    pub fn register_with<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Handler<O>> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Box::new(factory)).is_some() {
            tracing::debug!(handler = %name, "Replaced handler registration");
        }
        self
    }

    /// Construct a new instance of `name`.
    pub fn create(&self, name: &str) -> Option<Box<dyn Handler<O>>> {
        self.factories.get(name).map(|factory| factory())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<O: 'static> Default for Registry<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: 'static> fmt::Debug for Registry<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("handlers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::handler::Operation;
    use crate::routing::{Captures, Method, RouteTable};

    #[derive(Default)]
    struct Hello;

    impl Handler<String> for Hello {
        fn get(&mut self, _captures: &Captures<'_>) -> Operation<String> {
            Ok("hello".into())
        }
    }

    #[test]
    fn test_register_and_create() {
        let mut registry: Registry<String> = Registry::new();
        registry.register::<Hello>("hello");

        assert!(registry.contains("hello"));
        assert!(!registry.contains("Hello"));
        assert!(registry.create("missing").is_none());

        let table = RouteTable::from_pairs([("/", "hello")]).unwrap();
        let (_, caps) = table.find("/").unwrap();
        let mut handler = registry.create("hello").unwrap();
        assert_eq!(handler.call(Method::Get, &caps), Ok("hello".into()));
        assert!(handler.call(Method::Post, &caps).is_err());
    }

    #[test]
    fn test_factory_runs_per_create() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = built.clone();

        let mut registry: Registry<String> = Registry::new();
        registry.register_with("hello", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Box::new(Hello) as Box<dyn Handler<String>>
        });

        registry.create("hello");
        registry.create("hello");
        assert_eq!(built.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_names_sorted() {
        let mut registry: Registry<String> = Registry::new();
        registry.register::<Hello>("b").register::<Hello>("a");
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }
}
