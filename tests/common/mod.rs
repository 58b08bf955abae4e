//! Shared handlers for integration tests.

use std::sync::{Arc, Mutex};

use glue_dispatch::handler::{Handler, Operation, Registry};
use glue_dispatch::routing::Captures;

/// Every call a [`Recorder`] has seen: `(handler, verb, captures)`.
pub type Calls = Arc<Mutex<Vec<(&'static str, &'static str, Vec<String>)>>>;

/// Records the captures it is invoked with. Serves GET and POST only.
pub struct Recorder {
    name: &'static str,
    calls: Calls,
}

impl Recorder {
    fn record(&self, verb: &'static str, captures: &Captures<'_>) -> Operation<String> {
        self.calls
            .lock()
            .unwrap()
            .push((self.name, verb, captures.to_vec()));
        Ok(format!("{} {}", self.name, verb))
    }
}

impl Handler<String> for Recorder {
    fn get(&mut self, captures: &Captures<'_>) -> Operation<String> {
        self.record("GET", captures)
    }

    fn post(&mut self, captures: &Captures<'_>) -> Operation<String> {
        self.record("POST", captures)
    }
}

/// Handler that only answers GET.
#[derive(Default)]
pub struct GetOnly;

impl Handler<String> for GetOnly {
    fn get(&mut self, _captures: &Captures<'_>) -> Operation<String> {
        Ok("get-only".into())
    }
}

pub fn new_calls() -> Calls {
    Arc::new(Mutex::new(Vec::new()))
}

/// Registry with a [`Recorder`] under each of `names`, all sharing `calls`.
pub fn recording_registry(names: &[&'static str], calls: &Calls) -> Registry<String> {
    let mut registry = Registry::new();
    for &name in names {
        let calls = calls.clone();
        registry.register_with(name, move || {
            Box::new(Recorder {
                name,
                calls: calls.clone(),
            }) as Box<dyn Handler<String>>
        });
    }
    registry
}
