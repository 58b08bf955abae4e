//! Built-in handlers served by the command-line front-end.
//!
//! - `index`: welcome text for `/`
//! - `page`: `GET` and `CLI` on a numbered page
//! - `echo`: every verb; answers with a JSON description of the request

use std::collections::BTreeMap;

use serde_json::json;

use crate::handler::{Handler, Operation, Registry};
use crate::routing::{Captures, Method};

#[derive(Debug, Default)]
pub struct Index;

impl Handler<String> for Index {
    fn get(&mut self, _captures: &Captures<'_>) -> Operation<String> {
        Ok("Welcome! Try /page/1.".to_string())
    }
}

#[derive(Debug, Default)]
pub struct Page;

impl Page {
    fn number<'p>(captures: &Captures<'p>) -> &'p str {
        captures.name("page").or_else(|| captures.get(1)).unwrap_or("?")
    }
}

impl Handler<String> for Page {
    fn get(&mut self, captures: &Captures<'_>) -> Operation<String> {
        Ok(format!("Your requested page {}", Self::number(captures)))
    }

    fn cli(&mut self, captures: &Captures<'_>) -> Operation<String> {
        Ok(format!("page={}", Self::number(captures)))
    }
}

#[derive(Debug, Default)]
pub struct Echo;

impl Echo {
    /// Built as a `Value`, whose `Display` is infallible.
    fn render(method: Method, captures: &Captures<'_>) -> Operation<String> {
        let groups: Vec<&str> = captures.iter().skip(1).collect();
        Ok(json!({
            "method": method.as_str(),
            "path": captures.whole(),
            "captures": groups,
        })
        .to_string())
    }
}

impl Handler<String> for Echo {
    fn get(&mut self, captures: &Captures<'_>) -> Operation<String> {
        Self::render(Method::Get, captures)
    }

    fn post(&mut self, captures: &Captures<'_>) -> Operation<String> {
        Self::render(Method::Post, captures)
    }

    fn put(&mut self, captures: &Captures<'_>) -> Operation<String> {
        Self::render(Method::Put, captures)
    }

    fn delete(&mut self, captures: &Captures<'_>) -> Operation<String> {
        Self::render(Method::Delete, captures)
    }

    fn cli(&mut self, captures: &Captures<'_>) -> Operation<String> {
        Self::render(Method::Cli, captures)
    }
}

/// Registry holding every built-in handler.
pub fn builtin_registry() -> Registry<String> {
    let mut registry = Registry::new();
    registry
        .register::<Index>("index")
        .register::<Page>("page")
        .register::<Echo>("echo");
    registry
}

/// Route table used when no configuration file is given.
pub fn default_routes() -> BTreeMap<String, String> {
    [("/", "index"), (r"/page/(\d+)", "page"), (r"/echo(/.*)?", "echo")]
        .into_iter()
        .map(|(pattern, handler)| (pattern.to_string(), handler.to_string()))
        .collect()
}
