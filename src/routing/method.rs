//! Request verbs understood by the dispatcher.
//!
//! The supported set is deliberately small: the four REST verbs plus `CLI`,
//! which command-line front-ends use to reach handlers outside of HTTP.
//! Anything else collapses to `GET`.

use std::fmt;

/// A normalized request verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Cli,
}

impl Method {
    /// All supported verbs, in declaration order.
    pub const ALL: [Method; 5] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Cli,
    ];

    /// Parse a verb (case-insensitive). Returns `None` for anything outside
    /// the supported set, including names padded with whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PUT" => Some(Method::Put),
            "DELETE" => Some(Method::Delete),
            "CLI" => Some(Method::Cli),
            _ => None,
        }
    }

    /// Resolve the verb for a dispatch.
    ///
    /// Precedence: the explicit value if non-empty, else the ambient value,
    /// else `GET`. A non-empty value that is not a supported verb also
    /// yields `GET`; it does not fall through to the ambient value. Only the
    /// empty string counts as empty: whitespace is a value.
    pub fn normalize(explicit: Option<&str>, ambient: Option<&str>) -> Self {
        let chosen = [explicit, ambient]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty());

        chosen.and_then(Method::parse).unwrap_or_default()
    }

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Cli => "CLI",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
