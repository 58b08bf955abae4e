//! Route pattern normalization.
//!
//! # Rules
//! - Every `/` in the source is escaped to `\/`
//! - The result is anchored at both ends
//! - An optional trailing slash is appended (`\/?`)
//! - Matching is case-insensitive
//! - Classes and case folding are ASCII-only where the pattern allows it
//!
//! So `/page/(\d+)` becomes `^\/page\/(\d+)\/?$` with the `i` flag.
//!
//! # ASCII first
//! Patterns are compiled with Unicode support off, so `\d` is `[0-9]` and
//! `/page/(\d+)` does not match `/page/٤٢`. Some patterns cannot be built that
//! way because they could match partial UTF-8 sequences (`.`, negated
//! classes like `[^/]`); those are compiled again with Unicode on, where such
//! classes match whole code points and `\d`/`\w` are Unicode-aware.

use regex::{Regex, RegexBuilder};

use crate::routing::error::PatternError;

/// A route pattern compiled into an anchored, case-insensitive regex.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` using the normalization rules above.
    pub fn compile(source: impl Into<String>) -> Result<Self, PatternError> {
        let source = source.into();
        let anchored = anchor(&source);
        let regex = match build(&anchored, false) {
            Ok(regex) => regex,
            Err(_) => build(&anchored, true).map_err(|e| PatternError {
                pattern: source.clone(),
                source: e,
            })?,
        };

        Ok(Self { source, regex })
    }

    /// The pattern as written in the route table.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

fn build(anchored: &str, unicode: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(anchored)
        .case_insensitive(true)
        .unicode(unicode)
        .build()
}

/// Escape separators and wrap with anchors plus the optional trailing slash.
pub fn anchor(source: &str) -> String {
    format!("^{}\\/?$", source.replace('/', "\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_escapes_separators() {
        assert_eq!(anchor("/"), r"^\/\/?$");
        assert_eq!(anchor(r"/page/(\d+)"), r"^\/page\/(\d+)\/?$");
        assert_eq!(anchor(""), r"^\/?$");
    }

    #[test]
    fn test_anchored_both_ends() {
        let p = Pattern::compile("/page").unwrap();
        assert!(p.is_match("/page"));
        assert!(!p.is_match("/page/extra"));
        assert!(!p.is_match("/other/page"));
    }

    #[test]
    fn test_trailing_slash_optional() {
        let p = Pattern::compile("/page").unwrap();
        assert!(p.is_match("/page/"));
        assert!(!p.is_match("/page//"));
    }

    #[test]
    fn test_case_insensitive() {
        let p = Pattern::compile("/Page").unwrap();
        assert!(p.is_match("/PAGE"));
        assert!(p.is_match("/page"));
    }

    #[test]
    fn test_root_matches_empty_and_slash() {
        let p = Pattern::compile("/").unwrap();
        assert!(p.is_match("/"));
        assert!(p.is_match("//"));
        assert!(!p.is_match(""));
    }

    #[test]
    fn test_digits_are_ascii_only() {
        let p = Pattern::compile(r"/page/(\d+)").unwrap();
        assert!(p.is_match("/page/42"));
        assert!(!p.is_match("/page/٤٢"));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        let p = Pattern::compile("/k").unwrap();
        assert!(p.is_match("/K"));
        // KELVIN SIGN folds to 'k' only under Unicode rules.
        assert!(!p.is_match("/\u{212A}"));
    }

    #[test]
    fn test_any_char_patterns_still_compile() {
        let p = Pattern::compile("/files/(.+)").unwrap();
        assert!(p.is_match("/files/é"));
        let p = Pattern::compile("/seg/([^/]+)").unwrap();
        assert!(p.is_match("/seg/abc"));
        assert!(!p.is_match("/seg/a/b"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Pattern::compile("/page/(").unwrap_err();
        assert_eq!(err.pattern, "/page/(");
        assert!(err.to_string().contains(r#""/page/(""#));

        // Debug formatting escapes the backslash in the message.
        let err = Pattern::compile(r"/page/(\d+").unwrap_err();
        assert!(err.to_string().contains(r#""/page/(\\d+""#));
    }
}
