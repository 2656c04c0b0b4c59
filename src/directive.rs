//! # Include Directive Grammar
//!
//! Recognizes the include-directive forms on a trimmed source line:
//!
//! - `#include "name"`: a local include, resolved via the search path and
//!   recorded as a dependency edge.
//! - `#include <name>`: a system include, collected as an opaque name and
//!   never content-loaded.
//!
//! Whitespace between the token and the delimiter is optional, and anything
//! after the closing delimiter (a trailing comment, say) is ignored. A line
//! that starts with the token but matches neither form (including an
//! unterminated `"name` or `<name`) is malformed: callers diagnose it and
//! move on, it contributes no edge. Lines not starting with the token are
//! not directives at all.
//!
//! This is deliberately literal text matching, not preprocessing: no macro
//! expansion, no conditional-compilation evaluation, no comment awareness.

use regex::Regex;

/// The literal token opening every recognized directive.
pub const INCLUDE_TOKEN: &str = "#include";

/// Classification of a trimmed line that starts with [`INCLUDE_TOKEN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `#include "name"`: a graph edge to a local file.
    Local(String),
    /// `#include <name>`: an opaque system header reference.
    System(String),
    /// The token was present but the argument is neither quoted nor
    /// bracketed. Non-fatal; the line contributes nothing.
    Malformed,
}

/// Parser for include directives, holding its compiled pattern.
#[derive(Debug)]
pub struct DirectiveParser {
    pattern: Regex,
}

impl DirectiveParser {
    pub fn new() -> Self {
        // Delimited name after the token; trailing text is ignored.
        let pattern = Regex::new(r#"^#include\s*(?:"([^"]*)"|<([^>]*)>)"#)
            .expect("include directive pattern is valid");
        Self { pattern }
    }

    /// Classify a raw source line.
    ///
    /// Returns `None` when the trimmed line does not begin with the
    /// directive token; otherwise the directive classification, with
    /// `Directive::Malformed` for unrecognized continuations.
    pub fn parse(&self, line: &str) -> Option<Directive> {
        let trimmed = line.trim();
        if !trimmed.starts_with(INCLUDE_TOKEN) {
            return None;
        }
        let directive = match self.pattern.captures(trimmed) {
            Some(caps) => {
                if let Some(local) = caps.get(1) {
                    Directive::Local(local.as_str().to_string())
                } else {
                    Directive::System(caps[2].to_string())
                }
            }
            None => Directive::Malformed,
        };
        Some(directive)
    }
}

impl Default for DirectiveParser {
    fn default() -> Self {
        Self::new()
    }
}
