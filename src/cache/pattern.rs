//! Key Pattern Module
//!
//! Redis-style glob patterns (`*` and `?`) used to enumerate cache keys.

use regex::Regex;

use crate::error::CacheError;

// == Key Pattern ==
/// A compiled glob matched against whole keys.
#[derive(Debug, Clone)]
pub struct KeyPattern {
    regex: Regex,
}

impl KeyPattern {
    /// Compiles a glob. `*` matches any run of characters, `?` exactly one,
    /// everything else matches literally.
    pub fn new(glob: &str) -> Result<Self, CacheError> {
        let mut expr = String::with_capacity(glob.len() + 8);
        // `*` spans newlines as it does in Redis
        expr.push_str("(?s)^");
        let mut literal = String::new();

        for ch in glob.chars() {
            match ch {
                '*' | '?' => {
                    expr.push_str(&regex::escape(&literal));
                    literal.clear();
                    expr.push_str(if ch == '*' { ".*" } else { "." });
                }
                _ => literal.push(ch),
            }
        }
        expr.push_str(&regex::escape(&literal));
        expr.push('$');

        let regex = Regex::new(&expr)
            .map_err(|e| CacheError::InvalidPattern(format!("{}: {}", glob, e)))?;

        Ok(Self { regex })
    }

    /// Returns true if the whole key matches.
    pub fn matches(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}
