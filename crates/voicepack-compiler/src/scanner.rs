//! Token scanner.
//!
//! Splits a raw template into alternating literal runs and `{placeholder}`
//! segments.  A placeholder is a `{`, one or more characters that are not
//! braces, and a `}`.  Literal runs are kept byte-for-byte, including
//! whitespace and punctuation, and are only ever cut at placeholder
//! boundaries.  Empty segments are never produced.

use regex::Regex;

use crate::error::{CompileError, Result};

/// Placeholder grammar: braces retained, no nested braces.
pub const PLACEHOLDER_PATTERN: &str = r"\{[^{}]+\}";

/// Splits templates into raw segments.
#[derive(Debug, Clone)]
pub struct TokenScanner {
    placeholder: Regex,
}

impl TokenScanner {
    /// Create a scanner using [`PLACEHOLDER_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(PLACEHOLDER_PATTERN)
    }

    /// Create a scanner with a custom placeholder pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let placeholder = Regex::new(pattern).map_err(|e| CompileError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { placeholder })
    }

    /// Split `text` into its ordered, non-empty segments.
    pub fn scan<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for m in self.placeholder.find_iter(text) {
            if m.start() > cursor {
                segments.push(&text[cursor..m.start()]);
            }
            segments.push(m.as_str());
            cursor = m.end();
        }

        if cursor < text.len() {
            segments.push(&text[cursor..]);
        }

        segments
    }
}
