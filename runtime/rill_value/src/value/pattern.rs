//! Compiled regular expression values.
//!
//! A pattern's identity is its source text: equality, ordering, and
//! stringification all go through `source`, never through the compiled
//! automaton. The automaton itself is immutable and thread-safe, so a single
//! `PatternValue` may be shared by concurrent evaluations.

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;

/// A compiled regular expression plus its original source text.
///
/// Matching is whole-subject: the automaton is compiled with `\A(?:...)\z`
/// wrapping, so `=~` reports whether the pattern matches the entire string,
/// not whether it merely occurs somewhere inside it. Anchors written in the
/// source remain harmless under the wrapping.
pub struct PatternValue {
    source: String,
    compiled: Regex,
}

impl PatternValue {
    /// Compile a pattern from its source text.
    pub fn compile(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let compiled = Regex::new(&format!(r"\A(?:{source})\z"))?;
        Ok(PatternValue { source, compiled })
    }

    /// The original source text, the pattern's identity.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern matches the entire subject.
    #[inline]
    pub fn matches(&self, subject: &str) -> bool {
        self.compiled.is_match(subject)
    }
}

impl PartialEq for PatternValue {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PatternValue {}

impl PartialOrd for PatternValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PatternValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source.cmp(&other.source)
    }
}

impl fmt::Debug for PatternValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", self.source)
    }
}

impl fmt::Display for PatternValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
