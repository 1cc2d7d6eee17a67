//! Configuration values stored in an environment.
//!
//! A construction variable holds a plain string, a flag list, a plain list,
//! a lazily rendered template, or a computed entry derived from other
//! variables at render time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::env::{Environment, Template};
use crate::error::Result;

/// Derived entry evaluated against the environment at render time.
pub type ComputedFn = fn(&Environment) -> Result<String>;

/// A single construction-variable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Plain string; may itself contain `$VAR` references, expanded on render.
    Str(String),
    /// Command-line flag words.
    Flags(FlagList),
    /// Plain list of strings (sources, search paths, defines).
    List(Vec<String>),
    /// Parsed template, re-evaluated each time it is rendered.
    Template(Template),
    /// Derived entry computed from other variables.
    Computed(ComputedFn),
}

impl Value {
    /// Parse `source` into a template value.
    pub fn template(source: &str) -> Self {
        Value::Template(Template::parse(source))
    }

    /// The string payload, if this is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The flag list payload, if this is a flag list.
    pub fn as_flags(&self) -> Option<&FlagList> {
        match self {
            Value::Flags(flags) => Some(flags),
            _ => None,
        }
    }

    /// The list payload, if this is a plain list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Unrendered display: templates show their source text, not their expansion.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Flags(flags) => write!(f, "{}", flags),
            Value::List(items) => write!(f, "{}", items.join(" ")),
            Value::Template(t) => write!(f, "{}", t.source()),
            Value::Computed(_) => write!(f, "<computed>"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<FlagList> for Value {
    fn from(flags: FlagList) -> Self {
        Value::Flags(flags)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}

impl From<Template> for Value {
    fn from(template: Template) -> Self {
        Value::Template(template)
    }
}

/// Command-line flag words with command-line-style concatenation.
///
/// Distinct from a plain string: appending flags extends the word list
/// rather than gluing characters together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagList {
    words: Vec<String>,
}

impl FlagList {
    /// Create an empty flag list.
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Split `text` on whitespace into flag words.
    pub fn parse(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(String::from).collect(),
        }
    }

    /// Append one flag word.
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    /// Append all words from another flag list.
    pub fn extend_from(&mut self, other: &FlagList) {
        self.words.extend(other.words.iter().cloned());
    }

    /// Number of flag words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the flag words.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }

    /// The flag words as a slice.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Display for FlagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

impl From<&str> for FlagList {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}
