//! Build environment: the construction-variable namespace.
//!
//! An [`Environment`] maps variable names to [`Value`]s and is mutated in
//! place by tool initializers during one configuration pass. Assignment is
//! last-writer-wins; templates stored in the environment are re-evaluated
//! each time they are rendered, never eagerly copied.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

pub use self::detect::{Detector, PathDetector, StaticDetector};
pub use self::template::{Template, Token};
pub use self::value::{ComputedFn, FlagList, Value};

mod detect;
mod template;
mod value;

/// A mutable configuration namespace for one build-setup pass.
#[derive(Clone)]
pub struct Environment {
    vars: HashMap<String, Value>,
    detector: Arc<dyn Detector>,
}

impl Environment {
    /// Environment with host-PATH detection.
    pub fn new() -> Self {
        Self::with_detector(Arc::new(PathDetector))
    }

    /// Environment with an injected detection capability.
    pub fn with_detector(detector: Arc<dyn Detector>) -> Self {
        Self {
            vars: HashMap::new(),
            detector,
        }
    }

    /// Set a variable, overwriting any prior value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Set a variable only when it is not already present.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.vars.entry(key.into()).or_insert_with(|| value.into());
    }

    /// The stored (unrendered) value of a variable.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Remove a variable, returning its prior value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.vars.remove(key)
    }

    /// Whether a variable is set.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Number of variables set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the environment has no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over all variables in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Expand `$VAR` references in `text` against the current contents.
    pub fn subst(&self, text: &str) -> Result<String> {
        Template::parse(text).render(self)
    }

    /// Render one variable to its fully expanded string.
    ///
    /// Missing variables render as the empty string.
    pub fn render(&self, key: &str) -> Result<String> {
        template::resolve_var(self, key, 0)
    }

    /// Render a command-template variable, collapsing the whitespace runs
    /// that empty references leave behind.
    pub fn render_command(&self, key: &str) -> Result<String> {
        let rendered = self.render(key)?;
        Ok(rendered.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// Prepend `dir` to a path-list variable unless already present.
    ///
    /// A missing entry becomes a one-element list; a plain-string entry is
    /// promoted to a list keeping the string as its only element.
    pub fn prepend_path_unique(&mut self, key: &str, dir: &Path) {
        let dir = dir.to_string_lossy().into_owned();
        let entry = self
            .vars
            .entry(key.to_string())
            .or_insert_with(|| Value::List(Vec::new()));

        if !matches!(entry, Value::List(_)) {
            let existing = match entry {
                Value::Str(s) if !s.is_empty() => vec![s.clone()],
                _ => Vec::new(),
            };
            *entry = Value::List(existing);
        }
        if let Value::List(paths) = entry {
            if !paths.iter().any(|p| p == &dir) {
                paths.insert(0, dir);
            }
        }
    }

    /// Whether `program` resolves on the search path.
    pub fn detect(&self, program: &str) -> bool {
        self.detector.find(program).is_some()
    }

    /// First of `programs` that resolves on the search path.
    pub fn detect_first(&self, programs: &[&str]) -> Option<String> {
        programs
            .iter()
            .find(|p| self.detect(p))
            .map(|p| p.to_string())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("vars", &self.vars)
            .finish_non_exhaustive()
    }
}
