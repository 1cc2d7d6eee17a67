//! Tool system - tool trait, registry, and builtin toolchain bindings.
//!
//! A tool is a named plugin that knows how to configure an environment for
//! one external program and how to detect that program's presence. Tools are
//! composed statically through the registry rather than looked up as modules
//! at load time.

use std::collections::HashMap;
use std::fmt;

use crate::env::Environment;
use crate::error::{Result, ToolsmithError};

mod cpp_defaults;
mod gas;
mod pharlap;
mod pharlap_asm;

pub use cpp_defaults::apply_cpp_defaults;
pub use gas::GasTool;
pub use pharlap::{add_pharlap_paths, ets_version, resolve_root, ROOT_VAR};
pub use pharlap_asm::PharLapAsmTool;

/// A named plugin configuring an environment for one external program.
pub trait Tool: Send + Sync {
    /// Registry name of the tool.
    fn name(&self) -> &'static str;

    /// Populate construction variables for this tool.
    ///
    /// Mutates the environment in place; assignments are last-writer-wins.
    /// Failures from delegated initializers propagate unchanged.
    fn initialize(&self, env: &mut Environment) -> Result<()>;

    /// Whether the tool's executable resolves on the host search path.
    ///
    /// Absence is a normal `false`, never an error.
    fn is_available(&self, env: &Environment) -> bool;
}

/// Mapping from tool name to its capability pair.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registry preloaded with the builtin tools.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GasTool));
        registry.register(Box::new(PharLapAsmTool));
        registry
    }

    /// Register a tool under its own name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Initialize the named tool against `env`.
    pub fn initialize(&self, name: &str, env: &mut Environment) -> Result<()> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolsmithError::ToolNotFound(name.to_string()))?;
        log::debug!("initializing tool '{}'", name);
        tool.initialize(env)
    }

    /// Availability of the named tool.
    pub fn is_available(&self, name: &str, env: &Environment) -> Result<bool> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolsmithError::ToolNotFound(name.to_string()))?;
        Ok(tool.is_available(env))
    }

    /// Sorted list of registered tool names.
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Whether a tool is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.list())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticDetector;
    use std::sync::Arc;

    #[test]
    fn test_registry_new_empty() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_builtin_tools() {
        let registry = ToolRegistry::builtin();
        assert!(registry.contains("as"));
        assert!(registry.contains("386asm"));
        assert_eq!(registry.list(), vec!["386asm", "as"]);
    }

    #[test]
    fn test_registry_get() {
        let registry = ToolRegistry::builtin();
        let tool = registry.get("386asm").unwrap();
        assert_eq!(tool.name(), "386asm");
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_registry_initialize_unknown_tool() {
        let registry = ToolRegistry::builtin();
        let mut env = Environment::new();
        let err = registry.initialize("nasm", &mut env).unwrap_err();
        assert_eq!(err.to_string(), "Tool not found: nasm");
    }

    #[test]
    fn test_registry_initialize_known_tool() {
        let registry = ToolRegistry::builtin();
        let mut env = Environment::with_detector(Arc::new(StaticDetector::empty()));
        registry.initialize("386asm", &mut env).unwrap();
        assert!(env.contains("AS"));
    }

    #[test]
    fn test_registry_is_available_unknown_tool() {
        let registry = ToolRegistry::builtin();
        let env = Environment::new();
        assert!(registry.is_available("nasm", &env).is_err());
    }

    #[test]
    fn test_registry_is_available_stubbed() {
        let registry = ToolRegistry::builtin();
        let env = Environment::with_detector(Arc::new(StaticDetector::with(&["386asm"])));
        assert!(registry.is_available("386asm", &env).unwrap());
        assert!(!registry.is_available("as", &env).unwrap());
    }

    #[test]
    fn test_registry_debug_lists_names() {
        let registry = ToolRegistry::builtin();
        let debug = format!("{:?}", registry);
        assert!(debug.contains("386asm"));
        assert!(debug.contains("as"));
    }
}
