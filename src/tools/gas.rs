//! Baseline assembler tool.
//!
//! Configures the generic `as` assembler: detects the executable, seeds the
//! flag variables, and installs the GNU-style command templates. Vendor
//! bindings delegate here first and then overwrite what differs.

use crate::env::{Environment, FlagList, Value};
use crate::error::Result;
use crate::tools::Tool;

/// Assembler names probed in order of preference.
const ASSEMBLERS: &[&str] = &["as", "gas"];

/// The generic `as` assembler tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct GasTool;

impl Tool for GasTool {
    fn name(&self) -> &'static str {
        "as"
    }

    fn initialize(&self, env: &mut Environment) -> Result<()> {
        let assembler = env
            .detect_first(ASSEMBLERS)
            .unwrap_or_else(|| "as".to_string());

        env.set("AS", assembler);
        env.set("ASFLAGS", FlagList::new());
        env.set("ASPPFLAGS", Value::template("$ASFLAGS"));
        env.set("ASCOM", Value::template("$AS $ASFLAGS -o $TARGET $SOURCES"));
        env.set(
            "ASPPCOM",
            Value::template(
                "$CC $ASPPFLAGS $CPPFLAGS $_CPPDEFFLAGS $_CPPINCFLAGS -c -o $TARGET $SOURCES",
            ),
        );
        Ok(())
    }

    fn is_available(&self, env: &Environment) -> bool {
        env.detect_first(ASSEMBLERS).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticDetector;
    use std::sync::Arc;

    fn env_with_programs(programs: &[&str]) -> Environment {
        Environment::with_detector(Arc::new(StaticDetector::with(programs)))
    }

    #[test]
    fn test_initialize_detects_assembler() {
        let mut env = env_with_programs(&["gas"]);
        GasTool.initialize(&mut env).unwrap();
        assert_eq!(env.get("AS").and_then(Value::as_str), Some("gas"));
    }

    #[test]
    fn test_initialize_prefers_as() {
        let mut env = env_with_programs(&["as", "gas"]);
        GasTool.initialize(&mut env).unwrap();
        assert_eq!(env.get("AS").and_then(Value::as_str), Some("as"));
    }

    #[test]
    fn test_initialize_falls_back_to_literal() {
        let mut env = env_with_programs(&[]);
        GasTool.initialize(&mut env).unwrap();
        assert_eq!(env.get("AS").and_then(Value::as_str), Some("as"));
    }

    #[test]
    fn test_initialize_empty_flags() {
        let mut env = env_with_programs(&[]);
        GasTool.initialize(&mut env).unwrap();
        let flags = env.get("ASFLAGS").and_then(Value::as_flags).unwrap();
        assert!(flags.is_empty());
    }

    #[test]
    fn test_gnu_argument_order() {
        let mut env = env_with_programs(&[]);
        GasTool.initialize(&mut env).unwrap();
        let ascom = env.get("ASCOM").unwrap().to_string();
        assert_eq!(ascom, "$AS $ASFLAGS -o $TARGET $SOURCES");
    }

    #[test]
    fn test_asppcom_references_cc() {
        let mut env = env_with_programs(&[]);
        GasTool.initialize(&mut env).unwrap();
        let asppcom = env.get("ASPPCOM").unwrap().to_string();
        assert!(asppcom.starts_with("$CC "));
        assert!(asppcom.contains("-c -o $TARGET"));
    }

    #[test]
    fn test_is_available() {
        assert!(GasTool.is_available(&env_with_programs(&["as"])));
        assert!(GasTool.is_available(&env_with_programs(&["gas"])));
        assert!(!GasTool.is_available(&env_with_programs(&["nasm"])));
    }
}
