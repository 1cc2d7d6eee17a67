//! C-preprocessor default variables.
//!
//! Installs the entries the preprocess-and-assemble command templates
//! reference: the C compiler, preprocessor flag containers, and the derived
//! `_CPPDEFFLAGS`/`_CPPINCFLAGS` entries computed from `CPPDEFINES` and
//! `CPPPATH` at render time. Defaults never clobber values already set.

use crate::env::{Environment, FlagList, Value};
use crate::error::Result;

/// Install preprocessor defaults into `env`.
pub fn apply_cpp_defaults(env: &mut Environment) {
    env.set_default("CC", "cc");
    env.set_default("CPPFLAGS", FlagList::new());
    env.set_default("CPPDEFINES", Vec::<String>::new());
    env.set_default("CPPPATH", Vec::<String>::new());
    env.set_default("CPPDEFPREFIX", "-D");
    env.set_default("INCPREFIX", "-I");
    env.set_default("_CPPDEFFLAGS", Value::Computed(cpp_def_flags));
    env.set_default("_CPPINCFLAGS", Value::Computed(cpp_inc_flags));
}

fn cpp_def_flags(env: &Environment) -> Result<String> {
    prefixed_list(env, "CPPDEFINES", "CPPDEFPREFIX")
}

fn cpp_inc_flags(env: &Environment) -> Result<String> {
    prefixed_list(env, "CPPPATH", "INCPREFIX")
}

/// Join each element of a list variable behind a prefix variable.
fn prefixed_list(env: &Environment, list_key: &str, prefix_key: &str) -> Result<String> {
    let prefix = env.render(prefix_key)?;
    let items: Vec<String> = match env.get(list_key) {
        Some(Value::List(items)) => items.clone(),
        Some(Value::Str(s)) if !s.is_empty() => vec![s.clone()],
        Some(Value::Flags(flags)) => flags.iter().map(String::from).collect(),
        _ => Vec::new(),
    };
    Ok(items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_installed() {
        let mut env = Environment::new();
        apply_cpp_defaults(&mut env);
        assert_eq!(env.get("CC").and_then(Value::as_str), Some("cc"));
        assert_eq!(env.get("CPPDEFPREFIX").and_then(Value::as_str), Some("-D"));
        assert_eq!(env.get("INCPREFIX").and_then(Value::as_str), Some("-I"));
        assert!(env.contains("_CPPDEFFLAGS"));
        assert!(env.contains("_CPPINCFLAGS"));
    }

    #[test]
    fn test_defaults_do_not_clobber() {
        let mut env = Environment::new();
        env.set("CC", "hc386");
        apply_cpp_defaults(&mut env);
        assert_eq!(env.get("CC").and_then(Value::as_str), Some("hc386"));
    }

    #[test]
    fn test_def_flags_empty_by_default() {
        let mut env = Environment::new();
        apply_cpp_defaults(&mut env);
        assert_eq!(env.render("_CPPDEFFLAGS").unwrap(), "");
        assert_eq!(env.render("_CPPINCFLAGS").unwrap(), "");
    }

    #[test]
    fn test_def_flags_from_defines() {
        let mut env = Environment::new();
        apply_cpp_defaults(&mut env);
        env.set(
            "CPPDEFINES",
            vec!["ETS".to_string(), "DEBUG=1".to_string()],
        );
        assert_eq!(env.render("_CPPDEFFLAGS").unwrap(), "-DETS -DDEBUG=1");
    }

    #[test]
    fn test_inc_flags_from_cpppath() {
        let mut env = Environment::new();
        apply_cpp_defaults(&mut env);
        env.set("CPPPATH", vec!["/ets/include".to_string()]);
        assert_eq!(env.render("_CPPINCFLAGS").unwrap(), "-I/ets/include");
    }

    #[test]
    fn test_flags_recompute_on_change() {
        let mut env = Environment::new();
        apply_cpp_defaults(&mut env);
        env.set("CPPDEFINES", vec!["A".to_string()]);
        assert_eq!(env.render("_CPPDEFFLAGS").unwrap(), "-DA");

        env.set("CPPDEFINES", vec!["B".to_string()]);
        assert_eq!(env.render("_CPPDEFFLAGS").unwrap(), "-DB");
    }

    #[test]
    fn test_custom_prefix() {
        let mut env = Environment::new();
        apply_cpp_defaults(&mut env);
        env.set("CPPDEFPREFIX", "/D");
        env.set("CPPDEFINES", vec!["WIN32".to_string()]);
        assert_eq!(env.render("_CPPDEFFLAGS").unwrap(), "/DWIN32");
    }

    #[test]
    fn test_string_define_treated_as_single() {
        let mut env = Environment::new();
        apply_cpp_defaults(&mut env);
        env.set("CPPDEFINES", "ETS");
        assert_eq!(env.render("_CPPDEFFLAGS").unwrap(), "-DETS");
    }
}
