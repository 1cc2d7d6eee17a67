//! Phar Lap ETS installation helpers.
//!
//! Shared by the Phar Lap tool bindings: resolves the installation root,
//! registers its search paths in the environment, and probes the ETS kernel
//! version from the installation headers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::env::Environment;
use crate::error::Result;

/// Environment entry naming the installation root.
pub const ROOT_VAR: &str = "PHARLAP_ROOT";

/// Process variable the ETS toolchain sets on installed hosts.
const ETSDIR_VAR: &str = "ETSDIR";

/// Resolve the Phar Lap installation root.
///
/// The `PHARLAP_ROOT` entry wins over the `ETSDIR` process variable; `None`
/// when neither is set.
pub fn resolve_root(env: &Environment) -> Option<PathBuf> {
    if let Some(value) = env.get(ROOT_VAR) {
        return Some(PathBuf::from(value.to_string()));
    }
    std::env::var_os(ETSDIR_VAR).map(PathBuf::from)
}

/// Register Phar Lap search paths in `env`.
///
/// Prepends `<root>/include`, `<root>/lib`, and `<root>/bin` to the
/// `INCLUDE`, `LIB`, and `PATH` entries, skipping directories already
/// present. When no root resolves this is a logged no-op so tool
/// initialization still succeeds on hosts without an installation.
pub fn add_pharlap_paths(env: &mut Environment) -> Result<()> {
    let Some(root) = resolve_root(env) else {
        log::debug!(
            "no Phar Lap root ({} entry and {} unset), search paths unchanged",
            ROOT_VAR,
            ETSDIR_VAR
        );
        return Ok(());
    };

    env.prepend_path_unique("INCLUDE", &root.join("include"));
    env.prepend_path_unique("LIB", &root.join("lib"));
    env.prepend_path_unique("PATH", &root.join("bin"));
    env.set(ROOT_VAR, root.to_string_lossy().into_owned());

    if let Some(version) = ets_version(&root) {
        log::debug!("Phar Lap ETS version {} at {}", version, root.display());
        env.set("PHARLAP_ETS_VER", version.to_string());
    }
    Ok(())
}

/// ETS kernel version from `<root>/include/embkern.h`, if readable.
///
/// Looks for a `#define ETS_VER <number>` line.
pub fn ets_version(root: &Path) -> Option<u32> {
    let header = root.join("include").join("embkern.h");
    let content = fs::read_to_string(&header).ok()?;
    for line in content.lines() {
        if let Some(rest) = line.trim().strip_prefix("#define") {
            let mut parts = rest.split_whitespace();
            if parts.next() == Some("ETS_VER") {
                if let Some(number) = parts.next() {
                    if let Ok(version) = number.parse() {
                        return Some(version);
                    }
                }
            }
        }
    }
    None
}
