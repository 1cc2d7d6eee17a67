//! Executable detection on the host search path.
//!
//! Detection sits behind a trait so tool availability can be stubbed in
//! tests without touching the host PATH.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Capability to locate an executable by name.
pub trait Detector: Send + Sync {
    /// Full path of `program` if it resolves on the search path.
    fn find(&self, program: &str) -> Option<PathBuf>;
}

/// Detector backed by the host PATH via the `which` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathDetector;

impl Detector for PathDetector {
    fn find(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// Fixed-answer detector for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct StaticDetector {
    programs: BTreeSet<String>,
}

impl StaticDetector {
    /// Detector that finds nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Detector that finds exactly the named programs.
    pub fn with(programs: &[&str]) -> Self {
        Self {
            programs: programs.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Mark one more program as present.
    pub fn add(&mut self, program: &str) {
        self.programs.insert(program.to_string());
    }
}

impl Detector for StaticDetector {
    fn find(&self, program: &str) -> Option<PathBuf> {
        self.programs
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }
}
