//! toolsmith - a build-tool configuration framework
//!
//! Tools are named plugins that configure a build environment (construction
//! variables and command templates) for one external program and report
//! whether that program is present on the host. The environment resolves
//! `$VAR` templates lazily, at the point of use.

pub mod env;
pub mod error;
pub mod tools;

pub use error::{Result, ToolsmithError};
