//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - tools: list registered tools and their availability
//! - init: initialize an environment for a tool and dump it
//! - check: report whether a tool's executable is present
//! - render: render a command template for a tool

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

use commands::Commands;

/// toolsmith - build-tool configuration for assembler toolchains
#[derive(Parser, Debug)]
#[command(name = "toolsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
