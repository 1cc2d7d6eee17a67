//! Subcommand definitions.

use clap::Subcommand;

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered tools and whether their executables are present
    Tools,

    /// Initialize an environment for a tool and dump its variables
    Init {
        /// Tool name; defaults to the first available preferred tool
        tool: Option<String>,

        /// Dump as JSON instead of aligned text
        #[arg(long)]
        json: bool,
    },

    /// Check whether a tool's executable is present on the search path
    Check {
        /// Tool name to check
        tool: String,
    },

    /// Render a command template for a tool
    Render {
        /// Tool name to initialize
        tool: String,

        /// Variable to render (e.g. ASCOM, ASPPCOM)
        #[arg(default_value = "ASCOM")]
        var: String,

        /// Source files
        #[arg(short, long)]
        source: Vec<String>,

        /// Output target
        #[arg(short, long)]
        target: Option<String>,

        /// Preprocessor defines (NAME or NAME=VALUE)
        #[arg(short = 'D', long)]
        define: Vec<String>,

        /// Include directories
        #[arg(short = 'I', long)]
        include: Vec<String>,
    },
}
