use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::GlobalConfig;

use toolsmith::env::Environment;
use toolsmith::tools::{ROOT_VAR, ToolRegistry, apply_cpp_defaults};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolsmith")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolsmith.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Fresh environment seeded from config: preprocessor defaults plus the
/// configured Phar Lap root, when one is set.
fn build_env(config: &GlobalConfig) -> Environment {
    let mut env = Environment::new();
    apply_cpp_defaults(&mut env);
    if let Some(root) = &config.pharlap.root {
        env.set(ROOT_VAR, root.to_string_lossy().into_owned());
    }
    env
}

/// Pick a tool name: explicit choice, or the first available preferred tool.
fn select_tool(
    registry: &ToolRegistry,
    env: &Environment,
    explicit: Option<&str>,
    config: &GlobalConfig,
) -> Result<String> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }
    for name in &config.tools.preferred {
        if registry.is_available(name, env).unwrap_or(false) {
            info!("Auto-selected tool '{}'", name);
            return Ok(name.clone());
        }
    }
    Err(eyre!(
        "no preferred tool available (tried: {})",
        config.tools.preferred.join(", ")
    ))
}

fn handle_tools_command(config: &GlobalConfig) -> Result<()> {
    let registry = ToolRegistry::builtin();
    let env = build_env(config);

    for name in registry.list() {
        let available = registry.is_available(name, &env)?;
        let status = if available {
            "found".green()
        } else {
            "missing".red()
        };
        println!("{:<10} {}", name, status);
    }
    Ok(())
}

fn handle_init_command(tool: Option<&str>, json: bool, config: &GlobalConfig) -> Result<()> {
    let registry = ToolRegistry::builtin();
    let mut env = build_env(config);
    let name = select_tool(&registry, &env, tool, config)?;

    registry
        .initialize(&name, &mut env)
        .context(format!("Failed to initialize tool '{}'", name))?;
    info!("Initialized tool '{}', {} variables set", name, env.len());

    // Unrendered dump: templates keep their $VAR references visible.
    let vars: BTreeMap<&str, String> = env.iter().map(|(k, v)| (k, v.to_string())).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&vars)?);
    } else {
        println!("{} {}", "Environment for".cyan(), name.cyan().bold());
        for (key, value) in &vars {
            println!("  {:<16} = {}", key, value);
        }
    }
    Ok(())
}

fn handle_check_command(tool: &str, config: &GlobalConfig) -> Result<()> {
    let registry = ToolRegistry::builtin();
    let env = build_env(config);

    let available = registry
        .is_available(tool, &env)
        .context(format!("Unknown tool '{}'", tool))?;

    if available {
        println!("{} {}", tool, "found".green());
        Ok(())
    } else {
        println!("{} {}", tool, "missing".red());
        std::process::exit(1);
    }
}

fn handle_render_command(
    tool: &str,
    var: &str,
    sources: &[String],
    target: Option<&str>,
    defines: &[String],
    includes: &[String],
    config: &GlobalConfig,
) -> Result<()> {
    let registry = ToolRegistry::builtin();
    let mut env = build_env(config);

    registry
        .initialize(tool, &mut env)
        .context(format!("Failed to initialize tool '{}'", tool))?;

    if !sources.is_empty() {
        env.set("SOURCES", sources.to_vec());
    }
    if let Some(target) = target {
        env.set("TARGET", target);
    }
    if !defines.is_empty() {
        env.set("CPPDEFINES", defines.to_vec());
    }
    if !includes.is_empty() {
        env.set("CPPPATH", includes.to_vec());
    }

    let command = env
        .render_command(var)
        .context(format!("Failed to render '{}'", var))?;
    println!("{}", command);
    Ok(())
}

fn run_application(cli: &Cli, config: &GlobalConfig) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Tools => handle_tools_command(config),
        Commands::Init { tool, json } => handle_init_command(tool.as_deref(), *json, config),
        Commands::Check { tool } => handle_check_command(tool, config),
        Commands::Render {
            tool,
            var,
            source,
            target,
            define,
            include,
        } => handle_render_command(
            tool,
            var,
            source,
            target.as_deref(),
            define,
            include,
            config,
        ),
    }
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = GlobalConfig::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
