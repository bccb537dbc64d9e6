//! Config command - inspect or create the docbatch settings file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use tracing::debug;

use docbatch_core::DocbatchConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective parser and summary settings
    Show,

    /// Write a settings file holding the defaults
    Init {
        /// Where to write the file (default: user config directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace a file that is already there
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show(config_path),
        ConfigCommand::Init { output, force } => init(output, force),
    }
}

/// `<user config dir>/docbatch/config.json`
fn user_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docbatch")
        .join("config.json")
}

fn show(config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path.map_or_else(user_config_path, PathBuf::from);
    let config = if path.exists() {
        DocbatchConfig::from_file(&path)?
    } else if config_path.is_some() {
        anyhow::bail!("Settings file not found: {}", path.display());
    } else {
        DocbatchConfig::default()
    };

    let origin = if path.exists() {
        path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    debug!("Settings loaded from {}", origin);

    println!("{} {}", style("Source:").bold(), origin);
    println!("{:<22} = {}", "parser.date_format", config.parser.date_format);
    println!("{:<22} = {}", "summary.item_threshold", config.summary.item_threshold);

    Ok(())
}

fn init(output: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = output.unwrap_or_else(user_config_path);

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to replace it",
            path.display()
        );
    }
    create_parent(&path)?;

    DocbatchConfig::default().save(&path)?;
    println!("{} Wrote default settings to {}", style("✓").green(), path.display());

    Ok(())
}

fn create_parent(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(fs::create_dir_all(dir)?),
        _ => Ok(()),
    }
}
