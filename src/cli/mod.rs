//! Command-line interface for cursor-presets.
//!
//! Parses arguments, loads the config and dispatches subcommands to a
//! [`Session`] driving the current terminal. The interactive picker used by
//! `set` without a name lives in the [`prompt`] submodule.

pub mod prompt;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cursor_presets_config::{Config, LogLevel};

use crate::applicator::ApplyError;
use crate::session::Session;
use crate::terminal_host::TerminalHost;
use prompt::StdinPrompt;

/// cursor-presets - named cursor style presets for your terminal
#[derive(Parser)]
#[command(name = "cursor-presets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/cursor-presets/config.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// State file to use instead of the configured one
    #[arg(long, value_name = "PATH", global = true)]
    pub state_file: Option<PathBuf>,

    /// Set debug log level (overrides config and DEBUG_LEVEL)
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Off => LogLevel::Off,
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List preset names; `*` marks the recorded one
    List,

    /// Show the resolved attributes of a preset
    Show {
        name: String,

        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Apply a preset, prompting for one when no name is given
    Set {
        name: Option<String>,

        /// Apply to this terminal only (color and blink mode remain global)
        #[arg(long)]
        local: bool,
    },

    /// Apply the recorded preset, else `box`, else the built-in fallback
    Startup,

    /// Print the recorded preset name, if any
    Restore,

    /// Apply a preset and record it even when persistence is off
    Store { name: String },
}

/// Load the config named on the command line, or the default one
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = &cli.state_file {
        config.state_file = Some(path.clone());
    }
    Ok(config)
}

/// Run one subcommand to completion
pub fn run(cli: Cli, config: &Config) -> Result<()> {
    let host = TerminalHost::new(io::stdout(), config.faces.clone());
    let mut session =
        Session::from_config(config, host).context("Failed to build preset store")?;

    match cli.command {
        Commands::List => list(&session),
        Commands::Show { name, json } => show(&session, &name, json),
        Commands::Set { name, local } => set(&mut session, name.as_deref(), local),
        Commands::Startup => {
            let resolved = session.set_last_or_fallback()?;
            log::info!("Startup applied '{}'", resolved.name);
            Ok(())
        }
        Commands::Restore => {
            if let Some(name) = session.restore_latest()? {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Store { name } => {
            session.set_preset(&name)?;
            if !session.persist() {
                session.store_latest()?;
            }
            Ok(())
        }
    }
}

fn list<W: Write>(session: &Session<TerminalHost<W>>) -> Result<()> {
    let names = session.store().candidates()?;
    let recorded = match session.restore_latest() {
        Ok(recorded) => recorded,
        Err(e) => {
            log::warn!("Could not read state file: {}", e);
            None
        }
    };

    let mut stdout = io::stdout().lock();
    for name in names {
        let marker = if recorded.as_ref() == Some(name) { "*" } else { " " };
        writeln!(stdout, "{marker} {name}")?;
    }
    Ok(())
}

fn show<W: Write>(session: &Session<TerminalHost<W>>, name: &str, json: bool) -> Result<()> {
    let resolved = session.store().resolve(name)?;
    let text = if json {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_yaml_ng::to_string(&resolved)?
    };
    println!("{}", text.trim_end());
    Ok(())
}

fn set<W: Write>(
    session: &mut Session<TerminalHost<W>>,
    name: Option<&str>,
    local: bool,
) -> Result<()> {
    if local {
        eprintln!("note: cursor color and blink mode are applied globally");
    }

    let result = match (name, local) {
        (Some(name), false) => session.set_preset(name),
        (Some(name), true) => session.set_scoped_preset(name),
        (None, local) => {
            let mut prompt = StdinPrompt::new(io::stdin().lock(), io::stderr());
            if local {
                session.prompt_scoped_preset(&mut prompt)
            } else {
                session.prompt_preset(&mut prompt)
            }
        }
    };

    match result {
        Ok(_) => Ok(()),
        Err(ApplyError::Cancelled) => {
            log::info!("Selection cancelled");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
