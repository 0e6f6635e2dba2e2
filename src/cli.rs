//! Command-line interface for shush
//!
//! Handles argument parsing and logging configuration.

use crate::error::ValidationError;
use crate::hotkey::{HotkeyBinding, HotkeyBindings};
use crate::listen::ListenConfig;
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// shush - toggle microphone mute from the command line or a global hotkey
#[derive(Parser, Debug)]
#[command(name = "shush")]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity
    /// -v = info, -vv = debug, -vvv = trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List active capture devices with their ids
    List,

    /// Toggle mute once
    Mute {
        /// 0 for the default communications device, or an id from `list`
        index: u32,
    },

    /// Stay resident and toggle mute with a global hotkey
    Lmute {
        /// 0 for the default communications device, or an id from `list`
        index: u32,

        #[command(flatten)]
        listen: ListenArgs,
    },
}

/// Listen mode options.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct ListenArgs {
    /// Hotkey that toggles mute
    #[arg(long, value_name = "KEYS", default_value = "Ctrl+Shift+O")]
    pub toggle_key: HotkeyBinding,

    /// Hotkey that exits listen mode
    #[arg(long, value_name = "KEYS", default_value = "Ctrl+Shift+U")]
    pub exit_key: HotkeyBinding,

    /// Don't play a sound after each toggle
    #[arg(long)]
    pub silent: bool,
}

impl ListenArgs {
    pub fn to_config(&self) -> Result<ListenConfig, ValidationError> {
        Ok(ListenConfig {
            bindings: HotkeyBindings::new(self.toggle_key, self.exit_key)?,
            cues: !self.silent,
        })
    }
}

impl Args {
    /// Get the log level filter based on verbosity flags
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::ERROR
        } else {
            match self.verbose {
                0 => LevelFilter::WARN,
                1 => LevelFilter::INFO,
                2 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        }
    }

    /// Log filter: `RUST_LOG` when set, otherwise the verbosity flags.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("shush={}", self.log_level())))
    }
}

/// Initialize the logging system based on CLI arguments
pub fn init_logging(args: &Args) {
    tracing_subscriber::fmt()
        .with_env_filter(args.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
