//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Akaru chat bot CLI
#[derive(Parser, Debug)]
#[command(name = "akaructl")]
#[command(about = "Akaru - rule-based chat bot with persistent memory", long_about = None)]
#[command(version = env!("AKARU_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Config file (overrides ~/.config/akaru/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Memory file (overrides [memory] path)
    #[arg(long, global = true)]
    pub memory: Option<PathBuf>,

    /// Debug logging on stderr (AKARU_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Plain output without colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand (if not provided, starts the chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive chat session
    Chat,

    /// Send one message, print the reply and remember the turn
    Ask {
        /// Message text
        #[arg(required = true)]
        text: Vec<String>,

        /// Print reply, tags and resolution path as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
