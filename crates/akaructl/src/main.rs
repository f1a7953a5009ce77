//! Akaru Control - chat with Akaru from the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::info;

use akaru_shared::{AkaruConfig, MemoryStore};
use akaructl::cli::{Cli, Commands};
use akaructl::repl::{self, Style};
use akaructl::{logging, Session};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = AkaruConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(path) = &cli.memory {
        config.memory.path = path.clone();
    }
    info!("akaructl v{} using memory {}", env!("AKARU_VERSION"), config.memory.path.display());

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let mut session = Session::open(&config, MemoryStore::new(&config.memory.path));
            let style = Style {
                color: config.chat.color && !cli.no_color,
            };
            let stdin = io::stdin();
            repl::run(&mut session, stdin.lock(), io::stdout(), style)
        }
        Commands::Ask { text, json } => {
            let mut session = Session::open(&config, MemoryStore::new(&config.memory.path));
            let resolution = session.turn(&text.join(" "));
            if json {
                let value = serde_json::json!({
                    "reply": resolution.reply,
                    "tags": resolution.tags,
                    "path": resolution.path.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", resolution.reply);
            }
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml().context("Failed to render config")?);
            Ok(())
        }
    }
}
