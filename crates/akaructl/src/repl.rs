//! REPL - interactive read loop
//!
//! Reads one line, answers it, repeats until an exit word or EOF.

use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

use akaru_shared::resolvers::TimeOfDay;

use crate::session::Session;

pub const GOODBYE: &str = "sampai jumpa!...";

/// Output styling
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: bool,
}

impl Style {
    fn bot_prefix(&self) -> String {
        if self.color {
            "Bot:".cyan().bold().to_string()
        } else {
            "Bot:".to_string()
        }
    }
}

fn banner(style: Style) -> String {
    let part_of_day = TimeOfDay::from_hour(Local::now().hour()).label();
    let title = format!("=== akaru v{} ===", akaru_shared::VERSION);
    let title = if style.color {
        title.bright_magenta().to_string()
    } else {
        title
    };
    format!("{}\nselamat {}! ketik /help buat lihat perintah.", title, part_of_day)
}

/// Run the chat loop until exit or end of input
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut output: W,
    style: Style,
) -> Result<()> {
    writeln!(output, "{}", banner(style))?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", session.chat_config().prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line.context("failed to read input")?,
            None => {
                writeln!(output)?;
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if session.is_exit(line) {
            writeln!(output, "{}", GOODBYE)?;
            break;
        }

        let resolution = session.turn(line);
        writeln!(output, "{} {}", style.bot_prefix(), resolution.reply)?;
    }

    Ok(())
}
