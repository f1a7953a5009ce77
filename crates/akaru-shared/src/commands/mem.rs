//! `/mem` - list recent memory entries.

use super::registry::{CommandContext, CommandSpec};
use super::EMPTY_MEMORY_REPLY;
use crate::memory::LogEntry;

pub const FORMAT_REPLY: &str = "format salah. contoh: /mem, /mem all, /mem <angka>";

pub fn spec() -> CommandSpec {
    CommandSpec {
        token: "/mem",
        usage: "/mem [all | <angka>]",
        description: "lihat catatan obrolan terakhir",
        handler,
    }
}

/// How many entries the argument asks for
enum Window {
    All,
    Last(usize),
}

fn parse_window(arg: Option<&str>, default_count: usize) -> Option<Window> {
    match arg {
        None => Some(Window::Last(default_count)),
        Some("all") => Some(Window::All),
        Some(n) if !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()) => {
            // Digits only, so parse fails only on overflow
            Some(Window::Last(n.parse().unwrap_or(usize::MAX)))
        }
        Some(_) => None,
    }
}

fn render(entries: &[LogEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {} → {}", i + 1, e.user_text, e.bot_text))
        .collect::<Vec<_>>()
        .join("\n")
}

fn handler(ctx: &mut CommandContext<'_>) -> String {
    let Some(window) = parse_window(ctx.arg(0), ctx.settings.recent_count) else {
        return FORMAT_REPLY.to_string();
    };

    let history = &ctx.memory.history;
    let (header, entries) = match window {
        Window::All => (
            format!("semua memori ({}):", history.len()),
            history.entries(),
        ),
        Window::Last(n) => (format!("{} catatan terakhir:", n), history.recent(n)),
    };

    if entries.is_empty() {
        return EMPTY_MEMORY_REPLY.to_string();
    }
    format!("{}\n{}", header, render(entries))
}
