//! `/help` - list every registered command.

use super::registry::{CommandContext, CommandSpec};

pub fn spec() -> CommandSpec {
    CommandSpec {
        token: "/help",
        usage: "/help",
        description: "tampilkan daftar perintah ini",
        handler,
    }
}

fn handler(ctx: &mut CommandContext<'_>) -> String {
    let lines: Vec<String> = ctx
        .commands
        .iter()
        .map(|c| format!("  {} - {}", c.usage, c.description))
        .collect();
    format!("daftar perintah:\n{}", lines.join("\n"))
}
