//! `/tag` - inspect and count stored tags.

use super::registry::{CommandContext, CommandSpec};
use super::EMPTY_MEMORY_REPLY;
use crate::memory::LogEntry;

pub const FORMAT_REPLY: &str =
    "format salah. format: /tag last | /tag topic <kata> | /tag intent <i> | /tag mood <m>";

pub fn spec() -> CommandSpec {
    CommandSpec {
        token: "/tag",
        usage: "/tag last | topic <kata> | intent <i> | mood <m>",
        description: "lihat tag terakhir atau hitung entry per tag",
        handler,
    }
}

fn count(ctx: &CommandContext<'_>, matches: impl Fn(&LogEntry) -> bool) -> usize {
    ctx.memory.history.entries().iter().filter(|&e| matches(e)).count()
}

fn handler(ctx: &mut CommandContext<'_>) -> String {
    match (ctx.arg(0), ctx.arg(1)) {
        (Some("last"), _) => match ctx.memory.history.last() {
            Some(entry) => entry.tags.render(),
            None => EMPTY_MEMORY_REPLY.to_string(),
        },
        (Some("topic"), Some(topic)) => {
            let found = count(ctx, |e| e.tags.has_topic(topic));
            format!("ditemukan {} entry dengan topic '{}'.", found, topic)
        }
        (Some("intent"), Some(intent)) => {
            let found = count(ctx, |e| e.tags.intent.label() == intent);
            format!("ditemukan {} entry intent '{}'.", found, intent)
        }
        (Some("mood"), Some(mood)) => {
            let found = count(ctx, |e| e.tags.mood.map(|m| m.label()) == Some(mood));
            format!("ditemukan {} entry mood '{}'.", found, mood)
        }
        _ => FORMAT_REPLY.to_string(),
    }
}
