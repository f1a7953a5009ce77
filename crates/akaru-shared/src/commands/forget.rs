//! `/forget` - delete memory entries.

use super::registry::{CommandContext, CommandSpec};
use super::EMPTY_MEMORY_REPLY;

pub const USAGE_REPLY: &str = "format salah. contoh: /forget <kata>, /forget all, /forget last";

pub fn spec() -> CommandSpec {
    CommandSpec {
        token: "/forget",
        usage: "/forget <kata> | all | last",
        description: "hapus memori yang mengandung kata, semua, atau yang terakhir",
        handler,
    }
}

fn handler(ctx: &mut CommandContext<'_>) -> String {
    let Some(arg) = ctx.args.first().cloned() else {
        return USAGE_REPLY.to_string();
    };

    match arg.as_str() {
        "all" => {
            let removed = ctx.memory.history.clear();
            ctx.persist();
            format!("semua memori udah gue hapus ({} entry).", removed)
        }
        "last" => match ctx.memory.history.remove_last() {
            Some(entry) => {
                ctx.persist();
                format!("entry terakhir dihapus: '{}'", entry.user_text)
            }
            None => EMPTY_MEMORY_REPLY.to_string(),
        },
        keyword => {
            let removed = ctx.memory.history.remove_matching(keyword);
            ctx.persist();
            if removed == 0 {
                format!("0 memori dihapus, ga ada yang mengandung '{}'.", keyword)
            } else {
                format!("{} memori yang mengandung '{}' udah gue hapus.", removed, keyword)
            }
        }
    }
}
