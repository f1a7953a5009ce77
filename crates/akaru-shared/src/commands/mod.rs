//! Slash commands operating on conversation memory.

pub mod forget;
pub mod help;
pub mod mem;
pub mod registry;
pub mod tag;

pub use registry::{
    CommandContext, CommandHandler, CommandRegistry, CommandSettings, CommandSpec,
    COMMAND_MARKER, UNKNOWN_COMMAND_REPLY,
};

/// Shared by every handler that reads the log
pub const EMPTY_MEMORY_REPLY: &str = "memori kosong.";
