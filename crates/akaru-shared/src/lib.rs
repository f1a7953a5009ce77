//! Shared core for the Akaru chat bot.
//!
//! Classification, slash commands, contextual resolvers and the response
//! router, plus the memory document they operate on.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod memory;
pub mod resolvers;
pub mod router;
pub mod store;
pub mod tags;

pub use catalog::{FirstPicker, RandomPicker, ReplyPicker, ResponseCatalog};
pub use commands::{CommandRegistry, CommandSettings, CommandSpec, COMMAND_MARKER};
pub use config::AkaruConfig;
pub use error::AkaruError;
pub use memory::{Log, LogEntry, Memory, Profile};
pub use resolvers::{Clock, ContextResolver, FixedClock, SystemClock};
pub use router::{Resolution, ResolutionPath, Router};
pub use store::{MemoryStore, Persister};
pub use tags::{analyze_tags, Intent, Mood, Tags};

/// Crate version, embedded at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
