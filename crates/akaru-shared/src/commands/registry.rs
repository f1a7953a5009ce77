//! Command registry - slash-command token to handler table.
//!
//! Built once at startup. Any input starting with the marker is owned by the
//! registry, including tokens it does not know.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::{AkaruError, Result};
use crate::memory::Memory;
use crate::store::Persister;

use super::{forget, help, mem, tag};

/// Every command token starts with this character
pub const COMMAND_MARKER: char = '/';

pub const UNKNOWN_COMMAND_REPLY: &str =
    "perintah gak dikenal. ketik /help buat lihat daftar perintah.";

/// Tunables shared by all handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSettings {
    /// Entries shown by `/mem` without an argument
    pub recent_count: usize,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self { recent_count: 5 }
    }
}

/// Everything a handler may read or mutate during one call
pub struct CommandContext<'a> {
    /// Arguments after the token, lower-cased
    pub args: Vec<String>,
    pub memory: &'a mut Memory,
    pub persister: &'a mut dyn Persister,
    pub commands: &'a [CommandSpec],
    pub settings: CommandSettings,
}

impl CommandContext<'_> {
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Hand the current memory to the persistence layer
    pub fn persist(&mut self) {
        self.persister.persist(&*self.memory);
    }
}

pub type CommandHandler = fn(&mut CommandContext<'_>) -> String;

/// One registered command
#[derive(Clone)]
pub struct CommandSpec {
    pub token: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub handler: CommandHandler,
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("token", &self.token)
            .field("usage", &self.usage)
            .finish()
    }
}

#[derive(Debug)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    index: HashMap<String, usize>,
    settings: CommandSettings,
}

impl CommandRegistry {
    pub fn new(settings: CommandSettings) -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
            settings,
        }
    }

    /// Registry with the built-in commands
    pub fn with_defaults(settings: CommandSettings) -> Self {
        let mut registry = Self::new(settings);
        for spec in [forget::spec(), mem::spec(), tag::spec(), help::spec()] {
            if let Err(e) = registry.register(spec) {
                warn!("Skipping built-in command: {}", e);
            }
        }
        registry
    }

    /// Add a command. Tokens must carry the marker and be unique.
    pub fn register(&mut self, spec: CommandSpec) -> Result<()> {
        let key = spec.token.to_lowercase();
        if !key.starts_with(COMMAND_MARKER) || key.len() == COMMAND_MARKER.len_utf8() {
            return Err(AkaruError::Config(format!(
                "command token '{}' must start with '{}'",
                spec.token, COMMAND_MARKER
            )));
        }
        if self.index.contains_key(&key) {
            return Err(AkaruError::Config(format!(
                "command token '{}' registered twice",
                spec.token
            )));
        }
        self.index.insert(key, self.commands.len());
        self.commands.push(spec);
        Ok(())
    }

    pub fn specs(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn get(&self, token: &str) -> Option<&CommandSpec> {
        self.index
            .get(&token.to_lowercase())
            .map(|&i| &self.commands[i])
    }

    /// True if the registry owns this input
    pub fn is_command(input: &str) -> bool {
        input.trim_start().starts_with(COMMAND_MARKER)
    }

    /// Run the command named by the first token of `input`
    pub fn dispatch(
        &self,
        input: &str,
        memory: &mut Memory,
        persister: &mut dyn Persister,
    ) -> String {
        let mut parts = input.split_whitespace();
        let token = parts.next().unwrap_or_default();

        let Some(spec) = self.get(token) else {
            debug!("Unknown command token '{}'", token);
            return UNKNOWN_COMMAND_REPLY.to_string();
        };

        debug!("Dispatching command {}", spec.token);
        let mut ctx = CommandContext {
            args: parts.map(str::to_lowercase).collect(),
            memory,
            persister,
            commands: &self.commands,
            settings: self.settings,
        };
        (spec.handler)(&mut ctx)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults(CommandSettings::default())
    }
}
