//! Chat session - owns memory and its store for the lifetime of the process.
//!
//! The router only borrows the memory for one turn; the session archives
//! the turn and saves afterwards.

use akaru_shared::config::{AkaruConfig, ChatConfig};
use akaru_shared::{Memory, MemoryStore, Persister, Resolution, Router};
use tracing::debug;

/// Notes that the router asked for a save. The session writes once per turn
/// after archiving, so a command that changed memory is saved together with
/// its own log entry.
#[derive(Debug, Default)]
struct PendingSave {
    requested: bool,
}

impl Persister for PendingSave {
    fn persist(&mut self, _memory: &Memory) {
        self.requested = true;
    }
}

pub struct Session {
    router: Router,
    memory: Memory,
    store: MemoryStore,
    chat: ChatConfig,
}

impl Session {
    /// Load memory from `store` and wire the router from `config`
    pub fn open(config: &AkaruConfig, store: MemoryStore) -> Self {
        let memory = store.load();
        Self::with_router(Router::from_config(config), memory, store, config.chat.clone())
    }

    pub fn with_router(router: Router, memory: Memory, store: MemoryStore, chat: ChatConfig) -> Self {
        Self {
            router,
            memory,
            store,
            chat,
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn chat_config(&self) -> &ChatConfig {
        &self.chat
    }

    pub fn is_exit(&self, input: &str) -> bool {
        self.chat.is_exit_word(input)
    }

    /// Resolve one input, archive the turn and save
    pub fn turn(&mut self, input: &str) -> Resolution {
        let mut pending = PendingSave::default();
        let resolution = self.router.resolve(input, &mut self.memory, &mut pending);

        self.memory
            .record_turn(input, &resolution.reply, resolution.tags.clone());
        self.store.persist(&self.memory);
        debug!(
            "Saved {} entries to {} (memory changed by turn: {})",
            self.memory.history.len(),
            self.store.path().display(),
            pending.requested
        );

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::from_config(&AkaruConfig::default())
    }

    #[test]
    fn test_router_saves_are_deferred_to_the_session() {
        let mut memory = Memory::new();
        memory.record_turn("beli kopi", "oke", Default::default());

        let mut pending = PendingSave::default();
        router().resolve("/forget all", &mut memory, &mut pending);
        assert!(pending.requested);
        assert!(memory.history.is_empty());

        let mut pending = PendingSave::default();
        router().resolve("/mem", &mut memory, &mut pending);
        assert!(!pending.requested);
    }

    #[test]
    fn test_command_changes_land_in_the_single_save() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("memory.json");
        let mut session = Session::open(&AkaruConfig::default(), MemoryStore::new(&path));
        session.turn("beli kopi");
        session.turn("/forget kopi");

        let saved = MemoryStore::new(&path).load();
        assert_eq!(&saved, session.memory());
        let users: Vec<_> = saved.history.entries().iter().map(|e| e.user_text.as_str()).collect();
        assert_eq!(users, vec!["/forget kopi"]);
    }
}
