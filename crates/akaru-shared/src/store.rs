//! JSON file store for conversation memory.
//!
//! A missing or unreadable memory file is never fatal: it is treated as an
//! empty memory and overwritten on the next save.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::Result;
use crate::memory::Memory;

/// Default memory file, relative to the working directory
pub const DEFAULT_MEMORY_FILE: &str = "memory.json";

/// Receives the memory after every state-changing operation.
///
/// Fire-and-forget: implementations report their own failures.
pub trait Persister {
    fn persist(&mut self, memory: &Memory);
}

/// Memory document on disk
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
}

impl MemoryStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load memory, falling back to an empty one if absent or corrupt
    pub fn load(&self) -> Memory {
        if !self.path.exists() {
            info!("No memory file at {}, starting fresh", self.path.display());
            return Memory::new();
        }

        match self.read() {
            Ok(memory) => {
                info!(
                    "Loaded {} memory entries from {}",
                    memory.history.len(),
                    self.path.display()
                );
                memory
            }
            Err(e) => {
                warn!(
                    "Memory file {} is unreadable ({}), starting fresh",
                    self.path.display(),
                    e
                );
                Memory::new()
            }
        }
    }

    fn read(&self) -> Result<Memory> {
        let content = fs::read_to_string(&self.path)?;
        let memory = serde_json::from_str(&content)?;
        Ok(memory)
    }

    /// Write memory to disk
    pub fn save(&self, memory: &Memory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(memory)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_FILE)
    }
}

impl Persister for MemoryStore {
    fn persist(&mut self, memory: &Memory) {
        if let Err(e) = self.save(memory) {
            warn!("Failed to save memory to {}: {}", self.path.display(), e);
        }
    }
}
