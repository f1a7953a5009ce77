//! Response catalog - scripted replies keyed by trigger phrase.
//!
//! Triggers are checked in registration order; the first one found in the
//! lower-cased input wins and one of its replies is picked at random.

use rand::Rng;
use tracing::warn;

use crate::error::{AkaruError, Result};

/// Chooses one candidate out of `count`. Injected so tests can be deterministic.
pub trait ReplyPicker {
    /// Returns an index in `0..count`. `count` is never zero.
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform random choice using the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl ReplyPicker for RandomPicker {
    fn pick(&mut self, count: usize) -> usize {
        rand::thread_rng().gen_range(0..count)
    }
}

/// Always picks the first candidate
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPicker;

impl ReplyPicker for FirstPicker {
    fn pick(&mut self, _count: usize) -> usize {
        0
    }
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    trigger: String,
    replies: Vec<String>,
}

/// Immutable trigger → replies table
#[derive(Debug, Clone, Default)]
pub struct ResponseCatalog {
    entries: Vec<CatalogEntry>,
}

impl ResponseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger. Reply lists must be non-empty.
    pub fn add(&mut self, trigger: &str, replies: &[&str]) -> Result<()> {
        if replies.is_empty() {
            return Err(AkaruError::Config(format!(
                "catalog trigger '{}' has no replies",
                trigger
            )));
        }
        self.entries.push(CatalogEntry {
            trigger: trigger.to_lowercase(),
            replies: replies.iter().map(|r| r.to_string()).collect(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidates registered for the first trigger matching `text`
    pub fn candidates(&self, text: &str) -> Option<&[String]> {
        let text = text.to_lowercase();
        self.entries
            .iter()
            .find(|e| text.contains(&e.trigger))
            .map(|e| e.replies.as_slice())
    }

    /// Pick a reply for `text`, if any trigger matches
    pub fn lookup(&self, text: &str, picker: &mut dyn ReplyPicker) -> Option<&str> {
        let candidates = self.candidates(text)?;
        let index = picker.pick(candidates.len()).min(candidates.len() - 1);
        Some(candidates[index].as_str())
    }
}

/// The bot's scripted small talk
pub fn default_catalog() -> ResponseCatalog {
    let table: &[(&str, &[&str])] = &[
        (
            "pu haba",
            &[
                "halo, apa kabar?",
                "hai, apa yang bisa gue bantu?",
                "selamat datang!",
            ],
        ),
        (
            "apa kabar",
            &[
                "haba get, kah pu haba",
                "gue merasa baik-baik saja.",
                "gue ngerasa baik, terima kasih!",
            ],
        ),
        (
            "siapa kamu",
            &[
                "gue adalah bot, gue bisa bantu lo dengan pertanyaan yang ada dalam skrip.",
                "gue adalah asisten virtual, gue cuma bisa respon pertanyaan yang ada di skrip.",
            ],
        ),
        (
            "apa yang kamu bisa",
            &[
                "gue bisa bantu lo dengan pertanyaan, perintah, atau cuma sekedar ngobrol.",
                "gue bisa bantu cari informasi sederhana atau nemenin ngobrol.",
            ],
        ),
        (
            "bagaimana kabarmu",
            &[
                "gue baik, terima kasih!",
                "gue lagi baik-baik saja.",
                "gue merasa baik, terima kasih!",
            ],
        ),
        (
            "apa yang kamu suka",
            &[
                "gue suka bantu orang!",
                "gue suka ngobrol sama orang!",
                "gue suka belajar hal baru!",
            ],
        ),
        (
            "apa yang kamu tidak suka",
            &[
                "gue gak suka error!",
                "gue gak suka gak bisa bantu!",
                "gue gak suka kalau sabar orang habis!",
            ],
        ),
    ];

    let mut catalog = ResponseCatalog::new();
    for (trigger, replies) in table {
        if let Err(e) = catalog.add(trigger, replies) {
            warn!("Skipping catalog trigger '{}': {}", trigger, e);
        }
    }
    catalog
}
