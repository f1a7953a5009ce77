//! Response router - resolves one input line to exactly one reply.
//!
//! Strategies are tried in a fixed order and the first that applies wins:
//!
//! 1. slash command (terminal even for unknown tokens)
//! 2. name declaration ("nama saya ...")
//! 3. name query ("siapa nama saya")
//! 4. contextual resolvers, in registration order (time, then weather)
//! 5. response catalog
//! 6. fallback heuristics

use std::fmt;
use tracing::debug;

use crate::catalog::{default_catalog, RandomPicker, ReplyPicker, ResponseCatalog};
use crate::commands::{CommandRegistry, CommandSettings};
use crate::config::AkaruConfig;
use crate::memory::Memory;
use crate::resolvers::{ContextResolver, SystemClock, TimeResolver, WeatherResolver};
use crate::store::Persister;
use crate::tags::{analyze_tags, Intent, Tags};

pub const NAME_DECLARATION_PHRASE: &str = "nama saya";
pub const NAME_QUERY_PHRASE: &str = "siapa nama saya";

const BROAD_QUESTION_WORDS: &[&str] = &["kenapa", "bagaimana", "gimana", "apa itu"];

/// Which strategy produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    Command,
    NameDeclaration,
    NameQuery,
    /// Contextual resolver, by topic label
    Contextual(&'static str),
    Catalog,
    Fallback,
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionPath::Command => f.write_str("command"),
            ResolutionPath::NameDeclaration => f.write_str("name_declaration"),
            ResolutionPath::NameQuery => f.write_str("name_query"),
            ResolutionPath::Contextual(topic) => write!(f, "contextual:{}", topic),
            ResolutionPath::Catalog => f.write_str("catalog"),
            ResolutionPath::Fallback => f.write_str("fallback"),
        }
    }
}

/// Outcome of one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub reply: String,
    pub tags: Tags,
    pub path: ResolutionPath,
}

pub struct Router {
    commands: CommandRegistry,
    resolvers: Vec<Box<dyn ContextResolver>>,
    catalog: ResponseCatalog,
    picker: Box<dyn ReplyPicker>,
}

impl Router {
    /// Router without contextual resolvers
    pub fn new(
        commands: CommandRegistry,
        catalog: ResponseCatalog,
        picker: Box<dyn ReplyPicker>,
    ) -> Self {
        Self {
            commands,
            resolvers: Vec::new(),
            catalog,
            picker,
        }
    }

    /// Append a resolver; earlier resolvers take precedence
    pub fn with_resolver(mut self, resolver: Box<dyn ContextResolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }

    /// Production wiring: built-in commands, wall clock, random replies
    pub fn from_config(config: &AkaruConfig) -> Self {
        let settings = CommandSettings {
            recent_count: config.memory.recent_count,
        };
        Self::new(
            CommandRegistry::with_defaults(settings),
            default_catalog(),
            Box::new(RandomPicker),
        )
        .with_resolver(Box::new(TimeResolver::new(Box::new(SystemClock))))
        .with_resolver(Box::new(WeatherResolver::new(config.weather.clone())))
    }

    /// Resolve one input against the current memory.
    ///
    /// Memory is only borrowed for this call. Every mutation is followed by
    /// a call to `persister`.
    pub fn resolve(
        &mut self,
        input: &str,
        memory: &mut Memory,
        persister: &mut dyn Persister,
    ) -> Resolution {
        let tags = analyze_tags(input);
        let (reply, path) = self.route(input, &tags, memory, persister);
        debug!("Resolved via {} ({} chars)", path, reply.len());
        Resolution { reply, tags, path }
    }

    fn route(
        &mut self,
        input: &str,
        tags: &Tags,
        memory: &mut Memory,
        persister: &mut dyn Persister,
    ) -> (String, ResolutionPath) {
        if CommandRegistry::is_command(input) {
            let reply = self.commands.dispatch(input, memory, persister);
            return (reply, ResolutionPath::Command);
        }

        let lower = input.to_lowercase();

        if lower.contains(NAME_DECLARATION_PHRASE) && !lower.contains(NAME_QUERY_PHRASE) {
            return (
                declare_name(input, memory, persister),
                ResolutionPath::NameDeclaration,
            );
        }

        if lower.contains(NAME_QUERY_PHRASE) {
            let reply = match memory.profile.name() {
                Some(name) => format!("Namamu {}.", name),
                None => "gue belum tau namamu. kasih tau dong, ketik 'nama saya <namamu>'."
                    .to_string(),
            };
            return (reply, ResolutionPath::NameQuery);
        }

        if let Some(resolver) = self.resolvers.iter().find(|r| tags.has_topic(r.topic())) {
            return (
                resolver.resolve(tags, input),
                ResolutionPath::Contextual(resolver.topic()),
            );
        }

        if let Some(reply) = self.catalog.lookup(&lower, self.picker.as_mut()) {
            return (reply.to_string(), ResolutionPath::Catalog);
        }

        (fallback(&lower, tags, memory), ResolutionPath::Fallback)
    }
}

/// Byte offset of `needle` in `haystack`, ignoring ASCII case
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack.char_indices().map(|(i, _)| i).find(|&i| {
        haystack[i..]
            .get(..needle.len())
            .map_or(false, |s| s.eq_ignore_ascii_case(needle))
    })
}

fn declare_name(input: &str, memory: &mut Memory, persister: &mut dyn Persister) -> String {
    let name = find_ignore_ascii_case(input, NAME_DECLARATION_PHRASE)
        .map(|pos| &input[pos + NAME_DECLARATION_PHRASE.len()..])
        .unwrap_or_default()
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ':' | ',' | '.' | '!'));

    if name.is_empty() {
        return "ketik 'nama saya <namamu>' biar gue ingat.".to_string();
    }

    memory.profile.display_name = Some(name.to_string());
    persister.persist(memory);
    format!("oke gue akan ingat namamu {}!", name)
}

fn fallback(lower: &str, tags: &Tags, memory: &Memory) -> String {
    if tags.intent == Intent::Greeting {
        return match memory.history.last() {
            Some(_) => "halo juga. gue masih ingat kata terakhir lo.".to_string(),
            None => "halo juga! ada yang bisa gue bantu?".to_string(),
        };
    }

    if lower.contains("ingat") {
        return match memory.history.last() {
            Some(last) => format!("gue masih ingat lo bilang: '{}'.", last.user_text),
            None => "belum ada yang bisa gue ingat.".to_string(),
        };
    }

    if tags.intent == Intent::Question || BROAD_QUESTION_WORDS.iter().any(|w| lower.contains(w))
    {
        return "pertanyaan lo masih terlalu luas. coba lebih spesifik, cek /mem, \
                atau tanya soal waktu atau cuaca."
            .to_string();
    }

    "oke, gue catat itu.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ignore_ascii_case() {
        assert_eq!(find_ignore_ascii_case("Halo, NAMA SAYA Budi", "nama saya"), Some(6));
        assert_eq!(find_ignore_ascii_case("é nama saya", "nama saya"), Some(3));
        assert_eq!(find_ignore_ascii_case("halo", "nama saya"), None);
    }

    #[test]
    fn test_fallback_order() {
        let mut memory = Memory::new();
        let text = "halo, kenapa?";
        assert!(fallback(text, &analyze_tags(text), &memory).starts_with("halo juga"));

        assert_eq!(
            fallback("kamu ingat?", &analyze_tags("kamu ingat?"), &memory),
            "belum ada yang bisa gue ingat."
        );
        memory.record_turn("beli kopi", "oke", Tags::default());
        assert_eq!(
            fallback("kamu ingat?", &analyze_tags("kamu ingat?"), &memory),
            "gue masih ingat lo bilang: 'beli kopi'."
        );

        let text = "kenapa langit biru";
        assert!(fallback(text, &analyze_tags(text), &memory).contains("lebih spesifik"));

        let text = "gue makan nasi";
        assert_eq!(fallback(text, &analyze_tags(text), &memory), "oke, gue catat itu.");
    }

    #[test]
    fn test_path_display() {
        assert_eq!(ResolutionPath::Contextual("waktu").to_string(), "contextual:waktu");
        assert_eq!(ResolutionPath::NameQuery.to_string(), "name_query");
    }
}
