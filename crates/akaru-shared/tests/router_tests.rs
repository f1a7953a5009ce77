//! Router end-to-end tests.
//!
//! These tests drive whole turns through the router with a frozen clock,
//! a deterministic reply picker and a persister that counts saves.

use akaru_shared::catalog::default_catalog;
use akaru_shared::commands::UNKNOWN_COMMAND_REPLY;
use akaru_shared::config::WeatherConfig;
use akaru_shared::resolvers::{TimeResolver, WeatherResolver};
use akaru_shared::{
    CommandRegistry, FirstPicker, FixedClock, Intent, Memory, Persister, RandomPicker,
    ResolutionPath, Router,
};
use chrono::NaiveDate;

#[derive(Default)]
struct RecordingPersister {
    saves: Vec<Memory>,
}

impl Persister for RecordingPersister {
    fn persist(&mut self, memory: &Memory) {
        self.saves.push(memory.clone());
    }
}

fn router() -> Router {
    let at = NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|d| d.and_hms_opt(21, 30, 0))
        .unwrap();
    Router::new(
        CommandRegistry::default(),
        default_catalog(),
        Box::new(FirstPicker),
    )
    .with_resolver(Box::new(TimeResolver::new(Box::new(FixedClock(at)))))
    .with_resolver(Box::new(WeatherResolver::new(WeatherConfig::default())))
}

/// Resolve and archive one turn, like the read loop does
fn turn(router: &mut Router, memory: &mut Memory, input: &str) -> String {
    let mut persister = RecordingPersister::default();
    let resolution = router.resolve(input, memory, &mut persister);
    memory.record_turn(input, &resolution.reply, resolution.tags);
    resolution.reply
}

#[test]
fn test_mem_on_empty_memory() {
    let mut router = router();
    let mut memory = Memory::new();
    let mut persister = RecordingPersister::default();
    let resolution = router.resolve("/mem", &mut memory, &mut persister);
    assert_eq!(resolution.reply, "memori kosong.");
    assert_eq!(resolution.path, ResolutionPath::Command);
}

#[test]
fn test_name_declared_then_queried() {
    let mut router = router();
    let mut memory = Memory::new();
    let mut persister = RecordingPersister::default();

    let declared = router.resolve("nama saya Budi", &mut memory, &mut persister);
    assert_eq!(declared.path, ResolutionPath::NameDeclaration);
    assert!(declared.reply.contains("Budi"));
    assert_eq!(persister.saves.len(), 1);
    assert_eq!(persister.saves[0].profile.display_name.as_deref(), Some("Budi"));

    let queried = router.resolve("siapa nama saya", &mut memory, &mut persister);
    assert_eq!(queried.path, ResolutionPath::NameQuery);
    assert_eq!(queried.reply, "Namamu Budi.");
}

#[test]
fn test_name_query_without_name() {
    let mut router = router();
    let mut memory = Memory::new();
    let reply = turn(&mut router, &mut memory, "Siapa nama saya?");
    assert!(reply.starts_with("gue belum tau namamu"));
}

#[test]
fn test_empty_name_declaration() {
    let mut router = router();
    let mut memory = Memory::new();
    let mut persister = RecordingPersister::default();
    let resolution = router.resolve("nama saya   ", &mut memory, &mut persister);
    assert_eq!(resolution.reply, "ketik 'nama saya <namamu>' biar gue ingat.");
    assert!(persister.saves.is_empty());
    assert_eq!(memory.profile.display_name, None);
}

#[test]
fn test_time_of_day_reply() {
    let mut router = router();
    let mut memory = Memory::new();
    let mut persister = RecordingPersister::default();
    let resolution = router.resolve("jam berapa sekarang", &mut memory, &mut persister);
    assert_eq!(resolution.path, ResolutionPath::Contextual("waktu"));
    assert_eq!(resolution.reply, "sekarang jam 21:30 malam.");
}

#[test]
fn test_time_outranks_weather() {
    let mut router = router();
    let mut memory = Memory::new();
    let mut persister = RecordingPersister::default();
    let resolution = router.resolve("cuaca jam segini", &mut memory, &mut persister);
    assert_eq!(resolution.path, ResolutionPath::Contextual("waktu"));
}

#[test]
fn test_jam_inside_a_word_falls_through_to_catalog() {
    let mut router = router();
    let mut memory = Memory::new();
    let mut persister = RecordingPersister::default();
    let resolution = router.resolve("boleh pinjam buku, apa kabar", &mut memory, &mut persister);
    assert_eq!(resolution.path, ResolutionPath::Catalog);
}

#[test]
fn test_weather_reply() {
    let mut router = router();
    let mut memory = Memory::new();
    let mut persister = RecordingPersister::default();
    let resolution = router.resolve("cuacanya gimana", &mut memory, &mut persister);
    assert_eq!(resolution.path, ResolutionPath::Contextual("cuaca"));
    assert!(resolution.reply.contains("bukan real-time"));
}

#[test]
fn test_forget_unknown_keyword_reports_zero() {
    let mut router = router();
    let mut memory = Memory::new();
    turn(&mut router, &mut memory, "gue makan nasi");
    let reply = turn(&mut router, &mut memory, "/forget xyz");
    assert!(reply.starts_with("0 memori dihapus"));
}

#[test]
fn test_unknown_command_never_falls_through() {
    let mut router = router();
    let mut memory = Memory::new();
    for input in ["/apa kabar", "/halo", "/jam berapa", "/nama saya Budi"] {
        let mut persister = RecordingPersister::default();
        let resolution = router.resolve(input, &mut memory, &mut persister);
        assert_eq!(resolution.reply, UNKNOWN_COMMAND_REPLY, "input {}", input);
        assert_eq!(resolution.path, ResolutionPath::Command);
    }
    assert_eq!(memory.profile.display_name, None);
}

#[test]
fn test_catalog_reply_is_a_candidate() {
    let catalog = default_catalog();
    let candidates = catalog.candidates("apa kabar").unwrap().to_vec();
    let mut router = Router::new(CommandRegistry::default(), catalog, Box::new(RandomPicker));
    let mut memory = Memory::new();
    for _ in 0..10 {
        let mut persister = RecordingPersister::default();
        let resolution = router.resolve("eh, apa kabar", &mut memory, &mut persister);
        assert_eq!(resolution.path, ResolutionPath::Catalog);
        assert!(candidates.contains(&resolution.reply));
    }
}

#[test]
fn test_fallback_hint_for_broad_question() {
    let mut router = router();
    let mut memory = Memory::new();
    let reply = turn(&mut router, &mut memory, "kenapa ya");
    assert!(reply.contains("/mem"));
    let reply = turn(&mut router, &mut memory, "gue baru pulang");
    assert_eq!(reply, "oke, gue catat itu.");
}

#[test]
fn test_every_input_gets_reply_and_tags() {
    let mut router = router();
    let mut memory = Memory::new();
    let inputs = [
        "",
        "   ",
        "/",
        "?",
        "halo",
        "HAI APA KABAR?",
        "tolong hapus semua",
        "makasih, kamu keren",
        "😀",
        "nama saya",
    ];
    for input in inputs {
        let mut persister = RecordingPersister::default();
        let resolution = router.resolve(input, &mut memory, &mut persister);
        assert!(!resolution.reply.is_empty(), "empty reply for {:?}", input);
    }
}

#[test]
fn test_tags_match_fresh_analysis() {
    let mut router = router();
    let mut memory = Memory::new();
    let mut persister = RecordingPersister::default();
    for input in ["/mem 3", "nama saya Ani", "halo, jam berapa?"] {
        let resolution = router.resolve(input, &mut memory, &mut persister);
        assert_eq!(resolution.tags, akaru_shared::analyze_tags(input));
    }
}

#[test]
fn test_greeting_with_question_mark() {
    let mut router = router();
    let mut memory = Memory::new();
    let mut persister = RecordingPersister::default();
    let resolution = router.resolve("halo?", &mut memory, &mut persister);
    assert_eq!(resolution.tags.intent, Intent::Greeting);
    assert_eq!(resolution.path, ResolutionPath::Fallback);
    assert!(resolution.reply.starts_with("halo juga"));
}
