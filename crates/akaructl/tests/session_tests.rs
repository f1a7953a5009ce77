//! Session and REPL tests against a memory file in a temp directory.

use akaru_shared::{AkaruConfig, MemoryStore, ResolutionPath};
use akaructl::repl::{self, Style, GOODBYE};
use akaructl::Session;
use std::io::Cursor;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Session {
    let store = MemoryStore::new(dir.path().join("memory.json"));
    Session::open(&AkaruConfig::default(), store)
}

#[test]
fn test_turns_are_archived_and_saved() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);

    let resolution = session.turn("nama saya Budi");
    assert_eq!(resolution.path, ResolutionPath::NameDeclaration);
    session.turn("gue makan nasi");
    assert_eq!(session.memory().history.len(), 2);

    // A fresh session sees the saved state
    let mut reopened = open(&dir);
    assert_eq!(reopened.memory().history.len(), 2);
    assert_eq!(reopened.memory().profile.name(), Some("Budi"));

    let entry = &reopened.memory().history.entries()[0];
    assert_eq!(entry.user_text, "nama saya Budi");
    assert!(entry.bot_text.contains("Budi"));

    assert_eq!(reopened.turn("siapa nama saya").reply, "Namamu Budi.");
}

#[test]
fn test_forget_last_then_archive() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    session.turn("beli kopi");
    session.turn("beli teh");

    let resolution = session.turn("/forget last");
    assert_eq!(resolution.reply, "entry terakhir dihapus: 'beli teh'");
    // The command turn itself is archived after deletion
    let texts: Vec<_> = session
        .memory()
        .history
        .entries()
        .iter()
        .map(|e| e.user_text.clone())
        .collect();
    assert_eq!(texts, vec!["beli kopi", "/forget last"]);
}

#[test]
fn test_corrupt_memory_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("memory.json"), "[[[").unwrap();
    let mut session = open(&dir);
    assert!(session.memory().history.is_empty());
    assert_eq!(session.turn("/mem").reply, "memori kosong.");
}

#[test]
fn test_repl_until_exit_word() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    let input = Cursor::new("halo\n\n/mem\nkeluar\nnot read\n");
    let mut output = Vec::new();

    repl::run(&mut session, input, &mut output, Style { color: false }).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("=== akaru v"));
    assert!(text.contains("Bot: halo juga! ada yang bisa gue bantu?"));
    assert!(text.contains("1. halo → halo juga! ada yang bisa gue bantu?"));
    assert!(text.trim_end().ends_with(GOODBYE));
    // Exit words and blank lines are not archived
    assert_eq!(session.memory().history.len(), 2);
}

#[test]
fn test_repl_stops_at_eof() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    let mut output = Vec::new();
    repl::run(&mut session, Cursor::new("jam berapa"), &mut output, Style { color: false })
        .unwrap();
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Bot: sekarang jam "));
    assert_eq!(session.memory().history.len(), 1);
}
