//! Tag analyzer - keyword classification of one line of text.
//!
//! Every input is annotated with topics, a mood and an intent using plain
//! substring matching on the lower-cased text. The order in which keyword
//! sets are checked is part of the contract: negative mood outranks positive,
//! greeting intent outranks question.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

pub const TOPIC_NAME: &str = "nama";
pub const TOPIC_GREETING: &str = "sapaan";
pub const TOPIC_WEATHER: &str = "cuaca";
pub const TOPIC_TIME: &str = "waktu";
pub const TOPIC_MOOD: &str = "mood";
pub const TOPIC_INQUIRY: &str = "tanya";

/// Topic keyword map. Detected topics are reported in this order.
///
/// A keyword padded with spaces only matches a whole word.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (TOPIC_NAME, &["nama", "siapa", "panggil"]),
    (TOPIC_GREETING, &["halo", "hai", "hey", "pu haba"]),
    (TOPIC_WEATHER, &["cuaca", "hujan", "panas", "dingin"]),
    (TOPIC_TIME, &[" jam ", "pukul", "waktu", "tanggal", "hari apa"]),
    (TOPIC_MOOD, &["sedih", "marah", "senang", "bahagia"]),
    (TOPIC_INQUIRY, &["kenapa", "bagaimana", "apa itu"]),
];

const NEGATIVE_WORDS: &[&str] = &["bangsat", "anjing", "kesel", "marah", "benci"];
const POSITIVE_WORDS: &[&str] = &["makasih", "thank", "keren", "baik"];
const CONFUSED_WORDS: &[&str] = &["bingung", "gimana"];

const GREETING_WORDS: &[&str] = &["halo", "hai", "hey"];
const IMPERATIVE_WORDS: &[&str] = &["tolong", "please"];
const ACTION_WORDS: &[&str] = &["hapus", "delete", "catat", "cari"];

/// Coarse sentiment of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mood {
    #[serde(rename = "negatif")]
    Negative,
    #[serde(rename = "positif")]
    Positive,
    #[serde(rename = "bingung")]
    Confused,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Negative => "negatif",
            Mood::Positive => "positif",
            Mood::Confused => "bingung",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "negatif" => Some(Mood::Negative),
            "positif" => Some(Mood::Positive),
            "bingung" => Some(Mood::Confused),
            _ => None,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Communicative function of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Question,
    Command,
    #[default]
    Statement,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Question => "question",
            Intent::Command => "command",
            Intent::Statement => "statement",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "greeting" => Some(Intent::Greeting),
            "question" => Some(Intent::Question),
            "command" => Some(Intent::Command),
            "statement" => Some(Intent::Statement),
            _ => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of one message. Immutable once computed.
///
/// Labels outside the known sets read back as no mood and a statement, so
/// one odd entry never spoils a stored history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tags {
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "mood_label")]
    pub mood: Option<Mood>,
    #[serde(default, deserialize_with = "intent_label")]
    pub intent: Intent,
}

fn mood_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Mood>, D::Error> {
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.and_then(|l| {
        let mood = Mood::from_label(&l);
        if mood.is_none() {
            debug!("Unknown mood label '{}', reading as none", l);
        }
        mood
    }))
}

fn intent_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Intent, D::Error> {
    let label = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(Intent::from_label(&label).unwrap_or_else(|| {
        debug!("Unknown intent label '{}', reading as statement", label);
        Intent::default()
    }))
}

impl Tags {
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    /// Pretty JSON rendering, as shown by `/tag last`
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Lower-cased words of `text` joined by single spaces, padded at both ends
fn word_padded(text: &str) -> String {
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    format!(" {} ", words.join(" "))
}

/// True if `word` appears in `text` as a whole word, ignoring case
pub fn mentions_word(text: &str, word: &str) -> bool {
    word_padded(&text.to_lowercase()).contains(&format!(" {} ", word))
}

/// Classify a raw message.
pub fn analyze_tags(message: &str) -> Tags {
    let text = message.to_lowercase();
    let padded = word_padded(&text);

    let topics = TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keys)| contains_any(&text, keys) || contains_any(&padded, keys))
        .map(|(topic, _)| topic.to_string())
        .collect();

    let mood = if contains_any(&text, NEGATIVE_WORDS) {
        Some(Mood::Negative)
    } else if contains_any(&text, POSITIVE_WORDS) {
        Some(Mood::Positive)
    } else if contains_any(&text, CONFUSED_WORDS) {
        Some(Mood::Confused)
    } else {
        None
    };

    let intent = if contains_any(&text, GREETING_WORDS) {
        Intent::Greeting
    } else if text.trim_end().ends_with('?') {
        Intent::Question
    } else if contains_any(&text, IMPERATIVE_WORDS) || contains_any(&text, ACTION_WORDS) {
        Intent::Command
    } else {
        Intent::Statement
    };

    Tags {
        topics,
        mood,
        intent,
    }
}
