//! Contextual service resolvers (time, weather).
//!
//! A resolver answers for one topic. It reads the tags already computed for
//! the turn and only looks at the text for finer keywords inside its topic.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use crate::config::WeatherConfig;
use crate::tags::{mentions_word, Tags, TOPIC_MOOD, TOPIC_TIME, TOPIC_WEATHER};

const MOCK_NOTE: &str = "(data simulasi, bukan real-time)";

const DAY_NAMES: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];
const MONTH_NAMES: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Answers for one contextual topic
pub trait ContextResolver {
    /// Topic label this resolver handles
    fn topic(&self) -> &'static str;

    fn resolve(&self, tags: &Tags, text: &str) -> String;
}

/// Part of the day, used to flavour time replies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,   // 4-10
    Midday,    // 11-14
    Afternoon, // 15-17
    Night,     // 18-3
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            4..=10 => TimeOfDay::Morning,
            11..=14 => TimeOfDay::Midday,
            15..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "pagi",
            TimeOfDay::Midday => "siang",
            TimeOfDay::Afternoon => "sore",
            TimeOfDay::Night => "malam",
        }
    }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Formats the current time, date, or both
pub struct TimeResolver {
    clock: Box<dyn Clock>,
}

impl TimeResolver {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    fn clock_time(now: &NaiveDateTime) -> String {
        format!("{:02}:{:02}", now.hour(), now.minute())
    }

    fn long_date(now: &NaiveDateTime) -> String {
        format!(
            "{}, {} {} {}",
            DAY_NAMES[now.weekday().num_days_from_monday() as usize],
            now.day(),
            MONTH_NAMES[now.month0() as usize],
            now.year()
        )
    }
}

impl ContextResolver for TimeResolver {
    fn topic(&self) -> &'static str {
        TOPIC_TIME
    }

    fn resolve(&self, _tags: &Tags, text: &str) -> String {
        let now = self.clock.now();
        let text = text.to_lowercase();

        if mentions_word(&text, "jam") || text.contains("pukul") {
            format!(
                "sekarang jam {} {}.",
                Self::clock_time(&now),
                TimeOfDay::from_hour(now.hour()).label()
            )
        } else if contains_any(&text, &["tanggal", "hari apa"]) {
            format!("hari ini {}.", Self::long_date(&now))
        } else {
            format!(
                "sekarang {}, pukul {}:{:02}.",
                Self::long_date(&now),
                Self::clock_time(&now),
                now.second()
            )
        }
    }
}

/// Mock weather report, never real-time
pub struct WeatherResolver {
    config: WeatherConfig,
}

impl WeatherResolver {
    pub fn new(config: WeatherConfig) -> Self {
        Self { config }
    }
}

impl ContextResolver for WeatherResolver {
    fn topic(&self) -> &'static str {
        TOPIC_WEATHER
    }

    fn resolve(&self, tags: &Tags, text: &str) -> String {
        let text = text.to_lowercase();
        let WeatherConfig {
            location,
            condition,
            temperature_c,
        } = &self.config;

        let report = if text.contains("hujan") {
            if condition.contains("hujan") {
                format!("di {} lagi {}, jangan lupa payung", location, condition)
            } else {
                format!("kayaknya gak hujan di {}, sekarang {}", location, condition)
            }
        } else if contains_any(&text, &["panas", "dingin"]) {
            format!("suhu di {} sekitar {}°C", location, temperature_c)
        } else {
            format!(
                "cuaca di {}: {}, sekitar {}°C",
                location, condition, temperature_c
            )
        };

        if tags.has_topic(TOPIC_MOOD) {
            format!("{} {}. semoga mood lo ikut cerah.", report, MOCK_NOTE)
        } else {
            format!("{} {}.", report, MOCK_NOTE)
        }
    }
}
