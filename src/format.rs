//! Display helpers shared by the commands: dates, translated labels and
//! terminal colours for status/priority chips.

use chrono::{DateTime, Utc};

use crate::models::{TicketPriority, TicketStatus};
use crate::settings::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warning,
    Success,
    Error,
    Default,
}

impl Tone {
    fn ansi_code(&self) -> &'static str {
        match self {
            Tone::Info => "36",
            Tone::Warning => "33",
            Tone::Success => "32",
            Tone::Error => "31",
            Tone::Default => "37",
        }
    }
}

pub fn status_tone(status: TicketStatus) -> Tone {
    match status {
        TicketStatus::Open => Tone::Info,
        TicketStatus::InProgress => Tone::Warning,
        TicketStatus::Resolved => Tone::Success,
        TicketStatus::Closed => Tone::Default,
    }
}

pub fn priority_tone(priority: TicketPriority) -> Tone {
    match priority {
        TicketPriority::Low => Tone::Info,
        TicketPriority::Medium => Tone::Warning,
        TicketPriority::High => Tone::Error,
    }
}

pub fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{}m{}\x1b[0m", tone.ansi_code(), text)
    } else {
        text.to_string()
    }
}

pub fn status_label(status: TicketStatus, lang: Language) -> &'static str {
    match (lang, status) {
        (Language::En, TicketStatus::Open) => "Open",
        (Language::En, TicketStatus::InProgress) => "In progress",
        (Language::En, TicketStatus::Resolved) => "Resolved",
        (Language::En, TicketStatus::Closed) => "Closed",
        (Language::Ru, TicketStatus::Open) => "Открыт",
        (Language::Ru, TicketStatus::InProgress) => "В работе",
        (Language::Ru, TicketStatus::Resolved) => "Решен",
        (Language::Ru, TicketStatus::Closed) => "Закрыт",
    }
}

pub fn priority_label(priority: TicketPriority, lang: Language) -> &'static str {
    match (lang, priority) {
        (Language::En, TicketPriority::Low) => "Low",
        (Language::En, TicketPriority::Medium) => "Medium",
        (Language::En, TicketPriority::High) => "High",
        (Language::Ru, TicketPriority::Low) => "Низкий",
        (Language::Ru, TicketPriority::Medium) => "Средний",
        (Language::Ru, TicketPriority::High) => "Высокий",
    }
}

pub fn unassigned_label(lang: Language) -> &'static str {
    match lang {
        Language::En => "Unassigned",
        Language::Ru => "Не назначен",
    }
}

/// Word joining the bounds of a page label, as in "1-5 of 12".
pub fn range_word(lang: Language) -> &'static str {
    match lang {
        Language::En => "of",
        Language::Ru => "из",
    }
}

/// `HH:MM, DD.MM.YY`
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%H:%M, %d.%m.%y").to_string()
}

/// `DD.MM.YYYY HH:MM`
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Shortens `s` to at most `max_chars` characters, ending in `...` when
/// there is room for it.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else if max_chars < 3 {
        s.chars().take(max_chars).collect()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
