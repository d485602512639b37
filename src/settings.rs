use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::db::LocalStorage;
use crate::models::TicketPriority;

pub const SETTINGS_KEY: &str = "settings";
pub const MIN_TICKETS_PER_PAGE: usize = 5;
pub const MAX_TICKETS_PER_PAGE: usize = 50;

const KEYS: [&str; 7] = [
    "email_notifications",
    "desktop_notifications",
    "auto_assignment",
    "default_priority",
    "default_assignee",
    "tickets_per_page",
    "language",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Ru => f.write_str("ru"),
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => bail!("Invalid language '{}'. Must be one of: en, ru", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub email_notifications: bool,
    pub desktop_notifications: bool,
    pub auto_assignment: bool,
    pub default_priority: TicketPriority,
    pub default_assignee: String,
    pub tickets_per_page: usize,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            email_notifications: false,
            desktop_notifications: true,
            auto_assignment: true,
            default_priority: TicketPriority::Low,
            default_assignee: String::new(),
            tickets_per_page: 5,
            language: Language::Ru,
        }
    }
}

impl Settings {
    /// Loads saved settings, falling back to defaults when nothing valid is stored.
    pub fn load(storage: &LocalStorage) -> Result<Self> {
        let stored: Option<Settings> = storage.get_json(SETTINGS_KEY)?;
        match stored {
            Some(settings) if settings.validate().is_ok() => Ok(settings),
            Some(_) => {
                tracing::warn!("Stored settings are out of range, using defaults");
                Ok(Settings::default())
            }
            None => Ok(Settings::default()),
        }
    }

    pub fn save(&self, storage: &LocalStorage) -> Result<()> {
        self.validate()?;
        storage.set_json(SETTINGS_KEY, self)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_TICKETS_PER_PAGE..=MAX_TICKETS_PER_PAGE).contains(&self.tickets_per_page) {
            bail!(
                "tickets_per_page must be between {} and {}",
                MIN_TICKETS_PER_PAGE,
                MAX_TICKETS_PER_PAGE
            );
        }
        Ok(())
    }

    /// Assignee for a new ticket when auto-assignment is on.
    pub fn auto_assignee(&self) -> Option<&str> {
        let assignee = self.default_assignee.trim();
        if self.auto_assignment && !assignee.is_empty() {
            Some(assignee)
        } else {
            None
        }
    }

    /// Updates one field by name. The result is validated before it sticks.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "email_notifications" => next.email_notifications = parse_bool(key, value)?,
            "desktop_notifications" => next.desktop_notifications = parse_bool(key, value)?,
            "auto_assignment" => next.auto_assignment = parse_bool(key, value)?,
            "default_priority" => next.default_priority = value.parse()?,
            "default_assignee" => next.default_assignee = value.trim().to_string(),
            "tickets_per_page" => {
                next.tickets_per_page = value
                    .parse()
                    .with_context(|| format!("tickets_per_page must be a number, got '{}'", value))?
            }
            "language" => next.language = value.parse()?,
            other => bail!("Unknown setting '{}'. Valid keys: {}", other, KEYS.join(", ")),
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("email_notifications", self.email_notifications.to_string()),
            ("desktop_notifications", self.desktop_notifications.to_string()),
            ("auto_assignment", self.auto_assignment.to_string()),
            ("default_priority", self.default_priority.to_string()),
            ("default_assignee", self.default_assignee.clone()),
            ("tickets_per_page", self.tickets_per_page.to_string()),
            ("language", self.language.to_string()),
        ]
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => bail!("{} expects true or false, got '{}'", key, value),
    }
}
