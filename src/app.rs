use anyhow::{Context, Result};
use std::io::IsTerminal;

use crate::api::{Latency, MockApi};
use crate::auth::AuthSession;
use crate::config::Config;
use crate::db::LocalStorage;
use crate::models::User;
use crate::settings::Settings;
use crate::store::TicketStore;

/// Everything a command can read or change: the persisted session and
/// settings, plus the in-memory ticket collection.
pub struct App {
    pub storage: LocalStorage,
    pub auth: AuthSession,
    pub store: TicketStore,
    pub settings: Settings,
    pub api: MockApi,
    pub colors: bool,
}

impl App {
    pub fn open(config: &Config) -> Result<Self> {
        let storage =
            LocalStorage::open(&config.storage_path()).context("Failed to open local storage")?;
        let mut app = Self::with_storage(storage, config.latency)?;
        app.colors = std::io::stdout().is_terminal();
        Ok(app)
    }

    pub fn in_memory(latency: Latency) -> Result<Self> {
        Self::with_storage(LocalStorage::in_memory()?, latency)
    }

    fn with_storage(storage: LocalStorage, latency: Latency) -> Result<Self> {
        let auth = AuthSession::restore(&storage)?;
        let settings = Settings::load(&storage)?;

        Ok(App {
            storage,
            auth,
            store: TicketStore::seeded(),
            settings,
            api: MockApi::new(latency),
            colors: false,
        })
    }

    pub fn require_user(&self) -> Result<&User> {
        self.auth.require_user()
    }

    /// Owned copy of the current user, for commands that go on to mutate `self`.
    pub fn current_user(&self) -> Result<User> {
        self.require_user().cloned()
    }
}
