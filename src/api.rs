//! Mock back-end calls. Each call waits out a fixed artificial latency before
//! touching local state, so the rest of the program behaves as if it were
//! talking to a server.

use anyhow::Result;
use chrono::Utc;
use std::time::Duration;

use crate::attachment::Attachment;
use crate::auth::{AuthSession, Credentials};
use crate::db::LocalStorage;
use crate::models::{Comment, CommentAuthor, Ticket, TicketDraft, User};
use crate::settings::Settings;
use crate::store::TicketStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub login: Duration,
    pub fetch: Duration,
    pub update: Duration,
    pub comment: Duration,
    pub save_settings: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Latency {
            login: Duration::from_millis(1000),
            fetch: Duration::from_millis(500),
            update: Duration::from_millis(500),
            comment: Duration::from_millis(500),
            save_settings: Duration::from_millis(1000),
        }
    }
}

impl Latency {
    pub fn uniform(delay: Duration) -> Self {
        Latency {
            login: delay,
            fetch: delay,
            update: delay,
            comment: delay,
            save_settings: delay,
        }
    }

    pub fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MockApi {
    latency: Latency,
}

impl MockApi {
    pub fn new(latency: Latency) -> Self {
        MockApi { latency }
    }

    pub fn latency(&self) -> &Latency {
        &self.latency
    }

    async fn wait(&self, delay: Duration, op: &'static str) {
        if delay.is_zero() {
            return;
        }
        tracing::debug!(op, delay_ms = delay.as_millis() as u64, "Simulating latency");
        tokio::time::sleep(delay).await;
    }

    pub async fn login(
        &self,
        auth: &mut AuthSession,
        storage: &LocalStorage,
        credentials: &Credentials,
    ) -> Result<User> {
        auth.begin_login();
        self.wait(self.latency.login, "login").await;
        let result = AuthSession::authenticate(credentials);
        auth.finish_login(storage, result)
    }

    pub async fn fetch_ticket<'a>(&self, store: &'a TicketStore, id: &str) -> Result<&'a Ticket> {
        self.wait(self.latency.fetch, "fetch_ticket").await;
        store.find(id)
    }

    pub async fn update_ticket<'a>(
        &self,
        store: &'a mut TicketStore,
        id: &str,
        draft: TicketDraft,
    ) -> Result<&'a Ticket> {
        self.wait(self.latency.update, "update_ticket").await;
        store.update(id, draft, Utc::now())
    }

    pub async fn assign_ticket<'a>(
        &self,
        store: &'a mut TicketStore,
        id: &str,
        assignee: Option<&str>,
    ) -> Result<&'a Ticket> {
        self.wait(self.latency.update, "assign_ticket").await;
        store.assign(id, assignee, Utc::now())
    }

    pub async fn add_comment<'a>(
        &self,
        store: &'a mut TicketStore,
        id: &str,
        content: &str,
        author: CommentAuthor,
        attachment: Option<Attachment>,
    ) -> Result<&'a Comment> {
        self.wait(self.latency.comment, "add_comment").await;
        store.add_comment(id, content, author, attachment, Utc::now())
    }

    pub async fn save_settings(&self, storage: &LocalStorage, settings: &Settings) -> Result<()> {
        self.wait(self.latency.save_settings, "save_settings").await;
        settings.save(storage)
    }
}
