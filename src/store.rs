use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, TimeZone, Utc};

use crate::attachment::Attachment;
use crate::filter::TicketFilters;
use crate::models::{Comment, CommentAuthor, Ticket, TicketDraft, TicketPriority, TicketStatus};

/// In-memory ticket collection. Nothing here is persisted.
#[derive(Debug, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    last_id: i64,
}

impl TicketStore {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        TicketStore {
            tickets,
            last_id: 0,
        }
    }

    /// The demo collection shown on first start.
    pub fn seeded() -> Self {
        fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
                .single()
                .unwrap_or_default()
        }

        let seed = [
            ("1", "Authorization problem", TicketStatus::Open, TicketPriority::High, at(2024, 3, 20, 10, 0), "user1", None),
            ("2", "Error when uploading files", TicketStatus::InProgress, TicketPriority::Medium, at(2024, 3, 19, 16, 45), "user2", Some("it.support")),
            ("3", "Failure posting a raw material transfer document", TicketStatus::Resolved, TicketPriority::Low, at(2024, 3, 18, 12, 43), "user2", Some("Administrator")),
            ("4", "Shipping office printer jams paper", TicketStatus::Resolved, TicketPriority::Low, at(2024, 3, 19, 20, 14), "user2", Some("Administrator")),
        ];

        let tickets = seed
            .into_iter()
            .map(|(id, title, status, priority, created, by, assignee)| Ticket {
                id: id.to_string(),
                title: title.to_string(),
                description: String::new(),
                status,
                priority,
                created_at: created,
                updated_at: created,
                created_by: by.to_string(),
                assigned_to: assignee.map(str::to_string),
                comments: Vec::new(),
            })
            .collect();

        TicketStore::new(tickets)
    }

    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn find(&self, id: &str) -> Result<&Ticket> {
        self.get(id).ok_or_else(|| anyhow!("Ticket #{} not found", id))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Ticket> {
        self.tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| anyhow!("Ticket #{} not found", id))
    }

    /// Millisecond timestamp id, bumped past the previous one when two
    /// records land in the same millisecond.
    fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id.to_string()
    }

    pub fn create(&mut self, draft: TicketDraft, now: DateTime<Utc>) -> Result<&Ticket> {
        let draft = validate_draft(draft)?;
        let id = self.next_id(now);

        tracing::debug!(ticket_id = %id, "Creating ticket");
        self.tickets.push(Ticket {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            created_at: now,
            updated_at: now,
            created_by: draft.created_by,
            assigned_to: draft.assigned_to,
            comments: Vec::new(),
        });

        let created = self.tickets.len() - 1;
        Ok(&self.tickets[created])
    }

    /// Replaces the editable fields; id, creation time and comments stay.
    pub fn update(&mut self, id: &str, draft: TicketDraft, now: DateTime<Utc>) -> Result<&Ticket> {
        let draft = validate_draft(draft)?;
        let ticket = self.find_mut(id)?;

        tracing::debug!(ticket_id = %id, "Updating ticket");
        ticket.title = draft.title;
        ticket.description = draft.description;
        ticket.status = draft.status;
        ticket.priority = draft.priority;
        ticket.assigned_to = draft.assigned_to;
        ticket.created_by = draft.created_by;
        ticket.updated_at = now;
        Ok(&*ticket)
    }

    pub fn assign(&mut self, id: &str, assignee: Option<&str>, now: DateTime<Utc>) -> Result<&Ticket> {
        let ticket = self.find_mut(id)?;
        ticket.assigned_to = normalize_assignee(assignee.map(str::to_string));
        ticket.updated_at = now;
        tracing::debug!(ticket_id = %id, assignee = ?ticket.assigned_to, "Assigned ticket");
        Ok(&*ticket)
    }

    pub fn set_status(&mut self, id: &str, status: TicketStatus, now: DateTime<Utc>) -> Result<&Ticket> {
        let ticket = self.find_mut(id)?;
        ticket.status = status;
        ticket.updated_at = now;
        Ok(&*ticket)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != id);
        let removed = self.tickets.len() < before;
        if removed {
            tracing::debug!(ticket_id = %id, "Deleted ticket");
        }
        removed
    }

    pub fn add_comment(
        &mut self,
        id: &str,
        content: &str,
        author: CommentAuthor,
        attachment: Option<Attachment>,
        now: DateTime<Utc>,
    ) -> Result<&Comment> {
        let content = content.trim();
        if content.is_empty() {
            bail!("Comment text cannot be empty");
        }
        // Look the ticket up before allocating an id.
        self.find(id)?;

        let comment_id = self.next_id(now);
        let (file_url, file_name) = match attachment {
            Some(a) => (Some(a.data_url), Some(a.file_name)),
            None => (None, None),
        };

        let ticket = self.find_mut(id)?;
        ticket.comments.push(Comment {
            id: comment_id,
            ticket_id: ticket.id.clone(),
            content: content.to_string(),
            created_at: now,
            created_by: author,
            file_url,
            file_name,
        });

        tracing::debug!(ticket_id = %id, comments = ticket.comments.len(), "Added comment");
        let last = ticket.comments.len() - 1;
        Ok(&ticket.comments[last])
    }

    /// Tickets passing `filters`, newest first.
    pub fn filtered(&self, filters: &TicketFilters) -> Vec<&Ticket> {
        let mut tickets: Vec<&Ticket> = self.tickets.iter().filter(|t| filters.matches(t)).collect();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tickets
    }
}

fn validate_draft(mut draft: TicketDraft) -> Result<TicketDraft> {
    let title = draft.title.trim();
    if title.is_empty() {
        bail!("Ticket title cannot be empty");
    }
    draft.title = title.to_string();
    draft.description = draft.description.trim().to_string();
    draft.assigned_to = normalize_assignee(draft.assigned_to);
    Ok(draft)
}

fn normalize_assignee(assignee: Option<String>) -> Option<String> {
    assignee
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
}
