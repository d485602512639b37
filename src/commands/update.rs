use anyhow::{bail, Result};

use crate::app::App;
use crate::models::{TicketDraft, TicketPriority, TicketStatus};

pub async fn run(
    app: &mut App,
    id: &str,
    title: Option<&str>,
    description: Option<&str>,
    status: Option<&str>,
    priority: Option<&str>,
) -> Result<()> {
    if title.is_none() && description.is_none() && status.is_none() && priority.is_none() {
        bail!("Nothing to update. Use --title, --description, --status, or --priority");
    }
    app.require_user()?;

    // Parse everything before touching the ticket so a bad value changes nothing.
    let status: Option<TicketStatus> = status.map(str::parse).transpose()?;
    let priority: Option<TicketPriority> = priority.map(str::parse).transpose()?;

    let mut draft = TicketDraft::from_ticket(app.store.find(id)?);
    if let Some(t) = title {
        draft.title = t.to_string();
    }
    if let Some(d) = description {
        draft.description = d.to_string();
    }
    if let Some(s) = status {
        draft.status = s;
    }
    if let Some(p) = priority {
        draft.priority = p;
    }

    let ticket = app.api.update_ticket(&mut app.store, id, draft).await?;
    println!("Updated ticket #{}", ticket.id);
    Ok(())
}

pub async fn assign(app: &mut App, id: &str, assignee: Option<&str>) -> Result<()> {
    app.require_user()?;

    let ticket = app.api.assign_ticket(&mut app.store, id, assignee).await?;
    match &ticket.assigned_to {
        Some(who) => println!("Assigned ticket #{} to {}", ticket.id, who),
        None => println!("Ticket #{} is now unassigned", ticket.id),
    }
    Ok(())
}
