use anyhow::Result;
use chrono::Utc;

use crate::app::App;
use crate::models::{TicketDraft, TicketPriority};

pub fn run(
    app: &mut App,
    title: &str,
    description: Option<&str>,
    priority: Option<&str>,
    assign: Option<&str>,
) -> Result<()> {
    let user = app.current_user()?;

    let priority: TicketPriority = match priority {
        Some(p) => p.parse()?,
        None => app.settings.default_priority,
    };

    let assigned_to = assign
        .or_else(|| app.settings.auto_assignee())
        .map(str::to_string);

    let draft = TicketDraft {
        title: title.to_string(),
        description: description.unwrap_or_default().to_string(),
        priority,
        assigned_to,
        ..TicketDraft::new(title, &user.id)
    };

    let ticket = app.store.create(draft, Utc::now())?;
    match &ticket.assigned_to {
        Some(assignee) => println!("Created ticket #{} (assigned to {})", ticket.id, assignee),
        None => println!("Created ticket #{}", ticket.id),
    }
    Ok(())
}
