use anyhow::Result;

use crate::app::App;
use crate::format::{
    format_date, format_datetime, paint, priority_label, priority_tone, status_label, status_tone,
    unassigned_label,
};

pub async fn run(app: &App, id: &str) -> Result<()> {
    let user = app.require_user()?;
    let ticket = app.api.fetch_ticket(&app.store, id).await?;
    let lang = app.settings.language;

    println!("Ticket #{}: {}", ticket.id, ticket.title);
    println!(
        "Status: {}",
        paint(status_label(ticket.status, lang), status_tone(ticket.status), app.colors)
    );
    println!(
        "Priority: {}",
        paint(priority_label(ticket.priority, lang), priority_tone(ticket.priority), app.colors)
    );
    println!("Created: {} by {}", format_datetime(&ticket.created_at), ticket.created_by);
    println!("Updated: {}", format_datetime(&ticket.updated_at));
    println!(
        "Assigned: {}",
        ticket
            .assigned_to
            .as_deref()
            .unwrap_or_else(|| unassigned_label(lang))
    );

    if !ticket.description.is_empty() {
        println!("\nDescription:");
        for line in ticket.description.lines() {
            println!("  {}", line);
        }
    }

    println!("\nComments:");
    if ticket.comments.is_empty() {
        println!("  (none yet)");
    }
    for comment in &ticket.comments {
        let marker = if comment.created_by.id == user.id { "*" } else { " " };
        println!(
            " {}[{}] {} (comment {})",
            marker,
            format_date(&comment.created_at),
            comment.created_by.name,
            comment.id
        );
        for line in comment.content.lines() {
            println!("    {}", line);
        }
        if let Some(name) = &comment.file_name {
            println!("    Attachment: {}", name);
        }
    }

    Ok(())
}
