use anyhow::{bail, Result};

use crate::app::App;
use crate::filter::{Selection, TicketFilters};
use crate::format::{
    format_date, paint, priority_label, priority_tone, range_word, status_label, status_tone,
    truncate, unassigned_label,
};
use crate::models::Ticket;
use crate::pagination::{Pagination, ROWS_PER_PAGE_OPTIONS};

/// Filters, then slices out the requested page. `page` is 1-based and is
/// pulled back onto the last page when it runs past the end.
pub fn select<'a>(
    tickets: &[&'a Ticket],
    page: usize,
    per_page: usize,
) -> Result<(Vec<&'a Ticket>, Pagination)> {
    if page == 0 {
        bail!("Pages start at 1");
    }

    let mut pagination = Pagination::new(per_page)?;
    pagination.set_page(page - 1);
    pagination.clamp(tickets.len());

    Ok((pagination.slice(tickets).to_vec(), pagination))
}

pub fn run(
    app: &App,
    search: Option<&str>,
    status: &str,
    priority: &str,
    page: usize,
    per_page: Option<usize>,
) -> Result<()> {
    app.require_user()?;

    let status: Selection<_> = status.parse()?;
    let priority: Selection<_> = priority.parse()?;
    let filters = TicketFilters::new(search, status, priority);

    let matching = app.store.filtered(&filters);
    let per_page = match per_page {
        Some(n) if !ROWS_PER_PAGE_OPTIONS.contains(&n) => {
            bail!("--per-page must be one of {:?}", ROWS_PER_PAGE_OPTIONS)
        }
        Some(n) => n,
        None => app.settings.tickets_per_page,
    };
    let (rows, pagination) = select(&matching, page, per_page)?;

    if rows.is_empty() {
        if filters.has_active_filters() {
            println!("No tickets match the current filters.");
        } else {
            println!("No tickets found.");
        }
        return Ok(());
    }

    let lang = app.settings.language;
    for ticket in rows {
        let status = format!("[{}]", status_label(ticket.status, lang));
        let priority = priority_label(ticket.priority, lang);
        let assignee = ticket
            .assigned_to
            .as_deref()
            .unwrap_or_else(|| unassigned_label(lang));
        println!(
            "#{:<14} {} {:<40} {} {:<16} {}",
            ticket.id,
            paint(&format!("{:<12}", status), status_tone(ticket.status), app.colors),
            truncate(&ticket.title, 40),
            paint(&format!("{:<8}", priority), priority_tone(ticket.priority), app.colors),
            truncate(assignee, 16),
            format_date(&ticket.created_at)
        );
    }

    println!(
        "{}  (page {}/{})",
        pagination.label(matching.len(), range_word(lang)),
        pagination.page() + 1,
        pagination.total_pages(matching.len())
    );

    Ok(())
}
