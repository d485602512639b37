use anyhow::Result;

use crate::app::App;
use crate::dashboard::{percentage, recent, TicketMetrics, RECENT_TICKETS};
use crate::format::{format_datetime, paint, status_label, status_tone, truncate};
use crate::settings::Language;

pub fn run(app: &App) -> Result<()> {
    app.require_user()?;
    let lang = app.settings.language;
    let tickets = app.store.all();
    let metrics = TicketMetrics::from_tickets(tickets);

    let rows = [
        (heading(lang, "High priority", "Высокий приоритет"), metrics.high_priority),
        (heading(lang, "Waiting", "Ожидают"), metrics.open),
        (heading(lang, "In progress", "В работе"), metrics.in_progress),
        (heading(lang, "Resolved", "Решено"), metrics.resolved),
    ];

    for (title, value) in rows {
        let pct = percentage(value, metrics.total);
        println!("{:<20} {:>4}  {} {:>3}%", title, value, bar(pct), pct);
    }
    println!("{:<20} {:>4}", heading(lang, "Total", "Всего"), metrics.total);

    println!();
    println!("{}", heading(lang, "Recent tickets", "Последние тикеты"));
    let latest = recent(tickets, RECENT_TICKETS);
    if latest.is_empty() {
        println!("  {}", heading(lang, "No tickets yet.", "Тикетов пока нет."));
    }
    for ticket in latest {
        let status = status_label(ticket.status, lang);
        println!(
            "  #{:<14} {:<40} {} {}",
            ticket.id,
            truncate(&ticket.title, 40),
            paint(&format!("[{}]", status), status_tone(ticket.status), app.colors),
            format_datetime(&ticket.created_at)
        );
    }

    Ok(())
}

fn heading(lang: Language, en: &'static str, ru: &'static str) -> &'static str {
    match lang {
        Language::En => en,
        Language::Ru => ru,
    }
}

fn bar(pct: u32) -> String {
    let filled = (pct as usize).min(100) / 5;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(20 - filled))
}
