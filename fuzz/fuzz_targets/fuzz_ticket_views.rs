#![no_main]

//! Fuzz target for the ticket list pipeline.
//!
//! Feeds arbitrary Unicode titles, descriptions and search text through
//! create, filter, pagination and truncation. Any panic here (byte slicing
//! on multi-byte characters, off-by-one page bounds) is a bug.

use arbitrary::Arbitrary;
use chrono::{Duration, Utc};
use libfuzzer_sys::fuzz_target;

use helpdesk::filter::{Selection, TicketFilters};
use helpdesk::format::truncate;
use helpdesk::models::{TicketDraft, TicketPriority, TicketStatus};
use helpdesk::pagination::Pagination;
use helpdesk::store::TicketStore;

#[derive(Arbitrary, Debug)]
struct ViewInput {
    title: String,
    description: String,
    search: Option<String>,
    num_tickets: u8,
    status: u8,
    priority: u8,
    page: u16,
    rows_per_page: u8,
    width: u8,
}

fuzz_target!(|input: ViewInput| {
    let mut store = TicketStore::seeded();
    let now = Utc::now();

    for i in 0..(input.num_tickets % 40) {
        let mut draft = TicketDraft::new(&format!("{} {}", input.title, i), "fuzz");
        draft.description = input.description.clone();
        draft.status = TicketStatus::ALL[(input.status as usize + i as usize) % TicketStatus::ALL.len()];
        let _ = store.create(draft, now + Duration::milliseconds(i as i64));
    }

    let status = match input.status % 5 {
        0 => Selection::All,
        n => Selection::Only(TicketStatus::ALL[(n as usize - 1) % TicketStatus::ALL.len()]),
    };
    let priority = match input.priority % 4 {
        0 => Selection::All,
        1 => Selection::Only(TicketPriority::Low),
        2 => Selection::Only(TicketPriority::Medium),
        _ => Selection::Only(TicketPriority::High),
    };
    let filters = TicketFilters::new(input.search.as_deref(), status, priority);
    let matching = store.filtered(&filters);

    let Ok(mut pagination) = Pagination::new(input.rows_per_page as usize) else {
        return;
    };
    pagination.set_page(input.page as usize);
    pagination.clamp(matching.len());

    let rows = pagination.slice(&matching);
    assert!(rows.len() <= pagination.rows_per_page());
    let _ = pagination.label(matching.len(), "of");

    for ticket in rows {
        let shown = truncate(&ticket.title, input.width as usize);
        assert!(shown.chars().count() <= input.width as usize);
    }
});
