use anyhow::Result;
use std::str::FromStr;

use crate::models::{Ticket, TicketPriority, TicketStatus};

/// A filter value that is either "all" or one concrete choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = anyhow::Error>,
{
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            Ok(Selection::All)
        } else {
            Ok(Selection::Only(s.parse()?))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilters {
    pub search: String,
    pub status: Selection<TicketStatus>,
    pub priority: Selection<TicketPriority>,
}

impl TicketFilters {
    pub fn new(
        search: Option<&str>,
        status: Selection<TicketStatus>,
        priority: Selection<TicketPriority>,
    ) -> Self {
        TicketFilters {
            search: search.unwrap_or_default().to_string(),
            status,
            priority,
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status.accepts(&ticket.status)
            && self.priority.accepts(&ticket.priority)
            && self.matches_search(ticket)
    }

    // Case-insensitive substring over title, description and id.
    fn matches_search(&self, ticket: &Ticket) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        ticket.title.to_lowercase().contains(&needle)
            || ticket.description.to_lowercase().contains(&needle)
            || ticket.id.to_lowercase().contains(&needle)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.status.is_all() || !self.priority.is_all() || !self.search.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = TicketFilters::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn ticket(id: &str, title: &str, status: TicketStatus, priority: TicketPriority) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            description: "Printer jams on every page".to_string(),
            status,
            priority,
            created_at: now,
            updated_at: now,
            created_by: "user1".to_string(),
            assigned_to: None,
            comments: Vec::new(),
        }
    }

    #[test]
    fn test_default_matches_everything() {
        let filters = TicketFilters::default();
        let t = ticket("1", "Login broken", TicketStatus::Closed, TicketPriority::Low);
        assert!(filters.matches(&t));
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filters = TicketFilters::new(Some("LOGIN"), Selection::All, Selection::All);
        assert!(filters.matches(&ticket("1", "Login broken", TicketStatus::Open, TicketPriority::High)));
        assert!(!filters.matches(&ticket("2", "Mail down", TicketStatus::Open, TicketPriority::High)));
    }

    #[test]
    fn test_search_covers_description_and_id() {
        let t = ticket("1711000000000", "Mail down", TicketStatus::Open, TicketPriority::High);
        assert!(TicketFilters::new(Some("jams"), Selection::All, Selection::All).matches(&t));
        assert!(TicketFilters::new(Some("1711"), Selection::All, Selection::All).matches(&t));
    }

    #[test]
    fn test_search_unicode() {
        let t = ticket("4", "Принтер жует бумагу", TicketStatus::Open, TicketPriority::Low);
        let filters = TicketFilters::new(Some("ПРИНТЕР"), Selection::All, Selection::All);
        assert!(filters.matches(&t));
    }

    #[test]
    fn test_status_and_priority_combine() {
        let filters = TicketFilters::new(
            None,
            Selection::Only(TicketStatus::Resolved),
            Selection::Only(TicketPriority::Low),
        );
        assert!(filters.matches(&ticket("3", "a", TicketStatus::Resolved, TicketPriority::Low)));
        assert!(!filters.matches(&ticket("3", "a", TicketStatus::Resolved, TicketPriority::High)));
        assert!(!filters.matches(&ticket("3", "a", TicketStatus::Open, TicketPriority::Low)));
        assert!(filters.has_active_filters());
    }

    #[test]
    fn test_whitespace_search_is_inactive() {
        let filters = TicketFilters::new(Some("   "), Selection::All, Selection::All);
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn test_clear() {
        let mut filters = TicketFilters::new(
            Some("x"),
            Selection::Only(TicketStatus::Open),
            Selection::Only(TicketPriority::High),
        );
        filters.clear();
        assert_eq!(filters, TicketFilters::default());
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!("all".parse::<Selection<TicketStatus>>().unwrap(), Selection::All);
        assert_eq!(
            "in_progress".parse::<Selection<TicketStatus>>().unwrap(),
            Selection::Only(TicketStatus::InProgress)
        );
        assert!("urgent".parse::<Selection<TicketPriority>>().is_err());
    }

    proptest! {
        #[test]
        fn prop_title_substring_always_matches(title in "[a-zA-Z0-9 ]{1,40}", start in 0usize..40, len in 1usize..10) {
            let start = start % title.len();
            let end = (start + len).min(title.len());
            let needle = &title[start..end];
            prop_assume!(!needle.trim().is_empty());

            let t = ticket("1", &title, TicketStatus::Open, TicketPriority::Low);
            let filters = TicketFilters::new(Some(&needle.to_uppercase()), Selection::All, Selection::All);
            prop_assert!(filters.matches(&t));
        }

        #[test]
        fn prop_status_selection_is_equality(a in 0usize..4, b in 0usize..4) {
            let t = ticket("1", "x", TicketStatus::ALL[a], TicketPriority::Low);
            let filters = TicketFilters::new(None, Selection::Only(TicketStatus::ALL[b]), Selection::All);
            prop_assert_eq!(filters.matches(&t), a == b);
        }
    }
}
