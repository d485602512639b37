use crate::models::{Ticket, TicketPriority, TicketStatus};

pub const RECENT_TICKETS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketMetrics {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub high_priority: usize,
}

impl TicketMetrics {
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let count_status = |s: TicketStatus| tickets.iter().filter(|t| t.status == s).count();

        TicketMetrics {
            total: tickets.len(),
            open: count_status(TicketStatus::Open),
            in_progress: count_status(TicketStatus::InProgress),
            resolved: count_status(TicketStatus::Resolved),
            high_priority: tickets
                .iter()
                .filter(|t| t.priority == TicketPriority::High)
                .count(),
        }
    }
}

/// Whole percent of `value` in `total`; an empty board reads 0%.
pub fn percentage(value: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((value as f64 / total as f64) * 100.0).round() as u32
}

pub fn recent(tickets: &[Ticket], limit: usize) -> Vec<&Ticket> {
    let mut sorted: Vec<&Ticket> = tickets.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TicketStore;

    #[test]
    fn test_metrics_for_seeded_tickets() {
        let store = TicketStore::seeded();
        let metrics = TicketMetrics::from_tickets(store.all());

        assert_eq!(
            metrics,
            TicketMetrics {
                total: 4,
                open: 1,
                in_progress: 1,
                resolved: 2,
                high_priority: 1,
            }
        );
    }

    #[test]
    fn test_metrics_empty() {
        assert_eq!(TicketMetrics::from_tickets(&[]), TicketMetrics::default());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(4, 4), 100);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_recent_is_newest_first_and_limited() {
        let store = TicketStore::seeded();
        let ids: Vec<&str> = recent(store.all(), 2).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }
}
