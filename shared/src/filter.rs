//! Derived list views: free-text search plus a status filter.
//!
//! Everything here is a pure function of its inputs. The source slice is
//! never touched and results keep source order.

use crate::{
    models::{MainGroup, NewsItem, Notification, ReportedGroup, ReportedNews, Ticket},
    reports::{PostReportGroup, ReportBundle},
    status::{ReportStatus, TicketStatus},
};

/// Records that can be matched against a search term.
pub trait Searchable {
    /// True when any searchable field contains `term`.
    ///
    /// `term` is already trimmed and lower-cased and never empty.
    fn matches(&self, term: &str) -> bool;
}

fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

/// Normalizes raw search box input. `None` means "no text filter".
pub fn normalize_query(raw: &str) -> Option<String> {
    let term = raw.trim().to_lowercase();
    if term.is_empty() {
        None
    } else {
        Some(term)
    }
}

/// Status dropdown selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter<S> {
    /// No status restriction.
    #[default]
    All,
    /// Only records in this status.
    Only(S),
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    /// True when `status` passes the filter.
    pub fn admits(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl StatusFilter<ReportStatus> {
    /// Builds the filter from a `<select>` value (`all` or a wire status).
    pub fn from_select(value: &str) -> Self {
        ReportStatus::parse(value).map_or(StatusFilter::All, StatusFilter::Only)
    }

    /// Value for the `<select>` element.
    pub fn select_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl StatusFilter<TicketStatus> {
    /// Builds the filter from a `<select>` value (`all` or a wire status).
    pub fn from_select(value: &str) -> Self {
        TicketStatus::parse(value).map_or(StatusFilter::All, StatusFilter::Only)
    }

    /// Value for the `<select>` element.
    pub fn select_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

/// Records carrying a status that a [`StatusFilter`] can test.
pub trait StatusFiltered {
    /// Status type of the record.
    type Status: Copy + PartialEq;

    /// True when the record passes `filter`.
    fn passes(&self, filter: &StatusFilter<Self::Status>) -> bool;
}

/// Search first, then status, over a borrowed collection.
pub fn filter_view<T>(items: &[T], query: &str, status: &StatusFilter<T::Status>) -> Vec<T>
where
    T: Searchable + StatusFiltered + Clone,
{
    let term = normalize_query(query);
    items
        .iter()
        .filter(|item| item.passes(status))
        .filter(|item| term.as_deref().map_or(true, |term| item.matches(term)))
        .cloned()
        .collect()
}

/// Search only, for records without a status.
pub fn search_view<T>(items: &[T], query: &str) -> Vec<T>
where
    T: Searchable + Clone,
{
    match normalize_query(query) {
        Some(term) => items.iter().filter(|item| item.matches(&term)).cloned().collect(),
        None => items.to_vec(),
    }
}

// Grouped records pass a status filter when any child report is in that state.
fn bundle_passes<B: ReportBundle>(bundle: &B, filter: &StatusFilter<ReportStatus>) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => bundle.has_status(*status),
    }
}

impl StatusFiltered for PostReportGroup {
    type Status = ReportStatus;

    fn passes(&self, filter: &StatusFilter<ReportStatus>) -> bool {
        bundle_passes(self, filter)
    }
}

impl StatusFiltered for ReportedNews {
    type Status = ReportStatus;

    fn passes(&self, filter: &StatusFilter<ReportStatus>) -> bool {
        bundle_passes(self, filter)
    }
}

impl StatusFiltered for ReportedGroup {
    type Status = ReportStatus;

    fn passes(&self, filter: &StatusFilter<ReportStatus>) -> bool {
        bundle_passes(self, filter)
    }
}

impl StatusFiltered for Ticket {
    type Status = TicketStatus;

    fn passes(&self, filter: &StatusFilter<TicketStatus>) -> bool {
        filter.admits(self.status)
    }
}

impl Searchable for PostReportGroup {
    fn matches(&self, term: &str) -> bool {
        contains(self.post_id.as_str(), term)
            || self.reports.iter().any(|report| {
                contains(&report.reason, term)
                    || contains(report.reported_by.as_str(), term)
                    || contains(&report.post_preview, term)
            })
    }
}

impl Searchable for ReportedNews {
    fn matches(&self, term: &str) -> bool {
        contains(&self.heading, term)
            || contains(&self.specialty, term)
            || self.reports.iter().any(|report| {
                contains(&report.reason, term) || contains(report.user_id.as_str(), term)
            })
    }
}

impl Searchable for ReportedGroup {
    fn matches(&self, term: &str) -> bool {
        contains(self.id.as_str(), term)
            || contains(&self.group_name, term)
            || self.reports.iter().any(|report| {
                contains(&report.reason, term) || contains(report.user_id.as_str(), term)
            })
    }
}

impl Searchable for Ticket {
    fn matches(&self, term: &str) -> bool {
        contains(self.id.as_str(), term)
            || contains(self.user_id.as_str(), term)
            || contains(&self.query_type, term)
            || contains(&self.message, term)
    }
}

impl Searchable for MainGroup {
    fn matches(&self, term: &str) -> bool {
        contains(&self.name, term) || contains(&self.description, term)
    }
}

impl Searchable for NewsItem {
    fn matches(&self, term: &str) -> bool {
        contains(&self.heading, term)
            || contains(&self.specialty, term)
            || contains(self.doctor_id.as_str(), term)
    }
}

impl Searchable for Notification {
    fn matches(&self, term: &str) -> bool {
        contains(&self.title, term) || contains(&self.message, term)
    }
}

/// Per-status ticket counts for the stats row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketStats {
    /// Every ticket, whatever its status.
    pub total: usize,
    /// Not yet picked up.
    pub pending: usize,
    /// Answered but still open.
    pub in_progress: usize,
    /// Closed.
    pub resolved: usize,
}

impl TicketStats {
    /// Counts over the unfiltered collection.
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        tickets.iter().fold(
            TicketStats {
                total: tickets.len(),
                ..TicketStats::default()
            },
            |mut stats, ticket| {
                match ticket.status {
                    TicketStatus::Pending => stats.pending += 1,
                    TicketStatus::InProgress => stats.in_progress += 1,
                    TicketStatus::Resolved => stats.resolved += 1,
                }
                stats
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::PostReport, reports::group_post_reports};

    fn ticket(id: &str, status: TicketStatus, query_type: &str) -> Ticket {
        Ticket {
            id: id.into(),
            user_id: format!("user-{id}").into(),
            query_type: query_type.to_string(),
            message: format!("message for {id}"),
            status,
            ..Ticket::default()
        }
    }

    fn tickets() -> Vec<Ticket> {
        vec![
            ticket("t1", TicketStatus::Pending, "App crash"),
            ticket("t2", TicketStatus::Resolved, "Login problem"),
            ticket("t3", TicketStatus::Pending, "Other"),
            ticket("t4", TicketStatus::InProgress, "Payment issue"),
        ]
    }

    #[test]
    fn empty_query_returns_status_filtered_collection_in_order() {
        let source = tickets();
        let view = filter_view(&source, "   ", &StatusFilter::Only(TicketStatus::Pending));
        let ids: Vec<_> = view.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3"]);

        let all = filter_view(&source, "", &StatusFilter::All);
        assert_eq!(all, source);
    }

    #[test]
    fn status_filter_returns_only_matching_status() {
        let source = tickets();
        for status in TicketStatus::ALL {
            let view = filter_view(&source, "", &StatusFilter::Only(status));
            assert!(view.iter().all(|t| t.status == status));
        }
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let source = tickets();
        let view = filter_view(&source, "  PAYMENT ", &StatusFilter::All);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id.as_str(), "t4");

        let view = filter_view(&source, "user-t2", &StatusFilter::All);
        assert_eq!(view[0].id.as_str(), "t2");
    }

    #[test]
    fn filtering_does_not_mutate_source() {
        let source = tickets();
        let before = source.clone();
        let _ = filter_view(&source, "crash", &StatusFilter::Only(TicketStatus::Resolved));
        assert_eq!(source, before);
    }

    #[test]
    fn absent_report_status_counts_as_pending_for_groups() {
        let groups = group_post_reports(vec![
            PostReport {
                id: "r1".into(),
                post_id: "p1".into(),
                ..PostReport::default()
            },
            PostReport {
                id: "r2".into(),
                post_id: "p2".into(),
                status: ReportStatus::Resolved,
                ..PostReport::default()
            },
        ]);

        let pending = filter_view(&groups, "", &StatusFilter::Only(ReportStatus::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].post_id.as_str(), "p1");
    }

    #[test]
    fn post_groups_search_nested_reports() {
        let groups = group_post_reports(vec![PostReport {
            id: "r1".into(),
            post_id: "p1".into(),
            reported_by: "alice".into(),
            reason: "Spam links".into(),
            ..PostReport::default()
        }]);
        assert_eq!(filter_view(&groups, "spam", &StatusFilter::All).len(), 1);
        assert_eq!(filter_view(&groups, "ALICE", &StatusFilter::All).len(), 1);
        assert!(filter_view(&groups, "bob", &StatusFilter::All).is_empty());
    }

    #[test]
    fn select_values_round_trip() {
        assert_eq!(StatusFilter::<ReportStatus>::from_select("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::<ReportStatus>::from_select("dismissed"),
            StatusFilter::Only(ReportStatus::Dismissed)
        );
        assert_eq!(
            StatusFilter::<TicketStatus>::from_select("in-progress").select_value(),
            "in-progress"
        );
    }

    #[test]
    fn search_view_over_main_groups() {
        let groups = vec![
            MainGroup {
                id: "1".into(),
                name: "Cardiology".into(),
                description: "Heart".into(),
            },
            MainGroup {
                id: "2".into(),
                name: "Dermatology".into(),
                description: "Skin care".into(),
            },
        ];
        assert_eq!(search_view(&groups, "skin").len(), 1);
        assert_eq!(search_view(&groups, "").len(), 2);
    }

    #[test]
    fn ticket_stats_count_each_status() {
        let stats = TicketStats::from_tickets(&tickets());
        assert_eq!(
            stats,
            TicketStats {
                total: 4,
                pending: 2,
                in_progress: 1,
                resolved: 1,
            }
        );
    }
}
