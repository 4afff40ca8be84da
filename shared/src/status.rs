//! Moderation and ticket status values.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Resolution state of a report. Absent on the wire means pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReportStatus {
    /// Awaiting a moderator decision.
    #[default]
    Pending,
    /// The moderator acted on the report.
    Resolved,
    /// The moderator decided no action was needed.
    Dismissed,
}

impl ReportStatus {
    /// All values, in filter-menu order.
    pub const ALL: [ReportStatus; 3] =
        [ReportStatus::Pending, ReportStatus::Resolved, ReportStatus::Dismissed];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Dismissed => "dismissed",
        }
    }

    /// Capitalized label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Dismissed => "Dismissed",
        }
    }

    /// Parses a wire value; `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(ReportStatus::Pending),
            "resolved" => Some(ReportStatus::Resolved),
            "dismissed" => Some(ReportStatus::Dismissed),
            _ => None,
        }
    }

    /// Reports only ever leave `pending`, and never come back.
    pub fn can_transition_to(&self, next: ReportStatus) -> bool {
        *self == ReportStatus::Pending && next != ReportStatus::Pending
    }

    /// True while moderator actions are still offered.
    pub fn is_pending(&self) -> bool {
        *self == ReportStatus::Pending
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(ReportStatus::Pending),
            Some(raw) if raw.trim().is_empty() => Ok(ReportStatus::Pending),
            Some(raw) => ReportStatus::parse(&raw)
                .ok_or_else(|| de::Error::custom(format!("unknown report status `{raw}`"))),
        }
    }
}

/// Moderator decision on a pending report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportAction {
    /// Mark the report as acted upon.
    Resolve,
    /// Close the report without action.
    Dismiss,
}

impl ReportAction {
    /// Status the report ends up in.
    pub fn target_status(&self) -> ReportStatus {
        match self {
            ReportAction::Resolve => ReportStatus::Resolved,
            ReportAction::Dismiss => ReportStatus::Dismissed,
        }
    }

    /// Trailing path segment of the moderation endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ReportAction::Resolve => "resolve",
            ReportAction::Dismiss => "dismiss",
        }
    }

    /// Button and confirm label.
    pub fn label(&self) -> &'static str {
        match self {
            ReportAction::Resolve => "Resolve",
            ReportAction::Dismiss => "Dismiss",
        }
    }

    /// Confirmation dialog title.
    pub fn confirm_title(&self) -> &'static str {
        match self {
            ReportAction::Resolve => "Resolve report?",
            ReportAction::Dismiss => "Dismiss report?",
        }
    }
}

/// Support ticket workflow state. Absent on the wire means pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    /// Not yet picked up.
    #[default]
    Pending,
    /// An admin replied and is following up.
    InProgress,
    /// Closed.
    Resolved,
}

impl TicketStatus {
    /// All values, in filter-menu order.
    pub const ALL: [TicketStatus; 3] =
        [TicketStatus::Pending, TicketStatus::InProgress, TicketStatus::Resolved];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pending",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
        }
    }

    /// Human label.
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Pending",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
        }
    }

    /// Parses a wire value; `None` for anything unknown.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(TicketStatus::Pending),
            "in-progress" => Some(TicketStatus::InProgress),
            "resolved" => Some(TicketStatus::Resolved),
            _ => None,
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TicketStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TicketStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(TicketStatus::Pending),
            Some(raw) if raw.trim().is_empty() => Ok(TicketStatus::Pending),
            Some(raw) => TicketStatus::parse(&raw)
                .ok_or_else(|| de::Error::custom(format!("unknown ticket status `{raw}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default)]
        status: ReportStatus,
    }

    #[test]
    fn absent_or_null_status_is_pending() {
        let absent: Row = serde_json::from_value(json!({})).unwrap();
        let null: Row = serde_json::from_value(json!({ "status": null })).unwrap();
        assert_eq!(absent.status, ReportStatus::Pending);
        assert_eq!(null.status, ReportStatus::Pending);
    }

    #[test]
    fn unknown_status_fails_fast() {
        let err = serde_json::from_value::<Row>(json!({ "status": "archived" }))
            .err()
            .map(|err| err.to_string())
            .unwrap_or_default();
        assert!(err.contains("unknown report status"), "{err}");
    }

    #[test]
    fn only_pending_reports_transition() {
        assert!(ReportStatus::Pending.can_transition_to(ReportStatus::Resolved));
        assert!(ReportStatus::Pending.can_transition_to(ReportStatus::Dismissed));
        assert!(!ReportStatus::Pending.can_transition_to(ReportStatus::Pending));
        assert!(!ReportStatus::Resolved.can_transition_to(ReportStatus::Dismissed));
        assert!(!ReportStatus::Dismissed.can_transition_to(ReportStatus::Pending));
    }

    #[test]
    fn ticket_status_wire_values() {
        let status: TicketStatus = serde_json::from_value(json!("in-progress")).unwrap();
        assert_eq!(status, TicketStatus::InProgress);
        assert_eq!(serde_json::to_value(TicketStatus::InProgress).unwrap(), json!("in-progress"));
    }

    #[test]
    fn actions_map_to_terminal_statuses() {
        assert_eq!(ReportAction::Resolve.target_status(), ReportStatus::Resolved);
        assert_eq!(ReportAction::Dismiss.target_status(), ReportStatus::Dismissed);
        assert_eq!(ReportAction::Dismiss.path_segment(), "dismiss");
    }
}
