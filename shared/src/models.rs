//! Typed records at the network boundary.
//!
//! Field names follow the backend's camelCase JSON. `null` and missing
//! optional fields default; values of the wrong type fail decoding so a bad
//! payload surfaces as an error instead of rendering blanks. Dashboard
//! counters are the exception and coerce to a number.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    classify::Severity,
    id::RecordId,
    status::{ReportStatus, TicketStatus},
    time::Timestamp,
};

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_from_value(&Value::deserialize(deserializer)?))
}

/// Numbers and numeric strings truncate to a count; anything else is zero.
fn count_from_value(value: &Value) -> u64 {
    let number = match value {
        Value::Number(n) => match n.as_u64() {
            Some(count) => return count,
            None => n.as_f64(),
        },
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    };
    number
        .filter(|n| n.is_finite() && *n > 0.0)
        .map(|n| n.trunc() as u64)
        .unwrap_or(0)
}

/// One flat report against a post. Grouped client-side by `post_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostReport {
    pub id: RecordId,
    pub post_id: RecordId,
    pub reported_by: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub reason: String,
    #[serde(deserialize_with = "nullable_string")]
    pub post_preview: String,
    pub severity: Severity,
    pub status: ReportStatus,
    pub created_at: Timestamp,
}

/// A report nested under a news item or a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectReport {
    pub id: RecordId,
    pub user_id: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub reason: String,
    #[serde(deserialize_with = "nullable_string")]
    pub details: String,
    pub status: ReportStatus,
    pub created_at: Timestamp,
}

/// News article with the reports filed against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportedNews {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub heading: String,
    #[serde(deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(deserialize_with = "nullable_string")]
    pub specialty: String,
    #[serde(deserialize_with = "nullable_string")]
    pub image_url: String,
    pub created_at: Timestamp,
    #[serde(deserialize_with = "nullable_vec")]
    pub reports: Vec<SubjectReport>,
}

/// Group with the reports filed against it, already grouped by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportedGroup {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub group_name: String,
    pub report_count: Option<u64>,
    #[serde(deserialize_with = "nullable_vec")]
    pub reports: Vec<SubjectReport>,
}

impl ReportedGroup {
    /// Backend count when provided, otherwise the number of loaded reports.
    pub fn effective_report_count(&self) -> usize {
        self.report_count
            .filter(|count| *count > 0)
            .map(|count| count as usize)
            .unwrap_or(self.reports.len())
    }

    /// Display name with a placeholder for unnamed groups.
    pub fn display_name(&self) -> &str {
        if self.group_name.trim().is_empty() {
            "Unnamed Group"
        } else {
            &self.group_name
        }
    }

    /// First letters of the first two words, upper-cased.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Flagged job posting. Read-only in the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobReport {
    pub job_id: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    pub reported_by: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub reason: String,
    pub created_at: Timestamp,
}

/// Flagged user account. Read-only in the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserReport {
    pub user_id: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub username: String,
    pub reported_by: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub reason: String,
    pub created_at: Timestamp,
}

/// Help & support ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticket {
    pub id: RecordId,
    pub user_id: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub query_type: String,
    #[serde(deserialize_with = "nullable_string")]
    pub message: String,
    pub status: TicketStatus,
    #[serde(deserialize_with = "nullable_string")]
    pub reply: String,
    pub created_at: Timestamp,
}

/// Managed news article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsItem {
    pub id: RecordId,
    pub doctor_id: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub heading: String,
    #[serde(deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(deserialize_with = "nullable_string")]
    pub specialty: String,
    #[serde(deserialize_with = "nullable_string")]
    pub image_url: String,
    pub created_at: Timestamp,
    #[serde(deserialize_with = "nullable_vec")]
    pub reports: Vec<SubjectReport>,
}

/// Notification category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Informational.
    #[default]
    Info,
    /// Product or content update.
    Update,
    /// Something needs attention.
    Alert,
}

impl NotificationKind {
    /// All values, in form-select order.
    pub const ALL: [NotificationKind; 3] =
        [NotificationKind::Info, NotificationKind::Update, NotificationKind::Alert];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Update => "update",
            NotificationKind::Alert => "alert",
        }
    }

    /// Select option label.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Info => "Info",
            NotificationKind::Update => "Update",
            NotificationKind::Alert => "Alert",
        }
    }

    /// Parses a wire value, falling back to info.
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "update" => NotificationKind::Update,
            "alert" => NotificationKind::Alert,
            _ => NotificationKind::Info,
        }
    }
}

/// Broadcast notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(deserialize_with = "nullable_string")]
    pub message: String,
    #[serde(rename = "type", deserialize_with = "nullable_kind")]
    pub kind: NotificationKind,
    #[serde(deserialize_with = "nullable_string")]
    pub image_url: String,
}

fn nullable_kind<'de, D>(deserializer: D) -> Result<NotificationKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NotificationKind>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level group. The list is flat despite the name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MainGroup {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
}

/// Counters shown on the dashboard. Missing or non-numeric counters read as
/// zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    #[serde(deserialize_with = "lenient_count")]
    pub total_users: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_groups: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_jobs: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_posts: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_news: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub total_tickets: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub reported_groups: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub reported_news: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub reported_posts: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub reported_jobs: u64,
    #[serde(deserialize_with = "lenient_count")]
    pub reported_users: u64,
}

/// Which dashboard counter a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    TotalUsers,
    TotalGroups,
    TotalJobs,
    TotalPosts,
    TotalNews,
    TotalTickets,
    ReportedGroups,
    ReportedNews,
    ReportedPosts,
    ReportedJobs,
    ReportedUsers,
}

impl DashboardStats {
    /// Counter value for one card.
    pub fn get(&self, key: StatKey) -> u64 {
        match key {
            StatKey::TotalUsers => self.total_users,
            StatKey::TotalGroups => self.total_groups,
            StatKey::TotalJobs => self.total_jobs,
            StatKey::TotalPosts => self.total_posts,
            StatKey::TotalNews => self.total_news,
            StatKey::TotalTickets => self.total_tickets,
            StatKey::ReportedGroups => self.reported_groups,
            StatKey::ReportedNews => self.reported_news,
            StatKey::ReportedPosts => self.reported_posts,
            StatKey::ReportedJobs => self.reported_jobs,
            StatKey::ReportedUsers => self.reported_users,
        }
    }
}

/// Admin credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /admin/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
}

/// Body of `PUT /admin/tickets/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketUpdate {
    pub status: TicketStatus,
    pub reply: String,
}

impl TicketUpdate {
    /// Writes the response into the ticket with `id`. False when no such
    /// ticket is loaded.
    pub fn apply_to(&self, tickets: &mut [Ticket], id: &RecordId) -> bool {
        match tickets.iter_mut().find(|ticket| &ticket.id == id) {
            Some(ticket) => {
                ticket.status = self.status;
                ticket.reply = self.reply.clone();
                true
            },
            None => false,
        }
    }
}

/// Body of `POST /admin/tickets/{id}/reply`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketReply {
    pub reply: String,
}

/// Body of main-group create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MainGroupInput {
    pub name: String,
    pub description: String,
}

/// Text fields of the news form. The image travels separately as a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsInput {
    pub doctor_id: String,
    pub heading: String,
    pub content: String,
    pub specialty: String,
}

impl NewsInput {
    /// Prefills the edit form from an existing article.
    pub fn from_item(item: &NewsItem) -> Self {
        NewsInput {
            doctor_id: item.doctor_id.to_string(),
            heading: item.heading.clone(),
            content: item.content.clone(),
            specialty: item.specialty.clone(),
        }
    }

    /// Multipart text parts, in wire names. Empty fields are sent too so a
    /// value can be cleared.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("doctorId", self.doctor_id.clone()),
            ("heading", self.heading.clone()),
            ("content", self.content.clone()),
            ("specialty", self.specialty.clone()),
        ]
    }
}

/// Text fields of the notification form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationInput {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl NotificationInput {
    /// Prefills the edit form from an existing notification.
    pub fn from_item(item: &Notification) -> Self {
        NotificationInput {
            title: item.title.clone(),
            message: item.message.clone(),
            kind: item.kind,
        }
    }

    /// Multipart text parts, in wire names.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("message", self.message.clone()),
            ("type", self.kind.as_str().to_string()),
        ]
    }
}

/// Multipart part name of the optional image upload.
pub const IMAGE_FORM_FIELD: &str = "imageFile";

/// List payload that is either a bare array or wrapped as `{ "data": [...] }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// `[...]`
    Bare(Vec<T>),
    /// `{ "data": [...] }`
    Wrapped {
        /// Wrapped records; `null` reads as empty.
        #[serde(default = "Vec::new", deserialize_with = "nullable_vec")]
        data: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    /// Records regardless of wrapping.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped {
                data,
            } => data,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn post_report_decodes_with_defaults() {
        let report: PostReport = serde_json::from_value(json!({
            "id": "r1",
            "postId": 77,
            "reportedBy": "u9",
            "reason": null,
            "createdAt": { "_seconds": 1_700_000_000 }
        }))
        .unwrap();

        assert_eq!(report.post_id.as_str(), "77");
        assert_eq!(report.reason, "");
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.severity, Severity::Low);
        assert!(report.created_at.get().is_some());
    }

    #[test]
    fn malformed_nested_reports_fail() {
        let decoded = serde_json::from_value::<ReportedNews>(json!({
            "id": "n1",
            "reports": "not-a-list"
        }));
        assert!(decoded.is_err());
    }

    #[test]
    fn reported_group_count_and_initials() {
        let group: ReportedGroup = serde_json::from_value(json!({
            "id": "g1",
            "groupName": "night owls club",
            "reports": [{ "id": "a", "userId": "u1" }, { "id": "b", "userId": "u2" }]
        }))
        .unwrap();
        assert_eq!(group.effective_report_count(), 2);
        assert_eq!(group.initials(), "NO");

        let unnamed = ReportedGroup {
            report_count: Some(12),
            ..ReportedGroup::default()
        };
        assert_eq!(unnamed.effective_report_count(), 12);
        assert_eq!(unnamed.display_name(), "Unnamed Group");
        assert_eq!(unnamed.initials(), "UG");
    }

    #[test]
    fn notification_type_field() {
        let item: Notification =
            serde_json::from_value(json!({ "id": 3, "title": "Hi", "type": "alert" })).unwrap();
        assert_eq!(item.kind, NotificationKind::Alert);

        let item: Notification =
            serde_json::from_value(json!({ "id": 4, "type": null })).unwrap();
        assert_eq!(item.kind, NotificationKind::Info);

        assert!(serde_json::from_value::<Notification>(json!({ "type": "shout" })).is_err());
    }

    #[test]
    fn list_envelope_accepts_both_shapes() {
        let bare: ListEnvelope<MainGroup> =
            serde_json::from_value(json!([{ "id": "m1", "name": "Cardiology" }])).unwrap();
        let wrapped: ListEnvelope<MainGroup> =
            serde_json::from_value(json!({ "data": [{ "id": "m1", "name": "Cardiology" }] }))
                .unwrap();
        assert_eq!(bare.into_vec(), wrapped.into_vec());

        let empty: ListEnvelope<MainGroup> = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_vec().is_empty());
    }

    #[test]
    fn dashboard_missing_counters_are_zero() {
        let stats: DashboardStats =
            serde_json::from_value(json!({ "totalUsers": 1200, "totalNews": null })).unwrap();
        assert_eq!(stats.get(StatKey::TotalUsers), 1200);
        assert_eq!(stats.get(StatKey::TotalNews), 0);
        assert_eq!(stats.get(StatKey::ReportedPosts), 0);
    }

    #[test]
    fn dashboard_counters_coerce_strings_and_floats() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "totalUsers": "12",
            "totalGroups": 12.0,
            "totalJobs": 7.9,
            "totalPosts": " 30 ",
            "totalNews": "many",
            "totalTickets": -4,
            "reportedGroups": [],
            "reportedNews": {},
        }))
        .unwrap();
        assert_eq!(stats.total_users, 12);
        assert_eq!(stats.total_groups, 12);
        assert_eq!(stats.total_jobs, 7);
        assert_eq!(stats.total_posts, 30);
        assert_eq!(stats.total_news, 0);
        assert_eq!(stats.total_tickets, 0);
        assert_eq!(stats.reported_groups, 0);
        assert_eq!(stats.reported_news, 0);
    }

    #[test]
    fn login_response_defaults_to_failure() {
        let response: LoginResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!response.success);
        assert_eq!(response.token, None);
    }

    #[test]
    fn form_fields_use_wire_names() {
        let input = NotificationInput {
            title: "Maintenance".into(),
            message: "Tonight".into(),
            kind: NotificationKind::Update,
        };
        assert_eq!(
            input.form_fields(),
            vec![
                ("title", "Maintenance".to_string()),
                ("message", "Tonight".to_string()),
                ("type", "update".to_string()),
            ]
        );
    }

    #[test]
    fn cleared_form_fields_are_still_sent() {
        let input = NewsInput {
            doctor_id: "d7".into(),
            heading: "Flu season".into(),
            content: String::new(),
            specialty: String::new(),
        };
        assert_eq!(
            input.form_fields(),
            vec![
                ("doctorId", "d7".to_string()),
                ("heading", "Flu season".to_string()),
                ("content", String::new()),
                ("specialty", String::new()),
            ]
        );
    }

    #[test]
    fn ticket_update_touches_only_its_ticket() {
        let mut tickets = vec![
            Ticket {
                id: "t1".into(),
                ..Ticket::default()
            },
            Ticket {
                id: "t2".into(),
                ..Ticket::default()
            },
        ];
        let update = TicketUpdate {
            status: TicketStatus::InProgress,
            reply: "Looking into it".into(),
        };

        assert!(update.apply_to(&mut tickets, &"t2".into()));
        assert_eq!(tickets[0], Ticket { id: "t1".into(), ..Ticket::default() });
        assert_eq!(tickets[1].status, TicketStatus::InProgress);
        assert_eq!(tickets[1].reply, "Looking into it");
        assert!(!update.apply_to(&mut tickets, &"t9".into()));
    }
}
