//! In-memory fixtures served by the `mock` feature.

use serde_json::Value;
use zetho_admin_shared::{
    classify::Severity,
    models::{
        DashboardStats, JobReport, MainGroup, NewsItem, Notification, NotificationKind,
        PostReport, ReportedGroup, ReportedNews, SubjectReport, Ticket, UserReport,
    },
    time::{normalize_date, Timestamp},
    ReportStatus, TicketStatus,
};

fn at(iso: &str) -> Timestamp {
    Timestamp(normalize_date(&Value::String(iso.to_string())))
}

fn subject_report(id: &str, user: &str, reason: &str, created: &str) -> SubjectReport {
    SubjectReport {
        id: id.into(),
        user_id: user.into(),
        reason: reason.to_string(),
        details: String::new(),
        status: ReportStatus::Pending,
        created_at: at(created),
    }
}

pub fn mock_dashboard() -> DashboardStats {
    DashboardStats {
        total_users: 12_480,
        total_groups: 342,
        total_jobs: 1_206,
        total_posts: 58_311,
        total_news: 214,
        total_tickets: 97,
        reported_groups: 6,
        reported_news: 4,
        reported_posts: 23,
        reported_jobs: 3,
        reported_users: 5,
    }
}

pub fn mock_post_reports() -> Vec<PostReport> {
    let post = |id: &str, post_id: &str, by: &str, reason: &str, severity, created: &str| {
        PostReport {
            id: id.into(),
            post_id: post_id.into(),
            reported_by: by.into(),
            reason: reason.to_string(),
            post_preview: format!("Preview of post {post_id}"),
            severity,
            status: ReportStatus::Pending,
            created_at: at(created),
        }
    };
    vec![
        post("r1", "p1", "u1", "Spam links", Severity::Medium, "2025-03-01T10:00:00Z"),
        post("r2", "p1", "u2", "Spam links", Severity::High, "2025-03-02T08:30:00Z"),
        post("r3", "p2", "u3", "Harassment", Severity::High, "2025-03-02T12:00:00Z"),
        post("r4", "p1", "u4", "Misleading", Severity::Low, "2025-03-03T16:45:00Z"),
    ]
}

pub fn mock_reported_news() -> Vec<ReportedNews> {
    vec![ReportedNews {
        id: "n1".into(),
        heading: "New cardiology guidelines".to_string(),
        content: "Updated recommendations for hypertension management.".to_string(),
        specialty: "Cardiology".to_string(),
        image_url: String::new(),
        created_at: at("2025-02-20T09:00:00Z"),
        reports: vec![
            subject_report("nr1", "u5", "Outdated information", "2025-03-01T11:00:00Z"),
            subject_report("nr2", "u6", "Misleading", "2025-03-03T07:15:00Z"),
        ],
    }]
}

pub fn mock_reported_groups() -> Vec<ReportedGroup> {
    vec![
        ReportedGroup {
            id: "g1".into(),
            group_name: "Night Shift Nurses".to_string(),
            report_count: Some(6),
            reports: vec![subject_report("gr1", "u7", "Off-topic ads", "2025-03-02T21:00:00Z")],
        },
        ReportedGroup {
            id: "g2".into(),
            group_name: String::new(),
            report_count: None,
            reports: vec![subject_report("gr2", "u8", "Spam", "2025-03-04T06:00:00Z")],
        },
    ]
}

pub fn mock_reported_jobs() -> Vec<JobReport> {
    vec![JobReport {
        job_id: "j1".into(),
        title: "Locum GP, weekend cover".to_string(),
        reported_by: "u2".into(),
        reason: "Suspected scam".to_string(),
        created_at: at("2025-03-01T13:20:00Z"),
    }]
}

pub fn mock_reported_users() -> Vec<UserReport> {
    vec![UserReport {
        user_id: "u42".into(),
        username: "drfake".to_string(),
        reported_by: "u3".into(),
        reason: "Impersonation".to_string(),
        created_at: at("2025-03-02T18:05:00Z"),
    }]
}

pub fn mock_tickets() -> Vec<Ticket> {
    let ticket = |id: &str, user: &str, query: &str, message: &str, status| Ticket {
        id: id.into(),
        user_id: user.into(),
        query_type: query.to_string(),
        message: message.to_string(),
        status,
        reply: String::new(),
        created_at: at("2025-03-03T10:00:00Z"),
    };
    vec![
        ticket("t1", "u10", "App Crash", "The app closes when I open chat.", TicketStatus::Pending),
        ticket(
            "t2",
            "u11",
            "Login Problem",
            "OTP never arrives.",
            TicketStatus::InProgress,
        ),
        ticket("t3", "u12", "Other", "How do I change my photo?", TicketStatus::Resolved),
    ]
}

pub fn mock_main_groups() -> Vec<MainGroup> {
    ["Cardiology", "Dermatology", "Neurology", "Pediatrics", "Oncology"]
        .iter()
        .enumerate()
        .map(|(index, name)| MainGroup {
            id: format!("m{}", index + 1).into(),
            name: name.to_string(),
            description: format!("{name} specialists and discussions"),
        })
        .collect()
}

pub fn mock_news() -> Vec<NewsItem> {
    vec![NewsItem {
        id: "news1".into(),
        doctor_id: "d1".into(),
        heading: "Flu season update".to_string(),
        content: "Vaccination rates are up this year. Clinics report shorter queues and \
                  better availability of the updated vaccine across all regions."
            .to_string(),
        specialty: "General Practice".to_string(),
        image_url: String::new(),
        created_at: at("2025-03-01T08:00:00Z"),
        reports: Vec::new(),
    }]
}

pub fn mock_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "nt1".into(),
            title: "Scheduled maintenance".to_string(),
            message: "The platform will be read-only on Sunday 02:00-03:00 UTC.".to_string(),
            kind: NotificationKind::Alert,
            image_url: String::new(),
        },
        Notification {
            id: "nt2".into(),
            title: "New job board".to_string(),
            message: "Job listings now support filters by specialty.".to_string(),
            kind: NotificationKind::Update,
            image_url: String::new(),
        },
    ]
}
