//! Every backend route the dashboard talks to.
//!
//! Paths are relative to the API base, which never includes `/admin`.

use std::fmt;

use crate::{id::RecordId, models::SubjectReport, status::ReportAction};

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation queue served by `GET /admin/reported/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportedKind {
    Posts,
    Groups,
    News,
    Jobs,
    Users,
}

impl ReportedKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportedKind::Posts => "posts",
            ReportedKind::Groups => "groups",
            ReportedKind::News => "news",
            ReportedKind::Jobs => "jobs",
            ReportedKind::Users => "users",
        }
    }
}

/// Parent collection for nested report actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NestedKind {
    News,
    Groups,
}

impl NestedKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NestedKind::News => "news",
            NestedKind::Groups => "groups",
        }
    }

    /// Key the backend uses to find one report under its parent.
    ///
    /// Group reports are looked up by reporter, news reports by their own id.
    /// `None` means the report cannot be addressed at all.
    pub fn report_key(self, report: &SubjectReport) -> Option<&RecordId> {
        let key = match self {
            NestedKind::News => &report.id,
            NestedKind::Groups => &report.user_id,
        };
        (!key.is_empty()).then_some(key)
    }
}

/// A backend route with its parameters filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Dashboard,
    HelpSupport,
    UpdateTicket(RecordId),
    ReplyTicket(RecordId),
    Reported(ReportedKind),
    /// Action on a report nested under a news item or group.
    NestedReportAction {
        kind: NestedKind,
        parent: RecordId,
        report: RecordId,
        action: ReportAction,
    },
    /// Action on a flat post report.
    FlatReportAction {
        report: RecordId,
        action: ReportAction,
    },
    ListMainGroups,
    CreateMainGroup,
    UpdateMainGroup(RecordId),
    DeleteMainGroup(RecordId),
    ListNews,
    CreateNews,
    UpdateNews(RecordId),
    DeleteNews(RecordId),
    ListNotifications,
    CreateNotification,
    UpdateNotification(RecordId),
    DeleteNotification(RecordId),
}

fn segment(id: &RecordId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

impl Endpoint {
    /// Resolve/dismiss route for a nested report, if it can be addressed.
    pub fn nested_report_action(
        kind: NestedKind,
        parent: &RecordId,
        report: &SubjectReport,
        action: ReportAction,
    ) -> Option<Endpoint> {
        kind.report_key(report).map(|key| Endpoint::NestedReportAction {
            kind,
            parent: parent.clone(),
            report: key.clone(),
            action,
        })
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::Dashboard
            | Endpoint::HelpSupport
            | Endpoint::Reported(_)
            | Endpoint::ListMainGroups
            | Endpoint::ListNews
            | Endpoint::ListNotifications => Method::Get,
            Endpoint::Login
            | Endpoint::ReplyTicket(_)
            | Endpoint::CreateMainGroup
            | Endpoint::CreateNews
            | Endpoint::CreateNotification => Method::Post,
            Endpoint::UpdateTicket(_)
            | Endpoint::NestedReportAction { .. }
            | Endpoint::FlatReportAction { .. }
            | Endpoint::UpdateMainGroup(_)
            | Endpoint::UpdateNews(_)
            | Endpoint::UpdateNotification(_) => Method::Put,
            Endpoint::DeleteMainGroup(_)
            | Endpoint::DeleteNews(_)
            | Endpoint::DeleteNotification(_) => Method::Delete,
        }
    }

    /// Path relative to the API base, always starting with `/`.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/admin/login".to_string(),
            Endpoint::Dashboard => "/admin/dashboard".to_string(),
            Endpoint::HelpSupport => "/admin/help-support".to_string(),
            Endpoint::UpdateTicket(id) => format!("/admin/tickets/{}", segment(id)),
            Endpoint::ReplyTicket(id) => format!("/admin/tickets/{}/reply", segment(id)),
            Endpoint::Reported(kind) => format!("/admin/reported/{}", kind.as_str()),
            Endpoint::NestedReportAction {
                kind,
                parent,
                report,
                action,
            } => format!(
                "/admin/reported/{}/{}/{}/{}",
                kind.as_str(),
                segment(parent),
                segment(report),
                action.path_segment()
            ),
            Endpoint::FlatReportAction {
                report,
                action,
            } => format!("/admin/reported/{}/{}", segment(report), action.path_segment()),
            Endpoint::ListMainGroups | Endpoint::CreateMainGroup => {
                "/admin/main-groups".to_string()
            },
            Endpoint::UpdateMainGroup(id) | Endpoint::DeleteMainGroup(id) => {
                format!("/admin/main-groups/{}", segment(id))
            },
            Endpoint::ListNews | Endpoint::CreateNews => "/news".to_string(),
            Endpoint::UpdateNews(id) | Endpoint::DeleteNews(id) => {
                format!("/news/{}", segment(id))
            },
            Endpoint::ListNotifications | Endpoint::CreateNotification => {
                "/notifications".to_string()
            },
            Endpoint::UpdateNotification(id) | Endpoint::DeleteNotification(id) => {
                format!("/notifications/{}", segment(id))
            },
        }
    }

    /// Absolute URL under `base`. A trailing slash on `base` is ignored.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_routes_carry_admin_prefix() {
        assert_eq!(Endpoint::Login.path(), "/admin/login");
        assert_eq!(Endpoint::Login.method(), Method::Post);
        assert_eq!(Endpoint::Dashboard.to_string(), "GET /admin/dashboard");
        assert_eq!(Endpoint::Reported(ReportedKind::Jobs).path(), "/admin/reported/jobs");
        assert_eq!(Endpoint::ReplyTicket("t1".into()).path(), "/admin/tickets/t1/reply");
        assert_eq!(Endpoint::DeleteMainGroup("m1".into()).method(), Method::Delete);
    }

    #[test]
    fn content_routes_have_no_admin_prefix() {
        assert_eq!(Endpoint::ListNews.path(), "/news");
        assert_eq!(Endpoint::UpdateNotification("n9".into()).path(), "/notifications/n9");
        assert_eq!(Endpoint::CreateNotification.method(), Method::Post);
    }

    #[test]
    fn report_actions() {
        let nested = Endpoint::NestedReportAction {
            kind: NestedKind::Groups,
            parent: "g1".into(),
            report: "r2".into(),
            action: ReportAction::Dismiss,
        };
        assert_eq!(nested.path(), "/admin/reported/groups/g1/r2/dismiss");
        assert_eq!(nested.method(), Method::Put);

        let flat = Endpoint::FlatReportAction {
            report: "r1".into(),
            action: ReportAction::Resolve,
        };
        assert_eq!(flat.path(), "/admin/reported/r1/resolve");
    }

    #[test]
    fn group_reports_are_addressed_by_reporter() {
        let report = SubjectReport {
            id: "rep9".into(),
            user_id: "u1".into(),
            ..SubjectReport::default()
        };
        let group = RecordId::from("g1");
        let endpoint =
            Endpoint::nested_report_action(NestedKind::Groups, &group, &report, ReportAction::Resolve)
                .unwrap();
        assert_eq!(endpoint.path(), "/admin/reported/groups/g1/u1/resolve");

        let news_item = RecordId::from("n1");
        let news =
            Endpoint::nested_report_action(NestedKind::News, &news_item, &report, ReportAction::Dismiss)
                .unwrap();
        assert_eq!(news.path(), "/admin/reported/news/n1/rep9/dismiss");
    }

    #[test]
    fn news_reports_without_id_cannot_be_actioned() {
        let report = SubjectReport {
            user_id: "u1".into(),
            ..SubjectReport::default()
        };
        assert_eq!(NestedKind::News.report_key(&report), None);
        let news_item = RecordId::from("n1");
        let endpoint =
            Endpoint::nested_report_action(NestedKind::News, &news_item, &report, ReportAction::Dismiss);
        assert_eq!(endpoint, None);
        assert_eq!(NestedKind::Groups.report_key(&report).map(RecordId::as_str), Some("u1"));
        assert_eq!(NestedKind::Groups.report_key(&SubjectReport::default()), None);
    }

    #[test]
    fn url_joins_base_once() {
        let base = "http://localhost:3001/api/";
        assert_eq!(Endpoint::ListNews.url(base), "http://localhost:3001/api/news");
        assert_eq!(
            Endpoint::ListMainGroups.url("http://localhost:3001/api"),
            "http://localhost:3001/api/admin/main-groups"
        );
    }

    #[test]
    fn ids_stay_inside_their_segment() {
        assert_eq!(Endpoint::UpdateNews("a/b c".into()).path(), "/news/a%2Fb%20c");
    }
}
