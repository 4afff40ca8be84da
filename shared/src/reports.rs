//! Grouped report projections and status updates over them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    classify::Severity,
    endpoints::NestedKind,
    id::RecordId,
    models::{PostReport, ReportedGroup, ReportedNews, SubjectReport},
    status::ReportStatus,
};

/// A single report that a moderator can act on.
pub trait ModeratedReport {
    /// Report id used by the moderation endpoints.
    fn report_id(&self) -> &RecordId;
    /// Who filed it.
    fn reporter(&self) -> &RecordId;
    /// Current status.
    fn status(&self) -> ReportStatus;
    /// Overwrites the status.
    fn set_status(&mut self, status: ReportStatus);
    /// When it was filed, if known.
    fn filed_at(&self) -> Option<DateTime<Utc>>;
}

impl ModeratedReport for PostReport {
    fn report_id(&self) -> &RecordId {
        &self.id
    }

    fn reporter(&self) -> &RecordId {
        &self.reported_by
    }

    fn status(&self) -> ReportStatus {
        self.status
    }

    fn set_status(&mut self, status: ReportStatus) {
        self.status = status;
    }

    fn filed_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.get()
    }
}

impl ModeratedReport for SubjectReport {
    fn report_id(&self) -> &RecordId {
        &self.id
    }

    fn reporter(&self) -> &RecordId {
        &self.user_id
    }

    fn status(&self) -> ReportStatus {
        self.status
    }

    fn set_status(&mut self, status: ReportStatus) {
        self.status = status;
    }

    fn filed_at(&self) -> Option<DateTime<Utc>> {
        self.created_at.get()
    }
}

/// Something reported, carrying its reports.
pub trait ReportBundle {
    /// Report type carried by the bundle.
    type Report: ModeratedReport;

    /// Id of the reported subject (post, news item, group).
    fn subject_id(&self) -> &RecordId;
    /// Reports in backend order.
    fn reports(&self) -> &[Self::Report];
    /// Mutable reports.
    fn reports_mut(&mut self) -> &mut [Self::Report];

    /// True when any report currently has `status`.
    fn has_status(&self, status: ReportStatus) -> bool {
        self.reports().iter().any(|report| report.status() == status)
    }

    /// The most recently filed report.
    ///
    /// Falls back to backend order when no report carries a timestamp, and
    /// keeps the earlier entry on ties.
    fn latest_report(&self) -> Option<&Self::Report> {
        let reports = self.reports();
        let mut latest = reports.first()?;
        for report in reports.iter().skip(1) {
            if report.filed_at() > latest.filed_at() {
                latest = report;
            }
        }
        Some(latest)
    }

    /// Distinct reporters in first-seen order.
    fn reporters(&self) -> Vec<&RecordId> {
        let mut seen = Vec::new();
        for report in self.reports() {
            let reporter = report.reporter();
            if !seen.contains(&reporter) {
                seen.push(reporter);
            }
        }
        seen
    }
}

impl ReportBundle for ReportedNews {
    type Report = SubjectReport;

    fn subject_id(&self) -> &RecordId {
        &self.id
    }

    fn reports(&self) -> &[SubjectReport] {
        &self.reports
    }

    fn reports_mut(&mut self) -> &mut [SubjectReport] {
        &mut self.reports
    }
}

impl ReportBundle for ReportedGroup {
    type Report = SubjectReport;

    fn subject_id(&self) -> &RecordId {
        &self.id
    }

    fn reports(&self) -> &[SubjectReport] {
        &self.reports
    }

    fn reports_mut(&mut self) -> &mut [SubjectReport] {
        &mut self.reports
    }
}

/// Client-side projection of flat post reports sharing one `post_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostReportGroup {
    pub post_id: RecordId,
    pub reports: Vec<PostReport>,
}

impl PostReportGroup {
    /// Backend severity of the latest report.
    pub fn severity(&self) -> Severity {
        self.latest_report()
            .map(|report| report.severity)
            .unwrap_or_default()
    }

    /// Up to `max` distinct reporters, plus how many more were cut.
    pub fn reporter_badges(&self, max: usize) -> (Vec<&RecordId>, usize) {
        let mut reporters = self.reporters();
        let hidden = reporters.len().saturating_sub(max);
        reporters.truncate(max);
        (reporters, hidden)
    }

    /// Card preview: post excerpt if present, else the latest reason.
    pub fn preview(&self) -> &str {
        self.latest_report()
            .map(|report| {
                if !report.post_preview.is_empty() {
                    report.post_preview.as_str()
                } else {
                    report.reason.as_str()
                }
            })
            .filter(|text| !text.is_empty())
            .unwrap_or("No preview available")
    }
}

impl ReportBundle for PostReportGroup {
    type Report = PostReport;

    fn subject_id(&self) -> &RecordId {
        &self.post_id
    }

    fn reports(&self) -> &[PostReport] {
        &self.reports
    }

    fn reports_mut(&mut self) -> &mut [PostReport] {
        &mut self.reports
    }
}

/// Groups flat post reports by post, most-reported first.
///
/// Groups appear in first-seen order before the stable sort, so posts with
/// equal counts keep backend order.
pub fn group_post_reports(reports: Vec<PostReport>) -> Vec<PostReportGroup> {
    let mut index: HashMap<RecordId, usize> = HashMap::new();
    let mut groups: Vec<PostReportGroup> = Vec::new();

    for report in reports {
        match index.get(&report.post_id) {
            Some(&slot) => groups[slot].reports.push(report),
            None => {
                index.insert(report.post_id.clone(), groups.len());
                groups.push(PostReportGroup {
                    post_id: report.post_id.clone(),
                    reports: vec![report],
                });
            },
        }
    }

    groups.sort_by(|a, b| b.reports.len().cmp(&a.reports.len()));
    tracing::debug!(groups = groups.len(), "grouped post reports");
    groups
}

/// Sets the status of one report inside a collection of bundles.
///
/// `subject` narrows the search to one bundle when the same report id could
/// appear under several subjects. Returns `false` (and changes nothing) when
/// the report is missing or the transition is not allowed.
pub fn set_report_status<B: ReportBundle>(
    bundles: &mut [B],
    subject: Option<&RecordId>,
    report_id: &RecordId,
    status: ReportStatus,
) -> bool {
    update_matching(bundles, subject, report_id, status, |report| {
        report.report_id() == report_id
    })
}

/// Sets the status of the report that `kind` addresses as `key` under
/// `parent`. Group reports match on reporter, news reports on id.
pub fn set_nested_report_status<B>(
    bundles: &mut [B],
    kind: NestedKind,
    parent: &RecordId,
    key: &RecordId,
    status: ReportStatus,
) -> bool
where
    B: ReportBundle<Report = SubjectReport>,
{
    update_matching(bundles, Some(parent), key, status, |report| {
        kind.report_key(report) == Some(key)
    })
}

fn update_matching<B, F>(
    bundles: &mut [B],
    subject: Option<&RecordId>,
    key: &RecordId,
    status: ReportStatus,
    matches: F,
) -> bool
where
    B: ReportBundle,
    F: Fn(&B::Report) -> bool,
{
    let target = bundles
        .iter_mut()
        .filter(|bundle| subject.map_or(true, |id| bundle.subject_id() == id))
        .flat_map(|bundle| bundle.reports_mut().iter_mut())
        .find(|report| matches(&**report));

    match target {
        Some(report) if report.status().can_transition_to(status) => {
            report.set_status(status);
            true
        },
        Some(report) => {
            tracing::warn!(
                report = %key,
                from = %report.status(),
                to = %status,
                "refusing report status transition"
            );
            false
        },
        None => false,
    }
}

/// Sets the status of one report in a flat list, e.g. post reports before
/// grouping. Same transition rules as [`set_report_status`].
pub fn set_flat_report_status<R: ModeratedReport>(
    reports: &mut [R],
    report_id: &RecordId,
    status: ReportStatus,
) -> bool {
    match reports.iter_mut().find(|report| report.report_id() == report_id) {
        Some(report) if report.status().can_transition_to(status) => {
            report.set_status(status);
            true
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::time::Timestamp;

    fn post_report(id: &str, post: &str, by: &str) -> PostReport {
        PostReport {
            id: id.into(),
            post_id: post.into(),
            reported_by: by.into(),
            reason: format!("reason {id}"),
            ..PostReport::default()
        }
    }

    #[test]
    fn groups_by_post_and_sorts_by_count() {
        let groups = group_post_reports(vec![
            post_report("r1", "p1", "u1"),
            post_report("r2", "p2", "u2"),
            post_report("r3", "p2", "u3"),
            post_report("r4", "p3", "u1"),
        ]);

        let order: Vec<_> = groups.iter().map(|g| g.post_id.as_str()).collect();
        assert_eq!(order, vec!["p2", "p1", "p3"]);
        assert_eq!(groups[0].reports.len(), 2);
    }

    #[test]
    fn latest_report_prefers_newest_timestamp() {
        let mut older = post_report("r1", "p1", "u1");
        older.created_at = Timestamp::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut newer = post_report("r2", "p1", "u2");
        newer.created_at = Timestamp::from(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());

        let group = PostReportGroup {
            post_id: "p1".into(),
            reports: vec![older, newer],
        };
        assert_eq!(group.latest_report().map(|r| r.id.as_str()), Some("r2"));
    }

    #[test]
    fn latest_report_without_timestamps_is_first_returned() {
        let group = PostReportGroup {
            post_id: "p1".into(),
            reports: vec![post_report("r1", "p1", "u1"), post_report("r2", "p1", "u2")],
        };
        assert_eq!(group.latest_report().map(|r| r.id.as_str()), Some("r1"));
        assert_eq!(group.preview(), "reason r1");
    }

    #[test]
    fn reporters_are_distinct() {
        let group = PostReportGroup {
            post_id: "p1".into(),
            reports: vec![
                post_report("r1", "p1", "u1"),
                post_report("r2", "p1", "u2"),
                post_report("r3", "p1", "u1"),
            ],
        };
        let reporters: Vec<_> = group.reporters().into_iter().map(RecordId::as_str).collect();
        assert_eq!(reporters, vec!["u1", "u2"]);
    }

    #[test]
    fn reporter_badges_collapse_overflow() {
        let reports = ["u1", "u2", "u1", "u3", "u4", "u5", "u6"]
            .iter()
            .enumerate()
            .map(|(i, by)| post_report(&format!("r{i}"), "p1", by))
            .collect();
        let group = PostReportGroup {
            post_id: "p1".into(),
            reports,
        };

        let (shown, hidden) = group.reporter_badges(4);
        let shown: Vec<_> = shown.iter().map(|id| id.as_str()).collect();
        assert_eq!(shown, vec!["u1", "u2", "u3", "u4"]);
        assert_eq!(hidden, 2);
        assert_eq!(group.reporter_badges(10).1, 0);
    }

    #[test]
    fn resolving_one_report_leaves_others_untouched() {
        let mut groups = group_post_reports(vec![
            post_report("r1", "p1", "u1"),
            post_report("r2", "p1", "u2"),
            post_report("r3", "p2", "u3"),
        ]);

        let changed = set_report_status(
            &mut groups,
            Some(&"p1".into()),
            &"r1".into(),
            ReportStatus::Resolved,
        );
        assert!(changed);

        let statuses: Vec<_> = groups
            .iter()
            .flat_map(|g| g.reports.iter())
            .map(|r| (r.id.as_str(), r.status))
            .collect();
        assert!(statuses.contains(&("r1", ReportStatus::Resolved)));
        assert!(statuses.contains(&("r2", ReportStatus::Pending)));
        assert!(statuses.contains(&("r3", ReportStatus::Pending)));
    }

    #[test]
    fn flat_status_change_hits_only_the_named_report() {
        let mut reports = vec![post_report("r1", "p1", "u1"), post_report("r2", "p1", "u2")];

        assert!(set_flat_report_status(&mut reports, &"r2".into(), ReportStatus::Resolved));
        assert_eq!(reports[0].status, ReportStatus::Pending);
        assert_eq!(reports[1].status, ReportStatus::Resolved);
        assert!(!set_flat_report_status(&mut reports, &"r2".into(), ReportStatus::Dismissed));
        assert!(!set_flat_report_status(&mut reports, &"missing".into(), ReportStatus::Resolved));
    }

    #[test]
    fn terminal_reports_are_not_reopened() {
        let mut groups = vec![PostReportGroup {
            post_id: "p1".into(),
            reports: vec![PostReport {
                status: ReportStatus::Dismissed,
                ..post_report("r1", "p1", "u1")
            }],
        }];
        assert!(!set_report_status(&mut groups, None, &"r1".into(), ReportStatus::Resolved));
        assert_eq!(groups[0].reports[0].status, ReportStatus::Dismissed);
        assert!(!set_report_status(&mut groups, None, &"missing".into(), ReportStatus::Resolved));
    }

    #[test]
    fn group_reports_are_matched_by_reporter() {
        let mut groups = vec![ReportedGroup {
            id: "g1".into(),
            reports: vec![
                SubjectReport {
                    id: "rep9".into(),
                    user_id: "u1".into(),
                    ..SubjectReport::default()
                },
                SubjectReport {
                    user_id: "u2".into(),
                    ..SubjectReport::default()
                },
            ],
            ..ReportedGroup::default()
        }];
        let group = RecordId::from("g1");

        assert!(!set_nested_report_status(
            &mut groups,
            NestedKind::Groups,
            &group,
            &"rep9".into(),
            ReportStatus::Resolved
        ));
        assert!(set_nested_report_status(
            &mut groups,
            NestedKind::Groups,
            &group,
            &"u1".into(),
            ReportStatus::Resolved
        ));
        assert!(set_nested_report_status(
            &mut groups,
            NestedKind::Groups,
            &group,
            &"u2".into(),
            ReportStatus::Dismissed
        ));
        assert_eq!(groups[0].reports[0].status, ReportStatus::Resolved);
        assert_eq!(groups[0].reports[1].status, ReportStatus::Dismissed);
    }

    #[test]
    fn id_less_news_reports_are_never_matched() {
        let mut news = vec![ReportedNews {
            id: "n1".into(),
            reports: vec![SubjectReport {
                user_id: "u1".into(),
                ..SubjectReport::default()
            }],
            ..ReportedNews::default()
        }];

        assert!(!set_nested_report_status(
            &mut news,
            NestedKind::News,
            &"n1".into(),
            &"u1".into(),
            ReportStatus::Dismissed
        ));
        assert_eq!(news[0].reports[0].status, ReportStatus::Pending);
    }

    #[test]
    fn subject_scope_limits_the_search() {
        let mut news = vec![
            ReportedNews {
                id: "n1".into(),
                reports: vec![SubjectReport {
                    id: "x".into(),
                    ..SubjectReport::default()
                }],
                ..ReportedNews::default()
            },
            ReportedNews {
                id: "n2".into(),
                reports: vec![SubjectReport {
                    id: "x".into(),
                    ..SubjectReport::default()
                }],
                ..ReportedNews::default()
            },
        ];

        assert!(set_report_status(&mut news, Some(&"n2".into()), &"x".into(), ReportStatus::Dismissed));
        assert_eq!(news[0].reports[0].status, ReportStatus::Pending);
        assert_eq!(news[1].reports[0].status, ReportStatus::Dismissed);
    }
}
