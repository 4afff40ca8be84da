//! Moderation flow shared by the reported-news and reported-groups pages.

use yew::Callback;
use zetho_admin_shared::{
    confirm::ConfirmCopy,
    endpoints::NestedKind,
    models::SubjectReport,
    mutation::MutationOptions,
    reports::{set_nested_report_status, ReportBundle},
    ApiError, RecordId, ReportAction,
};

use crate::{
    api,
    hooks::{spawn_optimistic, RemoteHandle},
    logging,
};

/// A report decision waiting for confirmation.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct NestedModeration {
    pub kind: NestedKind,
    pub parent: RecordId,
    /// Backend key of the report; `None` when it cannot be addressed.
    pub report: Option<RecordId>,
    pub reporter: RecordId,
    pub action: ReportAction,
}

impl NestedModeration {
    pub fn new(
        kind: NestedKind,
        parent: RecordId,
        report: &SubjectReport,
        action: ReportAction,
    ) -> Self {
        Self {
            kind,
            parent,
            report: kind.report_key(report).cloned(),
            reporter: report.user_id.clone(),
            action,
        }
    }

    pub fn copy(&self) -> ConfirmCopy {
        let subject = match self.kind {
            NestedKind::News => "news",
            NestedKind::Groups => "group",
        };
        ConfirmCopy::for_report(self.action, &self.reporter, &format!("{subject} {}", self.parent))
    }

    /// Flips the report locally, then calls the backend. A failure puts the
    /// previous list back and reaches `on_error`. Success keeps the local
    /// state without a refetch. An unaddressable report is skipped.
    pub fn run<B>(self, handle: &RemoteHandle<Vec<B>>, on_error: Callback<ApiError>)
    where
        B: ReportBundle<Report = SubjectReport> + Clone + 'static,
    {
        let Some(report) = self.report else {
            logging::info("skipping report without an id");
            return;
        };
        let kind = self.kind;
        let parent = self.parent.clone();
        let key = report.clone();
        let target = self.action.target_status();
        spawn_optimistic(
            handle,
            MutationOptions::LOCAL,
            move |bundles: &mut Vec<B>| {
                set_nested_report_status(bundles, kind, &parent, &key, target)
            },
            move || async move {
                api::moderate_nested_report(kind, &self.parent, &report, self.action).await
            },
            on_error,
        );
    }
}
