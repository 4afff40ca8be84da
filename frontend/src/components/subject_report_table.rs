use yew::prelude::*;
use zetho_admin_shared::{models::SubjectReport, ReportAction};

use crate::{
    components::{report_actions::ReportActions, status_badge::badge},
    i18n::current::{common as common_text, report_table as t},
    utils::time_ago,
};

/// A Resolve/Dismiss click on one row.
pub type RowAction = (SubjectReport, ReportAction);

#[derive(Properties, PartialEq)]
pub struct SubjectReportTableProps {
    pub reports: Vec<SubjectReport>,
    #[prop_or(true)]
    pub show_status: bool,
    pub on_action: Callback<RowAction>,
}

/// Rows can share an id (or have none), so the position is part of the key.
fn row_key(index: usize, report: &SubjectReport) -> String {
    format!("{index}:{}", report.id)
}

/// Reports filed against one news item or group.
#[function_component(SubjectReportTable)]
pub fn subject_report_table(props: &SubjectReportTableProps) -> Html {
    let rows = props.reports.iter().enumerate().map(|(index, report)| {
        let action_cell = if report.status.is_pending() {
            let on_action = {
                let cb = props.on_action.clone();
                let report = report.clone();
                Callback::from(move |action: ReportAction| cb.emit((report.clone(), action)))
            };
            html! { <ReportActions {on_action} /> }
        } else {
            html! { <span class="text-slate-500">{ common_text::ACTION_TAKEN }</span> }
        };
        let reason = if report.reason.is_empty() {
            common_text::NO_VALUE.to_string()
        } else {
            report.reason.clone()
        };

        html! {
            <tr key={row_key(index, report)} class="border-t border-slate-100">
                <td class="px-3 py-2">{ report.user_id.to_string() }</td>
                <td class="px-3 py-2">{ reason }</td>
                <td class="px-3 py-2 text-slate-500">{ time_ago(&report.created_at) }</td>
                if props.show_status {
                    <td class="px-3 py-2">{ badge(&report.status) }</td>
                }
                <td class="px-3 py-2">{ action_cell }</td>
            </tr>
        }
    });

    html! {
        <div class="mt-4 overflow-x-auto" aria-live="polite">
            <table class="w-full text-left text-sm">
                <thead class="text-xs uppercase text-slate-500">
                    <tr>
                        <th class="px-3 py-2">{ t::REPORTER }</th>
                        <th class="px-3 py-2">{ t::REASON }</th>
                        <th class="px-3 py-2">{ t::REPORTED_AT }</th>
                        if props.show_status {
                            <th class="px-3 py-2">{ t::STATUS }</th>
                        }
                        <th class="px-3 py-2">{ t::ACTION }</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_less_rows_from_one_reporter_get_distinct_keys() {
        let report = SubjectReport {
            user_id: "u1".into(),
            ..SubjectReport::default()
        };
        assert_ne!(row_key(0, &report), row_key(1, &report));
        assert_eq!(row_key(2, &report), "2:");
    }
}
