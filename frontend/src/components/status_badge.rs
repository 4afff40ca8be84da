use yew::prelude::*;
use zetho_admin_shared::{
    classify::{Priority, Severity},
    ReportStatus, TicketStatus,
};

/// Anything that renders as a coloured pill.
pub trait BadgeTone {
    fn badge_label(&self) -> String;
    fn badge_classes(&self) -> &'static str;
}

impl BadgeTone for ReportStatus {
    fn badge_label(&self) -> String {
        self.label().to_string()
    }

    fn badge_classes(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "bg-amber-100 text-amber-700",
            ReportStatus::Resolved => "bg-emerald-100 text-emerald-700",
            ReportStatus::Dismissed => "bg-slate-100 text-slate-600",
        }
    }
}

impl BadgeTone for TicketStatus {
    fn badge_label(&self) -> String {
        self.label().to_string()
    }

    fn badge_classes(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "bg-amber-100 text-amber-700",
            TicketStatus::InProgress => "bg-sky-100 text-sky-700",
            TicketStatus::Resolved => "bg-emerald-100 text-emerald-700",
        }
    }
}

impl BadgeTone for Severity {
    fn badge_label(&self) -> String {
        self.as_str().to_uppercase()
    }

    fn badge_classes(&self) -> &'static str {
        match self {
            Severity::High => "bg-red-100 text-red-700",
            Severity::Medium => "bg-orange-100 text-orange-700",
            Severity::Low => "bg-yellow-100 text-yellow-700",
        }
    }
}

impl BadgeTone for Priority {
    fn badge_label(&self) -> String {
        self.as_str().to_uppercase()
    }

    fn badge_classes(&self) -> &'static str {
        match self {
            Priority::High => "bg-red-100 text-red-700",
            Priority::Medium => "bg-orange-100 text-orange-700",
            Priority::Low => "bg-emerald-100 text-emerald-700",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub label: String,
    pub tone: &'static str,
}

impl StatusBadgeProps {
    pub fn of(value: &impl BadgeTone) -> Self {
        StatusBadgeProps {
            label: value.badge_label(),
            tone: value.badge_classes(),
        }
    }
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span
            class={classes!(
                "inline-flex",
                "items-center",
                "rounded-full",
                "px-2.5",
                "py-0.5",
                "text-xs",
                "font-semibold",
                props.tone
            )}
        >
            { props.label.clone() }
        </span>
    }
}

/// `<StatusBadge>` for any [`BadgeTone`] value.
pub fn badge(value: &impl BadgeTone) -> Html {
    let props = StatusBadgeProps::of(value);
    html! { <StatusBadge ..props /> }
}
