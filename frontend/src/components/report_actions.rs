use yew::prelude::*;
use zetho_admin_shared::ReportAction;

#[derive(Properties, PartialEq)]
pub struct ReportActionsProps {
    pub on_action: Callback<ReportAction>,
}

/// Resolve and Dismiss buttons for one pending report.
#[function_component(ReportActions)]
pub fn report_actions(props: &ReportActionsProps) -> Html {
    let button = |action: ReportAction, tone: &'static str| {
        let on_action = props.on_action.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_action.emit(action);
        });
        html! {
            <button
                type="button"
                class={classes!("rounded-md", "px-3", "py-1", "text-xs", "font-semibold", tone)}
                {onclick}
            >
                { action.label() }
            </button>
        }
    };

    html! {
        <div class="flex gap-2">
            { button(ReportAction::Resolve, "bg-emerald-600 text-white hover:bg-emerald-700") }
            { button(ReportAction::Dismiss, "bg-slate-200 text-slate-700 hover:bg-slate-300") }
        </div>
    }
}
