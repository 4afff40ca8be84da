use yew::prelude::*;
use zetho_admin_shared::models::StatKey;

use crate::{
    api,
    components::{
        error_banner::ErrorBanner,
        loading_spinner::SkeletonCard,
        stats_card::StatsCard,
    },
    config::DASHBOARD_SKELETONS,
    hooks::{use_remote, RemoteState},
    i18n::current::dashboard as t,
    router::Route,
};

struct CardSpec {
    key: StatKey,
    label: &'static str,
    icon: &'static str,
    route: Option<Route>,
}

fn cards() -> [CardSpec; 9] {
    let card = |key, label, icon, route| CardSpec {
        key,
        label,
        icon,
        route,
    };
    [
        card(StatKey::TotalUsers, t::TOTAL_USERS, "👤", None),
        card(StatKey::TotalGroups, t::TOTAL_GROUPS, "👥", Some(Route::MainGroups)),
        card(StatKey::TotalJobs, t::TOTAL_JOBS, "💼", None),
        card(StatKey::TotalPosts, t::TOTAL_POSTS, "📝", None),
        card(StatKey::TotalNews, t::TOTAL_NEWS, "📰", Some(Route::News)),
        card(StatKey::TotalTickets, t::TOTAL_TICKETS, "🛟", Some(Route::HelpSupport)),
        card(StatKey::ReportedGroups, t::REPORTED_GROUPS, "🚩", Some(Route::ReportedGroups)),
        card(StatKey::ReportedNews, t::REPORTED_NEWS, "🚩", Some(Route::ReportedNews)),
        card(StatKey::ReportedPosts, t::REPORTED_POSTS, "🚩", Some(Route::ReportedPosts)),
    ]
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let stats = use_remote(api::fetch_dashboard, t::LOAD_FAILED);

    let body = match stats.state() {
        RemoteState::Loading => html! {
            <div class="grid gap-5 sm:grid-cols-2 xl:grid-cols-4">
                { for (0..DASHBOARD_SKELETONS).map(|index| html! { <SkeletonCard key={index} /> }) }
            </div>
        },
        RemoteState::Failed(message) => {
            let retry = stats.reload.clone();
            html! {
                <ErrorBanner message={message.clone()} auto_dismiss={false} on_retry={retry} />
            }
        },
        RemoteState::Loaded(data) => html! {
            <div class="grid gap-5 sm:grid-cols-2 xl:grid-cols-4">
                { for cards().into_iter().map(|card| html! {
                    <StatsCard
                        key={card.label}
                        icon={card.icon}
                        label={card.label}
                        value={data.get(card.key)}
                        subtitle={AttrValue::from(t::CARD_SUBTITLE)}
                        route={card.route}
                    />
                }) }
            </div>
        },
    };

    html! {
        <section class="space-y-6">
            <h2 class="text-2xl font-bold text-slate-900">{ t::TITLE }</h2>
            { body }
        </section>
    }
}
