use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::sidebar as t, router::Route};

const NAV_ITEMS: [(Route, &str, &str); 10] = [
    (Route::Dashboard, "📊", t::DASHBOARD),
    (Route::ReportedPosts, "📝", t::REPORTED_POSTS),
    (Route::ReportedNews, "📰", t::REPORTED_NEWS),
    (Route::ReportedJobs, "💼", t::REPORTED_JOBS),
    (Route::ReportedGroups, "👥", t::REPORTED_GROUPS),
    (Route::ReportedUsers, "🚫", t::REPORTED_USERS),
    (Route::HelpSupport, "🛟", t::HELP_SUPPORT),
    (Route::MainGroups, "🗂️", t::MAIN_GROUPS),
    (Route::News, "📣", t::NEWS),
    (Route::Notifications, "🔔", t::NOTIFICATIONS),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let active = use_route::<Route>();

    html! {
        <aside class="hidden w-64 shrink-0 flex-col bg-slate-900 text-slate-200 md:flex">
            <div class="px-6 py-5 text-xl font-bold tracking-tight text-white">
                { t::BRAND }
            </div>
            <nav class="flex flex-col gap-1 px-3 pb-6" aria-label={t::NAV_ARIA}>
                { for NAV_ITEMS.iter().map(|(route, icon, label)| {
                    let is_active = active.as_ref() == Some(route);
                    let link_classes = classes!(
                        "flex",
                        "items-center",
                        "gap-3",
                        "rounded-lg",
                        "px-3",
                        "py-2",
                        "text-sm",
                        "font-medium",
                        "transition-colors",
                        if is_active {
                            "bg-indigo-600 text-white"
                        } else {
                            "hover:bg-slate-800 hover:text-white"
                        }
                    );
                    html! {
                        <Link<Route> to={route.clone()} classes={link_classes}>
                            <span aria-hidden="true">{ *icon }</span>
                            <span>{ *label }</span>
                        </Link<Route>>
                    }
                }) }
            </nav>
        </aside>
    }
}
