use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{sidebar::Sidebar, topbar::Topbar},
    pages,
    session_context::{SessionAction, SessionContext},
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/reported-posts")]
    ReportedPosts,
    #[at("/reported-news")]
    ReportedNews,
    #[at("/reported-jobs")]
    ReportedJobs,
    #[at("/reported-groups")]
    ReportedGroups,
    #[at("/reported-users")]
    ReportedUsers,
    #[at("/help-support")]
    HelpSupport,
    #[at("/main-group")]
    MainGroups,
    #[at("/news")]
    News,
    #[at("/notification")]
    Notifications,
    #[at("/login")]
    Login,
    #[at("/logout")]
    Logout,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login)
    }
}

fn admin_page(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <pages::dashboard::DashboardPage /> },
        Route::ReportedPosts => html! { <pages::reported_posts::ReportedPostsPage /> },
        Route::ReportedNews => html! { <pages::reported_news::ReportedNewsPage /> },
        Route::ReportedJobs => html! { <pages::reported_jobs::ReportedJobsPage /> },
        Route::ReportedGroups => html! { <pages::reported_groups::ReportedGroupsPage /> },
        Route::ReportedUsers => html! { <pages::reported_users::ReportedUsersPage /> },
        Route::HelpSupport => html! { <pages::help_support::HelpSupportPage /> },
        Route::MainGroups => html! { <pages::main_groups::MainGroupsPage /> },
        Route::News => html! { <pages::news::NewsPage /> },
        Route::Notifications => html! { <pages::notifications::NotificationsPage /> },
        Route::Login | Route::Logout | Route::NotFound => {
            html! { <Redirect<Route> to={Route::Dashboard} /> }
        },
    }
}

fn switch(route: Route, authenticated: bool) -> Html {
    match route {
        Route::Login if authenticated => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <pages::login::LoginPage /> },
        Route::Logout => html! { <LogoutRedirect /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Dashboard} /> },
        route if !authenticated && !route.is_public() => {
            html! { <Redirect<Route> to={Route::Login} /> }
        },
        route => html! {
            <AdminLayout>
                { admin_page(route) }
            </AdminLayout>
        },
    }
}

#[function_component(LogoutRedirect)]
fn logout_redirect() -> Html {
    let session = use_context::<SessionContext>();
    use_effect_with((), move |_| {
        if let Some(session) = session {
            session.dispatch(SessionAction::Logout);
        }
    });
    html! { <Redirect<Route> to={Route::Login} /> }
}

#[derive(Properties, PartialEq)]
struct AdminLayoutProps {
    children: Html,
}

#[function_component(AdminLayout)]
fn admin_layout(props: &AdminLayoutProps) -> Html {
    html! {
        <div class="flex min-h-screen bg-slate-100 text-slate-800">
            <Sidebar />
            <div class="flex min-w-0 flex-1 flex-col">
                <Topbar />
                <main class="flex-1 p-6">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    let authenticated = use_context::<SessionContext>()
        .map(|session| session.is_authenticated())
        .unwrap_or(false);

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route| switch(route, authenticated)} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::Route;

    #[test]
    fn paths_match_the_admin_links() {
        assert_eq!(Route::MainGroups.to_path(), "/main-group");
        assert_eq!(Route::Notifications.to_path(), "/notification");
        assert_eq!(Route::recognize("/help-support"), Some(Route::HelpSupport));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/does-not-exist"), Some(Route::NotFound));
    }

    #[test]
    fn only_login_is_public() {
        assert!(Route::Login.is_public());
        assert!(!Route::Dashboard.is_public());
        assert!(!Route::ReportedPosts.is_public());
    }
}
