//! Zetho Admin single-page dashboard.
//!
//! Build with `trunk serve`; enable the `mock` feature to run against
//! in-memory fixtures instead of the admin backend.

mod api;
mod components;
mod config;
pub mod hooks;
mod i18n;
mod logging;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod session_context;
mod utils;

use yew::prelude::*;

use crate::session_context::SessionProvider;

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <router::AppRouter />
        </SessionProvider>
    }
}

fn main() {
    logging::info("starting admin dashboard");
    yew::Renderer::<App>::new().render();
}
