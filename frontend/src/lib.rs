//! Ticketline frontend application.
//!
//! Context-driven layering:
//! - `web::route` / `web::router`: route model and routing service (the
//!   centralized navigation guard lives here)
//! - `session`: authentication state and the durable token
//! - `api`: HTTP client over the events API
//! - `components`: UI layer (shell + one module per view)

mod api;
mod components {
    pub mod booking_success;
    pub mod event_create;
    pub mod event_form;
    pub mod event_update;
    pub mod event_view;
    pub mod home;
    pub mod login;
    pub mod register;
    pub mod shell;
}
mod session;

// Browser plumbing: routing over the History API and file reading.
pub(crate) mod web {
    pub mod file;
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;

use crate::api::EventsApi;
use crate::components::booking_success::BookingSuccessPage;
use crate::components::event_create::EventCreatePage;
use crate::components::event_update::EventUpdatePage;
use crate::components::event_view::EventViewPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::shell::{AppShell, ShellContext};
use crate::session::SessionContext;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// Maps the current route to its view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage category=None /> }.into_any(),
        AppRoute::Category(category) => {
            view! { <HomePage category=Some(category) /> }.into_any()
        }
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::EventDetail(id) => view! { <EventViewPage id=id /> }.into_any(),
        AppRoute::EventCreate => view! { <EventCreatePage /> }.into_any(),
        AppRoute::EventEdit(id) => view! { <EventUpdatePage id=id /> }.into_any(),
        AppRoute::BookingSuccess => view! { <BookingSuccessPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-red-500">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // API client and session are ambient application state, created once at
    // shell mount and torn down never.
    let api = EventsApi::from_env();
    provide_context(api.clone());

    let session = SessionContext::new();
    provide_context(session);
    session::init_session(&session, &api);

    let shell = ShellContext::new();
    provide_context(shell);

    // The router guards every route through the injected auth signal.
    let is_authenticated = session.is_authed_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <AppShell>
                <RouterOutlet matcher=route_matcher />
            </AppShell>
        </Router>
    }
}
