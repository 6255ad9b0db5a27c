//! Event creation view (admin).

use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketline_shared::EventPayload;

use crate::api::use_api;
use crate::components::event_form::{EventForm, FormState};
use crate::components::shell::use_shell;
use crate::session::use_session;
use crate::web::router::use_router;

#[component]
pub fn EventCreatePage() -> impl IntoView {
    let shell = use_shell();
    let session = use_session();
    let router = use_router();
    let api = StoredValue::new(use_api());

    shell.set_header("Create Event");

    let state = FormState::new();

    let on_submit = Callback::new(move |payload: EventPayload| {
        let token = session.token();
        spawn_local(async move {
            match api.get_value().create_event(&token, &payload).await {
                Ok(_) => {
                    shell.notify_success("Event created");
                    router.navigate("/");
                }
                // Form state stays as entered so the user can correct and retry.
                Err(err) => shell.notify_error(err.message().to_string()),
            }
        });
    });

    view! {
        <div>
            <button
                on:click=move |_| router.back()
                class="mb-4 px-4 py-2 cursor-pointer rounded-lg bg-gray-200 dark:bg-gray-700"
            >
                "Back"
            </button>
            <EventForm state=state submit_label="Create Event" on_submit=on_submit />
        </div>
    }
}
