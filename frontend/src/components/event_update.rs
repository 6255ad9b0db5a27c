//! Event editing view (admin).
//!
//! The form is only mounted once the event has arrived, so the seeded state
//! is built from real data rather than patched in afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketline_shared::{Event, EventPayload};

use crate::api::use_api;
use crate::components::event_form::{EventForm, FormState};
use crate::components::shell::use_shell;
use crate::session::use_session;
use crate::web::router::use_router;

#[component]
pub fn EventUpdatePage(id: i64) -> impl IntoView {
    let shell = use_shell();
    let session = use_session();
    let router = use_router();
    let api = StoredValue::new(use_api());

    shell.set_header("Edit Event");

    let event = RwSignal::new(None::<Event>);

    {
        let token = session.token();
        spawn_local(async move {
            match api.get_value().event(&token, id).await {
                Ok(fetched) => event.set(Some(fetched)),
                Err(err) => shell.notify_error(err.message().to_string()),
            }
        });
    }

    let on_submit = Callback::new(move |payload: EventPayload| {
        let token = session.token();
        spawn_local(async move {
            match api.get_value().update_event(&token, id, &payload).await {
                Ok(_) => {
                    shell.notify_success("Event updated");
                    router.navigate("/");
                }
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
            {move || match event.get() {
                Some(ev) => {
                    let state = FormState::seeded(&ev);
                    view! {
                        <EventForm state=state submit_label="Save Changes" on_submit=on_submit />
                    }
                    .into_any()
                }
                None => view! {
                    <p class="text-gray-500">"Loading event..."</p>
                }
                .into_any(),
            }}
        </div>
    }
}
