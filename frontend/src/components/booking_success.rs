//! Booking confirmation view.
//!
//! Shows the name of the event booked last, carried over through the shell
//! context. Arriving here without a fresh booking (direct navigation, page
//! reload) degrades to a generic confirmation.

use leptos::prelude::*;

use crate::components::shell::use_shell;
use crate::web::router::use_router;

#[component]
pub fn BookingSuccessPage() -> impl IntoView {
    let shell = use_shell();
    let router = use_router();

    shell.set_header("Booking Confirmed!");

    let event_name = move || {
        shell
            .last_booked
            .get()
            .unwrap_or_else(|| "the event".to_string())
    };

    let go_home = move |_| {
        shell.last_booked.set(None);
        router.navigate("/");
    };

    view! {
        <div class="flex justify-center mt-16">
            <div class="max-w-md text-center bg-white dark:bg-gray-800 rounded-xl shadow p-10 flex flex-col gap-6">
                <div class="text-5xl">"\u{1F39F}"</div>
                <h2 class="text-2xl font-bold">"Your ticket is booked!"</h2>
                <p class="text-gray-600 dark:text-gray-300">
                    "You have successfully booked a ticket for " {event_name} "."
                </p>
                <div class="flex justify-center gap-4">
                    <button
                        on:click=go_home
                        class="px-4 py-2 cursor-pointer rounded-lg bg-blue-600 hover:bg-blue-700 text-white"
                    >
                        "Browse More Events"
                    </button>
                </div>
            </div>
        </div>
    }
}
