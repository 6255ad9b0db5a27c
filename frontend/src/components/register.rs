//! Registration screen.
//!
//! Password/confirmation equality is checked here, before any request leaves
//! the client. A successful registration returns a token and signs the user
//! straight in.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketline_shared::ApiError;

use crate::api::use_api;
use crate::components::shell::use_shell;
use crate::session::{self, use_session};
use crate::web::router::use_router;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let shell = use_shell();
    let session = use_session();
    let api = StoredValue::new(use_api());
    let router = use_router();

    shell.set_header("Register");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if pass != confirm.get_untracked() {
            let err = ApiError::Validation("Passwords do not match".to_string());
            shell.notify_error(err.message().to_string());
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api.get_value().register(&user, &pass).await {
                Ok(token) => {
                    session::set_token(&session, &api.get_value(), token);
                    shell.notify_success("Registered successfully");
                }
                Err(err) => shell.notify_error(err.message().to_string()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="flex justify-center mt-16">
            <form
                on:submit=on_submit
                class="w-full max-w-sm bg-white dark:bg-gray-800 rounded-xl shadow p-8 flex flex-col gap-4"
            >
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=username
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-transparent"
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-transparent"
                />
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=confirm
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                    class="px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-transparent"
                />
                <button
                    type="submit"
                    prop:disabled=busy
                    class="px-4 py-2 cursor-pointer rounded-lg bg-blue-600 hover:bg-blue-700 text-white disabled:opacity-50"
                >
                    {move || if busy.get() { "Registering..." } else { "Register" }}
                </button>
                <p class="text-sm text-center">
                    "Already registered? "
                    <a
                        class="text-blue-600 cursor-pointer hover:underline"
                        on:click=move |_| router.navigate("/auth/login")
                    >
                        "Log In"
                    </a>
                </p>
            </form>
        </div>
    }
}
