//! Login screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::shell::use_shell;
use crate::session::{self, use_session};
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let shell = use_shell();
    let session = use_session();
    let api = StoredValue::new(use_api());
    let router = use_router();

    shell.set_header("Log In");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        let user = username.get_untracked();
        let pass = password.get_untracked();
        spawn_local(async move {
            match api.get_value().sign_in(&user, &pass).await {
                Ok(token) => {
                    // The router's auth listener takes it from here.
                    session::set_token(&session, &api.get_value(), token);
                    shell.notify_success("Logged in successfully");
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
                <button
                    type="submit"
                    prop:disabled=busy
                    class="px-4 py-2 cursor-pointer rounded-lg bg-blue-600 hover:bg-blue-700 text-white disabled:opacity-50"
                >
                    {move || if busy.get() { "Logging in..." } else { "Log In" }}
                </button>
                <p class="text-sm text-center">
                    "No account? "
                    <a
                        class="text-blue-600 cursor-pointer hover:underline"
                        on:click=move |_| router.navigate("/auth/register")
                    >
                        "Register"
                    </a>
                </p>
                <div class="text-xs text-gray-500 dark:text-gray-400 border border-dashed border-gray-300 dark:border-gray-600 rounded-lg p-3">
                    "Demo admin credentials: admin / admin"
                </div>
            </form>
        </div>
    }
}
