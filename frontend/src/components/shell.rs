//! Application shell: theme flag, page-title slot, top navigation bar with
//! role-conditional actions, and the toast notifier.
//!
//! All of it lives in an explicit [`ShellContext`] created at app mount and
//! passed through Leptos context, never as hidden globals.

use std::time::Duration;

use leptos::prelude::*;

use crate::session::{self, use_session};
use crate::web::router::use_router;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
}

/// Shell-level UI state: initialized at shell mount, lives for the
/// application's lifetime.
#[derive(Clone, Copy)]
pub struct ShellContext {
    /// Page title rendered in the top bar; views set it on mount.
    pub header: RwSignal<String>,
    pub dark_mode: RwSignal<bool>,
    toast: RwSignal<Option<Toast>>,
    /// Event name carried to the booking-confirmation screen.
    pub last_booked: RwSignal<Option<String>>,
}

impl ShellContext {
    pub fn new() -> Self {
        Self {
            header: RwSignal::new(String::new()),
            dark_mode: RwSignal::new(true),
            toast: RwSignal::new(None),
            last_booked: RwSignal::new(None),
        }
    }

    pub fn set_header(&self, text: &str) {
        self.header.set(text.to_string());
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.toast.set(Some(Toast {
            message: message.into(),
            is_error: false,
        }));
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.toast.set(Some(Toast {
            message: message.into(),
            is_error: true,
        }));
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>().expect("ShellContext should be provided")
}

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let shell = use_shell();
    let session = use_session();
    let router = use_router();

    // Mirror the theme flag onto <html> so `dark:` styles apply everywhere.
    Effect::new(move |_| {
        let dark = shell.dark_mode.get();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = if dark {
                root.class_list().add_1("dark")
            } else {
                root.class_list().remove_1("dark")
            };
        }
    });

    // Toasts dismiss themselves after 3 seconds.
    Effect::new(move |_| {
        if shell.toast.get().is_some() {
            set_timeout(
                move || shell.toast.set(None),
                Duration::from_secs(3),
            );
        }
    });

    let is_authed = move || session.state.get().is_authed();
    let is_admin = move || session.state.get().user.role.is_admin();
    let tickets = move || session.state.get().user.tickets;

    let on_create = move |_| router.navigate("/event/create");
    let on_logout = move |_| {
        // The router's auth listener handles the redirect to login.
        session::logout(&session);
    };

    view! {
        <div class="p-6 bg-gray-50 dark:bg-gray-900 min-h-screen transition-colors duration-300 text-gray-800 dark:text-white">
            <header class="flex items-center justify-between mb-8">
                <h1 class="text-2xl font-bold text-gray-800 dark:text-white">
                    {move || shell.header.get()}
                </h1>
                <div class="flex items-center gap-6">
                    <Show when=is_authed>
                        <Show when=is_admin>
                            <button
                                on:click=on_create
                                class="px-4 py-2 cursor-pointer rounded-lg transition text-sm bg-blue-600 hover:bg-blue-700 text-white"
                            >
                                "Create Event"
                            </button>
                        </Show>
                        <button
                            on:click=on_logout
                            class="px-4 py-2 cursor-pointer rounded-lg transition text-sm bg-red-600 hover:bg-red-700 text-white"
                        >
                            "Logout"
                        </button>
                        <div class="relative flex items-center" title="Your tickets">
                            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="w-7 h-7">
                                <path d="M2 9a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v1a2 2 0 0 0 0 4v1a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-1a2 2 0 0 0 0-4V9z" />
                            </svg>
                            <span class="absolute -top-2 -right-2 bg-red-500 text-white text-xs rounded-full px-1.5">
                                {tickets}
                            </span>
                        </div>
                    </Show>
                    <button
                        on:click=move |_| shell.toggle_dark_mode()
                        class="w-8 h-8 cursor-pointer text-xl"
                        title="Toggle theme"
                    >
                        {move || if shell.dark_mode.get() { "\u{2600}" } else { "\u{1F319}" }}
                    </button>
                </div>
            </header>
            {children()}
            <Toaster />
        </div>
    }
}

/// Transient notification overlay, top-right.
#[component]
fn Toaster() -> impl IntoView {
    let shell = use_shell();

    view! {
        <Show when=move || shell.toast.get().is_some()>
            <div class="fixed top-4 right-4 z-50">
                <div class=move || {
                    let is_error = shell.toast.get().map(|t| t.is_error).unwrap_or(false);
                    if is_error {
                        "px-4 py-3 rounded-lg shadow-lg bg-red-600 text-white"
                    } else {
                        "px-4 py-3 rounded-lg shadow-lg bg-green-600 text-white"
                    }
                }>
                    <span>{move || shell.toast.get().map(|t| t.message).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
