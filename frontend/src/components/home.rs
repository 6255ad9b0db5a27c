//! Event listing: the home view and its category-filtered variant.
//!
//! The listing runs in one explicit [`ListingMode`] at a time (all events, one
//! category, or a free-text search). Every page flip or mode change issues one
//! request; a generation counter discards responses that arrive after a newer
//! request was issued, so a slow page-2 response can never overwrite page 3.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketline_shared::{
    classify_search_input, display_date, Event, ListingMode, Pager, SearchAction, EVENTS_PAGE_SIZE,
};

use crate::api::use_api;
use crate::components::shell::use_shell;
use crate::session::{self, use_session};
use crate::web::router::use_router;

#[component]
pub fn HomePage(category: Option<String>) -> impl IntoView {
    let shell = use_shell();
    let session = use_session();
    let router = use_router();
    let api = StoredValue::new(use_api());

    match &category {
        Some(c) => shell.set_header(&format!("Events: {c}")),
        None => shell.set_header("Events"),
    }

    let events = RwSignal::new(Vec::<Event>::new());
    let pager = RwSignal::new(Pager::default());
    let mode = RwSignal::new(match category {
        Some(c) => ListingMode::Category(c),
        None => ListingMode::All,
    });
    let query = RwSignal::new(String::new());
    let booked = RwSignal::new(HashSet::<i64>::new());
    let loading = RwSignal::new(false);

    // Monotonic request generation; only the newest in-flight fetch may land.
    let fetch_gen = StoredValue::new(0u64);

    let load = move || {
        let token = session.token();
        if token.is_empty() {
            return;
        }
        let my_gen = fetch_gen.get_value() + 1;
        fetch_gen.set_value(my_gen);
        let mode_now = mode.get_untracked();
        let page = pager.get_untracked().page;
        loading.set(true);
        spawn_local(async move {
            let result = match mode_now {
                ListingMode::All => {
                    api.get_value()
                        .list_events(&token, page, EVENTS_PAGE_SIZE)
                        .await
                }
                ListingMode::Category(c) => {
                    api.get_value()
                        .events_by_category(&token, &c, page, EVENTS_PAGE_SIZE)
                        .await
                }
                ListingMode::Search(q) => {
                    api.get_value()
                        .search_events(&token, &q, page, EVENTS_PAGE_SIZE)
                        .await
                }
            };
            if fetch_gen.get_value() != my_gen {
                // A newer request superseded this one.
                return;
            }
            match result {
                Ok(page_data) => {
                    events.set(page_data.events);
                    pager.update(|p| p.apply_count(page_data.count));
                }
                Err(err) => shell.notify_error(err.message().to_string()),
            }
            loading.set(false);
        });
    };

    // Memos keep these effects quiet across unrelated session updates (a
    // profile refresh must not refire the listing fetch).
    let authed = Memo::new(move |_| session.state.get().is_authed());
    Effect::new(move |_| {
        if authed.get() {
            load();
        }
    });

    let user_id = Memo::new(move |_| session.state.get().user.user_id);
    Effect::new(move |_| {
        let uid = user_id.get();
        if uid == 0 {
            return;
        }
        let token = session.token();
        spawn_local(async move {
            match api.get_value().user_booked_event_ids(&token, uid).await {
                Ok(ids) => booked.set(ids.into_iter().collect()),
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[Home] booked events fetch failed: {err}").into(),
                    );
                }
            }
        });
    });

    let on_search_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        query.set(value.clone());
        match classify_search_input(&value) {
            SearchAction::Clear => {
                if mode.get_untracked() != ListingMode::All {
                    mode.set(ListingMode::All);
                    load();
                }
            }
            // The page is not rewound here; focusing the box already did that.
            SearchAction::Query(q) => {
                mode.set(ListingMode::Search(q));
                load();
            }
            SearchAction::CategoryJump(c) => router.navigate(&format!("/{c}")),
            SearchAction::Ignore => {}
        }
    };

    // Focusing the search box rewinds to page 1 so a new query starts clean.
    let on_search_focus = move |_| {
        if pager.get_untracked().page != 1 {
            pager.update(|p| p.reset());
            load();
        }
    };

    let on_clear_search = move |_| {
        query.set(String::new());
        router.navigate("/");
    };

    let on_prev = move |_| {
        if !pager.get_untracked().at_first() {
            pager.update(|p| p.prev());
            load();
        }
    };
    let on_next = move |_| {
        if !pager.get_untracked().at_last() {
            pager.update(|p| p.next());
            load();
        }
    };

    let book = move |event_id: i64, event_name: String| {
        let token = session.token();
        let uid = session.state.get_untracked().user.user_id;
        spawn_local(async move {
            match api
                .get_value()
                .assign_user_to_event(&token, event_id, uid)
                .await
            {
                Ok(_) => {
                    booked.update(|b| {
                        b.insert(event_id);
                    });
                    shell.last_booked.set(Some(event_name));
                    session::refresh_user_data(&session, &api.get_value());
                    shell.notify_success("Ticket booked");
                    router.navigate("/booking-success");
                }
                Err(err) => shell.notify_error(err.message().to_string()),
            }
        });
    };

    let delete = move |event_id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this event?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let token = session.token();
        spawn_local(async move {
            match api.get_value().delete_event(&token, event_id).await {
                Ok(()) => {
                    shell.notify_success("Event deleted");
                    load();
                }
                Err(err) => shell.notify_error(err.message().to_string()),
            }
        });
    };

    let is_admin = move || session.state.get().user.role.is_admin();

    view! {
        <div>
            <div class="relative max-w-md mb-6">
                <input
                    type="text"
                    placeholder="Search events... (or ?category=music)"
                    prop:value=query
                    on:input=on_search_input
                    on:focus=on_search_focus
                    class="w-full px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800"
                />
                <Show when=move || !query.get().is_empty()>
                    <button
                        on:click=on_clear_search
                        class="absolute right-2 top-1/2 -translate-y-1/2 cursor-pointer text-gray-400 hover:text-gray-600"
                        title="Clear search"
                    >
                        "\u{2715}"
                    </button>
                </Show>
            </div>

            <div class="overflow-x-auto rounded-xl shadow bg-white dark:bg-gray-800">
                <table class="w-full text-left text-sm">
                    <thead class="bg-gray-100 dark:bg-gray-700 uppercase text-xs">
                        <tr>
                            <th class="px-4 py-3">"ID"</th>
                            <th class="px-4 py-3">"Name"</th>
                            <th class="px-4 py-3">"Description"</th>
                            <th class="px-4 py-3">"Category"</th>
                            <th class="px-4 py-3">"Date"</th>
                            <th class="px-4 py-3">"Venue"</th>
                            <th class="px-4 py-3">"Price"</th>
                            <th class="px-4 py-3">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || events.get() key=|event| event.id let:event>
                            {
                                let event_id = event.id;
                                let event_name = event.name.clone();
                                let event_category = event.category.clone();
                                let category_for_nav = event.category.clone();
                                view! {
                                    <tr class="border-t border-gray-200 dark:border-gray-700">
                                        <td class="px-4 py-3">{event.id}</td>
                                        <td class="px-4 py-3 font-medium">{event.name.clone()}</td>
                                        <td class="px-4 py-3 max-w-xs truncate">{event.description.clone()}</td>
                                        <td class="px-4 py-3">
                                            <span
                                                class="cursor-pointer text-blue-600 hover:underline"
                                                on:click=move |_| router.navigate(&format!("/{category_for_nav}"))
                                            >
                                                {event_category}
                                            </span>
                                        </td>
                                        <td class="px-4 py-3">{display_date(&event.date)}</td>
                                        <td class="px-4 py-3">{event.venue.clone()}</td>
                                        <td class="px-4 py-3">{format!("${:.2}", event.price)}</td>
                                        <td class="px-4 py-3">
                                            <div class="flex gap-2">
                                                <Show when=move || !booked.get().contains(&event_id)>
                                                    {
                                                        let event_name = event_name.clone();
                                                        view! {
                                                            <button
                                                                on:click=move |_| book(event_id, event_name.clone())
                                                                class="px-3 py-1 cursor-pointer rounded bg-green-600 hover:bg-green-700 text-white"
                                                            >
                                                                "Book"
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                                <button
                                                    on:click=move |_| router.navigate(&format!("/event/{event_id}"))
                                                    class="px-3 py-1 cursor-pointer rounded bg-blue-600 hover:bg-blue-700 text-white"
                                                >
                                                    "View"
                                                </button>
                                                <Show when=is_admin>
                                                    <button
                                                        on:click=move |_| router.navigate(&format!("/event/edit/{event_id}"))
                                                        class="px-3 py-1 cursor-pointer rounded bg-yellow-500 hover:bg-yellow-600 text-white"
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        on:click=move |_| delete(event_id)
                                                        class="px-3 py-1 cursor-pointer rounded bg-red-600 hover:bg-red-700 text-white"
                                                    >
                                                        "Delete"
                                                    </button>
                                                </Show>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        </For>
                        <Show when=move || events.get().is_empty() && !loading.get()>
                            <tr>
                                <td colspan="8" class="px-4 py-8 text-center text-gray-500">
                                    "No events found"
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>

            <div class="flex items-center justify-center gap-4 mt-6">
                <button
                    on:click=on_prev
                    prop:disabled=move || pager.get().at_first()
                    class="px-4 py-2 cursor-pointer rounded-lg bg-gray-200 dark:bg-gray-700 disabled:opacity-50"
                >
                    "Previous"
                </button>
                <span>
                    {move || {
                        let p = pager.get();
                        format!("Page {} of {}", p.page, p.total_pages)
                    }}
                </span>
                <button
                    on:click=on_next
                    prop:disabled=move || pager.get().at_last()
                    class="px-4 py-2 cursor-pointer rounded-lg bg-gray-200 dark:bg-gray-700 disabled:opacity-50"
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
