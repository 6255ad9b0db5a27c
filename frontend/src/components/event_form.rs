//! Shared event form, used by both the create and edit views.
//!
//! The form owns no submission logic: the parent hands in a [`FormState`] and
//! a submit callback, and decides what to do with the resulting payload.

pub mod form_state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketline_shared::{input_from_rfc3339, rfc3339_from_input, EventPayload};
use web_sys::HtmlInputElement;

use crate::components::shell::use_shell;
use crate::web::file::{read_as_base64, selected_file};

pub use form_state::{FormState, TranslationField};

#[component]
pub fn EventForm(
    state: FormState,
    submit_label: &'static str,
    on_submit: Callback<EventPayload>,
) -> impl IntoView {
    let shell = use_shell();

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(state.to_payload());
    };

    let on_image_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = selected_file(&input) else {
            return;
        };
        spawn_local(async move {
            match read_as_base64(file).await {
                Ok(b64) => state.image.set(Some(b64)),
                Err(err) => shell.notify_error(format!("Reading image failed: {err}")),
            }
        });
    };

    let input_class = "px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-600 bg-transparent w-full";

    view! {
        <form
            on:submit=handle_submit
            class="max-w-2xl bg-white dark:bg-gray-800 rounded-xl shadow p-8 flex flex-col gap-4"
        >
            <label class="flex flex-col gap-1">
                <span class="text-sm">"Name"</span>
                <input
                    type="text"
                    prop:value=state.name
                    on:input=move |ev| state.name.set(event_target_value(&ev))
                    class=input_class
                    required=true
                />
            </label>
            <label class="flex flex-col gap-1">
                <span class="text-sm">"Category"</span>
                <input
                    type="text"
                    prop:value=state.category
                    on:input=move |ev| state.category.set(event_target_value(&ev))
                    class=input_class
                    required=true
                />
            </label>
            <label class="flex flex-col gap-1">
                <span class="text-sm">"Description"</span>
                <textarea
                    prop:value=state.description
                    on:input=move |ev| state.description.set(event_target_value(&ev))
                    class=input_class
                    rows="3"
                ></textarea>
            </label>
            <label class="flex flex-col gap-1">
                <span class="text-sm">"Date"</span>
                <input
                    type="datetime-local"
                    prop:value=move || input_from_rfc3339(&state.date.get())
                    on:input=move |ev| {
                        // Partial input does not parse; keep the last valid value.
                        if let Some(ts) = rfc3339_from_input(&event_target_value(&ev)) {
                            state.date.set(ts);
                        }
                    }
                    class=input_class
                    required=true
                />
            </label>
            <label class="flex flex-col gap-1">
                <span class="text-sm">"Venue"</span>
                <input
                    type="text"
                    prop:value=state.venue
                    on:input=move |ev| state.venue.set(event_target_value(&ev))
                    class=input_class
                    required=true
                />
            </label>
            <label class="flex flex-col gap-1">
                <span class="text-sm">"Price"</span>
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    prop:value=state.price
                    on:input=move |ev| state.price.set(event_target_value(&ev))
                    class=input_class
                />
            </label>
            <label class="flex flex-col gap-1">
                <span class="text-sm">"Image"</span>
                <input type="file" accept="image/*" on:change=on_image_change class=input_class />
                <Show when=move || state.image.get().is_some()>
                    <span class="text-xs text-green-600">"Image attached"</span>
                </Show>
            </label>

            <TranslationsEditor state=state />

            <button
                type="submit"
                class="px-4 py-2 cursor-pointer rounded-lg bg-blue-600 hover:bg-blue-700 text-white"
            >
                {submit_label}
            </button>
        </form>
    }
}

/// Editable list of per-language overrides.
#[component]
fn TranslationsEditor(state: FormState) -> impl IntoView {
    let input_class =
        "px-3 py-1.5 rounded border border-gray-300 dark:border-gray-600 bg-transparent w-full";

    view! {
        <div class="flex flex-col gap-3">
            <div class="flex items-center justify-between">
                <span class="font-medium">"Translations"</span>
                <button
                    type="button"
                    on:click=move |_| state.add_translation()
                    class="px-3 py-1 cursor-pointer rounded bg-gray-200 dark:bg-gray-700 text-sm"
                >
                    "Add translation"
                </button>
            </div>
            <For
                each=move || state.indexed_translations()
                key=|(index, _)| *index
                let:entry
            >
                {
                    let (index, translation) = entry;
                    view! {
                        <div class="grid grid-cols-2 gap-2 border border-gray-200 dark:border-gray-700 rounded-lg p-3">
                            <input
                                type="text"
                                placeholder="Language (e.g. de)"
                                prop:value=translation.language.clone()
                                on:input=move |ev| {
                                    state.set_translation_field(
                                        index,
                                        TranslationField::Language,
                                        event_target_value(&ev),
                                    )
                                }
                                class=input_class
                            />
                            <input
                                type="text"
                                placeholder="Name"
                                prop:value=translation.name.clone()
                                on:input=move |ev| {
                                    state.set_translation_field(
                                        index,
                                        TranslationField::Name,
                                        event_target_value(&ev),
                                    )
                                }
                                class=input_class
                            />
                            <input
                                type="text"
                                placeholder="Description"
                                prop:value=translation.description.clone()
                                on:input=move |ev| {
                                    state.set_translation_field(
                                        index,
                                        TranslationField::Description,
                                        event_target_value(&ev),
                                    )
                                }
                                class=input_class
                            />
                            <input
                                type="text"
                                placeholder="Venue"
                                prop:value=translation.venue.clone()
                                on:input=move |ev| {
                                    state.set_translation_field(
                                        index,
                                        TranslationField::Venue,
                                        event_target_value(&ev),
                                    )
                                }
                                class=input_class
                            />
                            <button
                                type="button"
                                on:click=move |_| state.remove_translation(index)
                                class="col-span-2 px-3 py-1 cursor-pointer rounded bg-red-600 hover:bg-red-700 text-white text-sm"
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
