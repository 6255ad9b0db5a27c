//! Event detail view.
//!
//! Renders a fresh server copy of the event and lets the viewer switch
//! between the base language and any available translation. Translations
//! override name, description, and venue only; category, date, and price
//! always come from the base record.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketline_shared::{display_date, Event};

use crate::api::use_api;
use crate::components::shell::use_shell;
use crate::session::use_session;
use crate::web::router::use_router;

/// Display fields after applying the selected translation, if any.
fn localized(event: &Event, language: Option<&str>) -> (String, String, String) {
    if let Some(lang) = language {
        if let Some(tr) = event.translations.iter().find(|t| t.language == lang) {
            return (tr.name.clone(), tr.description.clone(), tr.venue.clone());
        }
    }
    (
        event.name.clone(),
        event.description.clone(),
        event.venue.clone(),
    )
}

#[component]
pub fn EventViewPage(id: i64) -> impl IntoView {
    let shell = use_shell();
    let session = use_session();
    let router = use_router();
    let api = StoredValue::new(use_api());

    shell.set_header("Event Details");

    let event = RwSignal::new(None::<Event>);
    let selected_lang = RwSignal::new(None::<String>);

    {
        let token = session.token();
        spawn_local(async move {
            match api.get_value().event(&token, id).await {
                Ok(fetched) => event.set(Some(fetched)),
                Err(err) => shell.notify_error(err.message().to_string()),
            }
        });
    }

    let on_lang_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        selected_lang.set(if value.is_empty() { None } else { Some(value) });
    };

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
                    let lang = selected_lang.get();
                    let (name, description, venue) = localized(&ev, lang.as_deref());
                    // This whole branch rebuilds on every selection change, so the
                    // selector can be plain markup instead of a reactive block.
                    let selector = if ev.translations.is_empty() {
                        None
                    } else {
                        let options = ev
                            .translations
                            .iter()
                            .map(|t| {
                                let option_lang = t.language.clone();
                                let is_selected = lang.as_deref() == Some(option_lang.as_str());
                                view! {
                                    <option value=option_lang.clone() selected=is_selected>
                                        {option_lang.to_uppercase()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>();
                        Some(view! {
                            <label class="flex items-center gap-2 text-sm">
                                "Language:"
                                <select
                                    on:change=on_lang_change
                                    class="px-2 py-1 rounded border border-gray-300 dark:border-gray-600 bg-transparent"
                                >
                                    <option value="" selected=lang.is_none()>
                                        "EN"
                                    </option>
                                    {options}
                                </select>
                            </label>
                        })
                    };
                    view! {
                        <div class="max-w-2xl bg-white dark:bg-gray-800 rounded-xl shadow p-8 flex flex-col gap-4">
                            {selector}

                            {match &ev.image {
                                Some(b64) => view! {
                                    <img
                                        src=format!("data:image/png;base64,{b64}")
                                        alt=name.clone()
                                        class="rounded-lg max-h-80 object-cover"
                                    />
                                }
                                .into_any(),
                                None => view! {
                                    <div class="rounded-lg bg-gray-100 dark:bg-gray-700 h-40 flex items-center justify-center text-gray-500">
                                        "No Image Available"
                                    </div>
                                }
                                .into_any(),
                            }}

                            <h2 class="text-2xl font-bold">{name}</h2>
                            <p class="text-gray-600 dark:text-gray-300">{description}</p>
                            <div class="grid grid-cols-2 gap-2 text-sm">
                                <span class="font-medium">"Category"</span>
                                <span>{ev.category.clone()}</span>
                                <span class="font-medium">"Date"</span>
                                <span>{display_date(&ev.date)}</span>
                                <span class="font-medium">"Venue"</span>
                                <span>{venue}</span>
                                <span class="font-medium">"Price"</span>
                                <span>{format!("${:.2}", ev.price)}</span>
                            </div>
                        </div>
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

#[cfg(test)]
mod tests {
    use super::*;
    use ticketline_shared::EventTranslation;

    fn sample_event() -> Event {
        Event {
            id: 1,
            name: "Jazz Night".to_string(),
            description: "An evening of jazz".to_string(),
            category: "music".to_string(),
            date: "2026-09-01T19:30:00Z".to_string(),
            venue: "Blue Hall".to_string(),
            price: 42.0,
            image: None,
            translations: vec![EventTranslation {
                language: "de".to_string(),
                name: "Jazzabend".to_string(),
                description: "Ein Abend voller Jazz".to_string(),
                venue: "Blaue Halle".to_string(),
            }],
        }
    }

    #[test]
    fn base_fields_without_a_selection() {
        let event = sample_event();
        let (name, description, venue) = localized(&event, None);
        assert_eq!(name, "Jazz Night");
        assert_eq!(description, "An evening of jazz");
        assert_eq!(venue, "Blue Hall");
    }

    #[test]
    fn matching_translation_overrides_display_fields() {
        let event = sample_event();
        let (name, _, venue) = localized(&event, Some("de"));
        assert_eq!(name, "Jazzabend");
        assert_eq!(venue, "Blaue Halle");
    }

    #[test]
    fn unknown_language_falls_back_to_base() {
        let event = sample_event();
        let (name, _, _) = localized(&event, Some("fr"));
        assert_eq!(name, "Jazz Night");
    }
}
