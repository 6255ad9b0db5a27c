//! Reactive state behind the event form.
//!
//! One `RwSignal` per field, so each input re-renders independently. The
//! translation list is edited by whole-list replacement: every add, remove or
//! field edit builds a fresh `Vec`, which keeps undo semantics trivial (the
//! previous list value is simply restored) and plays well with keyed `For`.

use leptos::prelude::*;
use ticketline_shared::{Event, EventPayload, EventTranslation};

/// Which field of a translation entry an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationField {
    Language,
    Name,
    Description,
    Venue,
}

#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub description: RwSignal<String>,
    /// RFC 3339; converted to and from the datetime-local format at the
    /// input element only.
    pub date: RwSignal<String>,
    pub venue: RwSignal<String>,
    /// Raw input text; parsed (leniently) to a number only at submit.
    pub price: RwSignal<String>,
    /// Base64 image payload, when one has been selected.
    pub image: RwSignal<Option<String>>,
    pub translations: RwSignal<Vec<EventTranslation>>,
}

impl FormState {
    /// Blank form for event creation.
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            venue: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            image: RwSignal::new(None),
            translations: RwSignal::new(Vec::new()),
        }
    }

    /// Form pre-filled from an existing event, for editing.
    pub fn seeded(event: &Event) -> Self {
        Self {
            name: RwSignal::new(event.name.clone()),
            category: RwSignal::new(event.category.clone()),
            description: RwSignal::new(event.description.clone()),
            date: RwSignal::new(event.date.clone()),
            venue: RwSignal::new(event.venue.clone()),
            price: RwSignal::new(event.price.to_string()),
            image: RwSignal::new(event.image.clone()),
            translations: RwSignal::new(event.translations.clone()),
        }
    }

    /// Translation list paired with positions, for keyed rendering and the
    /// by-position edit operations. Tracks the list signal.
    pub fn indexed_translations(&self) -> Vec<(usize, EventTranslation)> {
        self.translations.get().into_iter().enumerate().collect()
    }

    pub fn add_translation(&self) {
        let mut next = self.translations.get_untracked();
        next.push(EventTranslation::default());
        self.translations.set(next);
    }

    pub fn remove_translation(&self, index: usize) {
        let mut next = self.translations.get_untracked();
        if index < next.len() {
            next.remove(index);
            self.translations.set(next);
        }
    }

    pub fn set_translation_field(&self, index: usize, field: TranslationField, value: String) {
        let mut next = self.translations.get_untracked();
        let Some(entry) = next.get_mut(index) else {
            return;
        };
        match field {
            TranslationField::Language => entry.language = value,
            TranslationField::Name => entry.name = value,
            TranslationField::Description => entry.description = value,
            TranslationField::Venue => entry.venue = value,
        }
        self.translations.set(next);
    }

    /// Snapshot the form into a request payload.
    pub fn to_payload(&self) -> EventPayload {
        EventPayload {
            name: self.name.get_untracked(),
            category: self.category.get_untracked(),
            description: self.description.get_untracked(),
            date: self.date.get_untracked(),
            venue: self.venue.get_untracked(),
            price: parse_price(&self.price.get_untracked()),
            image: self.image.get_untracked(),
            translations: self.translations.get_untracked(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Lenient price parsing: blank or malformed input submits as zero rather
/// than blocking the form.
fn parse_price(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(language: &str, name: &str) -> EventTranslation {
        EventTranslation {
            language: language.to_string(),
            name: name.to_string(),
            description: String::new(),
            venue: String::new(),
        }
    }

    #[test]
    fn add_then_remove_restores_the_previous_list() {
        let state = FormState::new();
        state
            .translations
            .set(vec![translation("de", "Konzert"), translation("fr", "Concert")]);
        let before = state.translations.get_untracked();

        state.add_translation();
        assert_eq!(state.translations.get_untracked().len(), 3);

        state.remove_translation(2);
        assert_eq!(state.translations.get_untracked(), before);
    }

    #[test]
    fn field_edit_replaces_only_the_matching_entry() {
        let state = FormState::new();
        state
            .translations
            .set(vec![translation("de", "Konzert"), translation("fr", "Concert")]);

        state.set_translation_field(1, TranslationField::Name, "Spectacle".to_string());

        let list = state.translations.get_untracked();
        assert_eq!(list[0].name, "Konzert");
        assert_eq!(list[1].name, "Spectacle");
    }

    #[test]
    fn indexed_list_pairs_each_entry_with_its_position() {
        let state = FormState::new();
        state
            .translations
            .set(vec![translation("de", "Konzert"), translation("fr", "Concert")]);

        let indexed = state.indexed_translations();
        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].0, 0);
        assert_eq!(indexed[0].1.language, "de");
        assert_eq!(indexed[1].0, 1);
        assert_eq!(indexed[1].1.language, "fr");
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let state = FormState::new();
        state.set_translation_field(5, TranslationField::Name, "x".to_string());
        state.remove_translation(5);
        assert!(state.translations.get_untracked().is_empty());
    }

    #[test]
    fn blank_or_malformed_price_submits_as_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("  "), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_price("12.5"), 12.5);
    }

    #[test]
    fn seeded_form_round_trips_to_an_equal_payload() {
        let event = Event {
            id: 3,
            name: "Jazz Night".to_string(),
            description: "An evening of jazz".to_string(),
            category: "music".to_string(),
            date: "2026-09-01T19:30:00Z".to_string(),
            venue: "Blue Hall".to_string(),
            price: 42.0,
            image: Some("aGVsbG8=".to_string()),
            translations: vec![translation("de", "Jazzabend")],
        };
        let state = FormState::seeded(&event);
        let payload = state.to_payload();

        assert_eq!(payload.name, event.name);
        assert_eq!(payload.category, event.category);
        assert_eq!(payload.date, event.date);
        assert_eq!(payload.venue, event.venue);
        assert_eq!(payload.price, event.price);
        assert_eq!(payload.image, event.image);
        assert_eq!(payload.translations, event.translations);
    }
}
