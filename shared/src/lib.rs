//! Ticketline shared data model.
//!
//! Wire types exchanged with the events API, plus the pure logic the
//! frontend builds its views on: error taxonomy, pagination math, listing
//! mode state, and date conversions. Everything here compiles natively and
//! carries the unit tests for the behavior the UI depends on.

use serde::{Deserialize, Serialize};

pub mod date;
pub mod error;
pub mod listing;

pub use date::{display_date, input_from_rfc3339, rfc3339_from_input};
pub use error::ApiError;
pub use listing::{EVENTS_PAGE_SIZE, ListingMode, Pager, SearchAction, classify_search_input};

// =========================================================
// Domain models
// =========================================================

/// Account role. Admins may create, edit, and delete events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// The authenticated user's profile, as served by `GET /users/data`.
///
/// Immutable from the client's perspective except for `tickets`, which
/// changes server-side as a side effect of booking.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    pub tickets: i64,
    #[serde(default)]
    pub created_at: String,
}

/// A localized override of an event's display fields, keyed by language.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventTranslation {
    pub language: String,
    pub name: String,
    pub description: String,
    pub venue: String,
}

/// An event as served by the API. The client only ever holds transient
/// copies; fresh server copies replace them on every navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    /// RFC 3339 timestamp string.
    pub date: String,
    pub venue: String,
    pub price: f64,
    /// Base64-encoded image bytes; omitted when the event has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// The server may send `null` instead of an empty list.
    #[serde(default, deserialize_with = "nullable_translations")]
    pub translations: Vec<EventTranslation>,
}

fn nullable_translations<'de, D>(deserializer: D) -> Result<Vec<EventTranslation>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for event create and update.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EventPayload {
    pub name: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub venue: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub translations: Vec<EventTranslation>,
}

// =========================================================
// Request / response envelopes
// =========================================================

/// One page of events, `GET /events` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsPage {
    #[serde(default)]
    pub events: Vec<Event>,
    /// Total matching events across all pages, not the page length.
    pub count: i64,
}

/// `POST /auth/login` and `POST /auth/register` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// `POST /events/assign/:id` request and response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignResponse {
    pub event_id: i64,
}

/// Structured error payload the server attaches to non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_uses_camel_case_wire_names() {
        let json = r#"{"userId":7,"username":"admin","role":"admin","tickets":3,"createdAt":"2026-01-05T10:00:00Z"}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, 7);
        assert!(user.role.is_admin());
        assert_eq!(user.tickets, 3);
    }

    #[test]
    fn blank_profile_defaults_to_unprivileged_role() {
        let user = UserProfile::default();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.user_id, 0);
        assert!(user.username.is_empty());
    }

    #[test]
    fn event_tolerates_null_translations_and_missing_image() {
        let json = r#"{"id":1,"name":"Jazz Night","description":"","category":"music","date":"2026-09-01T19:00:00Z","venue":"Blue Hall","price":25.5,"translations":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.translations.is_empty());
        assert!(event.image.is_none());
    }

    #[test]
    fn payload_omits_absent_image() {
        let payload = EventPayload {
            name: "Expo".into(),
            ..EventPayload::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("image"));
    }

    #[test]
    fn assign_messages_use_camel_case() {
        let json = serde_json::to_string(&AssignRequest { user_id: 4 }).unwrap();
        assert_eq!(json, r#"{"userId":4}"#);
        let res: AssignResponse = serde_json::from_str(r#"{"eventId":12}"#).unwrap();
        assert_eq!(res.event_id, 12);
    }
}
