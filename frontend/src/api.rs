//! HTTP client for the events API.
//!
//! Every operation is a stateless request/response mapping. Authenticated
//! requests attach an `Authorization: Bearer <token>` header; every failure
//! is normalized into [`ApiError`] with the server's `{message}` payload when
//! present, else a fallback naming the operation.

use gloo_net::http::{Request, Response};
use leptos::prelude::use_context;
use ticketline_shared::{
    ApiError, AssignRequest, AssignResponse, CredentialsRequest, ErrorBody, Event, EventPayload,
    EventsPage, TokenResponse, UserProfile,
};

/// Default backend location; override at build time with `TICKETLINE_API_URL`.
const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct EventsApi {
    base_url: String,
}

/// Fetch the API client from context.
pub fn use_api() -> EventsApi {
    use_context::<EventsApi>().expect("EventsApi should be provided")
}

fn transport(fallback: &str, err: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("{fallback}: {err}"))
}

/// Read the server's structured error payload off a non-2xx response.
async fn fail(res: Response, fallback: &str) -> ApiError {
    let status = res.status();
    let message = match res.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("{fallback}: HTTP {status}"),
    };
    ApiError::from_status(status, message)
}

fn encode_segment(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

impl EventsApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_env() -> Self {
        let base_url = option_env!("TICKETLINE_API_URL").unwrap_or(DEFAULT_API_URL);
        Self::new(base_url.to_string())
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    // =========================================================
    // Auth
    // =========================================================

    /// `POST /auth/login`; bad credentials surface as [`ApiError::Auth`].
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<String, ApiError> {
        self.token_request("/auth/login", username, password, "Login failed")
            .await
    }

    /// `POST /auth/register`. Password/confirmation equality is the caller's
    /// precondition, checked before this is ever invoked.
    pub async fn register(&self, username: &str, password: &str) -> Result<String, ApiError> {
        self.token_request("/auth/register", username, password, "Registration failed")
            .await
    }

    async fn token_request(
        &self,
        path: &str,
        username: &str,
        password: &str,
        op: &str,
    ) -> Result<String, ApiError> {
        let body = CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let res = Request::post(&self.url(path))
            .json(&body)
            .map_err(|e| transport(op, e))?
            .send()
            .await
            .map_err(|e| transport(op, e))?;
        if !res.ok() {
            return Err(fail(res, op).await);
        }
        let token: TokenResponse = res.json().await.map_err(|e| transport(op, e))?;
        Ok(token.token)
    }

    // =========================================================
    // Event listing
    // =========================================================

    /// `GET /events?page&limit`
    pub async fn list_events(
        &self,
        token: &str,
        page: u32,
        limit: u32,
    ) -> Result<EventsPage, ApiError> {
        self.fetch_page(token, self.url("/events"), page, limit).await
    }

    /// `GET /events/category/:category?page&limit`
    pub async fn events_by_category(
        &self,
        token: &str,
        category: &str,
        page: u32,
        limit: u32,
    ) -> Result<EventsPage, ApiError> {
        let path = format!("/events/category/{}", encode_segment(category));
        self.fetch_page(token, self.url(&path), page, limit).await
    }

    /// `GET /events/search/:query?page&limit`
    pub async fn search_events(
        &self,
        token: &str,
        query: &str,
        page: u32,
        limit: u32,
    ) -> Result<EventsPage, ApiError> {
        let path = format!("/events/search/{}", encode_segment(query));
        self.fetch_page(token, self.url(&path), page, limit).await
    }

    async fn fetch_page(
        &self,
        token: &str,
        url: String,
        page: u32,
        limit: u32,
    ) -> Result<EventsPage, ApiError> {
        const OP: &str = "Fetching events failed";
        let page = page.to_string();
        let limit = limit.to_string();
        let res = Request::get(&url)
            .query([("page", page.as_str()), ("limit", limit.as_str())])
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| transport(OP, e))?;
        if !res.ok() {
            return Err(fail(res, OP).await);
        }
        res.json::<EventsPage>().await.map_err(|e| transport(OP, e))
    }

    // =========================================================
    // Single events
    // =========================================================

    /// `GET /events/:id`
    pub async fn event(&self, token: &str, id: i64) -> Result<Event, ApiError> {
        const OP: &str = "Fetching event failed";
        let res = Request::get(&self.url(&format!("/events/{id}")))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| transport(OP, e))?;
        if !res.ok() {
            return Err(fail(res, OP).await);
        }
        res.json::<Event>().await.map_err(|e| transport(OP, e))
    }

    /// `POST /events`
    pub async fn create_event(
        &self,
        token: &str,
        payload: &EventPayload,
    ) -> Result<Event, ApiError> {
        const OP: &str = "Creating event failed";
        let res = Request::post(&self.url("/events"))
            .header("Authorization", &Self::bearer(token))
            .json(payload)
            .map_err(|e| transport(OP, e))?
            .send()
            .await
            .map_err(|e| transport(OP, e))?;
        if !res.ok() {
            return Err(fail(res, OP).await);
        }
        res.json::<Event>().await.map_err(|e| transport(OP, e))
    }

    /// `PUT /events/:id`
    pub async fn update_event(
        &self,
        token: &str,
        id: i64,
        payload: &EventPayload,
    ) -> Result<Event, ApiError> {
        const OP: &str = "Updating event failed";
        let res = Request::put(&self.url(&format!("/events/{id}")))
            .header("Authorization", &Self::bearer(token))
            .json(payload)
            .map_err(|e| transport(OP, e))?
            .send()
            .await
            .map_err(|e| transport(OP, e))?;
        if !res.ok() {
            return Err(fail(res, OP).await);
        }
        res.json::<Event>().await.map_err(|e| transport(OP, e))
    }

    /// `DELETE /events/:id`
    pub async fn delete_event(&self, token: &str, id: i64) -> Result<(), ApiError> {
        const OP: &str = "Deleting event failed";
        let res = Request::delete(&self.url(&format!("/events/{id}")))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| transport(OP, e))?;
        if !res.ok() {
            return Err(fail(res, OP).await);
        }
        Ok(())
    }

    /// `POST /events/assign/:id` — the booking action. No idempotence
    /// guarantee is made here; double-submit protection is the server's.
    pub async fn assign_user_to_event(
        &self,
        token: &str,
        event_id: i64,
        user_id: i64,
    ) -> Result<AssignResponse, ApiError> {
        const OP: &str = "Assigning user to event failed";
        let res = Request::post(&self.url(&format!("/events/assign/{event_id}")))
            .header("Authorization", &Self::bearer(token))
            .json(&AssignRequest { user_id })
            .map_err(|e| transport(OP, e))?
            .send()
            .await
            .map_err(|e| transport(OP, e))?;
        if !res.ok() {
            return Err(fail(res, OP).await);
        }
        res.json::<AssignResponse>()
            .await
            .map_err(|e| transport(OP, e))
    }

    // =========================================================
    // Users
    // =========================================================

    /// `GET /users/data`
    pub async fn user_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        const OP: &str = "Fetching user data failed";
        let res = Request::get(&self.url("/users/data"))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| transport(OP, e))?;
        if !res.ok() {
            return Err(fail(res, OP).await);
        }
        res.json::<UserProfile>().await.map_err(|e| transport(OP, e))
    }

    /// `GET /users/events/:userId` — the server returns full events; the ids
    /// are extracted client-side.
    pub async fn user_booked_event_ids(
        &self,
        token: &str,
        user_id: i64,
    ) -> Result<Vec<i64>, ApiError> {
        const OP: &str = "Fetching user events failed";
        let res = Request::get(&self.url(&format!("/users/events/{user_id}")))
            .header("Authorization", &Self::bearer(token))
            .send()
            .await
            .map_err(|e| transport(OP, e))?;
        if !res.ok() {
            return Err(fail(res, OP).await);
        }
        let events: Vec<Event> = res.json().await.map_err(|e| transport(OP, e))?;
        Ok(events.into_iter().map(|event| event.id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed_and_joined() {
        let api = EventsApi::new("http://localhost:8080/".to_string());
        assert_eq!(api.url("/events"), "http://localhost:8080/events");
        assert_eq!(api.url("events"), "http://localhost:8080/events");
    }

    #[test]
    fn bearer_header_shape() {
        assert_eq!(EventsApi::bearer("abc123"), "Bearer abc123");
    }
}
