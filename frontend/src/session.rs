//! Session store.
//!
//! Holds the bearer token and the profile derived from it. The token is the
//! only durable artifact (one localStorage entry); `is_authed` is derived
//! from it, and the profile is refetched whenever the token transitions from
//! empty to non-empty. The router observes the auth signal to redirect.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use ticketline_shared::UserProfile;

use crate::api::EventsApi;

const STORAGE_TOKEN_KEY: &str = "ticketline_token";

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub token: String,
    pub user: UserProfile,
}

impl SessionState {
    /// Authenticated exactly when a token is present.
    pub fn is_authed(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Session context shared through the component tree.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// Auth signal for injection into the router service.
    pub fn is_authed_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authed())
    }

    /// Token as read at call time, for outgoing requests.
    pub fn token(&self) -> String {
        self.state.get_untracked().token
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Hydrate the session from durable storage at application start.
pub fn init_session(ctx: &SessionContext, api: &EventsApi) {
    if let Ok(token) = LocalStorage::get::<String>(STORAGE_TOKEN_KEY) {
        if !token.is_empty() {
            ctx.set_state.update(|state| state.token = token);
            refresh_user_data(ctx, api);
        }
    }
}

/// Install a new token. Non-empty tokens are persisted and trigger exactly
/// one profile refresh; an empty token is a logout.
pub fn set_token(ctx: &SessionContext, api: &EventsApi, token: String) {
    if token.is_empty() {
        logout(ctx);
        return;
    }
    let _ = LocalStorage::set(STORAGE_TOKEN_KEY, &token);
    ctx.set_state.update(|state| state.token = token);
    refresh_user_data(ctx, api);
}

/// Clear the token and reset the profile to the blank default (role `user`).
/// The router's auth listener handles the redirect.
pub fn logout(ctx: &SessionContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    ctx.set_state.set(SessionState::default());
}

/// Fetch the profile for the current token. Fire-and-forget: a failure is
/// logged, not retried; callers needing the outcome fetch themselves.
pub fn refresh_user_data(ctx: &SessionContext, api: &EventsApi) {
    let token = ctx.token();
    if token.is_empty() {
        return;
    }
    let api = api.clone();
    let set_state = ctx.set_state;
    spawn_local(async move {
        match api.user_profile(&token).await {
            Ok(user) => set_state.update(|state| state.user = user),
            Err(err) => {
                web_sys::console::warn_1(&format!("[Session] profile refresh failed: {err}").into());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketline_shared::Role;

    #[test]
    fn authed_iff_token_non_empty() {
        let mut state = SessionState::default();
        assert!(!state.is_authed());
        state.token = "jwt".to_string();
        assert!(state.is_authed());
    }

    #[test]
    fn default_state_is_blank_unprivileged_profile() {
        let state = SessionState::default();
        assert_eq!(state.user.role, Role::User);
        assert_eq!(state.user.tickets, 0);
        assert!(state.user.username.is_empty());
    }
}
