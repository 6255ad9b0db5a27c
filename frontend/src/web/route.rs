//! Route definitions: the domain model of navigation.
//!
//! Pure business logic, no DOM or web_sys dependency. Every route except the
//! auth screens requires authentication; the router enforces that centrally.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Event listing (default route).
    #[default]
    Home,
    /// Event listing filtered to one category.
    Category(String),
    Login,
    Register,
    EventDetail(i64),
    EventCreate,
    EventEdit(i64),
    BookingSuccess,
    NotFound,
}

impl AppRoute {
    /// Parse a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["auth"] | ["auth", "login"] => Self::Login,
            ["auth", "register"] => Self::Register,
            ["event", "create"] => Self::EventCreate,
            ["event", "edit", id] => id.parse().map(Self::EventEdit).unwrap_or(Self::NotFound),
            ["event", id] => id.parse().map(Self::EventDetail).unwrap_or(Self::NotFound),
            ["booking-success"] => Self::BookingSuccess,
            // Our own not-found path; the category catch-all must not claim it.
            ["404"] => Self::NotFound,
            [category] => Self::Category((*category).to_string()),
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Category(category) => format!("/{category}"),
            Self::Login => "/auth/login".to_string(),
            Self::Register => "/auth/register".to_string(),
            Self::EventDetail(id) => format!("/event/{id}"),
            Self::EventCreate => "/event/create".to_string(),
            Self::EventEdit(id) => format!("/event/edit/{id}"),
            Self::BookingSuccess => "/booking-success".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Guard predicate: does this route require an authenticated session?
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::NotFound)
    }

    /// Authenticated viewers are bounced off the auth screens.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_full_client_path_surface() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(
            AppRoute::from_path("/music"),
            AppRoute::Category("music".into())
        );
        assert_eq!(AppRoute::from_path("/auth"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/auth/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/auth/register"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/event/42"), AppRoute::EventDetail(42));
        assert_eq!(AppRoute::from_path("/event/create"), AppRoute::EventCreate);
        assert_eq!(AppRoute::from_path("/event/edit/7"), AppRoute::EventEdit(7));
        assert_eq!(
            AppRoute::from_path("/booking-success"),
            AppRoute::BookingSuccess
        );
        assert_eq!(AppRoute::from_path("/a/b/c"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/event/oops"), AppRoute::NotFound);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            AppRoute::Home,
            AppRoute::Category("theatre".into()),
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::EventDetail(3),
            AppRoute::EventCreate,
            AppRoute::EventEdit(9),
            AppRoute::BookingSuccess,
            AppRoute::NotFound,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn not_found_path_does_not_become_a_category() {
        assert_eq!(AppRoute::from_path("/404"), AppRoute::NotFound);
    }

    #[test]
    fn only_auth_screens_skip_the_guard() {
        assert!(AppRoute::Home.requires_auth());
        assert!(AppRoute::Category("music".into()).requires_auth());
        assert!(AppRoute::EventDetail(1).requires_auth());
        assert!(AppRoute::EventCreate.requires_auth());
        assert!(AppRoute::EventEdit(1).requires_auth());
        assert!(AppRoute::BookingSuccess.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::Register.requires_auth());

        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
    }
}
