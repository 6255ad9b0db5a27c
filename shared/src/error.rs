//! Error taxonomy for API calls.
//!
//! Every transport or response failure is normalized into a single
//! [`ApiError`] carrying a human-readable message: the server's structured
//! `{message}` payload when one is present, otherwise a fallback naming the
//! failed operation. No retries are performed anywhere.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Bad credentials or a missing/expired token.
    #[error("{0}")]
    Auth(String),
    /// A client-side precondition failed before any request was sent.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Any other non-2xx response.
    #[error("{0}")]
    Server(String),
    /// Transport failure; no response payload was available.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Auth(m)
            | ApiError::Validation(m)
            | ApiError::NotFound(m)
            | ApiError::Server(m)
            | ApiError::Network(m) => m,
        }
    }

    /// Classify a non-2xx HTTP status into the matching variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => ApiError::Auth(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Server(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(
            ApiError::from_status(401, "bad token".into()),
            ApiError::Auth("bad token".into())
        );
        assert_eq!(
            ApiError::from_status(403, "forbidden".into()),
            ApiError::Auth("forbidden".into())
        );
        assert_eq!(
            ApiError::from_status(404, "no such event".into()),
            ApiError::NotFound("no such event".into())
        );
        assert_eq!(
            ApiError::from_status(500, "boom".into()),
            ApiError::Server("boom".into())
        );
    }

    #[test]
    fn display_is_the_carried_message() {
        let err = ApiError::Network("Fetching events failed: timeout".into());
        assert_eq!(err.to_string(), "Fetching events failed: timeout");
        assert_eq!(err.message(), err.to_string());
    }
}
