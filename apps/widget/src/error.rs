use std::fmt;
use thiserror::Error;

use crate::texts;

/// Which part of the selection blocked a confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// Date or start time not picked yet.
    DateOrTime,
    /// No service checked.
    Services,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::DateOrTime => f.write_str("date/time"),
            MissingField::Services => f.write_str("services"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// The request never got a response (DNS, connect, timeout, reset).
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a failure status or an unreadable body.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// 4xx: missing route or resource.
    #[error("not found ({status}): {path}")]
    NotFound { status: u16, path: String },

    #[error("incomplete selection: {0} missing")]
    IncompleteSelection(MissingField),

    /// This cycle's booking was already handed to the host.
    #[error("booking already sent")]
    AlreadyConfirmed,

    #[error("cannot encode booking: {0}")]
    Encode(String),
}

impl WidgetError {
    /// Localized text shown to the user in place of the expected result.
    pub fn user_message(&self) -> &'static str {
        match self {
            WidgetError::Network(_) => texts::NETWORK_ERROR,
            WidgetError::Server { .. } => texts::SERVER_ERROR,
            WidgetError::NotFound { .. } => texts::NOT_FOUND_ERROR,
            WidgetError::IncompleteSelection(MissingField::DateOrTime) => {
                texts::PICK_DATE_AND_TIME
            }
            WidgetError::IncompleteSelection(MissingField::Services) => texts::PICK_SERVICE,
            WidgetError::AlreadyConfirmed => texts::ALREADY_SENT,
            WidgetError::Encode(_) => texts::SERVER_ERROR,
        }
    }

    /// Classify a non-success HTTP status.
    pub fn from_status(status: reqwest::StatusCode, path: &str) -> Self {
        if status.is_client_error() {
            WidgetError::NotFound {
                status: status.as_u16(),
                path: path.to_string(),
            }
        } else {
            WidgetError::Server {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_500_is_server() {
        let err = WidgetError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "/available-times/x");
        assert!(matches!(err, WidgetError::Server { status: 500, .. }));
        assert_eq!(err.user_message(), texts::SERVER_ERROR);
    }

    #[test]
    fn test_from_status_503_is_server() {
        let err = WidgetError::from_status(StatusCode::SERVICE_UNAVAILABLE, "/");
        assert!(matches!(err, WidgetError::Server { status: 503, .. }));
    }

    #[test]
    fn test_from_status_404_is_not_found() {
        let err = WidgetError::from_status(StatusCode::NOT_FOUND, "/bookings/2026-10-20");
        assert_eq!(
            err,
            WidgetError::NotFound {
                status: 404,
                path: "/bookings/2026-10-20".into()
            }
        );
        assert_eq!(err.user_message(), texts::NOT_FOUND_ERROR);
    }

    #[test]
    fn test_from_status_400_is_not_found() {
        let err = WidgetError::from_status(StatusCode::BAD_REQUEST, "/available-times/bad");
        assert!(matches!(err, WidgetError::NotFound { status: 400, .. }));
    }

    #[test]
    fn test_network_message() {
        let err = WidgetError::Network("connection refused".into());
        assert_eq!(err.user_message(), texts::NETWORK_ERROR);
    }

    #[test]
    fn test_incomplete_messages_distinguish_field() {
        assert_eq!(
            WidgetError::IncompleteSelection(MissingField::DateOrTime).user_message(),
            texts::PICK_DATE_AND_TIME
        );
        assert_eq!(
            WidgetError::IncompleteSelection(MissingField::Services).user_message(),
            texts::PICK_SERVICE
        );
    }

    #[test]
    fn test_display_includes_missing_field() {
        let err = WidgetError::IncompleteSelection(MissingField::Services);
        assert_eq!(err.to_string(), "incomplete selection: services missing");
    }

    #[test]
    fn test_already_confirmed_message() {
        assert_eq!(WidgetError::AlreadyConfirmed.user_message(), texts::ALREADY_SENT);
    }
}
