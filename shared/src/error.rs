//! Error taxonomy for calls against the admin backend.

use thiserror::Error;

/// Failure of one backend call.
///
/// Views never render these directly. They collapse every variant into a
/// fixed per-view message and log the detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error: {status}")]
    Http {
        /// Status code returned by the backend.
        status: u16,
    },

    /// The body was not JSON, or did not match the expected record shape.
    #[error("Parse error: {0}")]
    Decode(String),

    /// The backend answered 2xx but reported `success: false`.
    #[error("Rejected: {0}")]
    Rejected(String),

    /// The request could not be built (serialization, form encoding).
    #[error("Request error: {0}")]
    Request(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for admin backend operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Any status outside 2xx is a failure, whatever the body says.
pub fn check_status(status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Http {
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{check_status, ApiError};

    #[test]
    fn display_includes_detail_for_logs() {
        assert_eq!(ApiError::Http { status: 502 }.to_string(), "HTTP error: 502");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
    }

    #[test]
    fn non_success_statuses_fail() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(304), Err(ApiError::Http { status: 304 }));
        assert_eq!(check_status(404), Err(ApiError::Http { status: 404 }));
        assert_eq!(check_status(500), Err(ApiError::Http { status: 500 }));
    }

    #[test]
    fn serde_errors_become_decode_errors() {
        let err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
    }
}
