//! Typed errors for backend calls.
//!
//! The fetch layer maps HTTP status codes to a tagged enum so call sites
//! match variants exhaustively instead of probing exception types.

use thiserror::Error;

/// Error returned by every `api::*` call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 400; carries the server-provided detail message.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 401; the session is missing or expired.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// 404.
    #[error("not found: {0}")]
    NotFound(String),
    /// 409.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Any other non-2xx status.
    #[error("HTTP status {0}: {1}")]
    Status(u16, String),
    /// Request aborted by the timeout signal.
    #[error("request timed out")]
    Timeout,
    /// Fetch rejected at the network level, or the liveness gate
    /// short-circuited the call because the backend is marked dead.
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    /// 2xx with a body that did not parse.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
    /// The request could not be constructed or serialized.
    #[error("request failed: {0}")]
    Request(String),
}

impl ApiError {
    /// Map an HTTP error status and its `detail` message to a variant.
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            400 => Self::BadRequest(detail),
            401 => Self::Unauthorized(detail),
            404 => Self::NotFound(detail),
            409 => Self::Conflict(detail),
            _ => Self::Status(status, detail),
        }
    }

    /// The server-provided message, when there is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::BadRequest(d)
            | Self::Unauthorized(d)
            | Self::NotFound(d)
            | Self::Conflict(d)
            | Self::Status(_, d) => (!d.is_empty()).then_some(d.as_str()),
            _ => None,
        }
    }

    /// True when the failure indicates the backend itself is down, which
    /// flips the liveness state to dead.
    pub fn marks_backend_dead(&self) -> bool {
        match self {
            Self::Unreachable(_) | Self::Timeout => true,
            Self::Status(status, _) => *status >= 500,
            _ => false,
        }
    }

    /// How a folder operation recovers from this error.
    pub fn folder_recovery(&self) -> FolderRecovery {
        match self {
            Self::BadRequest(d) | Self::NotFound(d) | Self::Conflict(d) => {
                FolderRecovery::RedirectRoot(d.clone())
            }
            Self::Unauthorized(_) => FolderRecovery::SessionExpired,
            _ => FolderRecovery::Notify,
        }
    }
}

/// Recovery policy for failed folder operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FolderRecovery {
    /// Domain failure: go back to the storage root and show the server's
    /// warning message.
    RedirectRoot(String),
    /// 401: demote to anonymous and send to the login page.
    SessionExpired,
    /// Anything else: generic toast, log the cause, no retry.
    Notify,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from_status(400, "bad".to_string()),
            ApiError::BadRequest("bad".to_string())
        );
        assert_eq!(
            ApiError::from_status(401, "no session".to_string()),
            ApiError::Unauthorized("no session".to_string())
        );
        assert_eq!(
            ApiError::from_status(404, "gone".to_string()),
            ApiError::NotFound("gone".to_string())
        );
        assert_eq!(
            ApiError::from_status(409, "exists".to_string()),
            ApiError::Conflict("exists".to_string())
        );
        assert_eq!(
            ApiError::from_status(500, "boom".to_string()),
            ApiError::Status(500, "boom".to_string())
        );
    }

    #[test]
    fn test_backend_dead_classification() {
        assert!(ApiError::Timeout.marks_backend_dead());
        assert!(ApiError::Unreachable("failed to fetch".to_string()).marks_backend_dead());
        assert!(ApiError::Status(503, String::new()).marks_backend_dead());
        assert!(!ApiError::Status(418, String::new()).marks_backend_dead());
        assert!(!ApiError::NotFound(String::new()).marks_backend_dead());
        assert!(!ApiError::Unauthorized(String::new()).marks_backend_dead());
    }

    #[test]
    fn test_folder_recovery() {
        for err in [
            ApiError::BadRequest("x".to_string()),
            ApiError::NotFound("x".to_string()),
            ApiError::Conflict("x".to_string()),
        ] {
            assert_eq!(
                err.folder_recovery(),
                FolderRecovery::RedirectRoot("x".to_string())
            );
        }
        assert_eq!(
            ApiError::Unauthorized("x".to_string()).folder_recovery(),
            FolderRecovery::SessionExpired
        );
        assert_eq!(ApiError::Timeout.folder_recovery(), FolderRecovery::Notify);
        assert_eq!(
            ApiError::Status(500, String::new()).folder_recovery(),
            FolderRecovery::Notify
        );
    }

    #[test]
    fn test_detail() {
        assert_eq!(
            ApiError::Conflict("already exists".to_string()).detail(),
            Some("already exists")
        );
        assert_eq!(ApiError::Conflict(String::new()).detail(), None);
        assert_eq!(ApiError::Timeout.detail(), None);
    }
}
