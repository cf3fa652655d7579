use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("http error: status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("access denied: admin privileges required")]
    AccessDenied,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Broad failure category, used by callers to decide how to surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Authorization,
    Other,
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation { .. } => ErrorKind::Validation,
            AppError::Http { .. } | AppError::Transport(_) | AppError::Decode(_) => {
                ErrorKind::Transport
            }
            AppError::AccessDenied => ErrorKind::Authorization,
            AppError::NotFound(_) | AppError::Internal(_) => ErrorKind::Other,
        }
    }

    /// HTTP status carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation { message, .. } => message.clone(),
            AppError::Http { status, .. } => {
                format!("The server rejected the request (status {status}). Please try again.")
            }
            AppError::Transport(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            AppError::Decode(_) => "The server sent an unexpected response.".to_string(),
            AppError::AccessDenied => "Access denied. Admin privileges required.".to_string(),
            AppError::NotFound(what) => format!("{what} was not found."),
            AppError::Internal(_) => "Something went wrong.".to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return AppError::Decode(err.to_string());
        }

        match err.status() {
            Some(status) => AppError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => AppError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, ErrorKind};

    #[test]
    fn http_errors_carry_status() {
        let err = AppError::Http {
            status: 503,
            message: "HTTP 503".to_string(),
        };

        assert_eq!(err.status(), Some(503));
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.user_message().contains("503"));
    }

    #[test]
    fn access_denied_is_an_authorization_error() {
        let err = AppError::AccessDenied;

        assert_eq!(err.kind(), ErrorKind::Authorization);
        assert_eq!(err.status(), None);
        assert_eq!(err.user_message(), "Access denied. Admin privileges required.");
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = AppError::validation("password", "Password must be at least 6 characters long");

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.user_message(),
            "Password must be at least 6 characters long"
        );
    }
}
