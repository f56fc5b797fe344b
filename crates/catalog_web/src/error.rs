//! Our custom error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::JsValue;

pub type WebResult<T> = Result<T, WebError>;

/// Every variant displays exactly its message, so pages can show it as is.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum WebError {
    /// The request never produced a response.
    #[error("{message}")]
    Transport { message: String },
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The server rejected the session token. The token is gone by the time
    /// this is returned.
    #[error("{message}")]
    Unauthorized { message: String },
    /// The server answered but flagged the operation as failed.
    #[error("{message}")]
    Rejected { message: String },
    #[error("{message}")]
    Decode { message: String },
    #[error("{message}")]
    Invalid { message: String },
}

impl WebError {
    pub fn new(message: impl ToString) -> Self {
        Self::Invalid {
            message: message.to_string(),
        }
    }

    pub fn transport<E: std::error::Error>(e: E) -> Self {
        Self::Transport {
            message: e.to_string(),
        }
    }

    pub fn decode<E: std::error::Error>(e: E) -> Self {
        Self::Decode {
            message: e.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Status { message, .. }
            | Self::Unauthorized { message }
            | Self::Rejected { message }
            | Self::Decode { message }
            | Self::Invalid { message } => message,
        }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Transport {
            message: value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn displays_only_the_message() {
        let err = WebError::Status {
            status: 409,
            message: "Brand already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Brand already exists");
        assert_eq!(err.message(), "Brand already exists");
        assert_eq!(err.status(), Some(409));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn unauthorized_reports_401() {
        let err = WebError::Unauthorized {
            message: "jwt expired".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
    }
}
