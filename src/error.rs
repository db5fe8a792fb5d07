//! Error types for the surrounding service layers.
//!
//! The segmenter and matcher never fail; these errors come from I/O,
//! configuration, the remote model and admin authentication.

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, KbError>;

#[derive(Debug, Error)]
pub enum KbError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("auth error: {0}")]
    Auth(String),

    #[error("remote model error: {0}")]
    Remote(#[from] RemoteError),

    #[error("logger error: {0}")]
    Logger(String),
}

/// Failures of the remote language-model call. All of them send the chat
/// path to the local lexical fallback.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("api key not configured")]
    MissingApiKey,

    #[error("rate limited")]
    RateLimited,

    #[error("http status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("transport: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_display() {
        let e = KbError::Config("KB_BIND: invalid address".into());
        assert!(e.to_string().contains("KB_BIND"));
    }

    #[test]
    fn remote_error_converts() {
        let e: KbError = RemoteError::RateLimited.into();
        assert_eq!(e.to_string(), "remote model error: rate limited");
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let e: KbError = io_err.into();
        assert!(e.to_string().contains("io error"));
        let _: &dyn Error = &e;
    }
}
