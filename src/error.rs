//! Crate error type.
//!
//! Generation never surfaces these: remote failures are absorbed into
//! `Generated::Fallback`. Everything else (stores, clipboard, browser,
//! keychain, CLI arguments) reports through `LauncherError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Failed to open {url}: {reason}")]
    Browser { url: String, reason: String },

    #[error("Keyring error: {0}")]
    Keyring(String),

    #[error("Unknown business: {0}")]
    UnknownBusiness(String),

    #[error("Unknown business type: {0}")]
    UnknownBusinessType(String),

    #[error("Template text must not be empty")]
    EmptyTemplate,

    #[error("Cannot remove the last remaining template")]
    LastTemplate,

    #[error("Template index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No API key configured")]
    MissingApiKey,

    #[error("No share URL: pass --url or set REVIEW_LAUNCHER_SHARE_URL")]
    MissingShareUrl,
}

pub type Result<T> = std::result::Result<T, LauncherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_names_both_numbers() {
        let err = LauncherError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "Template index 5 out of range (have 3)");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LauncherError = io.into();
        assert!(matches!(err, LauncherError::Io(_)));
    }
}
