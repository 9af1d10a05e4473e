//! Error types shared by every portfolio crate

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Client storage is unavailable")]
    StorageUnavailable,

    #[error("Failed to read '{key}' from storage: {message}")]
    StorageRead { key: String, message: String },

    #[error("Failed to write '{key}' to storage: {message}")]
    StorageWrite { key: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Theme Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid theme value: {value:?} (expected \"dark\" or \"light\")")]
    InvalidTheme { value: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn storage_read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageRead {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn storage_write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StorageWrite {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn invalid_theme(value: impl Into<String>) -> Self {
        Self::InvalidTheme {
            value: value.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Check if the page can carry on with an in-memory fallback
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::StorageUnavailable
                | Error::StorageRead { .. }
                | Error::StorageWrite { .. }
                | Error::InvalidTheme { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::warn!("{}: {}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::warn!("{}: {}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::storage_write("theme", "QuotaExceededError");
        assert_eq!(
            err.to_string(),
            "Failed to write 'theme' to storage: QuotaExceededError"
        );

        let err = Error::invalid_theme("sepia");
        assert!(err.to_string().contains("\"sepia\""));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("not valid {{").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_storage_errors_are_recoverable() {
        assert!(Error::StorageUnavailable.is_recoverable());
        assert!(Error::storage_read("theme", "denied").is_recoverable());
        assert!(Error::storage_write("theme", "quota").is_recoverable());
        assert!(Error::invalid_theme("blue").is_recoverable());
        assert!(!Error::config_invalid("empty key").is_recoverable());
    }

    #[test]
    fn test_context_preserves_error() {
        let result: std::result::Result<(), Error> = Err(Error::StorageUnavailable);
        let err = result.context("loading theme").unwrap_err();
        assert!(matches!(err, Error::StorageUnavailable));

        let result: std::result::Result<(), Error> = Err(Error::config_invalid("bad"));
        let err = result
            .with_context(|| format!("parsing {}", "site.toml"))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }
}
