//! Application error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure failures. Shell-level problems (bad paths, bad arithmetic,
/// failed joke fetches) have their own enums and never reach this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Channels
    // ─────────────────────────────────────────────────────────────
    #[error("Message channel closed")]
    ChannelClosed,
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Extension trait for logging a failure on its way up
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_names_file() {
        let err = Error::config("/tmp/config.toml", "expected `]`");
        assert_eq!(
            err.to_string(),
            "Invalid configuration in /tmp/config.toml: expected `]`"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_terminal_and_channel_messages() {
        assert_eq!(
            Error::terminal("no tty").to_string(),
            "Terminal error: no tty"
        );
        assert_eq!(Error::ChannelClosed.to_string(), "Message channel closed");
    }

    #[test]
    fn test_context_preserves_error_variant() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("creating log directory").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
