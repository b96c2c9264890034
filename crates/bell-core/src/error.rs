use thiserror::Error;

/// All errors produced by termbell.
#[derive(Error, Debug)]
pub enum BellError {
    /// The push endpoint could not be reached.
    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry an address.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the termbell crates.
pub type Result<T> = std::result::Result<T, BellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_connect() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = BellError::Connect {
            addr: "127.0.0.1:4000".to_string(),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to connect to"));
        assert!(msg.contains("127.0.0.1:4000"));
        assert!(msg.contains("refused"));
    }

    #[test]
    fn test_error_display_terminal() {
        let err = BellError::Terminal("crossterm failure".to_string());
        assert_eq!(err.to_string(), "Terminal error: crossterm failure");
    }

    #[test]
    fn test_error_display_config() {
        let err = BellError::Config("bad server address".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad server address");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BellError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: BellError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
