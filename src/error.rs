//! Application Errors

/// Errors surfaced while loading events
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Upstream answered with a non-success status
    Http(u16),
    /// Request never completed
    Network(String),
    /// Body was not the expected JSON
    Decode(String),
    /// No `window` (not running in a browser)
    NoWindow,
}

pub type AppResult<T> = Result<T, AppError>;

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Http(status) => write!(f, "Failed to fetch events (HTTP {})", status),
            AppError::Network(msg) => write!(f, "Failed to fetch events: {}", msg),
            AppError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            AppError::NoWindow => write!(f, "Browser window not available"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(AppError::Http(503).to_string(), "Failed to fetch events (HTTP 503)");
        assert_eq!(
            AppError::Network("offline".to_string()).to_string(),
            "Failed to fetch events: offline"
        );
        assert_eq!(AppError::NoWindow.to_string(), "Browser window not available");
    }
}
