use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{0}")]
    Validation(String),

    #[error("Cannot open log file {}: {reason}", .path.display())]
    Logging {
        path: std::path::PathBuf,
        reason: String,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;

/// Failure of a single request against the ticket backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Structured validation error (`{"detail": [{"msg": ...}]}`).
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed response body: {0}")]
    Decode(String),
}

pub const SUBMIT_FAILED: &str = "Error submitting ticket.";
pub const TICKET_NOT_FOUND: &str = "Ticket not found.";
pub const FETCH_FAILED: &str = "Failed to fetch ticket.";
pub const LIST_FAILED: &str = "Failed to retrieve tickets.";

impl ApiError {
    /// Message shown when creating a ticket fails.
    pub fn submit_message(&self) -> String {
        match self {
            ApiError::Validation(messages) if !messages.is_empty() => messages.join(", "),
            _ => SUBMIT_FAILED.to_string(),
        }
    }

    /// Message shown when looking up a single ticket fails.
    pub fn lookup_message(&self) -> &'static str {
        match self {
            ApiError::UnexpectedStatus(_) | ApiError::Validation(_) => TICKET_NOT_FOUND,
            ApiError::Transport(_) | ApiError::Decode(_) => FETCH_FAILED,
        }
    }

    /// Message shown when listing tickets fails.
    pub fn list_message(&self) -> &'static str {
        LIST_FAILED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_message_joins_validation_messages() {
        let err = ApiError::Validation(vec![
            "field required".to_string(),
            "ensure this value has at most 100 characters".to_string(),
        ]);
        assert_eq!(
            err.submit_message(),
            "field required, ensure this value has at most 100 characters"
        );
    }

    #[test]
    fn test_submit_message_generic_fallbacks() {
        assert_eq!(ApiError::Validation(vec![]).submit_message(), SUBMIT_FAILED);
        assert_eq!(ApiError::UnexpectedStatus(500).submit_message(), SUBMIT_FAILED);
        assert_eq!(
            ApiError::Transport("connection refused".into()).submit_message(),
            SUBMIT_FAILED
        );
    }

    #[test]
    fn test_lookup_message() {
        assert_eq!(ApiError::UnexpectedStatus(404).lookup_message(), TICKET_NOT_FOUND);
        assert_eq!(ApiError::UnexpectedStatus(500).lookup_message(), TICKET_NOT_FOUND);
        assert_eq!(
            ApiError::Transport("timed out".into()).lookup_message(),
            FETCH_FAILED
        );
        assert_eq!(ApiError::Decode("eof".into()).lookup_message(), FETCH_FAILED);
    }

    #[test]
    fn test_list_message_is_uniform() {
        assert_eq!(ApiError::UnexpectedStatus(503).list_message(), LIST_FAILED);
        assert_eq!(ApiError::Transport("x".into()).list_message(), LIST_FAILED);
    }
}
