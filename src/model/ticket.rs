use serde::{Deserialize, Deserializer, Serialize};

/// Number of description characters shown in the dashboard table.
pub const DESCRIPTION_PREVIEW_LENGTH: usize = 80;

/// A support ticket owned by the backend.
///
/// The create response is only guaranteed to carry `id`, so the string
/// fields fall back to empty when missing or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}

impl Ticket {
    pub fn new(id: u64, subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            subject: subject.into(),
            description: description.into(),
            status: String::new(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Description as shown in the dashboard table: on one line, with
    /// whitespace runs folded to a single space.
    pub fn description_preview(&self) -> String {
        let single_line = self.description.split_whitespace().collect::<Vec<_>>().join(" ");
        truncate_description(&single_line, DESCRIPTION_PREVIEW_LENGTH)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /tickets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTicket {
    pub subject: String,
    pub description: String,
}

impl NewTicket {
    pub fn new(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            description: description.into(),
        }
    }
}

/// Keep the first `max_chars` characters, appending `…` if anything was cut.
pub fn truncate_description(description: &str, max_chars: usize) -> String {
    match description.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}…", &description[..byte_idx]),
        None => description.to_string(),
    }
}
