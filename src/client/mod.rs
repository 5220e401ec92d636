//! Client side of the JSON API, used by the `read` command.

use crate::domain::Entry;
use async_trait::async_trait;
use std::fmt;

pub mod http;
pub mod mock;
pub mod reader;

pub use http::HttpEntrySource;
pub use mock::MockEntrySource;
pub use reader::{print_titles_by_author, ReaderError};

/// Somewhere entries can be fetched from.
#[async_trait]
pub trait EntrySource: Send + Sync + fmt::Debug {
    /// Fetch every entry, in the order the source lists them.
    async fn fetch_entries(&self) -> Result<Vec<Entry>, ClientError>;
}

/// Error type for entry source operations.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// Connection refused, timeout, DNS failure
    Network(String),
    /// Non-success status from the API
    Http { status: u16, message: String },
    /// Response body was not a list of entries
    Parse(String),
    RateLimited,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Http { status, message } => {
                write!(f, "HTTP error {}: {}", status, message)
            }
            ClientError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ClientError::RateLimited => write!(f, "Rate limited"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Titles of the entries written by exactly `author`, in source order.
pub fn titles_by_author<'a>(entries: &'a [Entry], author: &str) -> Vec<&'a str> {
    entries
        .iter()
        .filter(|e| e.author == author)
        .map(|e| e.title.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuthorId, EntryId, TopicId};

    fn entry(id: i64, title: &str, author: &str) -> Entry {
        Entry {
            entry_id: EntryId::new(id),
            title: title.to_string(),
            content: String::new(),
            author: author.to_string(),
            author_id: AuthorId::new(id),
            topic: "Thoughts".to_string(),
            topic_id: TopicId::new(1),
        }
    }

    #[test]
    fn test_titles_by_author_filters_exact_name() {
        let entries = vec![
            entry(1, "Hi", "Karen"),
            entry(2, "Hello", "Sam"),
            entry(3, "Again", "Karen"),
            entry(4, "Lowercase", "karen"),
        ];
        assert_eq!(titles_by_author(&entries, "Karen"), vec!["Hi", "Again"]);
        assert!(titles_by_author(&entries, "Nathan").is_empty());
    }

    #[test]
    fn test_client_error_display() {
        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = ClientError::Http {
            status: 404,
            message: "Client error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 404: Client error");

        assert_eq!(ClientError::RateLimited.to_string(), "Rate limited");
    }
}
