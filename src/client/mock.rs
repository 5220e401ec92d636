//! In-memory entry source for tests.

use super::{ClientError, EntrySource};
use crate::domain::Entry;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct MockEntrySource {
    entries: Vec<Entry>,
    error: Option<ClientError>,
}

impl MockEntrySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Make every fetch fail with `error`.
    pub fn failing(mut self, error: ClientError) -> Self {
        self.error = Some(error);
        self
    }
}

#[async_trait]
impl EntrySource for MockEntrySource {
    async fn fetch_entries(&self) -> Result<Vec<Entry>, ClientError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.entries.clone()),
        }
    }
}
