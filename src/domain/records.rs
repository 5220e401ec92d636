//! Records returned by the store: one typed struct per entity.
//!
//! Field names on the wire match the table columns, so `Topic` serializes its
//! name under `topic` and `Entry` inlines the author and topic names next to
//! their ids.

use super::ids::{AuthorId, EntryId, TopicId};
use serde::{Deserialize, Serialize};

/// A topic row. Topic names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub topic_id: TopicId,
    #[serde(rename = "topic")]
    pub name: String,
}

/// An author row. Author names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub author_id: AuthorId,
    pub name: String,
}

/// A blog entry reconstructed from the entry, author and topic tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub entry_id: EntryId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_id: AuthorId,
    pub topic: String,
    pub topic_id: TopicId,
}
