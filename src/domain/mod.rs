//! Domain types for the blog store.
//!
//! This module provides:
//! - Row identifier newtypes: TopicId, AuthorId, EntryId
//! - Typed records for the three entities: Topic, Author, Entry

pub mod ids;
pub mod records;

pub use ids::{AuthorId, EntryId, TopicId};
pub use records::{Author, Entry, Topic};
