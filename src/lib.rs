pub mod api;
pub mod browse;
pub mod client;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use client::{EntrySource, HttpEntrySource, MockEntrySource};
pub use config::Config;
pub use db::{init_db, Repository, StoreError};
pub use domain::{Author, AuthorId, Entry, EntryId, Topic, TopicId};
pub use error::AppError;
