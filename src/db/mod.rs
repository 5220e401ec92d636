//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization, pragmas and schema creation
//! - Repository layer for topic, author and entry operations

pub mod init;
pub mod repo;

pub use init::init_db;
pub use repo::{Repository, StoreError, StoreResult};
