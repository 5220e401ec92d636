//! The `read` command: list titles of one author's entries.

use super::{titles_by_author, ClientError, EntrySource};
use std::io::Write;
use thiserror::Error;

pub const AUTHOR_PROMPT: &str = "Enter an author name: ";
pub const TITLES_HEADER: &str = "Here are the entry titles associated with the author:";

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("could not fetch entries: {0}")]
    Fetch(#[from] ClientError),
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch all entries from `source` and print the titles written by `author`.
///
/// Returns how many titles were printed.
pub async fn print_titles_by_author<W: Write>(
    source: &dyn EntrySource,
    author: &str,
    out: &mut W,
) -> Result<usize, ReaderError> {
    let entries = source.fetch_entries().await?;
    let titles = titles_by_author(&entries, author);

    writeln!(out, "{}", TITLES_HEADER)?;
    for title in &titles {
        writeln!(out, "{}", title)?;
    }
    Ok(titles.len())
}
