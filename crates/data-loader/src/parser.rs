//! Parser for the book-crossing CSV files.
//!
//! - Books.csv:   ISBN, Book-Title, Book-Author, Year-Of-Publication, ...
//! - Users.csv:   User-ID, ...
//! - Ratings.csv: User-ID, ISBN, Book-Rating
//!
//! The files are not UTF-8 clean, so they are decoded as ISO-8859-1 before
//! being handed to the CSV reader. Required columns are checked against the
//! header row up front; any record the reader cannot parse aborts the load.

use crate::error::{DataLoadError, Result};
use crate::types::{Book, RatingEvent, User};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub const BOOK_COLUMNS: &[&str] = &["ISBN", "Book-Title", "Book-Author", "Year-Of-Publication"];
pub const USER_COLUMNS: &[&str] = &["User-ID"];
pub const RATING_COLUMNS: &[&str] = &["User-ID", "ISBN", "Book-Rating"];

/// Read a whole file as ISO-8859-1 (Latin-1).
///
/// Each byte maps directly to the Unicode code point of the same value, so
/// this decoding cannot fail on any input.
fn read_latin1(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    Ok(decode_latin1(&bytes))
}

pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Map a csv error onto the crate error, keeping line information for
/// field-level failures.
fn record_error(file: &str, err: csv::Error) -> DataLoadError {
    if let csv::ErrorKind::Deserialize { pos, err: de } = err.kind() {
        return DataLoadError::ParseError {
            file: file.to_string(),
            line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
            reason: de.to_string(),
        };
    }
    DataLoadError::Csv {
        file: file.to_string(),
        source: err,
    }
}

/// Parse CSV text into typed rows after checking the header for `required`.
///
/// `file` is only used to label errors.
pub fn parse_table<T: DeserializeOwned>(
    file: &str,
    text: &str,
    required: &[&str],
) -> Result<Vec<T>> {
    // Latin-1 decoding turns a UTF-8 byte order mark into these three chars.
    let text = text.strip_prefix("\u{ef}\u{bb}\u{bf}").unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| record_error(file, e))?
        .clone();
    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                file: file.to_string(),
                column: column.to_string(),
            });
        }
    }

    reader
        .deserialize()
        .map(|row| row.map_err(|e| record_error(file, e)))
        .collect()
}

fn parse_file<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    let text = read_latin1(path)?;
    parse_table(&file_label(path), &text, required)
}

/// Parse the Books.csv file
pub fn parse_books(path: &Path) -> Result<Vec<Book>> {
    parse_file(path, BOOK_COLUMNS)
}

/// Parse the Users.csv file
pub fn parse_users(path: &Path) -> Result<Vec<User>> {
    parse_file(path, USER_COLUMNS)
}

/// Parse the Ratings.csv file
pub fn parse_ratings(path: &Path) -> Result<Vec<RatingEvent>> {
    parse_file(path, RATING_COLUMNS)
}
