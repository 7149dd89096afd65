//! Loading a `Dataset` from a directory of CSV files.

use crate::error::Result;
use crate::parser;
use crate::types::Dataset;
use std::path::Path;
use tracing::info;

pub const BOOKS_FILE: &str = "Books.csv";
pub const USERS_FILE: &str = "Users.csv";
pub const RATINGS_FILE: &str = "Ratings.csv";

impl Dataset {
    /// Load the three book-crossing tables from `data_dir`.
    ///
    /// The files are parsed in parallel with nested `rayon::join`s. Any file
    /// that is missing, lacks a required column or holds an unparseable row
    /// fails the whole load; there is no partial dataset.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        info!("Loading book-crossing dataset from {}", data_dir.display());

        let books_path = data_dir.join(BOOKS_FILE);
        let users_path = data_dir.join(USERS_FILE);
        let ratings_path = data_dir.join(RATINGS_FILE);

        let ((books, users), ratings) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_books(&books_path),
                    || parser::parse_users(&users_path),
                )
            },
            || parser::parse_ratings(&ratings_path),
        );

        let books = books?;
        let users = users?;
        let ratings = ratings?;

        info!(
            "Loaded {} books, {} users, {} ratings",
            books.len(),
            users.len(),
            ratings.len()
        );

        Ok(Dataset::from_tables(books, users, ratings))
    }
}
