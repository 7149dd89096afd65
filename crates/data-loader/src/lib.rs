//! # Data Loader Crate
//!
//! Reads the book-crossing dataset (`Books.csv`, `Users.csv`,
//! `Ratings.csv`) into typed, immutable in-memory tables.
//!
//! ## Main Components
//!
//! - **types**: `Book`, `User`, `RatingEvent` and the `Dataset` container
//! - **parser**: Latin-1 decoding and CSV parsing with header checks
//! - **index**: `Dataset::load_from_dir`
//! - **error**: `DataLoadError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load_from_dir(Path::new("data"))?;
//! let (books, users, ratings) = dataset.counts();
//! println!("{books} books, {users} users, {ratings} ratings");
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{DataLoadError, Result};
pub use index::{BOOKS_FILE, RATINGS_FILE, USERS_FILE};
pub use types::{Book, Dataset, Isbn, RatingEvent, RatingValue, User, UserId};
