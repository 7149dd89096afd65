//! Core domain types for the book-crossing dataset.
//!
//! Three reference tables come out of the loader: books, users and rating
//! events. They are immutable once the `Dataset` has been built; every
//! derived structure downstream borrows from or clones out of them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user (the `User-ID` column)
pub type UserId = u32;

/// ISBN-like book identifier. Not guaranteed to be a valid ISBN.
pub type Isbn = String;

/// Explicit rating value, 0-10 in the book-crossing data
pub type RatingValue = u8;

// =============================================================================
// Records
// =============================================================================

/// A row of `Books.csv`.
///
/// Titles are not unique: several ISBNs (editions) can share one title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "ISBN")]
    pub isbn: Isbn,
    #[serde(rename = "Book-Title")]
    pub title: String,
    #[serde(rename = "Book-Author")]
    pub author: String,
    /// Kept exactly as it appears in the file. The column mixes years with
    /// publisher names and other noise, so it is never coerced on load.
    #[serde(rename = "Year-Of-Publication")]
    pub year_of_publication: String,
    #[serde(rename = "Publisher", default)]
    pub publisher: String,
    #[serde(rename = "Image-URL-S", default)]
    pub image_url_s: String,
    #[serde(rename = "Image-URL-M", default)]
    pub image_url_m: String,
    #[serde(rename = "Image-URL-L", default)]
    pub image_url_l: String,
}

impl Book {
    /// Best-effort numeric reading of the publication year.
    ///
    /// Returns `None` for values such as `"DK Publishing Inc"`.
    pub fn year(&self) -> Option<i32> {
        self.year_of_publication.trim().parse().ok()
    }
}

/// A row of `Users.csv`. Only the id takes part in recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "User-ID")]
    pub id: UserId,
    #[serde(rename = "Location", default)]
    pub location: String,
    /// Blank and non-numeric ages load as `None`.
    #[serde(
        rename = "Age",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub age: Option<f32>,
}

/// A row of `Ratings.csv`: one user rating one ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEvent {
    #[serde(rename = "User-ID")]
    pub user_id: UserId,
    #[serde(rename = "ISBN")]
    pub isbn: Isbn,
    #[serde(rename = "Book-Rating")]
    pub rating: RatingValue,
}

// =============================================================================
// Dataset - the loaded reference tables
// =============================================================================

/// The three raw tables held in memory.
///
/// Books keep their file order. Both lookup indices point at the *first*
/// book carrying a given ISBN or title, which makes "first matching row"
/// lookups deterministic.
#[derive(Debug, Default)]
pub struct Dataset {
    pub(crate) books: Vec<Book>,
    pub(crate) users: HashMap<UserId, User>,
    pub(crate) ratings: Vec<RatingEvent>,

    pub(crate) isbn_index: HashMap<Isbn, usize>,
    pub(crate) title_index: HashMap<String, usize>,
}

impl Dataset {
    /// Creates a new, empty Dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from already-parsed tables, preserving their order.
    pub fn from_tables(books: Vec<Book>, users: Vec<User>, ratings: Vec<RatingEvent>) -> Self {
        let mut dataset = Self::new();
        dataset.books.reserve(books.len());
        dataset.ratings.reserve(ratings.len());

        for book in books {
            dataset.insert_book(book);
        }
        for user in users {
            dataset.insert_user(user);
        }
        for rating in ratings {
            dataset.insert_rating(rating);
        }
        dataset
    }

    /// Look up a book by ISBN (first occurrence wins on duplicates)
    pub fn get_book(&self, isbn: &str) -> Option<&Book> {
        self.isbn_index.get(isbn).map(|&i| &self.books[i])
    }

    /// The first book in file order carrying this exact title
    pub fn first_book_with_title(&self, title: &str) -> Option<&Book> {
        self.title_index.get(title).map(|&i| &self.books[i])
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// All books in file order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All rating events in file order
    pub fn ratings(&self) -> &[RatingEvent] {
        &self.ratings
    }

    pub fn insert_book(&mut self, book: Book) {
        let position = self.books.len();
        self.isbn_index.entry(book.isbn.clone()).or_insert(position);
        self.title_index.entry(book.title.clone()).or_insert(position);
        self.books.push(book);
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn insert_rating(&mut self, rating: RatingEvent) {
        self.ratings.push(rating);
    }

    /// (books, users, ratings) counts for logging and sanity checks
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.books.len(), self.users.len(), self.ratings.len())
    }
}
