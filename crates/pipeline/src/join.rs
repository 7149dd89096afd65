//! Rating Join: rating events enriched with book metadata.

use data_loader::{Dataset, Isbn, RatingEvent, RatingValue, UserId};
use tracing::info;

/// A rating event denormalized with the title, author and year of the book
/// it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedRating {
    pub user_id: UserId,
    pub isbn: Isbn,
    pub rating: RatingValue,
    pub title: String,
    pub author: String,
    pub year_of_publication: String,
}

/// Inner join of the rating events onto the book table by ISBN.
///
/// Events whose ISBN has no book are dropped silently. Output keeps the
/// order of the rating events.
pub fn join_ratings(dataset: &Dataset) -> Vec<JoinedRating> {
    let joined: Vec<JoinedRating> = dataset
        .ratings()
        .iter()
        .filter_map(|event| join_one(dataset, event))
        .collect();

    info!(
        "Joined {} of {} rating events with book metadata",
        joined.len(),
        dataset.ratings().len()
    );
    joined
}

fn join_one(dataset: &Dataset, event: &RatingEvent) -> Option<JoinedRating> {
    let book = dataset.get_book(&event.isbn)?;
    Some(JoinedRating {
        user_id: event.user_id,
        isbn: event.isbn.clone(),
        rating: event.rating,
        title: book.title.clone(),
        author: book.author.clone(),
        year_of_publication: book.year_of_publication.clone(),
    })
}
