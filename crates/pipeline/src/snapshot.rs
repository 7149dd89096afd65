//! The immutable, built-once state that answers queries.

use crate::collaborative::{CollaborativeFilterBuilder, CollaborativeModel};
use crate::config::PipelineConfig;
use crate::join::{JoinedRating, join_ratings};
use crate::matrix::UserBookMatrix;
use crate::popularity::{PopularityEntry, PopularityRanker};
use crate::recommend::Recommender;
use crate::similarity::UserSimilarity;
use anyhow::{Context, Result};
use data_loader::{Dataset, UserId};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, instrument};

/// Everything derived from one `Dataset`.
///
/// Built once by [`Snapshot::build`] and only read afterwards. It is
/// `Send + Sync`, so one `Arc<Snapshot>` can serve any number of readers.
#[derive(Debug, Clone)]
pub struct Snapshot {
    joined_count: usize,
    top_books: Vec<PopularityEntry>,
    model: CollaborativeModel,
    recommender: Recommender,
}

/// Sizes of the derived structures, for logs and the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotSummary {
    pub joined_ratings: usize,
    pub top_books: usize,
    pub final_ratings: usize,
    pub titles: usize,
    pub users: usize,
}

impl Snapshot {
    /// Run the whole offline pipeline: join, rank, filter, pivot, compare.
    #[instrument(skip_all)]
    pub fn build(dataset: &Dataset, config: &PipelineConfig) -> Result<Self> {
        let start = Instant::now();

        let joined = join_ratings(dataset);
        let joined_count = joined.len();
        let top_books = PopularityRanker::from_config(config).rank(&joined, dataset);
        let model = CollaborativeFilterBuilder::from_config(config)
            .build(joined)
            .context("Failed to build collaborative filtering model")?;

        let snapshot = Self {
            joined_count,
            top_books,
            model,
            recommender: Recommender::from_config(config),
        };
        info!(
            "Snapshot built in {:?}: {:?}",
            start.elapsed(),
            snapshot.summary()
        );
        Ok(snapshot)
    }

    /// The top-books table, best average rating first
    pub fn get_top_books(&self) -> &[PopularityEntry] {
        &self.top_books
    }

    /// Up to five titles for `user_id`; empty for users the collaborative
    /// model does not know.
    pub fn recommend(&self, user_id: UserId) -> Vec<String> {
        self.recommender
            .recommend(&self.model.similarity, &self.model.final_ratings, user_id)
    }

    /// Whether `user_id` has a similarity row
    pub fn knows_user(&self, user_id: UserId) -> bool {
        self.model.similarity.contains(user_id)
    }

    pub fn final_ratings(&self) -> &[JoinedRating] {
        &self.model.final_ratings
    }

    pub fn matrix(&self) -> &UserBookMatrix {
        &self.model.matrix
    }

    pub fn similarity(&self) -> &UserSimilarity {
        &self.model.similarity
    }

    pub fn summary(&self) -> SnapshotSummary {
        let (titles, users) = self.model.matrix.shape();
        SnapshotSummary {
            joined_ratings: self.joined_count,
            top_books: self.top_books.len(),
            final_ratings: self.model.final_ratings.len(),
            titles,
            users,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{Book, RatingEvent};

    fn book(isbn: &str, title: &str) -> Book {
        Book {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: "Anon".to_string(),
            year_of_publication: "1990".to_string(),
            publisher: String::new(),
            image_url_s: String::new(),
            image_url_m: String::new(),
            image_url_l: String::new(),
        }
    }

    #[test]
    fn test_snapshot_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Snapshot>();
    }

    #[test]
    fn test_empty_dataset_builds_empty_snapshot() {
        let snapshot = Snapshot::build(&Dataset::new(), &PipelineConfig::default()).unwrap();

        assert!(snapshot.get_top_books().is_empty());
        assert!(snapshot.similarity().is_empty());
        assert!(snapshot.recommend(1).is_empty());
        assert_eq!(snapshot.summary().joined_ratings, 0);
    }

    #[test]
    fn test_summary_counts() {
        let dataset = Dataset::from_tables(
            vec![book("A", "Alpha"), book("B", "Beta")],
            vec![],
            vec![
                RatingEvent {
                    user_id: 1,
                    isbn: "A".into(),
                    rating: 8,
                },
                RatingEvent {
                    user_id: 2,
                    isbn: "A".into(),
                    rating: 6,
                },
                RatingEvent {
                    user_id: 2,
                    isbn: "B".into(),
                    rating: 4,
                },
                RatingEvent {
                    user_id: 3,
                    isbn: "Z".into(),
                    rating: 4,
                },
            ],
        );
        let config = PipelineConfig::default()
            .with_popular_min_ratings(1)
            .with_active_user_min_ratings(0)
            .with_well_known_min_ratings(2);

        let snapshot = Snapshot::build(&dataset, &config).unwrap();

        assert_eq!(
            snapshot.summary(),
            SnapshotSummary {
                joined_ratings: 3,
                top_books: 1,
                final_ratings: 2,
                titles: 1,
                users: 2,
            }
        );
        assert!(snapshot.knows_user(1));
        assert_eq!(snapshot.recommend(1), vec!["Alpha"]);
    }
}
