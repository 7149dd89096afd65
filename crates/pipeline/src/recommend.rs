//! Recommendation Lookup: titles liked by a user's nearest neighbours.
//!
//! ## Algorithm
//! 1. Unknown user → no recommendations
//! 2. Rank everyone else by similarity (descending, ties by id) and keep
//!    the first `neighbor_count`
//! 3. Average the neighbours' final ratings per title
//! 4. Return the best `limit` titles (ties by title)

use crate::aggregate::aggregate_by_title;
use crate::config::PipelineConfig;
use crate::join::JoinedRating;
use crate::similarity::UserSimilarity;
use data_loader::UserId;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Neighbourhood lookup over an already built model.
#[derive(Debug, Clone)]
pub struct Recommender {
    neighbor_count: usize,
    limit: usize,
}

impl Recommender {
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            neighbor_count: config.neighbor_count,
            limit: config.recommendation_limit,
        }
    }

    /// Configure how many neighbours are consulted (default: 5)
    pub fn with_neighbor_count(mut self, count: usize) -> Self {
        self.neighbor_count = count;
        self
    }

    /// Configure how many titles are returned (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Most similar other users, best first.
    ///
    /// The user itself always ranks first in its own row and is skipped,
    /// so another user tied at 1.0 is kept as a neighbour.
    pub fn nearest_neighbors(&self, similarity: &UserSimilarity, user_id: UserId) -> Vec<UserId> {
        let Some(row) = similarity.row(user_id) else {
            return Vec::new();
        };

        let mut others: Vec<(UserId, f64)> = row.filter(|&(other, _)| other != user_id).collect();
        others.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        others
            .into_iter()
            .take(self.neighbor_count)
            .map(|(other, _)| other)
            .collect()
    }

    /// Up to `limit` titles for `user_id`; empty for users absent from
    /// `similarity`.
    #[instrument(skip(self, similarity, final_ratings))]
    pub fn recommend(
        &self,
        similarity: &UserSimilarity,
        final_ratings: &[JoinedRating],
        user_id: UserId,
    ) -> Vec<String> {
        let neighbors: HashSet<UserId> = self
            .nearest_neighbors(similarity, user_id)
            .into_iter()
            .collect();
        if neighbors.is_empty() {
            debug!("No neighbours for user {}", user_id);
            return Vec::new();
        }

        let groups = aggregate_by_title(
            final_ratings
                .iter()
                .filter(|r| neighbors.contains(&r.user_id)),
        );

        let mut scored: Vec<(&str, f64)> = groups
            .into_iter()
            .map(|(title, agg)| (title, agg.mean()))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let titles: Vec<String> = scored
            .into_iter()
            .take(self.limit)
            .map(|(title, _)| title.to_string())
            .collect();
        debug!(
            "Recommended {} titles from {} neighbours",
            titles.len(),
            neighbors.len()
        );
        titles
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}
