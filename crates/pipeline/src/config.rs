//! Thresholds and limits for the offline build and the online lookup.

use serde::{Deserialize, Serialize};

/// Every tunable number of the pipeline in one place.
///
/// Defaults reproduce the reference behaviour. Any field missing from a
/// deserialized config keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// A title enters the popularity ranking only with strictly more ratings
    pub popular_min_ratings: u32,
    /// Length of the top-books list
    pub top_books_limit: usize,
    /// A user is active with strictly more joined ratings than this
    pub active_user_min_ratings: u32,
    /// A title is well-known with at least this many ratings from active users
    pub well_known_min_ratings: u32,
    /// Nearest users consulted per lookup
    pub neighbor_count: usize,
    /// Titles returned per lookup
    pub recommendation_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            popular_min_ratings: 250,
            top_books_limit: 50,
            active_user_min_ratings: 200,
            well_known_min_ratings: 50,
            neighbor_count: 5,
            recommendation_limit: 5,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_popular_min_ratings(mut self, min: u32) -> Self {
        self.popular_min_ratings = min;
        self
    }

    pub fn with_top_books_limit(mut self, limit: usize) -> Self {
        self.top_books_limit = limit;
        self
    }

    pub fn with_active_user_min_ratings(mut self, min: u32) -> Self {
        self.active_user_min_ratings = min;
        self
    }

    pub fn with_well_known_min_ratings(mut self, min: u32) -> Self {
        self.well_known_min_ratings = min;
        self
    }

    pub fn with_neighbor_count(mut self, count: usize) -> Self {
        self.neighbor_count = count;
        self
    }

    pub fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }
}
