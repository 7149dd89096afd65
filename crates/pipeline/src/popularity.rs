//! Popularity Ranker: the global "top books" table.
//!
//! ## Algorithm
//! 1. Count and average ratings per title over every joined rating
//! 2. Keep titles with strictly more than `min_ratings` ratings
//! 3. Sort by average rating descending, ties by title ascending
//! 4. Keep the first `limit` titles
//! 5. Attach author and year from the first book row carrying the title

use crate::aggregate::aggregate_by_title;
use crate::config::PipelineConfig;
use crate::join::JoinedRating;
use data_loader::Dataset;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One row of the top-books table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityEntry {
    pub title: String,
    pub author: String,
    pub year_of_publication: String,
    pub num_ratings: u32,
    pub avg_rating: f64,
}

/// Ranks titles by mean rating among those rated often enough.
#[derive(Debug, Clone)]
pub struct PopularityRanker {
    min_ratings: u32,
    limit: usize,
}

impl PopularityRanker {
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            min_ratings: config.popular_min_ratings,
            limit: config.top_books_limit,
        }
    }

    /// Configure the strict lower bound on rating count (default: 250)
    pub fn with_min_ratings(mut self, min: u32) -> Self {
        self.min_ratings = min;
        self
    }

    /// Configure the table length (default: 50)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Build the ranked table. An empty input gives an empty table.
    pub fn rank(&self, joined: &[JoinedRating], dataset: &Dataset) -> Vec<PopularityEntry> {
        let groups = aggregate_by_title(joined);
        debug!("Aggregated {} distinct titles", groups.len());

        let mut qualifying: Vec<(&str, u32, f64)> = groups
            .into_iter()
            .filter(|(_, agg)| agg.count > self.min_ratings)
            .map(|(title, agg)| (title, agg.count, agg.mean()))
            .collect();

        qualifying.sort_by(|a, b| b.2.total_cmp(&a.2).then_with(|| a.0.cmp(&b.0)));
        qualifying.truncate(self.limit);

        // Titles are unique after grouping, so one metadata row per title is
        // exactly the "drop duplicate titles, keep first" rule.
        let entries: Vec<PopularityEntry> = qualifying
            .into_iter()
            .filter_map(|(title, num_ratings, avg_rating)| {
                let book = dataset.first_book_with_title(title)?;
                Some(PopularityEntry {
                    title: title.to_string(),
                    author: book.author.clone(),
                    year_of_publication: book.year_of_publication.clone(),
                    num_ratings,
                    avg_rating,
                })
            })
            .collect();

        info!("Ranked {} popular titles", entries.len());
        entries
    }
}

impl Default for PopularityRanker {
    fn default() -> Self {
        Self::new()
    }
}
