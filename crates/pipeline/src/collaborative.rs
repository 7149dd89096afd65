//! Collaborative Filter Builder.
//!
//! ## Algorithm
//! 1. Keep ratings of active users (strictly more than N ratings)
//! 2. Among those, keep ratings of well-known titles (at least M ratings)
//! 3. Pivot the survivors (FinalRating) into a title × user matrix
//! 4. Compute cosine similarity between every pair of user columns

use crate::config::PipelineConfig;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ActiveUserFilter, WellKnownBookFilter};
use crate::join::JoinedRating;
use crate::matrix::UserBookMatrix;
use crate::similarity::UserSimilarity;
use anyhow::Result;
use tracing::info;

/// The retained output of the collaborative build.
#[derive(Debug, Clone, Default)]
pub struct CollaborativeModel {
    pub final_ratings: Vec<JoinedRating>,
    pub matrix: UserBookMatrix,
    pub similarity: UserSimilarity,
}

/// Builds a `CollaborativeModel` from the joined ratings.
#[derive(Debug, Clone)]
pub struct CollaborativeFilterBuilder {
    active_user_min_ratings: u32,
    well_known_min_ratings: u32,
}

impl CollaborativeFilterBuilder {
    pub fn new() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            active_user_min_ratings: config.active_user_min_ratings,
            well_known_min_ratings: config.well_known_min_ratings,
        }
    }

    /// Configure the strict active-user bound (default: 200)
    pub fn with_active_user_min_ratings(mut self, min: u32) -> Self {
        self.active_user_min_ratings = min;
        self
    }

    /// Configure the inclusive well-known-title bound (default: 50)
    pub fn with_well_known_min_ratings(mut self, min: u32) -> Self {
        self.well_known_min_ratings = min;
        self
    }

    /// Filter, pivot and compare. Takes the joined table by value since the
    /// filters consume it. When either threshold leaves nothing the
    /// model is empty, which later lookups treat as "no recommendations".
    pub fn build(&self, joined: Vec<JoinedRating>) -> Result<CollaborativeModel> {
        let filters = FilterPipeline::new()
            .add_filter(ActiveUserFilter::new(self.active_user_min_ratings))
            .add_filter(WellKnownBookFilter::new(self.well_known_min_ratings));
        let final_ratings = filters.apply(joined)?;

        let matrix = UserBookMatrix::pivot(&final_ratings);
        let (titles, users) = matrix.shape();
        info!(
            "Pivoted {} final ratings into {} titles x {} users",
            final_ratings.len(),
            titles,
            users
        );

        let similarity = UserSimilarity::from_matrix(&matrix);
        info!("Computed similarity for {} users", similarity.len());

        Ok(CollaborativeModel {
            final_ratings,
            matrix,
            similarity,
        })
    }
}

impl Default for CollaborativeFilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
