//! The FilterPipeline chains rating filters in order.

use crate::join::JoinedRating;
use crate::traits::RatingFilter;
use anyhow::Result;

/// Chains multiple rating filters together.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ActiveUserFilter::new(200))
///     .add_filter(WellKnownBookFilter::new(50));
///
/// let final_ratings = pipeline.apply(joined)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn RatingFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the end of the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl RatingFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence, logging row counts around each one.
    pub fn apply(&self, ratings: Vec<JoinedRating>) -> Result<Vec<JoinedRating>> {
        let mut current = ratings;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
