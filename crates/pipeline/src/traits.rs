//! Core traits for the rating filter pipeline.

use crate::join::JoinedRating;
use anyhow::Result;

/// A stage that narrows a set of joined ratings.
///
/// Filters take ownership of the rows and hand back the survivors, so a
/// chain of them never clones the table. `Send + Sync` lets a built
/// pipeline be shared across threads.
pub trait RatingFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of joined ratings.
    ///
    /// An empty result is a normal outcome, not an error.
    fn apply(&self, ratings: Vec<JoinedRating>) -> Result<Vec<JoinedRating>>;
}
