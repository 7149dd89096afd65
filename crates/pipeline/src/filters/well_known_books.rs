//! Keeps only ratings of titles many (active) users have rated.

use crate::aggregate::count_by_title;
use crate::join::JoinedRating;
use crate::traits::RatingFilter;
use anyhow::Result;
use std::collections::HashSet;

/// Keeps the ratings of titles with at least `min_ratings` rows.
///
/// Counting happens on whatever set it is given; in the collaborative
/// build that is the active users' ratings only.
pub struct WellKnownBookFilter {
    min_ratings: u32,
}

impl WellKnownBookFilter {
    pub fn new(min_ratings: u32) -> Self {
        Self { min_ratings }
    }
}

impl RatingFilter for WellKnownBookFilter {
    fn name(&self) -> &str {
        "WellKnownBookFilter"
    }

    fn apply(&self, ratings: Vec<JoinedRating>) -> Result<Vec<JoinedRating>> {
        let well_known: HashSet<String> = count_by_title(&ratings)
            .into_iter()
            .filter(|&(_, n)| n >= self.min_ratings)
            .map(|(title, _)| title.to_string())
            .collect();

        Ok(ratings
            .into_iter()
            .filter(|r| well_known.contains(&r.title))
            .collect())
    }
}
