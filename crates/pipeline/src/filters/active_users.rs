//! Keeps only ratings from users who rate a lot.

use crate::aggregate::count_by_user;
use crate::join::JoinedRating;
use crate::traits::RatingFilter;
use anyhow::Result;

/// Keeps the ratings of users with strictly more than `min_ratings` rows.
pub struct ActiveUserFilter {
    min_ratings: u32,
}

impl ActiveUserFilter {
    pub fn new(min_ratings: u32) -> Self {
        Self { min_ratings }
    }
}

impl RatingFilter for ActiveUserFilter {
    fn name(&self) -> &str {
        "ActiveUserFilter"
    }

    fn apply(&self, ratings: Vec<JoinedRating>) -> Result<Vec<JoinedRating>> {
        let counts = count_by_user(&ratings);

        Ok(ratings
            .into_iter()
            .filter(|r| counts.get(&r.user_id).is_some_and(|&n| n > self.min_ratings))
            .collect())
    }
}
