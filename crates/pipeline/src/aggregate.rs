//! Group-by helpers over joined ratings.
//!
//! These stand in for the count/mean aggregations of a dataframe library:
//! explicit maps from key to running totals.

use crate::join::JoinedRating;
use data_loader::{RatingValue, UserId};
use std::collections::{BTreeMap, HashMap};

/// Running count and sum of rating values for one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingAggregate {
    pub count: u32,
    pub sum: u64,
}

impl RatingAggregate {
    pub fn add(&mut self, rating: RatingValue) {
        self.count += 1;
        self.sum += u64::from(rating);
    }

    /// Mean rating of the group; 0.0 for an empty group
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum as f64 / f64::from(self.count)
    }
}

/// Count and sum ratings per title. Keys iterate in title order.
pub fn aggregate_by_title<'a, I>(ratings: I) -> BTreeMap<&'a str, RatingAggregate>
where
    I: IntoIterator<Item = &'a JoinedRating>,
{
    let mut groups: BTreeMap<&'a str, RatingAggregate> = BTreeMap::new();
    for rating in ratings {
        groups
            .entry(rating.title.as_str())
            .or_default()
            .add(rating.rating);
    }
    groups
}

/// Number of joined ratings per user
pub fn count_by_user(ratings: &[JoinedRating]) -> HashMap<UserId, u32> {
    let mut counts = HashMap::new();
    for rating in ratings {
        *counts.entry(rating.user_id).or_insert(0) += 1;
    }
    counts
}

/// Number of joined ratings per title
pub fn count_by_title(ratings: &[JoinedRating]) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for rating in ratings {
        *counts.entry(rating.title.as_str()).or_insert(0) += 1;
    }
    counts
}
