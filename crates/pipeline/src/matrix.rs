//! The dense title × user rating matrix.

use crate::aggregate::RatingAggregate;
use crate::join::JoinedRating;
use data_loader::UserId;
use std::collections::{BTreeMap, BTreeSet};

/// Value stored for a (title, user) pair with no rating.
///
/// Zero puts "never rated" on the same footing as the lowest explicit
/// rating when profiles are compared.
pub const MISSING_RATING_FILL: f64 = 0.0;

/// Pivot of the final ratings: one row per title, one column per user.
///
/// Both axes are sorted ascending. A cell holds the mean of that user's
/// ratings of that title (several ISBNs of one title collapse here).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserBookMatrix {
    titles: Vec<String>,
    users: Vec<UserId>,
    /// Row-major, `titles.len() * users.len()`
    cells: Vec<f64>,
}

impl UserBookMatrix {
    pub fn pivot(ratings: &[JoinedRating]) -> Self {
        let mut pairs: BTreeMap<(&str, UserId), RatingAggregate> = BTreeMap::new();
        for rating in ratings {
            pairs
                .entry((rating.title.as_str(), rating.user_id))
                .or_default()
                .add(rating.rating);
        }

        let titles: BTreeSet<&str> = pairs.keys().map(|&(title, _)| title).collect();
        let users: BTreeSet<UserId> = pairs.keys().map(|&(_, user)| user).collect();
        let titles: Vec<String> = titles.into_iter().map(str::to_string).collect();
        let users: Vec<UserId> = users.into_iter().collect();

        let mut cells = vec![MISSING_RATING_FILL; titles.len() * users.len()];
        // Keys come out title-major, so walk both axes in lockstep.
        let mut row = 0;
        for (&(title, user), agg) in &pairs {
            while titles[row] != title {
                row += 1;
            }
            if let Ok(col) = users.binary_search(&user) {
                cells[row * users.len() + col] = agg.mean();
            }
        }

        Self {
            titles,
            users,
            cells,
        }
    }

    /// Row labels, ascending
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Column labels, ascending
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// (titles, users)
    pub fn shape(&self) -> (usize, usize) {
        (self.titles.len(), self.users.len())
    }

    /// Cell value; `None` only if the title or user is not an axis label.
    pub fn get(&self, title: &str, user: UserId) -> Option<f64> {
        let row = self.titles.binary_search_by(|t| t.as_str().cmp(title)).ok()?;
        let col = self.users.binary_search(&user).ok()?;
        Some(self.cells[row * self.users.len() + col])
    }

    /// Transposed view: one rating profile over all titles per user, in
    /// the order of `users()`.
    pub fn user_profiles(&self) -> Vec<Vec<f64>> {
        let width = self.users.len();
        (0..width)
            .map(|col| {
                (0..self.titles.len())
                    .map(|row| self.cells[row * width + col])
                    .collect()
            })
            .collect()
    }
}
