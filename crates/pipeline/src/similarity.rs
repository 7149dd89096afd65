//! Pairwise cosine similarity between user rating profiles.

use crate::matrix::UserBookMatrix;
use data_loader::UserId;
use rayon::prelude::*;
use std::collections::HashMap;

/// Dot product divided by the product of magnitudes.
///
/// Returns 0.0 when either vector has zero magnitude or the lengths differ.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    cosine_from_parts(dot(a, b), norm(a), norm(b))
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

fn cosine_from_parts(dot: f64, norm_a: f64, norm_b: f64) -> f64 {
    let denom = norm_a * norm_b;
    if denom == 0.0 {
        return 0.0;
    }
    dot / denom
}

/// Symmetric similarity matrix over the users of a `UserBookMatrix`.
///
/// Only users that are columns of the matrix have entries; every other id
/// is absent rather than zero. The diagonal is 1.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSimilarity {
    users: Vec<UserId>,
    positions: HashMap<UserId, usize>,
    /// Row-major, `users.len()` squared
    scores: Vec<f64>,
}

impl UserSimilarity {
    pub fn from_matrix(matrix: &UserBookMatrix) -> Self {
        let users = matrix.users().to_vec();
        let profiles = matrix.user_profiles();
        let norms: Vec<f64> = profiles.iter().map(|p| norm(p)).collect();
        let n = users.len();

        // a*b and b*a are bit-identical in IEEE arithmetic, so computing
        // both halves independently still yields an exactly symmetric matrix.
        let scores: Vec<f64> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                let profiles = &profiles;
                let norms = &norms;
                (0..n).map(move |j| {
                    if i == j {
                        1.0
                    } else {
                        cosine_from_parts(dot(&profiles[i], &profiles[j]), norms[i], norms[j])
                    }
                })
            })
            .collect();

        let positions = users.iter().enumerate().map(|(i, &u)| (u, i)).collect();
        Self {
            users,
            positions,
            scores,
        }
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.positions.contains_key(&user)
    }

    /// Similarity of `a` and `b`; `None` if either is not indexed.
    pub fn get(&self, a: UserId, b: UserId) -> Option<f64> {
        let i = *self.positions.get(&a)?;
        let j = *self.positions.get(&b)?;
        Some(self.scores[i * self.users.len() + j])
    }

    /// `(other user, score)` pairs for one user, including the user itself.
    pub fn row(&self, user: UserId) -> Option<impl Iterator<Item = (UserId, f64)> + '_> {
        let i = *self.positions.get(&user)?;
        let n = self.users.len();
        Some(
            self.users
                .iter()
                .copied()
                .zip(self.scores[i * n..(i + 1) * n].iter().copied()),
        )
    }

    /// Indexed users, ascending
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
