//! Book recommendation pipeline.
//!
//! This crate provides:
//! - The rating join (ratings enriched with book metadata)
//! - The popularity ranker behind the "top books" table
//! - Rating filters and the FilterPipeline that composes them
//! - The collaborative build: title × user matrix and user similarity
//! - Nearest-neighbour lookup of recommended titles
//! - `Snapshot`, the immutable result of a build that serves all queries
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::Dataset;
//! use pipeline::{PipelineConfig, build};
//!
//! let dataset = Dataset::load_from_dir(Path::new("data"))?;
//! let snapshot = build(&dataset, &PipelineConfig::default())?;
//!
//! for entry in snapshot.get_top_books() {
//!     println!("{} ({:.2})", entry.title, entry.avg_rating);
//! }
//! let titles = snapshot.recommend(11676);
//! ```

pub mod aggregate;
pub mod collaborative;
pub mod config;
pub mod filter_pipeline;
pub mod filters;
pub mod join;
pub mod matrix;
pub mod popularity;
pub mod recommend;
pub mod similarity;
pub mod snapshot;
pub mod traits;

pub use collaborative::{CollaborativeFilterBuilder, CollaborativeModel};
pub use config::PipelineConfig;
pub use filter_pipeline::FilterPipeline;
pub use join::{JoinedRating, join_ratings};
pub use matrix::{MISSING_RATING_FILL, UserBookMatrix};
pub use popularity::{PopularityEntry, PopularityRanker};
pub use recommend::Recommender;
pub use similarity::{UserSimilarity, cosine_similarity};
pub use snapshot::{Snapshot, SnapshotSummary};
pub use traits::RatingFilter;

use anyhow::Result;
use data_loader::Dataset;

/// Build the query snapshot for `dataset`. Shorthand for [`Snapshot::build`].
pub fn build(dataset: &Dataset, config: &PipelineConfig) -> Result<Snapshot> {
    Snapshot::build(dataset, config)
}
