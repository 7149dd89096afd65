//! Filter implementations for the collaborative-filtering build.

pub mod active_users;
pub mod well_known_books;

pub use active_users::ActiveUserFilter;
pub use well_known_books::WellKnownBookFilter;
