//! Strategy implementations.
//!
//! Each one ranks distilleries against a selection; the [`Recommender`]
//! picks which one runs.
//!
//! [`Recommender`]: crate::Recommender

pub mod flavor_similarity;
pub mod tag_overlap;

// Re-export for convenience
pub use flavor_similarity::FlavorSimilarityStrategy;
pub use tag_overlap::TagOverlapStrategy;
