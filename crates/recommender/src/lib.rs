//! Scoring strategies that turn a bourbon selection into distillery recommendations.
//!
//! This crate provides:
//! - The Strategy trait and its two implementations
//! - The Recommender that runs whichever strategy is configured
//! - Selection, the typed form of a request's bourbon ids
//!
//! ## Strategies
//! - **Tag overlap**: count flavor tags (intensity >= 3) a distillery's
//!   representative bourbon shares with the selection; every distillery
//!   with at least one shared tag, best first
//! - **Flavor similarity**: inverse RMS distance between a distillery's
//!   profile and the selection's average profile; top 4
//!
//! ## Example Usage
//! ```ignore
//! use recommender::{Recommender, Selection, StrategyKind};
//!
//! let recommender = Recommender::new(StrategyKind::FlavorSimilarity);
//! let ranked = recommender.recommend(&catalog, &Selection::from_ids([2, 14, 31]))?;
//! ```

pub mod error;
pub mod grouping;
pub mod recommendation;
pub mod recommender;
pub mod selection;
pub mod strategies;
pub mod traits;

// Re-export main types
pub use error::{RecommendError, Result};
pub use recommendation::{Recommendation, SimilarDistillery};
pub use recommender::{ParseStrategyError, Recommender, StrategyKind};
pub use selection::Selection;
pub use strategies::{FlavorSimilarityStrategy, TagOverlapStrategy};
pub use traits::Strategy;
