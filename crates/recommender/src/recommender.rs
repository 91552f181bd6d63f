//! The Recommender runs one configured strategy over the catalog.
//!
//! Which strategy is active is a deployment decision: the two produce
//! materially different rankings, so it is chosen explicitly through
//! [`StrategyKind`] rather than hard-wired.

use crate::error::{RecommendError, Result};
use crate::recommendation::Recommendation;
use crate::selection::Selection;
use crate::strategies::{FlavorSimilarityStrategy, TagOverlapStrategy};
use crate::traits::Strategy;
use catalog::Catalog;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use thiserror::Error;
use tracing;

/// Names of the built-in strategies, as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Count shared tags, return every distillery with at least one
    TagOverlap,
    /// Inverse RMS distance to the average profile, top 4
    #[default]
    FlavorSimilarity,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::TagOverlap, StrategyKind::FlavorSimilarity];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::TagOverlap => "tag-overlap",
            StrategyKind::FlavorSimilarity => "flavor-similarity",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown strategy name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}' (expected 'tag-overlap' or 'flavor-similarity')")]
pub struct ParseStrategyError(String);

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "tag-overlap" | "tags" => Ok(StrategyKind::TagOverlap),
            "flavor-similarity" | "similarity" => Ok(StrategyKind::FlavorSimilarity),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Dispatches recommendation requests to a single boxed strategy.
///
/// ## Usage
/// ```ignore
/// let recommender = Recommender::new(StrategyKind::FlavorSimilarity);
/// let ranked = recommender.recommend(&catalog, &Selection::from_ids([2, 5]))?;
/// ```
pub struct Recommender {
    strategy: Box<dyn Strategy>,
}

impl Recommender {
    /// Create a recommender running one of the built-in strategies
    pub fn new(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::TagOverlap => Self::with_strategy(TagOverlapStrategy::new()),
            StrategyKind::FlavorSimilarity => Self::with_strategy(FlavorSimilarityStrategy::new()),
        }
    }

    /// Create a recommender running any strategy
    pub fn with_strategy(strategy: impl Strategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Rank distilleries for a selection.
    ///
    /// Results are checked before they leave: a non-finite score means the
    /// data was corrupt somewhere upstream and is reported as an internal
    /// error instead of being serialized.
    pub fn recommend(&self, catalog: &Catalog, selection: &Selection) -> Result<Vec<Recommendation>> {
        let start = Instant::now();
        tracing::debug!(
            "Applying strategy: {} (selected ids: {:?})",
            self.strategy.name(),
            selection.ids()
        );

        let recommendations = self.strategy.recommend(catalog, selection)?;

        if let Some(bad) = recommendations
            .iter()
            .find(|rec| rec.similarity_score().is_some_and(|score| !score.is_finite()))
        {
            return Err(RecommendError::internal(format!(
                "{} produced a non-finite score for {:?}",
                self.strategy.name(),
                bad.distillery_name()
            )));
        }

        tracing::debug!(
            "Strategy applied: {} (output count: {}, took {:.2?})",
            self.strategy.name(),
            recommendations.len(),
            start.elapsed()
        );
        Ok(recommendations)
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}

impl fmt::Debug for Recommender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recommender")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
