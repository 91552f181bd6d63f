//! # Recommendation Orchestrator
//!
//! Sits between the HTTP layer and the recommender:
//! 1. Narrow the request's integers into a Selection
//! 2. Run the configured strategy on the blocking pool
//! 3. Log what was selected, what came back and how long it took
//!
//! The catalog is built once in `main` and shared here behind an `Arc`;
//! nothing in this module ever writes to it.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use catalog::Catalog;
use recommender::{RecommendError, Recommendation, Recommender, Selection, StrategyKind};

/// Coordinates recommendation requests against the shared catalog
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    catalog: Arc<Catalog>,
    recommender: Arc<Recommender>,
}

impl RecommendationOrchestrator {
    /// Create an orchestrator running one of the built-in strategies
    pub fn new(catalog: Arc<Catalog>, strategy: StrategyKind) -> Self {
        Self::with_recommender(catalog, Recommender::new(strategy))
    }

    /// Create an orchestrator around an already configured recommender
    pub fn with_recommender(catalog: Arc<Catalog>, recommender: Recommender) -> Self {
        Self {
            catalog,
            recommender: Arc::new(recommender),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn strategy_name(&self) -> &str {
        self.recommender.strategy_name()
    }

    /// Main entry point: rank distilleries for a list of bourbon ids
    ///
    /// # Arguments
    /// * `bourbon_ids` - Ids exactly as the client sent them (already known to be integers)
    ///
    /// # Returns
    /// Recommendations best first, in the active strategy's shape
    pub async fn get_recommendations(
        &self,
        bourbon_ids: Vec<i64>,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let start_time = Instant::now();

        let selection = Selection::from_ids(bourbon_ids);
        info!("Processing bourbon IDs: {:?}", selection.ids());
        self.log_selection(&selection);

        let recommendations = self.score(selection).await?;

        info!(
            "Returning {} recommendations from {} in {:.2?}",
            recommendations.len(),
            self.strategy_name(),
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    /// Run the strategy on the blocking pool so scoring never stalls the runtime
    async fn score(&self, selection: Selection) -> Result<Vec<Recommendation>, RecommendError> {
        let catalog = self.catalog.clone();
        let recommender = self.recommender.clone();

        tokio::task::spawn_blocking(move || recommender.recommend(&catalog, &selection))
            .await
            .map_err(|e| RecommendError::internal(format!("scoring task failed: {e}")))?
    }

    fn log_selection(&self, selection: &Selection) {
        for &id in selection.ids() {
            match self.catalog.get(id) {
                Some(record) => debug!(
                    "Selected bourbon {}: {} ({})",
                    id,
                    record.name,
                    record.distillery.name
                ),
                None => debug!("Selected id {} is not in the catalog", id),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Column, FlavorAttribute, RawRow};

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn build_test_catalog() -> Arc<Catalog> {
        let row = |bourbon: &str, distillery: &str, woody: &str, floral: &str| {
            RawRow::from_columns(&[
                (Column::Bourbon, bourbon),
                (Column::Distillery, distillery),
                (Column::Flavor(FlavorAttribute::Woody), woody),
                (Column::Flavor(FlavorAttribute::Floral), floral),
            ])
        };
        Arc::new(Catalog::from_rows(vec![
            row("Eagle Rare", "Buffalo Trace", "5", "1"),
            row("Old Forester 1920", "Old Forester", "4", "1"),
            row("Four Roses Small Batch", "Four Roses", "2", "4"),
            row("Maker's Mark", "Maker's Mark", "3", "2"),
            row("Woodford Reserve", "Woodford Reserve", "4", "3"),
            row("Blanton's", "Buffalo Trace", "5", "1"),
        ]))
    }

    // ============================================================================
    // Unit Tests
    // ============================================================================

    #[tokio::test]
    async fn test_similarity_orchestrator_returns_top_four() {
        let orchestrator =
            RecommendationOrchestrator::new(build_test_catalog(), StrategyKind::FlavorSimilarity);

        let recs = orchestrator.get_recommendations(vec![1]).await.unwrap();

        assert_eq!(recs.len(), 4);
        // Blanton's keeps Buffalo Trace eligible and is the closest profile
        assert_eq!(recs[0].distillery_name(), "Buffalo Trace");
    }

    #[tokio::test]
    async fn test_tag_orchestrator_returns_every_match() {
        let orchestrator =
            RecommendationOrchestrator::new(build_test_catalog(), StrategyKind::TagOverlap);

        let recs = orchestrator.get_recommendations(vec![3]).await.unwrap();
        let names: Vec<_> = recs.iter().map(|r| r.distillery_name()).collect();

        // Four Roses' only tag is Floral; Woodford shares it
        assert_eq!(names, vec!["Four Roses", "Woodford Reserve"]);
    }

    #[tokio::test]
    async fn test_orchestrator_shares_catalog() {
        let catalog = build_test_catalog();
        let orchestrator = RecommendationOrchestrator::new(catalog.clone(), StrategyKind::default());
        let cloned = orchestrator.clone();

        assert!(Arc::ptr_eq(orchestrator.catalog(), &catalog));
        assert!(Arc::ptr_eq(cloned.catalog(), &catalog));
        assert_eq!(cloned.strategy_name(), "FlavorSimilarityStrategy");
    }

    #[tokio::test]
    async fn test_unknown_ids_are_harmless() {
        let orchestrator =
            RecommendationOrchestrator::new(build_test_catalog(), StrategyKind::TagOverlap);
        let recs = orchestrator.get_recommendations(vec![-1, 0, 4242]).await.unwrap();
        assert!(recs.is_empty());
    }
}
