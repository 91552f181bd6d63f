//! Rank distilleries by how close their flavor profile is to the selection's.
//!
//! ## Algorithm
//! 1. Selected set = selected ids that resolve to a named bourbon
//! 2. Average the selected profiles attribute by attribute (all zero if none)
//! 3. For every bourbon NOT selected, take the first one seen per distillery
//! 4. distance = RMS difference to the average over the 18 attributes
//! 5. score = 1 / (1 + distance), so scores live in (0, 1]
//! 6. Stable-sort descending and keep the top `limit` (4 by default)

use crate::error::Result;
use crate::grouping::first_per_distillery;
use crate::recommendation::{Recommendation, SimilarDistillery};
use crate::selection::Selection;
use crate::traits::Strategy;
use catalog::{BourbonRecord, Catalog, FlavorProfile};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Number of distilleries returned unless configured otherwise
pub const DEFAULT_LIMIT: usize = 4;

/// Continuous matching on the full 18-dimensional flavor vector
#[derive(Debug, Clone, Copy)]
pub struct FlavorSimilarityStrategy {
    limit: usize,
}

impl FlavorSimilarityStrategy {
    pub fn new() -> Self {
        Self { limit: DEFAULT_LIMIT }
    }

    /// Configure how many distilleries to return (default: 4)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Selected records that count towards the average
    pub fn selected_records<'a>(catalog: &'a Catalog, selection: &Selection) -> Vec<&'a BourbonRecord> {
        selection
            .ids()
            .iter()
            .filter_map(|&id| catalog.get(id))
            .filter(|record| record.has_name())
            .collect()
    }

    /// Attribute-wise mean over the selected records
    pub fn average_profile(catalog: &Catalog, selection: &Selection) -> FlavorProfile {
        let selected = Self::selected_records(catalog, selection);
        for record in &selected {
            debug!("Selected bourbon {}: {:?}", record.name, record.flavor_profile);
        }
        FlavorProfile::average(selected.iter().map(|record| &record.flavor_profile))
    }

    /// Similarity in (0, 1] derived from the RMS distance between two profiles
    pub fn similarity(profile: &FlavorProfile, average: &FlavorProfile) -> f64 {
        1.0 / (1.0 + profile.rms_distance(average))
    }
}

impl Default for FlavorSimilarityStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for FlavorSimilarityStrategy {
    fn name(&self) -> &str {
        "FlavorSimilarityStrategy"
    }

    #[instrument(skip_all, fields(selected = selection.len(), limit = self.limit))]
    fn recommend(&self, catalog: &Catalog, selection: &Selection) -> Result<Vec<Recommendation>> {
        let average = Self::average_profile(catalog, selection);
        debug!("Average flavor profile: {:?}", average);

        let candidates = first_per_distillery(
            catalog
                .records()
                .iter()
                .filter(|record| !selection.contains(record.id)),
        );

        // Scoring is independent per distillery; collect keeps encounter order
        let mut scored: Vec<SimilarDistillery> = candidates
            .par_iter()
            .map(|record| SimilarDistillery {
                name: record.distillery.name.clone(),
                bourbon: record.name.clone(),
                bourbon_id: record.id,
                address: record.distillery.address.clone(),
                website: record.distillery.website.clone(),
                amenities: record.distillery.amenities.clone(),
                military_discount: record.distillery.military_discount,
                similarity_score: Self::similarity(&record.flavor_profile, &average),
                flavor_profile: record.flavor_profile,
            })
            .collect();

        // sort_by is stable: equal scores keep encounter order
        scored.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        scored.truncate(self.limit);

        for rec in &scored {
            debug!(
                "Distillery: {} | Bourbon: {} | Similarity Score: {:.4}",
                rec.name, rec.bourbon, rec.similarity_score
            );
        }

        Ok(scored.into_iter().map(Recommendation::Similar).collect())
    }
}
