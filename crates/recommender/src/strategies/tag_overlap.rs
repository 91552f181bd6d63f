//! Rank distilleries by how many flavor tags they share with the selection.
//!
//! ## Algorithm
//! 1. Union the tags of every selected bourbon
//! 2. Take the first bourbon seen for each distillery as its representative
//! 3. Match score = size of the intersection of the two tag sets
//! 4. Drop distilleries scoring 0, stable-sort the rest descending
//!
//! No cap on the number of results. Selected bourbons are not excluded, so
//! a selection usually recommends its own distilleries first.

use crate::error::Result;
use crate::grouping::first_per_distillery;
use crate::recommendation::Recommendation;
use crate::selection::Selection;
use crate::traits::Strategy;
use catalog::{BourbonRecord, Catalog, TagSet};
use tracing::{debug, instrument};

/// Coarse, categorical matching on tags (intensity >= 3)
#[derive(Debug, Clone, Copy, Default)]
pub struct TagOverlapStrategy;

impl TagOverlapStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Union of the tags of every selected record
    pub fn selected_tags(catalog: &Catalog, selection: &Selection) -> TagSet {
        selection
            .ids()
            .iter()
            .filter_map(|&id| catalog.get(id))
            .flat_map(BourbonRecord::tags)
            .collect()
    }

    /// Representative distilleries with their match scores, unsorted and unfiltered
    pub fn match_scores<'a>(catalog: &'a Catalog, selected_tags: &TagSet) -> Vec<(&'a BourbonRecord, usize)> {
        first_per_distillery(catalog.records())
            .into_iter()
            .map(|record| {
                let score = record.tags().intersection(selected_tags).count();
                (record, score)
            })
            .collect()
    }
}

impl Strategy for TagOverlapStrategy {
    fn name(&self) -> &str {
        "TagOverlapStrategy"
    }

    #[instrument(skip_all, fields(selected = selection.len()))]
    fn recommend(&self, catalog: &Catalog, selection: &Selection) -> Result<Vec<Recommendation>> {
        let selected_tags = Self::selected_tags(catalog, selection);
        debug!("Selected tags: {:?}", selected_tags);

        if selected_tags.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<_> = Self::match_scores(catalog, &selected_tags)
            .into_iter()
            .filter(|&(_, score)| score > 0)
            .collect();

        // sort_by is stable: equal scores keep first-seen order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        for (record, score) in &scored {
            debug!("Distillery: {} (match score {})", record.distillery.name, score);
        }

        Ok(scored
            .into_iter()
            .map(|(record, _)| Recommendation::Match(record.distillery.clone()))
            .collect())
    }
}
