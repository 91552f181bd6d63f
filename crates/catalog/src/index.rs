//! Catalog building.
//!
//! Turns parsed rows into the immutable [`Catalog`]:
//! - assign ids from row positions
//! - coerce flavor intensities and derive tags
//! - normalize the distillery block
//!
//! Row conversion is independent per row, so it runs on Rayon's pool.
//! `par_iter().collect()` keeps the original row order.

use crate::error::{CatalogError, Result};
use crate::parser::{self, RawRow};
use crate::types::*;
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Whether the first row of the source table is a header line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// First row is the header: it takes id 1 and is not a record
    #[default]
    Present,
    /// Every row is data, ids start at 1
    Absent,
}

impl Catalog {
    /// Load and build the catalog from a table on disk.
    ///
    /// This is the main entry point at startup. Any error here is meant to
    /// abort the process: the service has nothing to offer without data.
    ///
    /// Steps:
    /// 1. Read all rows
    /// 2. Consume the header row if present (it still occupies id 1)
    /// 3. Convert rows into records
    /// 4. Refuse an empty result
    pub fn load_from_file(path: &Path, header: HeaderMode) -> Result<Self> {
        info!("Loading bourbon catalog from {:?}", path);

        let mut rows = parser::read_rows(path)?;
        debug!("Read {} rows", rows.len());

        let first_id = match header {
            HeaderMode::Present if !rows.is_empty() => {
                let header_row = rows.remove(0);
                if !parser::looks_like_header(&header_row) {
                    warn!(
                        "First row of {:?} does not look like a header (starts with {:?}); skipping it anyway",
                        path,
                        header_row.get(parser::Column::Bourbon)
                    );
                }
                2
            }
            _ => 1,
        };

        let catalog = Self::from_rows_starting_at(rows, first_id);
        if catalog.is_empty() {
            return Err(CatalogError::Empty {
                source_name: path.display().to_string(),
            });
        }

        info!(
            "Loaded {} bourbons from {} distilleries",
            catalog.len(),
            catalog.distillery_names().len()
        );
        Ok(catalog)
    }

    /// Build a catalog whose first row gets id 1
    pub fn from_rows(rows: Vec<RawRow>) -> Self {
        Self::from_rows_starting_at(rows, 1)
    }

    /// Build a catalog whose first row gets `first_id`; later rows count up from it
    pub fn from_rows_starting_at(rows: Vec<RawRow>, first_id: BourbonId) -> Self {
        let records: Vec<BourbonRecord> = rows
            .par_iter()
            .enumerate()
            .map(|(idx, row)| parser::parse_record(first_id + idx as BourbonId, row))
            .collect();

        let unnamed = records.iter().filter(|r| !r.has_name()).count();
        if unnamed > 0 {
            debug!("{} rows have no bourbon name", unnamed);
        }

        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Column;

    fn row(name: &str, distillery: &str, flavors: &[(FlavorAttribute, &str)]) -> RawRow {
        let mut columns: Vec<(Column, String)> = vec![
            (Column::Bourbon, name.to_string()),
            (Column::Distillery, distillery.to_string()),
        ];
        for (attr, value) in flavors {
            columns.push((Column::Flavor(*attr), value.to_string()));
        }
        RawRow::from_columns(&columns)
    }

    #[test]
    fn test_ids_follow_row_positions() {
        let catalog = Catalog::from_rows(vec![
            row("A", "One", &[]),
            row("B", "Two", &[]),
            row("C", "Three", &[]),
        ]);

        let ids: Vec<_> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.get(2).unwrap().name, "B");
        assert!(catalog.get(4).is_none());
        assert!(catalog.get(0).is_none());
    }

    #[test]
    fn test_offset_ids() {
        let catalog = Catalog::from_rows_starting_at(vec![row("A", "One", &[])], 2);
        assert_eq!(catalog.id_range(), Some((2, 2)));
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_profile_always_has_every_attribute() {
        let catalog = Catalog::from_rows(vec![row(
            "Sparse",
            "One",
            &[(FlavorAttribute::Peaty, "4"), (FlavorAttribute::Woody, "oops")],
        )]);
        let record = catalog.get(1).unwrap();

        assert_eq!(record.flavor_profile.iter().count(), FlavorAttribute::COUNT);
        assert_eq!(record.flavor_profile.get(FlavorAttribute::Peaty), 4.0);
        assert_eq!(record.flavor_profile.get(FlavorAttribute::Woody), 0.0);
        assert!(record.flavor_profile.values().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_tags_use_threshold_of_three() {
        let catalog = Catalog::from_rows(vec![row(
            "Tagged",
            "One",
            &[
                (FlavorAttribute::Peaty, "3"),
                (FlavorAttribute::Woody, "5"),
                (FlavorAttribute::Citrus, "2.9"),
            ],
        )]);
        let tags = catalog.get(1).unwrap().tags();

        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec![FlavorAttribute::Peaty, FlavorAttribute::Woody]
        );
    }

    #[test]
    fn test_distillery_names_are_first_seen_and_non_empty() {
        let catalog = Catalog::from_rows(vec![
            row("A", "Buffalo Trace", &[]),
            row("B", "", &[]),
            row("C", "Angel's Envy", &[]),
            row("D", "Buffalo Trace", &[]),
        ]);
        assert_eq!(catalog.distillery_names(), vec!["Buffalo Trace", "Angel's Envy"]);
    }

    #[test]
    fn test_search_matches_bourbon_or_distillery() {
        let catalog = Catalog::from_rows(vec![
            row("Eagle Rare", "Buffalo Trace", &[]),
            row("Angel's Envy Port Finish", "Angel's Envy", &[]),
        ]);
        assert_eq!(catalog.search("buffalo").len(), 1);
        assert_eq!(catalog.search("ENVY").len(), 1);
        assert_eq!(catalog.search("e").len(), 2);
        assert!(catalog.search("  ").is_empty());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Catalog::load_from_file(Path::new("does/not/exist.csv"), HeaderMode::Present);
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_dataset() {
        // Requires the real tasting table next to the workspace root
        let path = Path::new("../../bourbonlouisville.csv");

        if path.exists() {
            let catalog = Catalog::load_from_file(path, HeaderMode::Present).unwrap();
            assert!(!catalog.is_empty());
            assert_eq!(catalog.id_range().map(|(first, _)| first), Some(2));
        }
    }
}
