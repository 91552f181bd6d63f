//! Collapse bourbon records into one representative per distillery.

use catalog::BourbonRecord;
use std::collections::HashSet;

/// Keep the first record seen for each distillery name.
///
/// Output preserves encounter order, which is what ties fall back to once
/// the strategies stable-sort by score. Records with an empty distillery
/// name never form a group.
pub fn first_per_distillery<'a>(
    records: impl IntoIterator<Item = &'a BourbonRecord>,
) -> Vec<&'a BourbonRecord> {
    let mut seen: HashSet<&'a str> = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            let name = record.distillery.name.as_str();
            !name.is_empty() && seen.insert(name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, Column, RawRow};

    #[test]
    fn test_first_seen_wins() {
        let catalog = Catalog::from_rows(vec![
            RawRow::from_columns(&[(Column::Bourbon, "Eagle Rare"), (Column::Distillery, "Buffalo Trace")]),
            RawRow::from_columns(&[(Column::Bourbon, "Orphan"), (Column::Distillery, "")]),
            RawRow::from_columns(&[(Column::Bourbon, "Stagg"), (Column::Distillery, "Buffalo Trace")]),
            RawRow::from_columns(&[(Column::Bourbon, "Knob Creek"), (Column::Distillery, "Jim Beam")]),
        ]);

        let groups = first_per_distillery(catalog.records());
        let names: Vec<_> = groups.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Eagle Rare", "Knob Creek"]);
    }
}
