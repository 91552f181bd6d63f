//! Parser for the bourbon tasting table.
//!
//! The source is a comma-delimited file with a fixed 36-column layout:
//! the bourbon name, 18 flavor intensities, some spacer columns, then the
//! distillery block (name, address, five amenity slots, free-text info,
//! website, logos). Quoted fields may span lines, rows may be ragged and
//! blank lines are ignored.
//!
//! Everything that turns raw text into typed values lives here so the
//! coercion rules are applied the same way for every row.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// =============================================================================
// Column layout
// =============================================================================

/// The fixed column sequence of the source table.
///
/// Spacer columns (`Empty1`..`Empty4`) and logo columns are carried in the
/// layout but never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Bourbon,
    Flavor(FlavorAttribute),
    Empty1,
    Empty2,
    Empty3,
    BourbonName,
    Distillerie,
    Empty4,
    Distillery,
    Address,
    /// Amenity slot, 1 through 5
    Amenity(u8),
    ExtraInfo,
    WebsiteLink,
    LogoPng,
    LogoPng2,
}

impl Column {
    /// Total number of columns in the layout
    pub const COUNT: usize = 36;

    /// Amenity slots, in the order they are collected
    pub const AMENITIES: [Column; 5] = [
        Column::Amenity(1),
        Column::Amenity(2),
        Column::Amenity(3),
        Column::Amenity(4),
        Column::Amenity(5),
    ];

    /// Zero-based position of this column in a row
    pub fn index(self) -> usize {
        match self {
            Column::Bourbon => 0,
            Column::Flavor(attr) => 1 + attr.index(),
            Column::Empty1 => 19,
            Column::Empty2 => 20,
            Column::Empty3 => 21,
            Column::BourbonName => 22,
            Column::Distillerie => 23,
            Column::Empty4 => 24,
            Column::Distillery => 25,
            Column::Address => 26,
            Column::Amenity(n) => {
                debug_assert!((1..=5).contains(&n), "amenity slot {n} is outside 1..=5");
                26 + n as usize
            }
            Column::ExtraInfo => 32,
            Column::WebsiteLink => 33,
            Column::LogoPng => 34,
            Column::LogoPng2 => 35,
        }
    }
}

// =============================================================================
// Raw rows
// =============================================================================

/// One physical record of the source table, fields already trimmed.
///
/// Rows shorter than the layout are fine: missing columns read as "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<String>,
}

impl RawRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Convenience constructor, mostly for tests and fixtures
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.as_ref().trim().to_string()).collect(),
        }
    }

    /// Build a row by column instead of by position
    pub fn from_columns<S: AsRef<str>>(columns: &[(Column, S)]) -> Self {
        let mut fields = vec![String::new(); Column::COUNT];
        for (column, value) in columns {
            fields[column.index()] = value.as_ref().trim().to_string();
        }
        Self { fields }
    }

    pub fn get(&self, column: Column) -> &str {
        self.fields
            .get(column.index())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Every field is blank (a line of bare commas)
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.is_empty())
    }
}

/// Read every row of the table at `path`
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;
    read_rows_from_reader(file)
}

/// Read every row from any byte source.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; the
/// table has been seen exported as Latin-1.
///
/// Truly empty lines are skipped by the csv reader. A line of bare commas
/// is kept: it still occupies a row position, and ids are row positions.
pub fn read_rows_from_reader<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut record = csv::ByteRecord::new();
    while csv_reader.read_byte_record(&mut record)? {
        let fields: Vec<String> = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).trim().to_string())
            .collect();
        rows.push(RawRow::new(fields));
    }
    Ok(rows)
}

/// Whether `row` is the table's own header line
pub fn looks_like_header(row: &RawRow) -> bool {
    row.get(Column::Bourbon).eq_ignore_ascii_case("Bourbon")
        && FlavorAttribute::ALL
            .iter()
            .all(|&attr| FlavorAttribute::from_name(row.get(Column::Flavor(attr))) == Some(attr))
}

// =============================================================================
// Field coercion
// =============================================================================

/// Parse a flavor intensity, defaulting to 0.
///
/// Blank text, non-numeric text and non-finite numbers ("NaN", "inf") all
/// become 0. Negative values are kept as written.
pub fn coerce_intensity(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Trim an address and collapse embedded line breaks to ", "
pub fn normalize_address(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\n', ", ")
        .trim()
        .to_string()
}

/// Case-insensitive search for a military discount mention
pub fn mentions_military_discount(text: &str) -> bool {
    text.to_lowercase().contains("military discount")
}

/// Parse the 18 flavor columns of a row
pub fn parse_flavor_profile(row: &RawRow) -> FlavorProfile {
    FlavorProfile::from_pairs(
        FlavorAttribute::ALL
            .iter()
            .map(|&attr| (attr, coerce_intensity(row.get(Column::Flavor(attr))))),
    )
}

/// Normalize the distillery block of a row
pub fn parse_distillery(row: &RawRow) -> DistilleryInfo {
    DistilleryInfo {
        name: row.get(Column::Distillery).trim().to_string(),
        address: normalize_address(row.get(Column::Address)),
        website: row.get(Column::WebsiteLink).trim().to_string(),
        amenities: Column::AMENITIES
            .iter()
            .map(|&column| row.get(column).trim())
            .filter(|amenity| !amenity.is_empty())
            .map(str::to_string)
            .collect(),
        military_discount: mentions_military_discount(row.get(Column::ExtraInfo)),
    }
}

/// Turn one raw row into a record with the given id
pub fn parse_record(id: BourbonId, row: &RawRow) -> BourbonRecord {
    let distillery = parse_distillery(row);
    BourbonRecord {
        id,
        name: row.get(Column::Bourbon).trim().to_string(),
        flavor_profile: parse_flavor_profile(row),
        has_military_discount: distillery.military_discount,
        distillery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_intensity() {
        assert_eq!(coerce_intensity("4"), 4.0);
        assert_eq!(coerce_intensity(" 2.5 "), 2.5);
        assert_eq!(coerce_intensity(""), 0.0);
        assert_eq!(coerce_intensity("   "), 0.0);
        assert_eq!(coerce_intensity("n/a"), 0.0);
        assert_eq!(coerce_intensity("Cereal"), 0.0);
        assert_eq!(coerce_intensity("-2"), -2.0);
        assert_eq!(coerce_intensity("NaN"), 0.0);
        assert_eq!(coerce_intensity("inf"), 0.0);
    }

    #[test]
    fn test_column_layout() {
        assert_eq!(Column::Bourbon.index(), 0);
        assert_eq!(Column::Flavor(FlavorAttribute::Cereal).index(), 1);
        assert_eq!(Column::Flavor(FlavorAttribute::Grassy).index(), 18);
        assert_eq!(Column::Distillery.index(), 25);
        assert_eq!(Column::Amenity(1).index(), 27);
        assert_eq!(Column::Amenity(5).index(), 31);
        assert_eq!(Column::LogoPng2.index(), Column::COUNT - 1);
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(
            normalize_address("  528 W Main St\nLouisville, KY 40202 "),
            "528 W Main St, Louisville, KY 40202"
        );
        assert_eq!(normalize_address("a\r\nb"), "a, b");
        assert_eq!(normalize_address(""), "");
    }

    #[test]
    fn test_military_discount_is_case_insensitive() {
        assert!(mentions_military_discount("10% MILITARY Discount on tours"));
        assert!(!mentions_military_discount("Veterans welcome"));
        assert!(!mentions_military_discount(""));
    }

    #[test]
    fn test_parse_distillery_collects_amenities_in_order() {
        let row = RawRow::from_columns(&[
            (Column::Distillery, " Angel's Envy "),
            (Column::Amenity(1), "Tours"),
            (Column::Amenity(2), ""),
            (Column::Amenity(3), "  "),
            (Column::Amenity(4), "Gift Shop"),
            (Column::WebsiteLink, " https://www.angelsenvy.com "),
        ]);

        let distillery = parse_distillery(&row);
        assert_eq!(distillery.name, "Angel's Envy");
        assert_eq!(distillery.amenities, vec!["Tours", "Gift Shop"]);
        assert_eq!(distillery.website, "https://www.angelsenvy.com");
        assert!(!distillery.military_discount);
    }

    #[test]
    fn test_read_rows_tolerates_ragged_and_blank_lines() {
        let data = "Bourbon,Cereal,Roasted\n\nOld Forester,3,1\n,,\nShort\n";
        let rows = read_rows_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].get(Column::Bourbon), "Old Forester");
        assert!(rows[2].is_blank());
        assert_eq!(rows[3].get(Column::Bourbon), "Short");
        assert_eq!(rows[3].get(Column::Distillery), "");
    }

    #[test]
    fn test_amenity_slots_map_to_their_columns() {
        let positions: Vec<_> = (1..=5).map(|n| Column::Amenity(n).index()).collect();
        assert_eq!(positions, vec![27, 28, 29, 30, 31]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "amenity slot")]
    fn test_amenity_slot_out_of_range_panics() {
        Column::Amenity(6).index();
    }

    #[test]
    fn test_bare_comma_row_keeps_later_ids() {
        let data = "Bourbon,Cereal\n,,,,\nEagle Rare,4\n";
        let mut rows = read_rows_from_reader(data.as_bytes()).unwrap();
        rows.remove(0);

        let catalog = Catalog::from_rows_starting_at(rows, 2);
        let blank = catalog.get(2).unwrap();
        assert!(!blank.has_name());
        assert_eq!(blank.distillery.name, "");

        let eagle = catalog.get(3).unwrap();
        assert_eq!(eagle.name, "Eagle Rare");
        assert_eq!(eagle.flavor_profile.get(FlavorAttribute::Cereal), 4.0);
    }

    #[test]
    fn test_read_rows_keeps_quoted_newlines() {
        let mut fields = vec![String::new(); Column::COUNT];
        fields[Column::Bourbon.index()] = "Rabbit Hole".to_string();
        fields[Column::Address.index()] = "\"711 E Jefferson St\nLouisville\"".to_string();
        let data = fields.join(",");

        let rows = read_rows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        let record = parse_record(1, &rows[0]);
        assert_eq!(record.distillery.address, "711 E Jefferson St, Louisville");
    }

    #[test]
    fn test_looks_like_header() {
        let mut header = vec!["Bourbon".to_string()];
        header.extend(FlavorAttribute::ALL.iter().map(|a| a.name().to_string()));
        assert!(looks_like_header(&RawRow::new(header)));

        let data_row = RawRow::from_fields(&["Old Forester", "3", "1"]);
        assert!(!looks_like_header(&data_row));
    }
}
