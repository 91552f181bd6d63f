//! Core domain types for the bourbon catalog.
//!
//! A catalog is a flat list of [`BourbonRecord`]s, one per source row. Each
//! record carries an 18-dimensional [`FlavorProfile`] and the metadata of the
//! distillery that produces it.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a bourbon: its 1-based row position in the source table.
///
/// Stable within one load only. Never persisted.
pub type BourbonId = u32;

/// Set of tags derived from a profile, ordered like [`FlavorAttribute::ALL`]
pub type TagSet = BTreeSet<FlavorAttribute>;

/// Intensity at or above which a flavor attribute counts as a tag
pub const TAG_THRESHOLD: f64 = 3.0;

// =============================================================================
// Flavor attributes
// =============================================================================

/// The 18 fixed flavor attributes scored in the tasting table.
///
/// Variant order matches column order in the source table and is the order
/// used everywhere a profile is iterated or serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlavorAttribute {
    Cereal,
    Roasted,
    Yeasty,
    Feinty,
    Peaty,
    CharredOak,
    Nutty,
    Woody,
    Spicy,
    Winey,
    Citrus,
    TropicalFruits,
    PomeFruits,
    StoneFruits,
    RedBerries,
    DriedFruits,
    Floral,
    Grassy,
}

impl FlavorAttribute {
    /// Number of attributes in a profile
    pub const COUNT: usize = 18;

    /// All attributes in column order
    pub const ALL: [FlavorAttribute; Self::COUNT] = [
        FlavorAttribute::Cereal,
        FlavorAttribute::Roasted,
        FlavorAttribute::Yeasty,
        FlavorAttribute::Feinty,
        FlavorAttribute::Peaty,
        FlavorAttribute::CharredOak,
        FlavorAttribute::Nutty,
        FlavorAttribute::Woody,
        FlavorAttribute::Spicy,
        FlavorAttribute::Winey,
        FlavorAttribute::Citrus,
        FlavorAttribute::TropicalFruits,
        FlavorAttribute::PomeFruits,
        FlavorAttribute::StoneFruits,
        FlavorAttribute::RedBerries,
        FlavorAttribute::DriedFruits,
        FlavorAttribute::Floral,
        FlavorAttribute::Grassy,
    ];

    /// Position of this attribute within a profile
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column header used in the source table (and as the JSON key)
    pub fn name(self) -> &'static str {
        match self {
            FlavorAttribute::Cereal => "Cereal",
            FlavorAttribute::Roasted => "Roasted",
            FlavorAttribute::Yeasty => "Yeasty",
            FlavorAttribute::Feinty => "Feinty",
            FlavorAttribute::Peaty => "Peaty",
            FlavorAttribute::CharredOak => "Charred Oak",
            FlavorAttribute::Nutty => "Nutty",
            FlavorAttribute::Woody => "Woody",
            FlavorAttribute::Spicy => "Spicy",
            FlavorAttribute::Winey => "Winey",
            FlavorAttribute::Citrus => "Citrus",
            FlavorAttribute::TropicalFruits => "Tropical Fruits",
            FlavorAttribute::PomeFruits => "Pome Fruits",
            FlavorAttribute::StoneFruits => "Stone Fruits",
            FlavorAttribute::RedBerries => "Red Berries",
            FlavorAttribute::DriedFruits => "Dried Fruits",
            FlavorAttribute::Floral => "Floral",
            FlavorAttribute::Grassy => "Grassy",
        }
    }

    /// Look an attribute up by its column header (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|attr| attr.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for FlavorAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Flavor profile
// =============================================================================

/// Intensity of every flavor attribute for one bourbon.
///
/// Always holds exactly [`FlavorAttribute::COUNT`] finite values; the catalog
/// builder coerces anything unparseable to 0 before it gets here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlavorProfile {
    values: [f64; FlavorAttribute::COUNT],
}

impl FlavorProfile {
    /// Profile with every attribute at 0
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn from_values(values: [f64; FlavorAttribute::COUNT]) -> Self {
        Self { values }
    }

    /// Build a profile from `(attribute, intensity)` pairs; unnamed attributes stay 0
    pub fn from_pairs(pairs: impl IntoIterator<Item = (FlavorAttribute, f64)>) -> Self {
        let mut profile = Self::zero();
        for (attr, value) in pairs {
            profile.set(attr, value);
        }
        profile
    }

    pub fn get(&self, attr: FlavorAttribute) -> f64 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: FlavorAttribute, value: f64) {
        self.values[attr.index()] = value;
    }

    /// Iterate `(attribute, intensity)` in column order
    pub fn iter(&self) -> impl Iterator<Item = (FlavorAttribute, f64)> + '_ {
        FlavorAttribute::ALL
            .iter()
            .map(move |&attr| (attr, self.get(attr)))
    }

    pub fn values(&self) -> &[f64; FlavorAttribute::COUNT] {
        &self.values
    }

    /// Attributes whose intensity meets [`TAG_THRESHOLD`]
    pub fn tags(&self) -> TagSet {
        self.iter()
            .filter(|&(_, value)| value >= TAG_THRESHOLD)
            .map(|(attr, _)| attr)
            .collect()
    }

    /// Attribute-wise mean of the given profiles.
    ///
    /// Returns the zero profile when `profiles` is empty.
    pub fn average<'a>(profiles: impl IntoIterator<Item = &'a FlavorProfile>) -> Self {
        let mut sums = [0.0; FlavorAttribute::COUNT];
        let mut count = 0usize;
        for profile in profiles {
            for (sum, value) in sums.iter_mut().zip(profile.values.iter()) {
                *sum += value;
            }
            count += 1;
        }
        if count == 0 {
            return Self::zero();
        }
        for sum in sums.iter_mut() {
            *sum /= count as f64;
        }
        Self { values: sums }
    }

    /// Root-mean-square difference across all attributes
    pub fn rms_distance(&self, other: &FlavorProfile) -> f64 {
        let sum_sq: f64 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        (sum_sq / FlavorAttribute::COUNT as f64).sqrt()
    }
}

/// Serialized as an object keyed by column header, in column order
impl Serialize for FlavorProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FlavorAttribute::COUNT))?;
        for (attr, value) in self.iter() {
            map.serialize_entry(attr.name(), &value)?;
        }
        map.end()
    }
}

// =============================================================================
// Records
// =============================================================================

/// Normalized metadata of the distillery behind a bourbon.
///
/// This is the exact shape returned by the tag-overlap strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistilleryInfo {
    /// Trimmed name; empty names are never grouped or recommended
    pub name: String,
    /// Trimmed, with embedded newlines collapsed to ", "
    pub address: String,
    pub website: String,
    /// Non-blank amenity slots in source order
    pub amenities: Vec<String>,
    pub military_discount: bool,
}

/// One row of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct BourbonRecord {
    pub id: BourbonId,
    /// Bourbon name, trimmed; may be empty for filler rows
    pub name: String,
    pub flavor_profile: FlavorProfile,
    pub distillery: DistilleryInfo,
    pub has_military_discount: bool,
}

impl BourbonRecord {
    /// Tags recomputed from the flavor profile
    pub fn tags(&self) -> TagSet {
        self.flavor_profile.tags()
    }

    /// Whether this row names an actual bourbon
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The immutable, fully-loaded set of bourbon records.
///
/// Built once at startup (see `index.rs`) and shared behind an `Arc`.
/// There are no mutators: everything after construction is read-only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) records: Vec<BourbonRecord>,
}

impl Catalog {
    /// All records in source order
    pub fn records(&self) -> &[BourbonRecord] {
        &self.records
    }

    /// Get a bourbon by ID
    ///
    /// Ids are dense and ascending, so this is a binary search.
    pub fn get(&self, id: BourbonId) -> Option<&BourbonRecord> {
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Range of ids present, if any
    pub fn id_range(&self) -> Option<(BourbonId, BourbonId)> {
        Some((self.records.first()?.id, self.records.last()?.id))
    }

    /// Distinct non-empty distillery names in first-seen order
    pub fn distillery_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.records
            .iter()
            .map(|record| record.distillery.name.as_str())
            .filter(|name| !name.is_empty() && seen.insert(*name))
            .collect()
    }

    /// Records whose bourbon or distillery name contains `query` (case-insensitive)
    pub fn search(&self, query: &str) -> Vec<&BourbonRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&query)
                    || record.distillery.name.to_lowercase().contains(&query)
            })
            .collect()
    }
}
