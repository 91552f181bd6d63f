//! # Catalog Crate
//!
//! Loads the bourbon tasting table and builds the immutable in-memory
//! catalog the recommender scores against.
//!
//! ## Main Components
//!
//! - **types**: Domain types (BourbonRecord, FlavorProfile, DistilleryInfo, Catalog)
//! - **parser**: Read the delimited table and coerce its fields
//! - **index**: Build the Catalog from parsed rows
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, HeaderMode};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! // Build once at startup, then share read-only
//! let catalog = Arc::new(Catalog::load_from_file(
//!     Path::new("bourbonlouisville.csv"),
//!     HeaderMode::Present,
//! )?);
//!
//! let bourbon = catalog.get(2).unwrap();
//! println!("{} from {} has tags {:?}", bourbon.name, bourbon.distillery.name, bourbon.tags());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::HeaderMode;
pub use parser::{Column, RawRow};
pub use types::{
    BourbonId,
    BourbonRecord,
    Catalog,
    DistilleryInfo,
    FlavorAttribute,
    FlavorProfile,
    TagSet,
    TAG_THRESHOLD,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();

        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.get(1).is_none());
        assert!(catalog.id_range().is_none());
        assert!(catalog.distillery_names().is_empty());
    }

    #[test]
    fn test_flavor_attribute_names_round_trip() {
        for attr in FlavorAttribute::ALL {
            assert_eq!(FlavorAttribute::from_name(attr.name()), Some(attr));
        }
        assert_eq!(FlavorAttribute::from_name("charred oak"), Some(FlavorAttribute::CharredOak));
        assert_eq!(FlavorAttribute::from_name("Smoky"), None);
    }

    #[test]
    fn test_average_profile() {
        let a = FlavorProfile::from_pairs([(FlavorAttribute::Peaty, 4.0), (FlavorAttribute::Woody, 2.0)]);
        let b = FlavorProfile::from_pairs([(FlavorAttribute::Peaty, 2.0)]);

        let avg = FlavorProfile::average([&a, &b]);
        assert_eq!(avg.get(FlavorAttribute::Peaty), 3.0);
        assert_eq!(avg.get(FlavorAttribute::Woody), 1.0);
        assert_eq!(avg.get(FlavorAttribute::Citrus), 0.0);

        let empty: [&FlavorProfile; 0] = [];
        assert_eq!(FlavorProfile::average(empty), FlavorProfile::zero());
    }

    #[test]
    fn test_rms_distance() {
        let zero = FlavorProfile::zero();
        assert_eq!(zero.rms_distance(&zero), 0.0);

        // Every attribute off by 2 gives an RMS of exactly 2
        let twos = FlavorProfile::from_values([2.0; FlavorAttribute::COUNT]);
        assert!((twos.rms_distance(&zero) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_profile_serializes_by_column_name() {
        let profile = FlavorProfile::from_pairs([(FlavorAttribute::CharredOak, 4.0)]);
        let json = serde_json::to_value(profile).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), FlavorAttribute::COUNT);
        assert_eq!(json["Charred Oak"], 4.0);
        assert_eq!(json["Cereal"], 0.0);
    }

    #[test]
    fn test_distillery_serializes_camel_case() {
        let info = DistilleryInfo {
            name: "Angel's Envy".to_string(),
            address: "500 E Main St, Louisville, KY".to_string(),
            website: String::new(),
            amenities: vec!["Tours".to_string()],
            military_discount: true,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["militaryDiscount"], true);
        assert_eq!(json["amenities"][0], "Tours");
    }
}
