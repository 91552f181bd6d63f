//! What the recommender hands back to the caller.

use catalog::{BourbonId, DistilleryInfo, FlavorProfile};
use serde::Serialize;

/// A distillery ranked by flavor similarity to the selection's average
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarDistillery {
    pub name: String,
    /// The bourbon whose profile represented this distillery
    pub bourbon: String,
    #[serde(skip)]
    pub bourbon_id: BourbonId,
    pub address: String,
    pub website: String,
    pub amenities: Vec<String>,
    pub military_discount: bool,
    /// In (0, 1]; 1 means the profile equals the selection average
    pub similarity_score: f64,
    pub flavor_profile: FlavorProfile,
}

/// One entry of a ranked recommendation list.
///
/// Serialized without a tag so each strategy keeps its own wire shape:
/// tag overlap returns bare distillery info, flavor similarity returns the
/// richer [`SimilarDistillery`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Recommendation {
    Match(DistilleryInfo),
    Similar(SimilarDistillery),
}

impl Recommendation {
    pub fn distillery_name(&self) -> &str {
        match self {
            Recommendation::Match(info) => &info.name,
            Recommendation::Similar(similar) => &similar.name,
        }
    }

    /// Similarity score, when the strategy produces one
    pub fn similarity_score(&self) -> Option<f64> {
        match self {
            Recommendation::Match(_) => None,
            Recommendation::Similar(similar) => Some(similar.similarity_score),
        }
    }
}
