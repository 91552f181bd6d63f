//! Core trait for the scoring strategies.
//!
//! The tasting data supports two materially different ways of ranking
//! distilleries. Both live behind this trait so the server can be
//! configured with either without knowing which one it runs.

use crate::error::Result;
use crate::recommendation::Recommendation;
use crate::selection::Selection;
use catalog::Catalog;

/// A way of ranking distilleries against a user's selection.
///
/// ## Design Note
/// - `Send + Sync` so one strategy instance serves concurrent requests
/// - Strategies are pure: same catalog and selection, same output
pub trait Strategy: Send + Sync {
    /// Returns the name of this strategy (for logging/debugging)
    fn name(&self) -> &str;

    /// Rank distilleries for `selection`, best first.
    ///
    /// # Arguments
    /// * `catalog` - The immutable catalog built at startup
    /// * `selection` - Bourbon ids the user picked
    fn recommend(&self, catalog: &Catalog, selection: &Selection) -> Result<Vec<Recommendation>>;
}
