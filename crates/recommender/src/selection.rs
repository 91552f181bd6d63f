//! The typed form of a recommendation request.

use catalog::BourbonId;
use std::collections::HashSet;

/// Set of bourbon ids a user picked.
///
/// The boundary layer validates the raw body into a list of integers; this
/// type only narrows those integers to ids. Values that cannot be an id
/// (zero, negative, beyond `u32`) can never match a record and are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<BourbonId>,
    lookup: HashSet<BourbonId>,
}

impl Selection {
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut selection = Self::default();
        for id in ids {
            let Ok(id) = BourbonId::try_from(id) else {
                continue;
            };
            if id > 0 && selection.lookup.insert(id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    pub fn contains(&self, id: BourbonId) -> bool {
        self.lookup.contains(&id)
    }

    /// Distinct ids in request order
    pub fn ids(&self) -> &[BourbonId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<BourbonId> for Selection {
    fn from_iter<I: IntoIterator<Item = BourbonId>>(iter: I) -> Self {
        Self::from_ids(iter.into_iter().map(i64::from))
    }
}
