// permissions.rs
//
// The set of green lights at a junction and the routes they permit. The green
// lights are the only state that ever changes; routes are projected from them
// on demand and never stored.

use crate::data_structures::Route;
use crate::error::{JunctionError, Result};
use crate::global_variables::MIN_WAYS;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Green lights keyed by way. An offset `k` at way `a` permits `a -> (a + k) % n_ways`.
///
/// Serialized as a plain JSON object, e.g. `{"0": [1, 2], "3": [2]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    lights: BTreeMap<usize, BTreeSet<usize>>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(way, offsets)` entries. Repeated offsets collapse.
    pub fn from_lights<I, L>(lights: I) -> Self
    where
        I: IntoIterator<Item = (usize, L)>,
        L: IntoIterator<Item = usize>,
    {
        let mut set = Self::new();
        for (approach, offsets) in lights {
            let entry = set.lights.entry(approach).or_default();
            entry.extend(offsets);
        }
        set
    }

    pub fn lights(&self) -> &BTreeMap<usize, BTreeSet<usize>> {
        &self.lights
    }

    pub fn offsets(&self, approach: usize) -> Option<&BTreeSet<usize>> {
        self.lights.get(&approach)
    }

    /// Total number of green lights across all ways.
    pub fn len(&self) -> usize {
        self.lights.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `max(way) + 1`. Undercounts a junction whose highest ways have no green lights.
    pub fn infer_n_ways(&self) -> Result<usize> {
        self.lights
            .keys()
            .next_back()
            .ok_or(JunctionError::EmptyPermissions)
            .and_then(|&max| {
                max.checked_add(1).ok_or(JunctionError::InvalidApproach {
                    approach: max,
                    n_ways: max,
                })
            })
    }

    /// Uses `n_ways` when given, otherwise infers it, and rejects junctions under two ways.
    pub fn resolve_n_ways(&self, n_ways: Option<usize>) -> Result<usize> {
        let n_ways = match n_ways {
            Some(n) => n,
            None => self.infer_n_ways()?,
        };
        if n_ways < MIN_WAYS {
            return Err(JunctionError::JunctionTooSmall { n_ways });
        }
        Ok(n_ways)
    }

    /// Checks every way is in `0..n_ways` and every offset in `1..n_ways`.
    pub fn validate(&self, n_ways: usize) -> Result<()> {
        if n_ways < MIN_WAYS {
            return Err(JunctionError::JunctionTooSmall { n_ways });
        }
        for (&approach, offsets) in &self.lights {
            if approach >= n_ways {
                return Err(JunctionError::InvalidApproach { approach, n_ways });
            }
            if let Some(&offset) = offsets.iter().find(|&&k| k == 0 || k >= n_ways) {
                return Err(JunctionError::InvalidOffset {
                    approach,
                    offset,
                    n_ways,
                });
            }
        }
        Ok(())
    }

    /// Every permitted route, deduplicated and sorted by `(start, end)`.
    pub fn routes(&self, n_ways: usize) -> Result<Vec<Route>> {
        self.validate(n_ways)?;
        let routes: BTreeSet<Route> = self
            .lights
            .iter()
            .flat_map(|(&approach, offsets)| {
                offsets
                    .iter()
                    .map(move |&offset| Route::new(approach, (approach + offset) % n_ways))
            })
            .collect();
        Ok(routes.into_iter().collect())
    }

    /// Rejects self loops and routes touching a way outside `0..n_ways`.
    pub fn check_route(route: &Route, n_ways: usize) -> Result<()> {
        if route.start == route.end {
            return Err(JunctionError::InvalidRoute(*route));
        }
        for approach in [route.start, route.end] {
            if approach >= n_ways {
                return Err(JunctionError::InvalidApproach { approach, n_ways });
            }
        }
        Ok(())
    }

    pub fn contains_route(&self, route: &Route, n_ways: usize) -> bool {
        Self::check_route(route, n_ways).is_ok()
            && self
                .lights
                .get(&route.start)
                .is_some_and(|offsets| offsets.contains(&route.offset(n_ways)))
    }

    /// Permits `route`, translating it to an offset at its start way.
    pub fn add_route(&mut self, route: Route, n_ways: usize) -> Result<()> {
        Self::check_route(&route, n_ways)?;
        if self.contains_route(&route, n_ways) {
            return Err(JunctionError::AlreadyPermitted(route));
        }
        self.lights
            .entry(route.start)
            .or_default()
            .insert(route.offset(n_ways));
        Ok(())
    }

    /// Copy of this set with `route` also permitted. Existing routes are left as is.
    pub fn with_route(&self, route: Route, n_ways: usize) -> Self {
        let mut hypothetical = self.clone();
        hypothetical
            .lights
            .entry(route.start)
            .or_default()
            .insert(route.offset(n_ways));
        hypothetical
    }

    /// Withdraws the green light `offset` at `approach`. The way stays keyed even
    /// when its last light goes, so an inferred junction size does not shrink.
    pub fn remove_offset(&mut self, approach: usize, offset: usize) -> Result<()> {
        let removed = self
            .lights
            .get_mut(&approach)
            .is_some_and(|offsets| offsets.remove(&offset));
        if removed {
            Ok(())
        } else {
            Err(JunctionError::NotFound { approach, offset })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_way() -> PermissionSet {
        PermissionSet::from_lights([
            (0, vec![1, 2]),
            (1, vec![3]),
            (2, vec![1, 3]),
            (3, vec![2, 3]),
        ])
    }

    #[test]
    fn routes_are_sorted_and_resolved_mod_n() {
        let routes = four_way().routes(4).unwrap();
        let expected: Vec<Route> = [(0, 1), (0, 2), (1, 0), (2, 1), (2, 3), (3, 1), (3, 2)]
            .into_iter()
            .map(Route::from)
            .collect();
        assert_eq!(routes, expected);
    }

    #[test]
    fn rejects_way_outside_junction() {
        let set = PermissionSet::from_lights([(4, vec![1])]);
        assert_eq!(
            set.routes(4),
            Err(JunctionError::InvalidApproach {
                approach: 4,
                n_ways: 4
            })
        );
    }

    #[test]
    fn rejects_zero_and_full_turn_offsets() {
        for offset in [0, 4, 9] {
            let set = PermissionSet::from_lights([(1, vec![offset])]);
            let err = set.routes(4).unwrap_err();
            assert!(err.is_invalid_input());
            assert_eq!(
                err,
                JunctionError::InvalidOffset {
                    approach: 1,
                    offset,
                    n_ways: 4
                }
            );
        }
    }

    #[test]
    fn infers_size_from_highest_way() {
        assert_eq!(four_way().infer_n_ways(), Ok(4));
        let sparse = PermissionSet::from_lights([(0, vec![2]), (2, Vec::new())]);
        assert_eq!(sparse.infer_n_ways(), Ok(3));
        assert_eq!(
            PermissionSet::new().infer_n_ways(),
            Err(JunctionError::EmptyPermissions)
        );
        assert_eq!(
            PermissionSet::from_lights([(0, vec![1])]).resolve_n_ways(None),
            Err(JunctionError::JunctionTooSmall { n_ways: 1 })
        );
    }

    #[test]
    fn add_route_translates_to_offset() {
        let mut set = PermissionSet::new();
        set.add_route(Route::new(3, 1), 4).unwrap();
        assert_eq!(set.offsets(3).map(|o| o.contains(&2)), Some(true));
        assert!(set.contains_route(&Route::new(3, 1), 4));
        assert_eq!(
            set.add_route(Route::new(3, 1), 4),
            Err(JunctionError::AlreadyPermitted(Route::new(3, 1)))
        );
        assert_eq!(
            set.add_route(Route::new(2, 2), 4),
            Err(JunctionError::InvalidRoute(Route::new(2, 2)))
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn ways_outside_the_junction_are_not_permitted_routes() {
        let mut set = PermissionSet::from_lights([(0, vec![3])]);
        assert!(!set.contains_route(&Route::new(0, 7), 4));
        assert!(!set.contains_route(&Route::new(0, usize::MAX), 4));
        assert_eq!(
            set.add_route(Route::new(0, usize::MAX), 4),
            Err(JunctionError::InvalidApproach {
                approach: usize::MAX,
                n_ways: 4
            })
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn highest_possible_way_cannot_size_a_junction() {
        let set = PermissionSet::from_lights([(usize::MAX, vec![1])]);
        assert_eq!(
            set.infer_n_ways(),
            Err(JunctionError::InvalidApproach {
                approach: usize::MAX,
                n_ways: usize::MAX
            })
        );
        let json = format!(r#"{{"{}": [1]}}"#, usize::MAX);
        let parsed: PermissionSet = serde_json::from_str(&json).unwrap();
        assert!(parsed.resolve_n_ways(None).unwrap_err().is_invalid_input());
    }

    #[test]
    fn remove_missing_offset_leaves_set_unchanged() {
        let mut set = four_way();
        let before = set.clone();
        assert_eq!(
            set.remove_offset(1, 1),
            Err(JunctionError::NotFound {
                approach: 1,
                offset: 1
            })
        );
        assert_eq!(
            set.remove_offset(7, 1),
            Err(JunctionError::NotFound {
                approach: 7,
                offset: 1
            })
        );
        assert_eq!(set, before);

        set.remove_offset(2, 3).unwrap();
        assert!(!set.contains_route(&Route::new(2, 1), 4));
        assert_eq!(set.len(), before.len() - 1);
    }

    #[test]
    fn deserializes_from_json_object() {
        let set: PermissionSet = serde_json::from_str(r#"{"0": [1, 2], "3": [2, 3]}"#).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.infer_n_ways(), Ok(4));
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"0":[1,2],"3":[2,3]}"#);
    }
}
