use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::math::Point3;

/// Total-order comparator installed on a [`PointSet`] to switch it from
/// insertion order to fully sorted order.
pub type PointOrdering = Arc<dyn Fn(&Point3, &Point3) -> Ordering + Send + Sync>;

/// A collection of unique 3D points.
///
/// Without a comparator the set keeps insertion order and deduplicates
/// by exact component bit value; no geometric tolerance is applied, so
/// two points merge only if every coordinate is bit-identical. With a
/// comparator the set is kept sorted on insert and deduplicates by
/// comparator equality, mirroring sorted-set semantics.
pub struct PointSet {
    points: Vec<Point3>,
    seen: HashSet<[u64; 3]>,
    ordering: Option<PointOrdering>,
}

fn bit_key(point: &Point3) -> [u64; 3] {
    [point.x.to_bits(), point.y.to_bits(), point.z.to_bits()]
}

impl PointSet {
    /// Creates an empty, insertion-ordered set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            seen: HashSet::new(),
            ordering: None,
        }
    }

    /// Creates an empty set kept sorted by the given comparator.
    #[must_use]
    pub fn with_ordering(ordering: PointOrdering) -> Self {
        Self {
            points: Vec::new(),
            seen: HashSet::new(),
            ordering: Some(ordering),
        }
    }

    /// Inserts a point, returning whether it was newly added.
    pub fn insert(&mut self, point: Point3) -> bool {
        match &self.ordering {
            Some(cmp) => match self.points.binary_search_by(|probe| cmp(probe, &point)) {
                Ok(_) => false,
                Err(index) => {
                    self.points.insert(index, point);
                    true
                }
            },
            None => {
                if self.seen.insert(bit_key(&point)) {
                    self.points.push(point);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Number of points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns whether the set contains the point (by the active
    /// uniqueness discipline).
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        match &self.ordering {
            Some(cmp) => self
                .points
                .binary_search_by(|probe| cmp(probe, point))
                .is_ok(),
            None => self.seen.contains(&bit_key(point)),
        }
    }

    /// The points as a slice, in container order.
    #[must_use]
    pub fn as_slice(&self) -> &[Point3] {
        &self.points
    }

    /// Iterates the points in container order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3> {
        self.points.iter()
    }

    /// The installed comparator, if any.
    #[must_use]
    pub fn ordering(&self) -> Option<&PointOrdering> {
        self.ordering.as_ref()
    }

    /// Replaces every point with `f(point)`, then restores the
    /// container discipline (dedup index, sort order) over the mapped
    /// values. Used for the world-space transform pipeline, which may
    /// collapse points (e.g. zero scale) or reorder them under a
    /// comparator.
    pub fn map_in_place<F>(&mut self, f: F)
    where
        F: Fn(&Point3) -> Point3,
    {
        let old = std::mem::take(&mut self.points);
        self.seen.clear();
        for point in &old {
            self.insert(f(point));
        }
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PointSet {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            seen: self.seen.clone(),
            ordering: self.ordering.clone(),
        }
    }
}

impl fmt::Debug for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointSet")
            .field("len", &self.points.len())
            .field("ordered", &self.ordering.is_some())
            .finish()
    }
}

impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point3;
    type IntoIter = std::slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn keeps_insertion_order() {
        let mut set = PointSet::new();
        set.insert(p(2.0, 0.0, 0.0));
        set.insert(p(1.0, 0.0, 0.0));
        set.insert(p(3.0, 0.0, 0.0));
        let xs: Vec<f64> = set.iter().map(|pt| pt.x).collect();
        assert_eq!(xs, vec![2.0, 1.0, 3.0]);
    }

    #[test]
    fn dedup_is_exact_bits() {
        let mut set = PointSet::new();
        assert!(set.insert(p(1.0, 2.0, 3.0)));
        assert!(!set.insert(p(1.0, 2.0, 3.0)));
        // One ulp away is a distinct point.
        assert!(set.insert(p(f64::from_bits(1.0_f64.to_bits() + 1), 2.0, 3.0)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn negative_zero_is_distinct_from_zero() {
        let mut set = PointSet::new();
        set.insert(p(0.0, 0.0, 0.0));
        set.insert(p(-0.0, 0.0, 0.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn comparator_sorts_on_insert() {
        let by_x: PointOrdering =
            Arc::new(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
        let mut set = PointSet::with_ordering(by_x);
        set.insert(p(2.0, 0.0, 0.0));
        set.insert(p(1.0, 0.0, 0.0));
        set.insert(p(3.0, 0.0, 0.0));
        let xs: Vec<f64> = set.iter().map(|pt| pt.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn comparator_equality_collapses() {
        let by_x: PointOrdering =
            Arc::new(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
        let mut set = PointSet::with_ordering(by_x);
        set.insert(p(1.0, 0.0, 0.0));
        // Same x, different y: equal under the comparator.
        assert!(!set.insert(p(1.0, 5.0, 0.0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn map_in_place_rebuilds_dedup() {
        let mut set = PointSet::new();
        set.insert(p(1.0, 0.0, 0.0));
        set.insert(p(2.0, 0.0, 0.0));
        // Zero scale collapses everything onto the offset.
        set.map_in_place(|_| p(5.0, 5.0, 5.0));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&p(5.0, 5.0, 5.0)));
    }
}
