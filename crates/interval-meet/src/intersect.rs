// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! N-ary intersection of disjoint interval collections.
//!
//! The reducer folds the input collections left to right: at each step the
//! running collection is restricted to every member of the next input and
//! the clipped pieces are unioned back together. Both sides of each step are
//! internally disjoint and sorted, so the per-member restriction reassembles
//! the disjoint intersection without a separate line-sweep merge.

use crate::set::IntervalSet;
use interval_meet_core::interval::Interval;
use interval_meet_core::Scalar;
use std::fmt;
use tracing::{debug, trace};

/// The intersection of a sequence of disjoint interval collections.
///
/// Built once from the full input list; read-only afterwards. Queries read
/// the final sorted collection directly.
///
/// # Examples
///
/// ```
/// use interval_meet::{Intersection, Interval, IntervalSet};
///
/// let a = IntervalSet::from_intervals(vec![
///     Interval::at_most(1.0).unwrap(),
///     Interval::at_least(2.0).unwrap(),
/// ]);
/// let b = IntervalSet::from_intervals(vec![
///     Interval::closed(0.0, 3.0).unwrap(),
///     Interval::at_least(5.0).unwrap(),
/// ]);
///
/// let meet = Intersection::new(&[a, b]).unwrap();
/// assert_eq!(meet.sub_sets(), vec![
///     Interval::closed(0.0, 1.0).unwrap(),
///     Interval::closed(2.0, 3.0).unwrap(),
///     Interval::at_least(5.0).unwrap(),
/// ]);
/// assert_eq!(meet.find_closest(3.5), Some(3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<T> {
    set: IntervalSet<T>,
}

/// Errors raised when constructing an [`Intersection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionError {
    /// The input sequence of collections was empty.
    NoCollections,
}

impl fmt::Display for IntersectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntersectionError::NoCollections => {
                write!(f, "no interval collections were supplied")
            }
        }
    }
}

impl std::error::Error for IntersectionError {}

impl<T: Scalar> Intersection<T> {
    /// Folds the given collections into their intersection.
    ///
    /// The fold runs left to right; each step costs `O(|running| + |Sᵢ|)`
    /// and an empty or disjoint input empties the running collection
    /// naturally, with no special-casing. An empty input *sequence* is a
    /// usage error and is rejected.
    pub fn new(collections: &[IntervalSet<T>]) -> Result<Self, IntersectionError> {
        let (first, rest) = collections
            .split_first()
            .ok_or(IntersectionError::NoCollections)?;
        debug!(
            collections = collections.len(),
            "intersecting interval collections"
        );

        let mut running = first.clone();
        for (step, next_input) in rest.iter().enumerate() {
            let mut next = IntervalSet::with_capacity(running.len());
            for member in next_input.iter() {
                next.extend_from_set(&running.restricted(member));
            }
            trace!(
                step = step + 1,
                members = next_input.len(),
                intervals = next.len(),
                "fold step complete"
            );
            running = next;
        }

        debug!(intervals = running.len(), "intersection complete");
        Ok(Self { set: running })
    }

    /// Returns a snapshot copy of the intersection, ascending by the
    /// interval ordering.
    #[inline]
    pub fn sub_sets(&self) -> Vec<Interval<T>> {
        self.set.as_slice().to_vec()
    }

    /// Returns the intersection as a borrowed slice, sorted and disjoint.
    #[inline]
    pub fn as_slice(&self) -> &[Interval<T>] {
        self.set.as_slice()
    }

    /// Returns the closest point that lies inside some interval of the
    /// intersection, or `None` if the intersection is empty.
    ///
    /// A point inside an interval maps to itself. A point in a gap maps to
    /// the nearer of the two surrounding endpoints, with exact-distance ties
    /// resolved towards the higher interval. The neighbours are located with
    /// ordering-based floor/ceiling lookups against the singleton
    /// `[point, point]`; because the collection is sorted and disjoint they
    /// are also the geometric neighbours. An unbounded endpoint never enters
    /// the distance arithmetic: a neighbour reaching past the query on an
    /// unbounded side necessarily contains it and is handled first.
    pub fn find_closest(&self, point: T) -> Option<T> {
        if self.set.is_empty() {
            return None;
        }
        let lower = self.set.floor(point);
        let higher = self.set.ceiling(point);

        if lower.is_some_and(|iv| iv.contains(point))
            || higher.is_some_and(|iv| iv.contains(point))
        {
            return Some(point);
        }

        match (lower, higher) {
            (Some(below), None) => below.upper().value(),
            (None, Some(above)) => above.lower().value(),
            (Some(below), Some(above)) => {
                let nearest_below = below
                    .upper()
                    .value()
                    .expect("floor not containing the query has a finite upper bound");
                let nearest_above = above
                    .lower()
                    .value()
                    .expect("ceiling of a singleton probe has a finite lower bound");
                if distance(point, nearest_below) < distance(point, nearest_above) {
                    Some(nearest_below)
                } else {
                    Some(nearest_above)
                }
            }
            // Non-comparable query point; both lookups declined.
            (None, None) => None,
        }
    }

    /// Merges one extra interval into the stored collection.
    ///
    /// Construction-time seam for tests; not part of the steady-state
    /// contract.
    #[cfg(test)]
    pub(crate) fn add(&mut self, interval: Interval<T>) {
        self.set.insert(interval);
    }
}

#[inline]
fn distance<T: Scalar>(a: T, b: T) -> T {
    if a < b {
        b - a
    } else {
        a - b
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Intersection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Intersection{}", self.set)
    }
}
