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

//! IntervalSet: sorted, disjoint interval collection with merge-on-insert.
//!
//! Invariants (always held):
//!    - members are sorted by the interval ordering (lower, then upper bound)
//!    - members are pairwise disjoint and never abut; an insert that
//!      overlaps or touches existing members coalesces the whole run
//!
//! Complexity:
//!    - insert: `O(log n)` to locate, `O(n)` worst-case to splice
//!    - restricted: `O(log n + k)` where `k` is the overlap width
//!    - floor/ceiling: `O(log n)`

use interval_meet_core::interval::Interval;
use interval_meet_core::Scalar;
use std::cmp::Ordering;
use std::fmt;

/// A collection of sorted, pairwise-disjoint intervals.
///
/// `IntervalSet` maintains its members in ascending interval order and
/// merges on insert: a new interval that overlaps or abuts existing members
/// replaces the whole touched run with its union, so iterating always yields
/// disjoint, non-touching intervals in increasing order.
///
/// Backed by a sorted `Vec`; the structure is built once from a batch of
/// inputs and then queried, so binary search over a flat array beats a
/// balanced tree here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntervalSet<T> {
    intervals: Vec<Interval<T>>,
}

impl<T: Scalar> IntervalSet<T> {
    /// Creates a new, empty `IntervalSet`.
    #[inline]
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Creates a new, empty `IntervalSet` with at least the given capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Builds a set from arbitrary intervals, sorting and coalescing them.
    ///
    /// This is the cheapest way to construct a set from a batch: one sort
    /// followed by a single merge pass.
    pub fn from_intervals(mut intervals: Vec<Interval<T>>) -> Self {
        if intervals.len() < 2 {
            return Self { intervals };
        }
        intervals.sort_by(|a, b| a.cmp_bounds(b));
        let mut merged: Vec<Interval<T>> = Vec::with_capacity(intervals.len());
        for interval in intervals {
            match merged.last_mut() {
                Some(last) => match last.union(&interval) {
                    Some(unioned) => *last = unioned,
                    None => merged.push(interval),
                },
                None => merged.push(interval),
            }
        }
        debug_assert!(Self::invariants_hold(&merged));
        Self { intervals: merged }
    }

    /// Returns the number of disjoint intervals in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set contains no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the members as a slice, sorted and disjoint.
    #[inline]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.intervals
    }

    /// Returns an iterator over the members in ascending interval order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.intervals.iter()
    }

    /// Consumes the set and returns the underlying vector.
    #[inline]
    pub fn into_intervals(self) -> Vec<Interval<T>> {
        self.intervals
    }

    /// Inserts an interval, merging it with every member it overlaps or
    /// abuts.
    ///
    /// Coalescing is transitive within one call: an insert that bridges a
    /// run of existing members collapses the entire run into one interval.
    pub fn insert(&mut self, interval: Interval<T>) {
        let mut merged = interval;
        let mut first = self
            .intervals
            .partition_point(|member| member.cmp_bounds(&merged).is_lt());

        // At most one member strictly before the insertion point can touch
        // the new interval; anything earlier is separated from it by that
        // member's own gap.
        if first > 0 {
            if let Some(unioned) = self.intervals[first - 1].union(&merged) {
                first -= 1;
                merged = unioned;
            }
        }

        let mut last = first;
        while let Some(member) = self.intervals.get(last) {
            match merged.union(member) {
                Some(unioned) => {
                    merged = unioned;
                    last += 1;
                }
                None => break,
            }
        }

        self.intervals.splice(first..last, std::iter::once(merged));
        debug_assert!(Self::invariants_hold(&self.intervals));
    }

    /// Merges every member of `other` into `self`.
    pub fn extend_from_set(&mut self, other: &Self) {
        for &interval in other.as_slice() {
            self.insert(interval);
        }
    }

    /// Returns the sub-collection `self ∩ boundary`: every member clipped to
    /// the boundary interval, members outside it dropped.
    ///
    /// The members already being disjoint, the clipped pieces are disjoint
    /// by construction and land in the output in order.
    pub fn restricted(&self, boundary: &Interval<T>) -> Self {
        let start = self
            .intervals
            .partition_point(|member| member.precedes(boundary));
        let mut out = Vec::with_capacity(4.min(self.intervals.len()));
        for member in &self.intervals[start..] {
            if boundary.precedes(member) {
                break;
            }
            if let Some(piece) = member.intersection(boundary) {
                out.push(piece);
            }
        }
        debug_assert!(Self::invariants_hold(&out));
        Self { intervals: out }
    }

    /// Returns the greatest member that is `≤` the singleton `[point, point]`
    /// under the interval ordering.
    ///
    /// This is a lookup in the ordering, not a geometric containment test:
    /// the returned member's extent may lie entirely below `point`.
    /// Returns `None` for a non-comparable (NaN) point.
    pub fn floor(&self, point: T) -> Option<&Interval<T>> {
        let probe = Interval::singleton(point).ok()?;
        let idx = self
            .intervals
            .partition_point(|member| member.cmp_bounds(&probe).is_lt());
        match self.intervals.get(idx) {
            Some(member) if member.cmp_bounds(&probe) == Ordering::Equal => Some(member),
            _ => idx.checked_sub(1).map(|i| &self.intervals[i]),
        }
    }

    /// Returns the least member that is `≥` the singleton `[point, point]`
    /// under the interval ordering.
    ///
    /// Counterpart of [`floor`](Self::floor); the same ordering caveat
    /// applies. Returns `None` for a non-comparable (NaN) point.
    pub fn ceiling(&self, point: T) -> Option<&Interval<T>> {
        let probe = Interval::singleton(point).ok()?;
        let idx = self
            .intervals
            .partition_point(|member| member.cmp_bounds(&probe).is_lt());
        self.intervals.get(idx)
    }

    /// Checks the set invariants: ascending order, no overlap, no touching.
    fn invariants_hold(intervals: &[Interval<T>]) -> bool {
        intervals.windows(2).all(|pair| {
            pair[0].cmp_bounds(&pair[1]) == Ordering::Less && pair[0].union(&pair[1]).is_none()
        })
    }
}

impl<T: Scalar> FromIterator<Interval<T>> for IntervalSet<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::from_intervals(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for IntervalSet<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<T: fmt::Display> fmt::Display for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}
