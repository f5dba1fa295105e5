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

//! An immutable interval with independently open, closed or unbounded ends.
//!
//! Invariants (checked at construction, relied on everywhere else):
//!    - the lower bound does not exceed the upper bound
//!    - equal finite bounds are only allowed when both are closed (a point)
//!    - bound values are comparable; NaN-like values never get in

use crate::bound::{LowerBound, UpperBound};
use std::cmp::Ordering;
use std::fmt;

/// A contiguous range over an ordered numeric domain.
///
/// Each side is independently closed, open or unbounded. Empty intervals
/// cannot be constructed; every `Interval` value contains at least one point.
///
/// # Examples
///
/// ```
/// use interval_meet_core::interval::Interval;
///
/// let iv = Interval::open_closed(3.0, 5.0).unwrap();
/// assert!(!iv.contains(3.0));
/// assert!(iv.contains(5.0));
/// assert_eq!(format!("{}", iv), "(3, 5]");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: LowerBound<T>,
    upper: UpperBound<T>,
}

/// Errors raised when an interval fails validation at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntervalError<T> {
    /// A bound value does not compare to itself (NaN or similar).
    NotComparable,
    /// The bounds admit no point at all.
    Empty {
        lower: LowerBound<T>,
        upper: UpperBound<T>,
    },
}

impl<T: fmt::Display> fmt::Display for IntervalError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalError::NotComparable => {
                write!(f, "interval bound value is not comparable (NaN?)")
            }
            IntervalError::Empty { lower, upper } => {
                write!(f, "interval {}, {} is empty", lower, upper)
            }
        }
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for IntervalError<T> {}

impl<T> Interval<T>
where
    T: PartialOrd + Copy,
{
    /// Creates an interval from explicit bounds.
    ///
    /// Rejects bounds whose value does not compare to itself (such as NaN)
    /// with [`IntervalError::NotComparable`], and bound pairs that admit no
    /// point with [`IntervalError::Empty`]. Equal finite bounds are only
    /// valid when both sides are closed, which yields a single point.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_meet_core::bound::{LowerBound, UpperBound};
    /// use interval_meet_core::interval::Interval;
    ///
    /// let iv = Interval::new(LowerBound::Included(2.0), UpperBound::Unbounded).unwrap();
    /// assert!(iv.contains(1e12));
    ///
    /// assert!(Interval::new(LowerBound::Excluded(2.0), UpperBound::Included(2.0)).is_err());
    /// assert!(Interval::new(LowerBound::Included(f64::NAN), UpperBound::Included(1.0)).is_err());
    /// ```
    pub fn new(lower: LowerBound<T>, upper: UpperBound<T>) -> Result<Self, IntervalError<T>> {
        let comparable = |v: &T| v.partial_cmp(v).is_some();
        if !lower.value().as_ref().map_or(true, comparable)
            || !upper.value().as_ref().map_or(true, comparable)
        {
            return Err(IntervalError::NotComparable);
        }
        if !lower.spans_to(&upper) {
            return Err(IntervalError::Empty { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// `[a, b]`
    #[inline]
    pub fn closed(a: T, b: T) -> Result<Self, IntervalError<T>> {
        Self::new(LowerBound::Included(a), UpperBound::Included(b))
    }

    /// `(a, b)`
    #[inline]
    pub fn open(a: T, b: T) -> Result<Self, IntervalError<T>> {
        Self::new(LowerBound::Excluded(a), UpperBound::Excluded(b))
    }

    /// `(a, b]`
    #[inline]
    pub fn open_closed(a: T, b: T) -> Result<Self, IntervalError<T>> {
        Self::new(LowerBound::Excluded(a), UpperBound::Included(b))
    }

    /// `[a, b)`
    #[inline]
    pub fn closed_open(a: T, b: T) -> Result<Self, IntervalError<T>> {
        Self::new(LowerBound::Included(a), UpperBound::Excluded(b))
    }

    /// `(-∞, b]`
    #[inline]
    pub fn at_most(b: T) -> Result<Self, IntervalError<T>> {
        Self::new(LowerBound::Unbounded, UpperBound::Included(b))
    }

    /// `(-∞, b)`
    #[inline]
    pub fn less_than(b: T) -> Result<Self, IntervalError<T>> {
        Self::new(LowerBound::Unbounded, UpperBound::Excluded(b))
    }

    /// `[a, +∞)`
    #[inline]
    pub fn at_least(a: T) -> Result<Self, IntervalError<T>> {
        Self::new(LowerBound::Included(a), UpperBound::Unbounded)
    }

    /// `(a, +∞)`
    #[inline]
    pub fn greater_than(a: T) -> Result<Self, IntervalError<T>> {
        Self::new(LowerBound::Excluded(a), UpperBound::Unbounded)
    }

    /// `[p, p]`, the degenerate single-point interval.
    #[inline]
    pub fn singleton(p: T) -> Result<Self, IntervalError<T>> {
        Self::closed(p, p)
    }

    /// `(-∞, +∞)`, the whole line.
    #[inline]
    pub fn full() -> Self {
        Self {
            lower: LowerBound::Unbounded,
            upper: UpperBound::Unbounded,
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub fn lower(&self) -> LowerBound<T> {
        self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub fn upper(&self) -> UpperBound<T> {
        self.upper
    }

    /// Returns `true` if the point lies inside the interval, honoring the
    /// closedness of each side.
    #[inline]
    pub fn contains(&self, point: T) -> bool {
        self.lower.admits(point) && self.upper.admits(point)
    }

    /// Returns the overlap of two intervals, or `None` if they are disjoint.
    ///
    /// The result takes the greater lower bound and the lesser upper bound;
    /// on equal values the more restrictive (open) side wins, so
    /// `[3, 8] ∩ (3, 5]` is `(3, 5]`.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let lower = match self.lower.cmp_lower(&other.lower) {
            Ordering::Less => other.lower,
            _ => self.lower,
        };
        let upper = match self.upper.cmp_upper(&other.upper) {
            Ordering::Greater => other.upper,
            _ => self.upper,
        };
        lower.spans_to(&upper).then_some(Self { lower, upper })
    }

    /// Returns the union of two intervals if they overlap or abut, `None`
    /// when a gap would remain between them.
    ///
    /// Abutting means the endpoints carry the same value and at least one of
    /// them is closed: `(3, 5]` and `[5, 8]` merge into `(3, 8]`, while
    /// `(3, 5)` and `(5, 8)` leave the point `5` uncovered and do not.
    #[inline]
    pub fn union(&self, other: &Self) -> Option<Self> {
        let connected = self.intersection(other).is_some()
            || self.upper.meets(&other.lower)
            || other.upper.meets(&self.lower);
        if !connected {
            return None;
        }
        let lower = match self.lower.cmp_lower(&other.lower) {
            Ordering::Greater => other.lower,
            _ => self.lower,
        };
        let upper = match self.upper.cmp_upper(&other.upper) {
            Ordering::Less => other.upper,
            _ => self.upper,
        };
        Some(Self { lower, upper })
    }

    /// Returns `true` if every point of `self` lies strictly below every
    /// point of `other`, i.e. the two intervals share no point.
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool {
        !other.lower.spans_to(&self.upper)
    }

    /// Total order over intervals: lower bound first, upper bound as the
    /// tie-break.
    ///
    /// Over a disjoint collection no two members share a lower bound, so the
    /// tie-break only matters when comparing a member against a degenerate
    /// singleton probe. That comparison is what makes the collection's
    /// floor/ceiling lookups work; it is an ordering device, not a geometric
    /// nearest-neighbor measure.
    #[inline]
    pub fn cmp_bounds(&self, other: &Self) -> Ordering {
        self.lower
            .cmp_lower(&other.lower)
            .then_with(|| self.upper.cmp_upper(&other.upper))
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_ordinary_bounds() {
        let iv = Interval::closed(2.0, 10.0).unwrap();
        assert_eq!(iv.lower(), LowerBound::Included(2.0));
        assert_eq!(iv.upper(), UpperBound::Included(10.0));
    }

    #[test]
    fn test_new_rejects_reversed_bounds() {
        assert_eq!(
            Interval::closed(3.0, 2.0),
            Err(IntervalError::Empty {
                lower: LowerBound::Included(3.0),
                upper: UpperBound::Included(2.0),
            })
        );
    }

    #[test]
    fn test_new_rejects_equal_bounds_unless_both_closed() {
        assert!(Interval::singleton(4.0).is_ok());
        assert!(Interval::open(4.0, 4.0).is_err());
        assert!(Interval::open_closed(4.0, 4.0).is_err());
        assert!(Interval::closed_open(4.0, 4.0).is_err());
    }

    #[test]
    fn test_new_rejects_nan() {
        assert_eq!(
            Interval::closed(f64::NAN, 1.0),
            Err(IntervalError::NotComparable)
        );
        assert_eq!(
            Interval::at_most(f64::NAN),
            Err(IntervalError::NotComparable)
        );
    }

    #[test]
    fn test_unbounded_constructors() {
        assert!(Interval::at_most(1.0).unwrap().contains(-1e300));
        assert!(Interval::at_least(16.0).unwrap().contains(1e300));
        assert!(!Interval::greater_than(2.0).unwrap().contains(2.0));
        assert!(!Interval::less_than(2.0).unwrap().contains(2.0));
        assert!(Interval::<f64>::full().contains(0.0));
    }

    #[test]
    fn test_contains_respects_closedness() {
        let iv = Interval::open_closed(3.0, 5.0).unwrap();
        assert!(!iv.contains(3.0));
        assert!(iv.contains(3.08));
        assert!(iv.contains(5.0));
        assert!(!iv.contains(5.1));
    }

    #[test]
    fn test_contains_is_false_for_nan_point() {
        let iv = Interval::closed(0.0, 1.0).unwrap();
        assert!(!iv.contains(f64::NAN));
    }

    #[test]
    fn test_intersection_overlap() {
        let a = Interval::closed(2.0, 10.0).unwrap();
        let b = Interval::open_closed(3.0, 20.0).unwrap();
        assert_eq!(a.intersection(&b), Some(Interval::open_closed(3.0, 10.0).unwrap()));
    }

    #[test]
    fn test_intersection_prefers_restrictive_closedness_on_ties() {
        let a = Interval::closed(3.0, 8.0).unwrap();
        let b = Interval::open_closed(3.0, 8.0).unwrap();
        assert_eq!(a.intersection(&b), Some(b));
        let c = Interval::closed_open(3.0, 8.0).unwrap();
        assert_eq!(a.intersection(&c), Some(c));
    }

    #[test]
    fn test_intersection_at_single_shared_point() {
        let a = Interval::closed(0.0, 5.0).unwrap();
        let b = Interval::closed(5.0, 9.0).unwrap();
        assert_eq!(a.intersection(&b), Some(Interval::singleton(5.0).unwrap()));
    }

    #[test]
    fn test_intersection_none_when_shared_point_is_open() {
        let a = Interval::closed_open(0.0, 5.0).unwrap();
        let b = Interval::closed(5.0, 9.0).unwrap();
        assert_eq!(a.intersection(&b), None);
        let c = Interval::closed(0.0, 5.0).unwrap();
        let d = Interval::open_closed(5.0, 9.0).unwrap();
        assert_eq!(c.intersection(&d), None);
    }

    #[test]
    fn test_intersection_none_when_disjoint() {
        let a = Interval::closed(0.0, 1.0).unwrap();
        let b = Interval::closed(2.0, 3.0).unwrap();
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_intersection_with_unbounded_side() {
        let a = Interval::at_most(1.0).unwrap();
        let b = Interval::closed(-18.0, -15.0).unwrap();
        assert_eq!(a.intersection(&b), Some(b));
    }

    #[test]
    fn test_union_of_overlapping() {
        let a = Interval::closed(1.0, 5.0).unwrap();
        let b = Interval::closed(3.0, 8.0).unwrap();
        assert_eq!(a.union(&b), Some(Interval::closed(1.0, 8.0).unwrap()));
        assert_eq!(b.union(&a), Some(Interval::closed(1.0, 8.0).unwrap()));
    }

    #[test]
    fn test_union_of_abutting_merges_across_the_seam() {
        let a = Interval::open_closed(3.0, 5.0).unwrap();
        let b = Interval::closed(5.0, 8.0).unwrap();
        assert_eq!(a.union(&b), Some(Interval::open_closed(3.0, 8.0).unwrap()));
    }

    #[test]
    fn test_union_none_when_gap_remains() {
        let a = Interval::open(1.0, 5.0).unwrap();
        let b = Interval::open(5.0, 8.0).unwrap();
        assert_eq!(a.union(&b), None);
        let c = Interval::closed(0.0, 1.0).unwrap();
        let d = Interval::closed(2.0, 3.0).unwrap();
        assert_eq!(c.union(&d), None);
    }

    #[test]
    fn test_precedes_means_no_shared_point() {
        let a = Interval::closed(0.0, 1.0).unwrap();
        let b = Interval::closed(2.0, 3.0).unwrap();
        assert!(a.precedes(&b));
        assert!(!b.precedes(&a));
        let touching = Interval::closed(1.0, 2.0).unwrap();
        assert!(!a.precedes(&touching));
        let open_touch = Interval::open(1.0, 2.0).unwrap();
        assert!(a.precedes(&open_touch));
    }

    #[test]
    fn test_cmp_bounds_orders_by_lower_then_upper() {
        let a = Interval::closed(0.0, 10.0).unwrap();
        let b = Interval::closed(2.0, 3.0).unwrap();
        assert_eq!(a.cmp_bounds(&b), Ordering::Less);

        let probe = Interval::singleton(0.0).unwrap();
        assert_eq!(a.cmp_bounds(&probe), Ordering::Greater);
        assert_eq!(probe.cmp_bounds(&a), Ordering::Less);
    }

    #[test]
    fn test_cmp_bounds_open_lower_sorts_after_closed() {
        let open = Interval::open_closed(3.0, 5.0).unwrap();
        let probe = Interval::singleton(3.0).unwrap();
        assert_eq!(open.cmp_bounds(&probe), Ordering::Greater);
    }

    #[test]
    fn test_display_notation() {
        assert_eq!(format!("{}", Interval::closed(2.0, 10.0).unwrap()), "[2, 10]");
        assert_eq!(format!("{}", Interval::open_closed(3.0, 5.0).unwrap()), "(3, 5]");
        assert_eq!(format!("{}", Interval::at_most(1.0).unwrap()), "(-∞, 1]");
        assert_eq!(format!("{}", Interval::at_least(16.0).unwrap()), "[16, +∞)");
        assert_eq!(format!("{}", Interval::<f64>::full()), "(-∞, +∞)");
    }
}
