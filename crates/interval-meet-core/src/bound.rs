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

//! Interval endpoints with independent closedness on each side.
//!
//! A bound is a small tagged enum per side rather than a sentinel infinity,
//! which keeps comparison and containment logic total. Each side has its own
//! type because the two sides order differently around the same value:
//! `[3` starts before `(3`, while `3)` ends before `3]`.

use std::cmp::Ordering;
use std::fmt;

/// The lower endpoint of an interval.
///
/// Ordering: `Unbounded` is least, and for equal values the closed bound
/// comes first (`[v` admits `v` itself, `(v` does not).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LowerBound<T> {
    /// No lower endpoint; extends to negative infinity.
    Unbounded,
    /// Closed endpoint: the value itself belongs to the interval.
    Included(T),
    /// Open endpoint: the value itself is excluded.
    Excluded(T),
}

/// The upper endpoint of an interval.
///
/// Ordering: `Unbounded` is greatest, and for equal values the open bound
/// comes first (`v)` ends before `v]`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpperBound<T> {
    /// Closed endpoint: the value itself belongs to the interval.
    Included(T),
    /// Open endpoint: the value itself is excluded.
    Excluded(T),
    /// No upper endpoint; extends to positive infinity.
    Unbounded,
}

/// Compares two endpoint values.
///
/// Callers guarantee comparability: NaN-like values are rejected when an
/// interval is constructed, so a failed comparison here is a bug.
#[inline]
pub(crate) fn cmp_values<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b)
        .expect("interval bound values must be comparable")
}

impl<T> LowerBound<T> {
    /// Returns the finite endpoint value, or `None` for `Unbounded`.
    #[inline]
    pub fn value(&self) -> Option<T>
    where
        T: Copy,
    {
        match self {
            LowerBound::Unbounded => None,
            LowerBound::Included(v) | LowerBound::Excluded(v) => Some(*v),
        }
    }

    /// Returns `true` if the endpoint value belongs to the interval.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, LowerBound::Included(_))
    }

    /// Returns `true` if the given point satisfies this lower bound.
    #[inline]
    pub fn admits(&self, point: T) -> bool
    where
        T: PartialOrd + Copy,
    {
        match self {
            LowerBound::Unbounded => true,
            LowerBound::Included(v) => point >= *v,
            LowerBound::Excluded(v) => point > *v,
        }
    }

    /// Total order over lower bounds.
    ///
    /// The greater of two lower bounds is the more restrictive one, which is
    /// why intersections take the maximum on this side.
    #[inline]
    pub fn cmp_lower(&self, other: &Self) -> Ordering
    where
        T: PartialOrd,
    {
        use LowerBound::*;
        match (self, other) {
            (Unbounded, Unbounded) => Ordering::Equal,
            (Unbounded, _) => Ordering::Less,
            (_, Unbounded) => Ordering::Greater,
            (Included(a), Included(b)) | (Excluded(a), Excluded(b)) => cmp_values(a, b),
            (Included(a), Excluded(b)) => cmp_values(a, b).then(Ordering::Less),
            (Excluded(a), Included(b)) => cmp_values(a, b).then(Ordering::Greater),
        }
    }
}

impl<T> UpperBound<T> {
    /// Returns the finite endpoint value, or `None` for `Unbounded`.
    #[inline]
    pub fn value(&self) -> Option<T>
    where
        T: Copy,
    {
        match self {
            UpperBound::Unbounded => None,
            UpperBound::Included(v) | UpperBound::Excluded(v) => Some(*v),
        }
    }

    /// Returns `true` if the endpoint value belongs to the interval.
    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, UpperBound::Included(_))
    }

    /// Returns `true` if the given point satisfies this upper bound.
    #[inline]
    pub fn admits(&self, point: T) -> bool
    where
        T: PartialOrd + Copy,
    {
        match self {
            UpperBound::Unbounded => true,
            UpperBound::Included(v) => point <= *v,
            UpperBound::Excluded(v) => point < *v,
        }
    }

    /// Total order over upper bounds.
    ///
    /// The lesser of two upper bounds is the more restrictive one, which is
    /// why intersections take the minimum on this side.
    #[inline]
    pub fn cmp_upper(&self, other: &Self) -> Ordering
    where
        T: PartialOrd,
    {
        use UpperBound::*;
        match (self, other) {
            (Unbounded, Unbounded) => Ordering::Equal,
            (Unbounded, _) => Ordering::Greater,
            (_, Unbounded) => Ordering::Less,
            (Included(a), Included(b)) | (Excluded(a), Excluded(b)) => cmp_values(a, b),
            (Included(a), Excluded(b)) => cmp_values(a, b).then(Ordering::Greater),
            (Excluded(a), Included(b)) => cmp_values(a, b).then(Ordering::Less),
        }
    }

    /// Returns `true` if this upper bound abuts the given lower bound with no
    /// gap between them.
    ///
    /// `5]` meets `(5` and `5)` meets `[5`; `5)` against `(5` leaves the
    /// point `5` uncovered and is not a meeting. Two closed endpoints at the
    /// same value overlap outright and also count.
    #[inline]
    pub fn meets(&self, lower: &LowerBound<T>) -> bool
    where
        T: PartialOrd,
    {
        match (self.value_ref(), lower.value_ref()) {
            (Some(a), Some(b)) => {
                cmp_values(a, b) == Ordering::Equal && (self.is_closed() || lower.is_closed())
            }
            _ => false,
        }
    }

    #[inline]
    fn value_ref(&self) -> Option<&T> {
        match self {
            UpperBound::Unbounded => None,
            UpperBound::Included(v) | UpperBound::Excluded(v) => Some(v),
        }
    }
}

impl<T> LowerBound<T> {
    #[inline]
    fn value_ref(&self) -> Option<&T> {
        match self {
            LowerBound::Unbounded => None,
            LowerBound::Included(v) | LowerBound::Excluded(v) => Some(v),
        }
    }

    /// Returns `true` if some point satisfies both this lower bound and the
    /// given upper bound, i.e. the pair spans a non-empty interval.
    #[inline]
    pub fn spans_to(&self, upper: &UpperBound<T>) -> bool
    where
        T: PartialOrd,
    {
        match (self.value_ref(), upper.value_ref()) {
            (None, _) | (_, None) => true,
            (Some(a), Some(b)) => match cmp_values(a, b) {
                Ordering::Less => true,
                Ordering::Equal => self.is_closed() && upper.is_closed(),
                Ordering::Greater => false,
            },
        }
    }
}

impl<T: fmt::Display> fmt::Display for LowerBound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LowerBound::Unbounded => write!(f, "(-∞"),
            LowerBound::Included(v) => write!(f, "[{}", v),
            LowerBound::Excluded(v) => write!(f, "({}", v),
        }
    }
}

impl<T: fmt::Display> fmt::Display for UpperBound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpperBound::Unbounded => write!(f, "+∞)"),
            UpperBound::Included(v) => write!(f, "{}]", v),
            UpperBound::Excluded(v) => write!(f, "{})", v),
        }
    }
}
