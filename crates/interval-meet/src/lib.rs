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

//! Intersection of disjoint interval collections with nearest-point queries.
//!
//! The caller supplies an ordered sequence of [`IntervalSet`]s, each a sorted
//! collection of pairwise-disjoint intervals. [`Intersection`] folds them into
//! the single collection that is their common refinement and answers
//! `find_closest` queries against it. Construction is a one-shot batch
//! computation; the result is read-only afterwards.

pub use interval_meet_core::bound::{LowerBound, UpperBound};
pub use interval_meet_core::interval::{Interval, IntervalError};
pub use interval_meet_core::Scalar;

pub mod intersect;
pub mod set;

pub use intersect::{Intersection, IntersectionError};
pub use set::IntervalSet;
