// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed intervals on an edge's parameter line.

use smallvec::SmallVec;

use crate::tolerance::MIN_GAP_LENGTH;

/// Closed sub-interval `[start, end]` of `[0, 1]`.
///
/// Always non-degenerate: `end - start > MIN_GAP_LENGTH`. Constructors return
/// `None` rather than build a zero-length, inverted or out-of-range segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: f64,
    end: f64,
}

impl Segment {
    /// The whole parameter range.
    pub const FULL: Segment = Segment {
        start: 0.0,
        end: 1.0,
    };

    /// Creates a segment, or `None` if it would be degenerate or leave `[0, 1]`.
    pub fn new(start: f64, end: f64) -> Option<Self> {
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) {
            return None;
        }
        if end - start <= MIN_GAP_LENGTH {
            return None;
        }
        Some(Self { start, end })
    }

    /// Like [`Segment::new`], but clamps both ends into `[0, 1]` first.
    pub fn clamped(start: f64, end: f64) -> Option<Self> {
        Self::new(start.clamp(0.0, 1.0), end.clamp(0.0, 1.0))
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Overlap of two segments.
    pub fn intersect(&self, other: &Segment) -> Option<Segment> {
        Segment::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// `self \ other`: zero, one or two pieces, in ascending order.
    pub fn subtract(&self, other: &Segment) -> SmallVec<[Segment; 2]> {
        let mut pieces = SmallVec::new();
        if let Some(left) = Segment::new(self.start, self.end.min(other.start)) {
            pieces.push(left);
        }
        if let Some(right) = Segment::new(self.start.max(other.end), self.end) {
            pieces.push(right);
        }
        pieces
    }
}

/// Subtracts `cut` from a sorted, pairwise-disjoint list, keeping it sorted
/// and disjoint.
pub fn subtract_from(gaps: &[Segment], cut: &Segment) -> SmallVec<[Segment; 2]> {
    gaps.iter().flat_map(|gap| gap.subtract(cut)).collect()
}

/// Sorts segments and merges overlapping or touching ones.
pub fn normalize(mut segments: Vec<Segment>) -> SmallVec<[Segment; 2]> {
    segments.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut merged: SmallVec<[Segment; 2]> = SmallVec::new();
    for seg in segments {
        match merged.last_mut() {
            Some(last) if seg.start <= last.end => last.end = last.end.max(seg.end),
            _ => merged.push(seg),
        }
    }
    merged
}
