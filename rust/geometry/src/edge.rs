// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edges and their visible gaps.
//!
//! An edge starts fully visible (`gaps == [0, 1]`). Every occluding facet
//! removes the parameter intervals it covers, so the gap list only shrinks.
//! Because interval subtraction over a fixed universe commutes, the final gaps
//! do not depend on the order in which facets are applied.

use nalgebra::Point3;
use smallvec::{smallvec, SmallVec};

use crate::keys::VertexKey;
use crate::segment::{self, Segment};
use crate::vector::lerp;

/// Undirected line between two vertices with its currently visible intervals.
#[derive(Debug, Clone)]
pub struct Edge {
    pub start: VertexKey,
    pub end: VertexKey,
    beg: Point3<f64>,
    fin: Point3<f64>,
    gaps: SmallVec<[Segment; 2]>,
}

impl Edge {
    pub(crate) fn new(start: VertexKey, end: VertexKey, beg: Point3<f64>, fin: Point3<f64>) -> Self {
        Self {
            start,
            end,
            beg,
            fin,
            gaps: smallvec![Segment::FULL],
        }
    }

    /// Endpoint positions, matching `start` and `end`.
    pub fn points(&self) -> (Point3<f64>, Point3<f64>) {
        (self.beg, self.fin)
    }

    /// Point at parameter `t` along the edge.
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        lerp(&self.beg, &self.fin, t)
    }

    pub fn length(&self) -> f64 {
        (self.fin - self.beg).norm()
    }

    /// Visible intervals, sorted by start and pairwise disjoint.
    pub fn gaps(&self) -> &[Segment] {
        &self.gaps
    }

    pub fn is_hidden(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Share of the parameter range that is still visible.
    pub fn visible_fraction(&self) -> f64 {
        self.gaps.iter().map(Segment::length).sum()
    }

    /// Removes every interval in `covered` from the gaps.
    pub fn shade(&mut self, covered: &[Segment]) {
        for cut in covered {
            if self.gaps.is_empty() {
                return;
            }
            self.gaps = segment::subtract_from(&self.gaps, cut);
        }
    }

    /// Hidden intervals: the complement of the gaps in `[0, 1]`.
    pub fn hidden(&self) -> SmallVec<[Segment; 2]> {
        self.gaps
            .iter()
            .fold(smallvec![Segment::FULL], |rest: SmallVec<[Segment; 2]>, gap| {
                segment::subtract_from(&rest, gap)
            })
    }

    /// Marks the whole edge as hidden.
    pub fn clear_gaps(&mut self) {
        self.gaps.clear();
    }

    /// Replaces the gaps, sorting and merging them to keep the list disjoint.
    pub fn set_gaps(&mut self, gaps: impl IntoIterator<Item = Segment>) {
        self.gaps = segment::normalize(gaps.into_iter().collect());
    }
}
