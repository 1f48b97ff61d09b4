// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Edge-versus-facet occlusion under the vertical parallel projection.
//!
//! A point of an edge is hidden by a facet when it lies strictly below the
//! facet's plane and its image lies strictly inside the facet's silhouette.
//! Points on the plane or on the silhouette outline stay visible, which is
//! what keeps a facet from hiding its own edges and keeps coplanar facets
//! from hiding each other.
//!
//! The image of the edge is split at every crossing with the outline; each
//! piece is then wholly inside or wholly outside, so classifying its midpoint
//! is enough. This handles concave facets as well as convex ones.

use nalgebra::Point2;
use smallvec::SmallVec;

use crate::edge::Edge;
use crate::error::Result;
use crate::facet::{Facet, Plane};
use crate::segment::{self, Segment};
use crate::silhouette::{classify_point, outline_crossings, Containment, Rect};
use crate::tolerance::{BOUNDARY_EPSILON, MIN_GAP_LENGTH, PLANE_EPSILON};
use crate::vector::project;

/// Why a facet was skipped for an edge before the exact test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cull {
    /// The facet is seen edge-on and has no silhouette area.
    EdgeOn,
    /// No part of the edge lies below the facet plane.
    Depth,
    /// Projected bounding boxes do not overlap.
    Bounds,
}

/// Per-facet data needed to test edges against it, computed once per pass.
#[derive(Debug, Clone)]
pub struct Occluder {
    plane: Plane,
    outline: Vec<Point2<f64>>,
    bounds: Rect,
    edge_on: bool,
}

impl Occluder {
    /// Fails if the facet has zero area.
    pub fn new(facet: &Facet) -> Result<Self> {
        let plane = facet.plane()?.facing_up();
        let outline = facet.silhouette();
        let bounds = Rect::around(&outline).unwrap_or(Rect {
            min: Point2::origin(),
            max: Point2::origin(),
        });
        Ok(Self {
            plane,
            outline,
            bounds,
            edge_on: facet.is_edge_on()?,
        })
    }

    /// Parameter interval of the edge lying strictly below the plane.
    fn below(&self, edge: &Edge) -> Option<Segment> {
        let (beg, fin) = edge.points();
        let f0 = self.plane.signed_distance(&beg);
        let f1 = self.plane.signed_distance(&fin);

        match (f0 < -PLANE_EPSILON, f1 < -PLANE_EPSILON) {
            (false, false) => None,
            (true, true) => Some(Segment::FULL),
            (below_start, _) => {
                let t = (-PLANE_EPSILON - f0) / (f1 - f0);
                if below_start {
                    Segment::clamped(0.0, t)
                } else {
                    Segment::clamped(t, 1.0)
                }
            }
        }
    }

    /// Intervals of `edge` hidden by this facet, sorted and disjoint.
    ///
    /// `Err(Cull)` means the facet cannot hide any part of the edge.
    pub fn covered(&self, edge: &Edge) -> std::result::Result<SmallVec<[Segment; 2]>, Cull> {
        if self.edge_on {
            return Err(Cull::EdgeOn);
        }
        let below = self.below(edge).ok_or(Cull::Depth)?;

        let (beg, fin) = edge.points();
        let a = project(&beg);
        let b = project(&fin);
        let span = Rect::around([&a, &b]).ok_or(Cull::Bounds)?;
        if !span.overlaps(&self.bounds) {
            return Err(Cull::Bounds);
        }

        let mut covered = SmallVec::new();

        // vertical edge: its whole image is one point
        if (b - a).norm() <= BOUNDARY_EPSILON {
            if classify_point(&a, &self.outline) == Containment::Inside {
                covered.push(below);
            }
            return Ok(covered);
        }

        let mut cuts = outline_crossings(&a, &b, &self.outline);
        cuts.push(0.0);
        cuts.push(1.0);
        cuts.sort_by(f64::total_cmp);
        cuts.dedup_by(|later, earlier| (*later - *earlier).abs() <= MIN_GAP_LENGTH);

        let inside: Vec<Segment> = cuts
            .windows(2)
            .filter(|w| {
                let mid = a + (b - a) * (0.5 * (w[0] + w[1]));
                classify_point(&mid, &self.outline) == Containment::Inside
            })
            .filter_map(|w| Segment::clamped(w[0], w[1]))
            .collect();

        for piece in segment::normalize(inside) {
            if let Some(hidden) = piece.intersect(&below) {
                covered.push(hidden);
            }
        }
        Ok(covered)
    }
}

/// Intervals of `edge` hidden by `facet`; empty when the facet hides nothing.
///
/// Convenience wrapper over [`Occluder`] for one-off queries.
pub fn covered_intervals(edge: &Edge, facet: &Facet) -> Result<SmallVec<[Segment; 2]>> {
    Ok(Occluder::new(facet)?.covered(edge).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{EdgeKey, FacetKey};
    use crate::solid::Polyedr;
    use approx::assert_relative_eq;

    /// Square `[0, 2]²` at height `z`, plus one free edge given by its endpoints.
    fn scene(z: f64, from: (f64, f64, f64), to: (f64, f64, f64)) -> (Polyedr, FacetKey, EdgeKey) {
        let mut solid = Polyedr::default();
        let square = [
            solid.add_vertex(0.0, 0.0, z),
            solid.add_vertex(2.0, 0.0, z),
            solid.add_vertex(2.0, 2.0, z),
            solid.add_vertex(0.0, 2.0, z),
        ];
        let facet = solid.add_facet(&square).unwrap();

        // a thin triangle carries the probe edge into the pool
        let a = solid.add_vertex(from.0, from.1, from.2);
        let b = solid.add_vertex(to.0, to.1, to.2);
        let c = solid.add_vertex(to.0 + 10.0, to.1 + 10.0, to.2 - 1.0);
        let probe = solid.add_facet(&[a, b, c]).unwrap();
        let edge = solid.facet(probe).unwrap().edges()[0];
        (solid, facet, edge)
    }

    fn covered(solid: &Polyedr, facet: FacetKey, edge: EdgeKey) -> Vec<(f64, f64)> {
        covered_intervals(solid.edge(edge).unwrap(), solid.facet(facet).unwrap())
            .unwrap()
            .iter()
            .map(|s| (s.start(), s.end()))
            .collect()
    }

    #[test]
    fn edge_below_and_inside_is_fully_covered() {
        let (solid, f, e) = scene(1.0, (0.5, 0.5, 0.0), (1.5, 1.5, 0.0));
        assert_eq!(covered(&solid, f, e), vec![(0.0, 1.0)]);
    }

    #[test]
    fn edge_above_is_not_covered() {
        let (solid, f, e) = scene(1.0, (0.5, 0.5, 2.0), (1.5, 1.5, 2.0));
        assert!(covered(&solid, f, e).is_empty());
    }

    #[test]
    fn edge_crossing_silhouette_is_clipped() {
        let (solid, f, e) = scene(1.0, (-1.0, 1.0, 0.0), (3.0, 1.0, 0.0));
        let c = covered(&solid, f, e);
        assert_eq!(c.len(), 1);
        assert_relative_eq!(c[0].0, 0.25, epsilon = 1e-12);
        assert_relative_eq!(c[0].1, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn edge_piercing_plane_is_clipped_by_depth() {
        // from z = 0 (below) to z = 2 (above), crossing the plane at t = 0.5
        let (solid, f, e) = scene(1.0, (0.5, 1.0, 0.0), (1.5, 1.0, 2.0));
        let c = covered(&solid, f, e);
        assert_eq!(c.len(), 1);
        assert_relative_eq!(c[0].0, 0.0);
        assert_relative_eq!(c[0].1, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn coplanar_edge_is_not_covered() {
        let (solid, f, e) = scene(1.0, (0.5, 0.5, 1.0), (1.5, 1.5, 1.0));
        assert!(covered(&solid, f, e).is_empty());
    }

    #[test]
    fn facet_does_not_hide_its_own_edges() {
        let (solid, f, _) = scene(1.0, (0.5, 0.5, 0.0), (1.5, 1.5, 0.0));
        for &e in solid.facet(f).unwrap().edges() {
            assert!(covered(&solid, f, e).is_empty());
        }
    }

    #[test]
    fn edge_under_outline_is_not_covered() {
        // directly beneath the side y = 0 of the square
        let (solid, f, e) = scene(1.0, (0.0, 0.0, 0.0), (2.0, 0.0, 0.0));
        assert!(covered(&solid, f, e).is_empty());
    }

    #[test]
    fn vertical_edge_below_interior_is_covered() {
        let (solid, f, e) = scene(1.0, (1.0, 1.0, -1.0), (1.0, 1.0, 0.0));
        assert_eq!(covered(&solid, f, e), vec![(0.0, 1.0)]);
    }

    #[test]
    fn culling_reasons() {
        let (solid, f, e) = scene(1.0, (5.0, 5.0, 0.0), (6.0, 6.0, 0.0));
        let occluder = Occluder::new(solid.facet(f).unwrap()).unwrap();
        assert_eq!(occluder.covered(solid.edge(e).unwrap()).unwrap_err(), Cull::Bounds);

        let (solid, f, e) = scene(1.0, (0.5, 0.5, 3.0), (1.5, 1.5, 3.0));
        let occluder = Occluder::new(solid.facet(f).unwrap()).unwrap();
        assert_eq!(occluder.covered(solid.edge(e).unwrap()).unwrap_err(), Cull::Depth);
    }

    #[test]
    fn edge_on_facet_covers_nothing() {
        let mut solid = Polyedr::default();
        let wall = [
            solid.add_vertex(0.0, 1.0, 0.0),
            solid.add_vertex(2.0, 1.0, 0.0),
            solid.add_vertex(2.0, 1.0, 2.0),
            solid.add_vertex(0.0, 1.0, 2.0),
        ];
        let f = solid.add_facet(&wall).unwrap();
        let occluder = Occluder::new(solid.facet(f).unwrap()).unwrap();
        let e = solid.facet(f).unwrap().edges()[0];
        assert_eq!(occluder.covered(solid.edge(e).unwrap()).unwrap_err(), Cull::EdgeOn);
    }

    #[test]
    fn concave_facet_leaves_notch_visible() {
        // U-shape with a notch over 1 < x < 2
        let mut solid = Polyedr::default();
        let outline = [
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ];
        let keys: Vec<_> = outline
            .iter()
            .map(|&(x, y)| solid.add_vertex(x, y, 1.0))
            .collect();
        let f = solid.add_facet(&keys).unwrap();

        let a = solid.add_vertex(-1.0, 2.0, 0.0);
        let b = solid.add_vertex(4.0, 2.0, 0.0);
        let c = solid.add_vertex(4.0, 9.0, -1.0);
        let probe = solid.add_facet(&[a, b, c]).unwrap();
        let e = solid.facet(probe).unwrap().edges()[0];

        let c = covered(&solid, f, e);
        assert_eq!(c.len(), 2);
        assert_relative_eq!(c[0].0, 0.2, epsilon = 1e-12);
        assert_relative_eq!(c[0].1, 0.4, epsilon = 1e-12);
        assert_relative_eq!(c[1].0, 0.6, epsilon = 1e-12);
        assert_relative_eq!(c[1].1, 0.8, epsilon = 1e-12);
    }
}
