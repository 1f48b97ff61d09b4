// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The occlusion pass and the metrics derived from it.

use crate::error::Result;
use crate::facet::Facet;
use crate::keys::FacetKey;
use crate::occlusion::{Cull, Occluder};
use crate::solid::Polyedr;

/// Counters collected during one occlusion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadeStats {
    /// Edge-facet pairs that reached the exact silhouette test.
    pub pairs_tested: usize,
    /// Pairs skipped because the facet is seen edge-on.
    pub culled_edge_on: usize,
    /// Pairs skipped because the edge is nowhere below the facet.
    pub culled_depth: usize,
    /// Pairs skipped because the projected bounds do not overlap.
    pub culled_bounds: usize,
    /// Edges with no visible gap after the pass.
    pub hidden_edges: usize,
}

impl Polyedr {
    /// Subtracts from every edge the intervals hidden by every facet.
    ///
    /// Gaps only shrink, and the result does not depend on iteration order,
    /// so running the pass again is harmless.
    pub fn shade(&mut self) -> Result<ShadeStats> {
        let occluders = self
            .facets
            .values()
            .map(Occluder::new)
            .collect::<Result<Vec<_>>>()?;

        let mut stats = ShadeStats::default();

        for (key, edge) in self.edges.iter_mut() {
            for occluder in &occluders {
                if edge.is_hidden() {
                    break;
                }
                match occluder.covered(edge) {
                    Ok(covered) => {
                        stats.pairs_tested += 1;
                        edge.shade(&covered);
                    }
                    Err(Cull::EdgeOn) => stats.culled_edge_on += 1,
                    Err(Cull::Depth) => stats.culled_depth += 1,
                    Err(Cull::Bounds) => stats.culled_bounds += 1,
                }
            }
            if edge.is_hidden() {
                stats.hidden_edges += 1;
            }
            tracing::trace!(edge = ?key, gaps = edge.gaps().len(), visible = edge.visible_fraction(), "edge shaded");
        }

        tracing::debug!(
            edges = self.edges.len(),
            facets = occluders.len(),
            tested = stats.pairs_tested,
            culled_edge_on = stats.culled_edge_on,
            culled_depth = stats.culled_depth,
            culled_bounds = stats.culled_bounds,
            hidden_edges = stats.hidden_edges,
            "occlusion pass complete"
        );

        Ok(stats)
    }

    /// Facets whose boundary edges are all fully hidden.
    pub fn fully_invisible_facets(&self) -> impl Iterator<Item = (FacetKey, &Facet)> {
        self.facets
            .iter()
            .filter(move |(_, facet)| facet.is_fully_invisible(&self.edges))
    }

    /// Total area of the fully invisible facets.
    pub fn calculate_area(&self) -> f64 {
        self.fully_invisible_facets()
            .map(|(_, facet)| facet.area())
            .sum()
    }
}
