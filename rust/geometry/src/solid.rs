// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for a polyhedron.
//!
//! The [`Polyedr`] is the central owner of all vertices, edges and facets.
//! Each lives in a slot map with a stable key. Facets refer to edges by key,
//! and an edge shared by two adjoining facets is stored exactly once, so the
//! visible gaps of a physical boundary cannot diverge between its facets.
//!
//! Construction and the occlusion pass are in `construction.rs` and
//! `shading.rs`; this file holds storage, lookups and the file-level entry
//! points.

use std::path::Path;
use std::str::FromStr;

use nalgebra::Point3;
use rustc_hash::FxHashMap;
use shadow_lite_core::{parse_geom, read_geom, GeomDescription, ProjectionParams};
use slotmap::SlotMap;

use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::facet::Facet;
use crate::keys::*;

/// A polyhedron with its visibility state.
///
/// # Example
///
/// ```
/// use shadow_lite_geometry::Polyedr;
///
/// let solid: Polyedr = "1 0 0 0
/// 3 1 3
/// 0 0 0
/// 1 0 0
/// 0 1 0
/// 3 1 2 3"
///     .parse()
///     .unwrap();
///
/// assert_eq!(solid.edge_count(), 3);
/// assert_eq!(solid.calculate_area(), 0.0);
/// ```
#[derive(Debug, Default)]
pub struct Polyedr {
    pub(crate) projection: ProjectionParams,
    pub(crate) declared_edge_count: Option<usize>,

    // Entity storage
    pub(crate) vertices: SlotMap<VertexKey, Point3<f64>>,
    pub(crate) edges: SlotMap<EdgeKey, Edge>,
    pub(crate) facets: SlotMap<FacetKey, Facet>,

    // Shared-edge index
    pub(crate) edge_index: FxHashMap<EdgeId, EdgeKey>,
}

impl Polyedr {
    /// Creates an empty solid carrying the given projection parameters.
    pub fn new(projection: ProjectionParams) -> Self {
        Self {
            projection,
            ..Self::default()
        }
    }

    /// Builds a solid from a parsed description and runs the occlusion pass.
    pub fn from_description(desc: &GeomDescription) -> Result<Self> {
        let mut solid = Self::new(desc.projection);
        solid.declared_edge_count = Some(desc.declared_edge_count);

        let keys: Vec<VertexKey> = desc
            .vertices
            .iter()
            .map(|&[x, y, z]| solid.add_vertex(x, y, z))
            .collect();

        for indices in &desc.facets {
            let facet = indices
                .iter()
                .map(|&index| {
                    keys.get(index).copied().ok_or(Error::VertexIndexOutOfRange {
                        index,
                        vertex_count: keys.len(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            solid.add_facet(&facet)?;
        }

        if solid.edge_count() != desc.declared_edge_count {
            tracing::warn!(
                declared = desc.declared_edge_count,
                merged = solid.edge_count(),
                facet_sides = desc.index_count(),
                "edge count differs from the declared count"
            );
        }

        solid.shade()?;
        Ok(solid)
    }

    /// Reads, builds and shades a solid from a `.geom` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let desc = read_geom(path)?;
        Self::from_description(&desc)
    }

    /// Header parameters, passed through untouched.
    pub fn projection(&self) -> ProjectionParams {
        self.projection
    }

    /// Edge count stated in the description, if built from one.
    pub fn declared_edge_count(&self) -> Option<usize> {
        self.declared_edge_count
    }

    // --- Vertex access ---

    pub fn vertex(&self, key: VertexKey) -> Option<&Point3<f64>> {
        self.vertices.get(key)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexKey, &Point3<f64>)> {
        self.vertices.iter()
    }

    // --- Edge access ---

    pub fn edge(&self, key: EdgeKey) -> Option<&Edge> {
        self.edges.get(key)
    }

    /// Mutable access to an edge's gaps, for callers that drive visibility
    /// themselves.
    pub fn edge_mut(&mut self, key: EdgeKey) -> Option<&mut Edge> {
        self.edges.get_mut(key)
    }

    /// Looks up the pooled edge joining two vertices, in either order.
    pub fn edge_between(&self, a: VertexKey, b: VertexKey) -> Option<EdgeKey> {
        self.edge_index.get(&EdgeId::new(a, b)).copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &Edge)> {
        self.edges.iter()
    }

    // --- Facet access ---

    pub fn facet(&self, key: FacetKey) -> Option<&Facet> {
        self.facets.get(key)
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    pub fn facets(&self) -> impl Iterator<Item = (FacetKey, &Facet)> {
        self.facets.iter()
    }

    /// True iff every boundary edge of the facet is fully hidden.
    pub fn is_fully_invisible(&self, key: FacetKey) -> Result<bool> {
        let facet = self.facets.get(key).ok_or(Error::FacetNotFound(key))?;
        Ok(facet.is_fully_invisible(&self.edges))
    }
}

impl FromStr for Polyedr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_description(&parse_geom(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLEY_BOX: &str = "10.0  0.0  0.0  0.0
8  2  8
1   1   1
3   1   1
3   3   1
1   3   1
1.5 1.5 0
2   1.5 0
2   2   0
1.5 2   0
4  1    2    3    4
4  5    6    7    8";

    #[test]
    fn new_solid_is_empty() {
        let solid = Polyedr::default();
        assert_eq!(solid.vertex_count(), 0);
        assert_eq!(solid.edge_count(), 0);
        assert_eq!(solid.facet_count(), 0);
        assert_eq!(solid.declared_edge_count(), None);
    }

    #[test]
    fn counts_from_description() {
        let solid: Polyedr = HOLEY_BOX.parse().unwrap();
        assert_eq!(solid.vertex_count(), 8);
        assert_eq!(solid.facet_count(), 2);
        assert_eq!(solid.edge_count(), 8);
        assert_eq!(solid.declared_edge_count(), Some(8));
        assert_eq!(solid.projection().as_array(), [10.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn parse_errors_are_wrapped() {
        let err = "1 0 0 0\n3 1 3\n0 0 0\n".parse::<Polyedr>().unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn degenerate_facet_propagates_numeric_error() {
        // three collinear vertices: zero area, no normal
        let err = "1 0 0 0\n3 1 3\n0 0 0\n1 0 0\n2 0 0\n3 1 2 3\n"
            .parse::<Polyedr>()
            .unwrap_err();
        assert!(matches!(err, Error::ZeroLengthVector));
    }

    #[test]
    fn hand_built_description_with_bad_index_is_an_error() {
        let desc = GeomDescription {
            projection: ProjectionParams::default(),
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            facets: vec![[0, 1, 7].into_iter().collect()],
            declared_edge_count: 3,
        };
        let err = Polyedr::from_description(&desc).unwrap_err();
        assert!(matches!(
            err,
            Error::VertexIndexOutOfRange {
                index: 7,
                vertex_count: 3
            }
        ));
    }

    #[test]
    fn edge_between_is_unordered() {
        let solid: Polyedr = HOLEY_BOX.parse().unwrap();
        let keys: Vec<VertexKey> = solid.vertices().map(|(k, _)| k).collect();
        let forward = solid.edge_between(keys[0], keys[1]).unwrap();
        assert_eq!(solid.edge_between(keys[1], keys[0]), Some(forward));
        assert_eq!(solid.edge_between(keys[0], keys[2]), None);
    }

    #[test]
    fn unknown_facet_is_an_error() {
        let solid: Polyedr = HOLEY_BOX.parse().unwrap();
        assert!(matches!(
            solid.is_fully_invisible(FacetKey::default()),
            Err(Error::FacetNotFound(_))
        ));
    }
}
