// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Construction methods for vertices and facets.
//!
//! Facets are created through the solid, which checks that every referenced
//! vertex exists and hands out pooled edges: the boundary between two
//! adjoining facets is created by the first and reused by the second.

use nalgebra::Point3;

use crate::edge::Edge;
use crate::error::{Error, Result};
use crate::facet::Facet;
use crate::keys::*;
use crate::solid::Polyedr;

impl Polyedr {
    /// Adds a vertex at the given 3D coordinates.
    pub fn add_vertex(&mut self, x: f64, y: f64, z: f64) -> VertexKey {
        self.vertices.insert(Point3::new(x, y, z))
    }

    /// Returns the pooled edge between two vertices, creating it if needed.
    fn edge_for(&mut self, a: VertexKey, b: VertexKey) -> Result<EdgeKey> {
        let id = EdgeId::new(a, b);
        if let Some(&key) = self.edge_index.get(&id) {
            return Ok(key);
        }

        let beg = *self.vertices.get(a).ok_or(Error::VertexNotFound(a))?;
        let fin = *self.vertices.get(b).ok_or(Error::VertexNotFound(b))?;
        let key = self.edges.insert(Edge::new(a, b, beg, fin));
        self.edge_index.insert(id, key);
        Ok(key)
    }

    /// Creates a facet from vertices in winding order.
    ///
    /// Edge `i` of the facet joins vertex `i` and vertex `i + 1`, wrapping at
    /// the end. Returns an error for fewer than 3 vertices or an unknown key.
    pub fn add_facet(&mut self, vertices: &[VertexKey]) -> Result<FacetKey> {
        if vertices.len() < 3 {
            return Err(Error::DegenerateFacet(vertices.len()));
        }

        let points = vertices
            .iter()
            .map(|&v| self.vertices.get(v).copied().ok_or(Error::VertexNotFound(v)))
            .collect::<Result<Vec<_>>>()?;

        let n = vertices.len();
        let edges = (0..n)
            .map(|i| self.edge_for(vertices[i], vertices[(i + 1) % n]))
            .collect::<Result<Vec<_>>>()?;

        Ok(self.facets.insert(Facet::new(vertices.to_vec(), points, edges)))
    }
}
