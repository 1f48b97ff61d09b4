// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar facets of a solid.
//!
//! A facet keeps a copy of its vertex positions (they never change after
//! parsing) and refers to its boundary edges by key, so the visibility state
//! it reports is the state of the shared edge pool.

use nalgebra::{Point2, Point3, Unit, Vector3};
use slotmap::SlotMap;

use crate::edge::Edge;
use crate::error::Result;
use crate::keys::{EdgeKey, VertexKey};
use crate::tolerance::{UNIT_CUBE_HALF_WIDTH, VERTICAL_EPSILON};
use crate::vector::{project, vertical, VectorExt};

/// Plane through a facet
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Point on the plane
    pub point: Point3<f64>,
    /// Unit normal
    pub normal: Unit<Vector3<f64>>,
}

impl Plane {
    /// Signed distance from point to plane
    /// Positive = on the side the normal points to
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        (point - self.point).dot(self.normal.as_ref())
    }

    /// Same plane with the normal turned to point up (`z >= 0`).
    pub fn facing_up(&self) -> Plane {
        if self.normal.z < 0.0 {
            Plane {
                point: self.point,
                normal: -self.normal,
            }
        } else {
            *self
        }
    }
}

/// Ordered polygon bounding one planar face.
///
/// Vertices must be coplanar and form a simple polygon; this is not checked.
#[derive(Debug, Clone)]
pub struct Facet {
    vertices: Vec<VertexKey>,
    points: Vec<Point3<f64>>,
    edges: Vec<EdgeKey>,
}

impl Facet {
    pub(crate) fn new(vertices: Vec<VertexKey>, points: Vec<Point3<f64>>, edges: Vec<EdgeKey>) -> Self {
        Self {
            vertices,
            points,
            edges,
        }
    }

    pub fn vertices(&self) -> &[VertexKey] {
        &self.vertices
    }

    /// Vertex positions in winding order.
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Boundary edges; edge `i` joins vertex `i` and vertex `i + 1` (wrapping).
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    /// Half the sum of `vᵢ × vᵢ₊₁`, taken relative to the first vertex.
    ///
    /// Its direction follows the right-hand rule for the winding order and its
    /// length is the facet area.
    pub fn vector_area(&self) -> Vector3<f64> {
        let p0 = self.points[0];
        let mut total = Vector3::zeros();

        for i in 1..self.points.len() - 1 {
            let v1 = self.points[i] - p0;
            let v2 = self.points[i + 1] - p0;
            total += v1.cross(&v2);
        }

        total * 0.5
    }

    /// Area of the polygon. Exact for triangles, correct for simple concave polygons.
    pub fn area(&self) -> f64 {
        self.vector_area().norm()
    }

    /// Area signed by the winding order as seen along `axis`.
    pub fn signed_area(&self, axis: &Vector3<f64>) -> f64 {
        self.vector_area().dot(axis)
    }

    /// Unit normal following the winding order.
    ///
    /// Fails with [`Error::ZeroLengthVector`](crate::Error::ZeroLengthVector)
    /// for a zero-area facet.
    pub fn normal(&self) -> Result<Unit<Vector3<f64>>> {
        self.vector_area().unit()
    }

    /// Average of the vertex positions.
    pub fn centroid(&self) -> Point3<f64> {
        let sum = self
            .points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / self.points.len() as f64)
    }

    pub fn plane(&self) -> Result<Plane> {
        Ok(Plane {
            point: self.centroid(),
            normal: self.normal()?,
        })
    }

    /// Angle between the normal and the vertical axis, in `[0, π/2]`.
    ///
    /// 0 for a horizontal facet, π/2 for a vertical one.
    pub fn angle_with_horizontal(&self) -> Result<f64> {
        let cos = self.normal()?.dot(vertical().as_ref()).abs();
        Ok(cos.min(1.0).acos())
    }

    /// True when the facet projects to a line: it has no silhouette area.
    pub fn is_edge_on(&self) -> Result<bool> {
        Ok(self.normal()?.z.abs() <= VERTICAL_EPSILON)
    }

    /// True when the centroid lies outside the closed cube `[-0.5, 0.5]³`.
    pub fn is_outside_unit_cube(&self) -> bool {
        self.centroid()
            .iter()
            .any(|c| c.abs() > UNIT_CUBE_HALF_WIDTH)
    }

    /// Outline of the facet projected onto the horizontal plane.
    pub fn silhouette(&self) -> Vec<Point2<f64>> {
        self.points.iter().map(project).collect()
    }

    /// True iff every boundary edge has no visible gap left.
    ///
    /// This is a statement about the outline only: it does not prove that the
    /// interior of the facet is covered.
    pub fn is_fully_invisible(&self, edges: &SlotMap<EdgeKey, Edge>) -> bool {
        self.edges
            .iter()
            .all(|key| edges.get(*key).is_some_and(Edge::is_hidden))
    }
}
