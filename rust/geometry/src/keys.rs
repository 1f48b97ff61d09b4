// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key types for arena-based storage.
//!
//! Keys are created by `slotmap::SlotMap` and give O(1) lookup into a
//! [`Polyedr`](crate::Polyedr). A facet refers to its boundary edges by
//! [`EdgeKey`], so two adjoining facets name the same edge object.

use slotmap::new_key_type;

new_key_type! {
    /// Key for a vertex (point in 3D space).
    pub struct VertexKey;

    /// Key for an edge (line segment between two vertices).
    pub struct EdgeKey;

    /// Key for a facet (planar polygon bounded by edges).
    pub struct FacetKey;
}

/// Unordered vertex pair used to merge the shared boundary of adjoining facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(VertexKey, VertexKey);

impl EdgeId {
    /// Builds the canonical (sorted) pair for two endpoints.
    pub fn new(a: VertexKey, b: VertexKey) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// Returns the endpoints in canonical order.
    pub fn endpoints(&self) -> (VertexKey, VertexKey) {
        (self.0, self.1)
    }
}
