// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::keys::{EdgeKey, FacetKey, VertexKey};

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or shading a solid
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    #[error("facet must have at least 3 vertices, got {0}")]
    DegenerateFacet(usize),

    #[error("facet refers to vertex {index}, but only {vertex_count} exist")]
    VertexIndexOutOfRange { index: usize, vertex_count: usize },

    #[error("vertex not found: {0:?}")]
    VertexNotFound(VertexKey),

    #[error("edge not found: {0:?}")]
    EdgeNotFound(EdgeKey),

    #[error("facet not found: {0:?}")]
    FacetNotFound(FacetKey),

    #[error("geometry description error: {0}")]
    Parse(#[from] shadow_lite_core::Error),
}
