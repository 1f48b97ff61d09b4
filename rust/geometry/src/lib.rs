// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Shadow-Lite Geometry
//!
//! Hidden-line analysis for polyhedra seen from above under a parallel
//! projection along the Z axis.
//!
//! ## Overview
//!
//! - **Storage**: vertices, edges and facets live in [slotmap](https://docs.rs/slotmap)
//!   arenas owned by a [`Polyedr`]; an edge shared by two facets is pooled once
//! - **Visibility**: each edge carries its visible gaps as sorted, disjoint
//!   parameter intervals; the occlusion pass subtracts every facet's shadow
//! - **Metrics**: fully invisible facets and their total area
//! - **Rendering**: visible (and optionally hidden) parts go to a [`Renderer`]
//!
//! ## Quick Start
//!
//! ```rust
//! use shadow_lite_geometry::Polyedr;
//!
//! let solid: Polyedr = "10.0 0.0 0.0 0.0
//! 8 2 8
//! 1 1 1
//! 3 1 1
//! 3 3 1
//! 1 3 1
//! 1.5 1.5 0
//! 2 1.5 0
//! 2 2 0
//! 1.5 2 0
//! 4 1 2 3 4
//! 4 5 6 7 8"
//!     .parse()
//!     .unwrap();
//!
//! assert!((solid.calculate_area() - 0.25).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: forwards to `shadow-lite-core/serde`

pub mod construction;
pub mod edge;
pub mod error;
pub mod facet;
pub mod keys;
pub mod occlusion;
pub mod render;
pub mod segment;
pub mod shading;
pub mod silhouette;
pub mod solid;
pub mod tolerance;
pub mod vector;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use edge::Edge;
pub use error::{Error, Result};
pub use facet::{Facet, Plane};
pub use keys::{EdgeId, EdgeKey, FacetKey, VertexKey};
pub use occlusion::{covered_intervals, Cull, Occluder};
pub use render::{DrawOptions, LineBuffer, Renderer};
pub use segment::Segment;
pub use shading::ShadeStats;
pub use shadow_lite_core::{GeomDescription, ProjectionParams};
pub use solid::Polyedr;
pub use vector::VectorExt;
