// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numerical thresholds shared by the occlusion code.

/// Gaps no longer than this (in edge parameter units) are dropped as slivers.
pub const MIN_GAP_LENGTH: f64 = 1e-9;

/// Points closer than this to a facet plane count as lying on it.
pub const PLANE_EPSILON: f64 = 1e-9;

/// Facets whose unit normal has a smaller vertical component are seen edge-on
/// and cover nothing.
pub const VERTICAL_EPSILON: f64 = 1e-9;

/// Projected points within this distance of a facet outline are on the boundary.
pub const BOUNDARY_EPSILON: f64 = 1e-9;

/// Vectors shorter than this cannot be normalized.
pub const MIN_VECTOR_NORM: f64 = 1e-15;

/// Half the side of the axis-aligned cube centred at the origin.
pub const UNIT_CUBE_HALF_WIDTH: f64 = 0.5;
