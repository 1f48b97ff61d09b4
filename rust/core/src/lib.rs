// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Shadow-Lite Core Parser
//!
//! Strict reader for the `.geom` polyhedron description format, built with
//! [nom](https://docs.rs/nom).
//!
//! ## Overview
//!
//! - **Tokenization**: each non-blank line is split into whitespace-separated tokens
//! - **Number parsing**: [fast-float](https://docs.rs/fast-float) for coordinates,
//!   [lexical-core](https://docs.rs/lexical-core) for counts and indices
//! - **Validation**: declared counts, per-facet index counts and index ranges are
//!   all checked; any mismatch aborts with an [`Error`] and no partial result
//!
//! ## Quick Start
//!
//! ```rust
//! use shadow_lite_core::parse_geom;
//!
//! let content = "1.0 0.0 0.0 0.0
//! 4 1 4
//! 0 0 0
//! 1 0 0
//! 1 1 0
//! 0 1 0
//! 4 1 2 3 4";
//!
//! let desc = parse_geom(content).unwrap();
//! assert_eq!(desc.vertices.len(), 4);
//! assert_eq!(desc.facets.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for parsed data

pub mod error;
pub mod parser;

pub use error::{Error, Result};
pub use parser::{parse_geom, read_geom, FacetIndices, GeomDescription, ProjectionParams};
