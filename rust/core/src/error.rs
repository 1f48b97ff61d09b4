// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for `.geom` parsing.
//!
//! Every variant is fatal: the parser never returns a partially built
//! description. Line numbers are 1-based and refer to the physical line of
//! the input, blank lines included.

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a `.geom` description.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The description file could not be read.
    #[error("failed to read geometry file: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended before all declared data lines were seen.
    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A token could not be parsed as the expected kind of number.
    #[error("line {line}: invalid {expected} `{token}`")]
    InvalidToken {
        line: usize,
        token: String,
        expected: &'static str,
    },

    /// A line carries a different number of tokens than the format requires.
    #[error("line {line}: expected {expected} tokens, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A facet references a vertex outside `[1, vertex_count]`.
    #[error("line {line}: vertex index {index} out of range 1..={vertex_count}")]
    VertexIndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },

    /// A facet declares fewer than three vertices.
    #[error("line {line}: facet must have at least 3 vertices, declares {count}")]
    FacetTooSmall { line: usize, count: usize },

    /// Non-blank content follows the last declared facet line.
    #[error("line {line}: unexpected data after the last facet")]
    TrailingData { line: usize },
}
