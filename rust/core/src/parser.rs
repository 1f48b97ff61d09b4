// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `.geom` parser using nom
//!
//! Line-oriented, strict reader for the polyhedron description format:
//!
//! ```text
//! line 1:  four floats   projection parameters
//! line 2:  three ints    vertex count V, facet count F, edge count E
//! V lines: three floats  vertex coordinates
//! F lines: int n, then n 1-based vertex indices
//! ```
//!
//! Blank lines are skipped. Any deviation from the declared counts is an error.

use std::path::Path;

use nom::{
    bytes::complete::take_while1, character::complete::multispace0, multi::many0,
    sequence::preceded, IResult,
};
use smallvec::SmallVec;

use crate::error::{Error, Result};

/// Vertex indices of one facet, 0-based, in winding order.
pub type FacetIndices = SmallVec<[usize; 8]>;

/// The four header floats, kept verbatim.
///
/// They are passed through to consumers untouched; the parser attaches no
/// geometric meaning to them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionParams(pub [f64; 4]);

impl ProjectionParams {
    /// Returns the parameters as a plain array.
    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }
}

/// A fully validated polyhedron description.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeomDescription {
    /// Header line parameters.
    pub projection: ProjectionParams,
    /// Vertex coordinates in file order.
    pub vertices: Vec<[f64; 3]>,
    /// Facets as 0-based indices into `vertices`.
    pub facets: Vec<FacetIndices>,
    /// Edge count from line 2. Not enforced by the parser.
    pub declared_edge_count: usize,
}

impl GeomDescription {
    /// Total number of vertex references across all facets.
    pub fn index_count(&self) -> usize {
        self.facets.iter().map(|f| f.len()).sum()
    }
}

/// Split one line into whitespace-separated tokens.
fn tokens(input: &str) -> IResult<&str, Vec<&str>> {
    many0(preceded(
        multispace0,
        take_while1(|c: char| !c.is_whitespace()),
    ))(input)
}

/// Iterator over non-blank lines, yielding the 1-based line number and tokens.
struct TokenLines<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> TokenLines<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().enumerate(),
        }
    }

    fn next_line(&mut self) -> Option<(usize, Vec<&'a str>)> {
        for (idx, line) in self.lines.by_ref() {
            // `tokens` cannot fail: many0 accepts zero matches
            let toks = tokens(line).map(|(_, t)| t).unwrap_or_default();
            if !toks.is_empty() {
                return Some((idx + 1, toks));
            }
        }
        None
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<(usize, Vec<&'a str>)> {
        self.next_line().ok_or(Error::UnexpectedEof { expected })
    }
}

fn check_count(line: usize, toks: &[&str], expected: usize) -> Result<()> {
    if toks.len() != expected {
        return Err(Error::TokenCount {
            line,
            expected,
            found: toks.len(),
        });
    }
    Ok(())
}

fn parse_float(line: usize, token: &str) -> Result<f64> {
    match fast_float::parse::<f64, _>(token) {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidToken {
            line,
            token: token.to_string(),
            expected: "float",
        }),
    }
}

fn parse_count(line: usize, token: &str) -> Result<usize> {
    lexical_core::parse::<usize>(token.as_bytes()).map_err(|_| Error::InvalidToken {
        line,
        token: token.to_string(),
        expected: "count",
    })
}

fn parse_index(line: usize, token: &str, vertex_count: usize) -> Result<usize> {
    let index = lexical_core::parse::<i64>(token.as_bytes()).map_err(|_| Error::InvalidToken {
        line,
        token: token.to_string(),
        expected: "vertex index",
    })?;
    if index < 1 || index as u64 > vertex_count as u64 {
        return Err(Error::VertexIndexOutOfRange {
            line,
            index,
            vertex_count,
        });
    }
    Ok(index as usize - 1)
}

/// Parse a complete `.geom` description from text.
///
/// # Example
///
/// ```
/// use shadow_lite_core::parse_geom;
///
/// let desc = parse_geom(
///     "1 0 0 0\n3 1 3\n0 0 0\n1 0 0\n0 1 0\n3 1 2 3\n",
/// ).unwrap();
/// assert_eq!(desc.vertices.len(), 3);
/// assert_eq!(desc.facets[0].as_slice(), &[0, 1, 2]);
/// ```
pub fn parse_geom(content: &str) -> Result<GeomDescription> {
    let mut lines = TokenLines::new(content);

    let (line, toks) = lines.expect_line("projection parameters")?;
    check_count(line, &toks, 4)?;
    let mut params = [0.0; 4];
    for (slot, tok) in params.iter_mut().zip(&toks) {
        *slot = parse_float(line, tok)?;
    }

    let (line, toks) = lines.expect_line("vertex, facet and edge counts")?;
    check_count(line, &toks, 3)?;
    let vertex_count = parse_count(line, toks[0])?;
    let facet_count = parse_count(line, toks[1])?;
    let declared_edge_count = parse_count(line, toks[2])?;

    // counts are untrusted until the data lines are seen
    let mut vertices = Vec::with_capacity(vertex_count.min(content.len()));
    for _ in 0..vertex_count {
        let (line, toks) = lines.expect_line("vertex coordinates")?;
        check_count(line, &toks, 3)?;
        vertices.push([
            parse_float(line, toks[0])?,
            parse_float(line, toks[1])?,
            parse_float(line, toks[2])?,
        ]);
    }

    let mut facets = Vec::with_capacity(facet_count.min(content.len()));
    for _ in 0..facet_count {
        let (line, toks) = lines.expect_line("facet vertex list")?;
        let n = parse_count(line, toks[0])?;
        if n < 3 {
            return Err(Error::FacetTooSmall { line, count: n });
        }
        check_count(line, &toks, n.saturating_add(1))?;
        let indices = toks[1..]
            .iter()
            .map(|tok| parse_index(line, tok, vertex_count))
            .collect::<Result<FacetIndices>>()?;
        facets.push(indices);
    }

    if let Some((line, _)) = lines.next_line() {
        return Err(Error::TrailingData { line });
    }

    Ok(GeomDescription {
        projection: ProjectionParams(params),
        vertices,
        facets,
        declared_edge_count,
    })
}

/// Read and parse a `.geom` file.
pub fn read_geom(path: impl AsRef<Path>) -> Result<GeomDescription> {
    let content = std::fs::read_to_string(path)?;
    parse_geom(&content)
}
