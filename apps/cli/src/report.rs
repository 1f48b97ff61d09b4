// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-solid results and their text and JSON forms.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use shadow_lite_geometry::Polyedr;

/// Results for one processed solid.
#[derive(Debug, Clone, Serialize)]
pub struct SolidReport {
    pub name: String,
    pub projection: [f64; 4],
    pub vertices: usize,
    pub facets: usize,
    pub edges: usize,
    pub declared_edges: Option<usize>,
    pub hidden_edges: usize,
    pub invisible_facets: usize,
    pub facets_outside_unit_cube: usize,
    pub invisible_area: f64,
    pub elapsed_secs: f64,
}

impl SolidReport {
    pub fn new(name: impl Into<String>, solid: &Polyedr, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            projection: solid.projection().as_array(),
            vertices: solid.vertex_count(),
            facets: solid.facet_count(),
            edges: solid.edge_count(),
            declared_edges: solid.declared_edge_count(),
            hidden_edges: solid.edges().filter(|(_, e)| e.is_hidden()).count(),
            invisible_facets: solid.fully_invisible_facets().count(),
            facets_outside_unit_cube: solid
                .facets()
                .filter(|(_, f)| f.is_outside_unit_cube())
                .count(),
            invisible_area: solid.calculate_area(),
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }
}

impl fmt::Display for SolidReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=============================================================")?;
        writeln!(f, "Polyhedron {}", self.name)?;
        writeln!(
            f,
            "  {} vertices, {} facets, {} edges",
            self.vertices, self.facets, self.edges
        )?;
        writeln!(
            f,
            "  {} hidden edges, {} fully invisible facets",
            self.hidden_edges, self.invisible_facets
        )?;
        writeln!(f, "  Time: {:.3} s", self.elapsed_secs)?;
        write!(
            f,
            "  Total area of fully invisible facets: {}",
            self.invisible_area
        )
    }
}

/// Everything one batch run produced.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub solids: Vec<SolidReport>,
    pub failed: Vec<String>,
    pub elapsed_secs: f64,
}
