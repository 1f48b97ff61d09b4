// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hand-off of visibility results to a drawing backend.
//!
//! The solid does no geometry here: it walks the edge pool once and reports
//! every visible gap (and, on request, every hidden interval) as a 3D line.
//! Backends project and style the lines themselves.

use nalgebra::Point3;

use crate::solid::Polyedr;

/// A drawing backend. One `begin`/`finish` pair scopes a session per solid.
pub trait Renderer {
    /// Starts a new drawing, discarding anything from a previous session.
    fn begin(&mut self) {}

    /// Draws a visible part of an edge.
    fn draw_line(&mut self, from: &Point3<f64>, to: &Point3<f64>);

    /// Draws a hidden part of an edge in a distinguishing stroke.
    fn draw_hidden_line(&mut self, _from: &Point3<f64>, _to: &Point3<f64>) {}

    /// Flushes the drawing.
    fn finish(&mut self) {}
}

/// What [`Polyedr::draw`] hands to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawOptions {
    /// Also emit hidden edge portions through [`Renderer::draw_hidden_line`].
    pub show_hidden: bool,
}

/// A renderer that keeps the lines in memory.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    pub visible: Vec<(Point3<f64>, Point3<f64>)>,
    pub hidden: Vec<(Point3<f64>, Point3<f64>)>,
    pub sessions: usize,
}

impl Renderer for LineBuffer {
    fn begin(&mut self) {
        self.visible.clear();
        self.hidden.clear();
        self.sessions += 1;
    }

    fn draw_line(&mut self, from: &Point3<f64>, to: &Point3<f64>) {
        self.visible.push((*from, *to));
    }

    fn draw_hidden_line(&mut self, from: &Point3<f64>, to: &Point3<f64>) {
        self.hidden.push((*from, *to));
    }
}

impl Polyedr {
    /// Sends every edge's visible gaps, and optionally its hidden intervals,
    /// to `renderer`. Shared edges are drawn once.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, options: DrawOptions) {
        renderer.begin();
        for edge in self.edges.values() {
            for gap in edge.gaps() {
                renderer.draw_line(&edge.point_at(gap.start()), &edge.point_at(gap.end()));
            }
            if options.show_hidden {
                for part in edge.hidden() {
                    renderer.draw_hidden_line(&edge.point_at(part.start()), &edge.point_at(part.end()));
                }
            }
        }
        renderer.finish();
    }
}
