// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SVG drawing of a solid seen from above.

use std::fmt::Write;

use shadow_lite_geometry::silhouette::Rect;
use shadow_lite_geometry::vector::project;
use shadow_lite_geometry::{Point2, Point3, Renderer};

type Line = (Point2<f64>, Point2<f64>);

/// Collects projected lines and, on `finish`, lays them out on a square
/// canvas with the drawing centred and Y pointing up.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    size: u32,
    padding: f64,
    visible: Vec<Line>,
    hidden: Vec<Line>,
    document: String,
}

impl SvgRenderer {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            padding: 20.0,
            visible: Vec::new(),
            hidden: Vec::new(),
            document: String::new(),
        }
    }

    /// The finished document; empty before the first `finish`.
    pub fn document(&self) -> &str {
        &self.document
    }

    fn bounds(&self) -> Option<Rect> {
        Rect::around(
            self.visible
                .iter()
                .chain(&self.hidden)
                .flat_map(|(a, b)| [a, b]),
        )
    }

    fn render(&self) -> String {
        let size = f64::from(self.size);
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">
  <rect width="100%" height="100%" fill="white"/>
"#,
            self.size
        );

        if let Some(rect) = self.bounds() {
            let available = size - 2.0 * self.padding;
            let extent = rect.width().max(rect.height());
            let scale = if extent > 0.0 { available / extent } else { 1.0 };
            let offset_x = self.padding + (available - rect.width() * scale) / 2.0;
            let offset_y = self.padding + (available - rect.height() * scale) / 2.0;
            let map = |p: &Point2<f64>| {
                (
                    offset_x + (p.x - rect.min.x) * scale,
                    offset_y + (rect.max.y - p.y) * scale,
                )
            };

            for (a, b) in &self.hidden {
                let (x1, y1) = map(a);
                let (x2, y2) = map(b);
                let _ = writeln!(
                    svg,
                    r##"  <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="#999999" stroke-width="1" stroke-dasharray="4 3"/>"##
                );
            }
            for (a, b) in &self.visible {
                let (x1, y1) = map(a);
                let (x2, y2) = map(b);
                let _ = writeln!(
                    svg,
                    r##"  <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="#000000" stroke-width="1.5"/>"##
                );
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl Renderer for SvgRenderer {
    fn begin(&mut self) {
        self.visible.clear();
        self.hidden.clear();
        self.document.clear();
    }

    fn draw_line(&mut self, from: &Point3<f64>, to: &Point3<f64>) {
        self.visible.push((project(from), project(to)));
    }

    fn draw_hidden_line(&mut self, from: &Point3<f64>, to: &Point3<f64>) {
        self.hidden.push((project(from), project(to)));
    }

    fn finish(&mut self) {
        self.document = self.render();
    }
}
