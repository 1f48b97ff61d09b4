// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar contour queries used on projected facets.

use nalgebra::{Point2, Vector2};

use crate::tolerance::BOUNDARY_EPSILON;
use crate::vector::cross_2d;

/// Where a point lies relative to a contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Boundary,
    Outside,
}

/// Distance from `p` to the closed segment `[a, b]`.
pub fn distance_to_segment(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Classify a point against a simple contour.
///
/// Points within `BOUNDARY_EPSILON` of any side are on the boundary; the rest
/// are resolved by ray casting.
pub fn classify_point(point: &Point2<f64>, contour: &[Point2<f64>]) -> Containment {
    if contour.len() < 3 {
        return Containment::Outside;
    }

    let n = contour.len();
    if (0..n).any(|i| distance_to_segment(point, &contour[i], &contour[(i + 1) % n]) <= BOUNDARY_EPSILON) {
        return Containment::Boundary;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &contour[i];
        let pj = &contour[j];

        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// Axis-aligned rectangle around projected geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Rect {
    /// Smallest rectangle holding every point; `None` for no points.
    pub fn around<'a>(points: impl IntoIterator<Item = &'a Point2<f64>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = *points.next()?;
        Some(points.fold(Self { min: first, max: first }, |rect, p| rect.grown(p)))
    }

    fn grown(self, p: &Point2<f64>) -> Self {
        Self {
            min: self.min.inf(p),
            max: self.max.sup(p),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True when the closed rectangles share at least one point.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let apart_x = self.max.x < other.min.x || other.max.x < self.min.x;
        let apart_y = self.max.y < other.min.y || other.max.y < self.min.y;
        !(apart_x || apart_y)
    }
}

/// Parameters in `(0, 1)` where segment `a + t (b - a)` meets the contour
/// outline, unsorted.
///
/// Sides collinear with the segment contribute the parameters of their
/// endpoints, so pieces running along the outline are split off cleanly.
pub fn outline_crossings(a: &Point2<f64>, b: &Point2<f64>, contour: &[Point2<f64>]) -> Vec<f64> {
    let d: Vector2<f64> = b - a;
    let len_sq = d.norm_squared();
    let n = contour.len();
    let mut params = Vec::with_capacity(n);

    for i in 0..n {
        let p = contour[i];
        let q = contour[(i + 1) % n];
        let e = q - p;
        let denom = cross_2d(&d, &e);
        let ap = p - a;

        if denom.abs() > f64::EPSILON * d.norm() * e.norm() {
            let t = cross_2d(&ap, &e) / denom;
            let u = cross_2d(&ap, &d) / denom;
            if (-BOUNDARY_EPSILON..=1.0 + BOUNDARY_EPSILON).contains(&u) {
                params.push(t);
            }
        } else if cross_2d(&ap, &d).abs() <= BOUNDARY_EPSILON * d.norm() {
            // collinear side
            params.push(ap.dot(&d) / len_sq);
            params.push((q - a).dot(&d) / len_sq);
        }
    }

    params.retain(|t| *t > 0.0 && *t < 1.0);
    params
}
