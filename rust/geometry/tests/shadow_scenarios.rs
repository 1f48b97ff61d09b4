// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-solid visibility scenarios driven from `.geom` text.

use approx::assert_relative_eq;
use shadow_lite_geometry::tolerance::MIN_GAP_LENGTH;
use shadow_lite_geometry::{DrawOptions, LineBuffer, Polyedr};

const HOLEY_BOX: &str = "10.0  0.0  0.0  0.0
8  2  8
1   1   1
3   1   1
3   3   1
1   3   1
1.5 1.5 0
2   1.5 0
2   2   0
1.5 2   0
4  1    2    3    4
4  5    6    7    8";

const CUBE: &str = "200.0 45.0 45.0 30.0
8 6 12
-0.5 -0.5 -0.5
 0.5 -0.5 -0.5
 0.5  0.5 -0.5
-0.5  0.5 -0.5
-0.5 -0.5  0.5
 0.5 -0.5  0.5
 0.5  0.5  0.5
-0.5  0.5  0.5
4 1 4 3 2
4 5 6 7 8
4 1 2 6 5
4 2 3 7 6
4 3 4 8 7
4 4 1 5 8";

/// Square pyramid on `[1, 3]²` with apex at height 2, under a plate at height 3
/// spanning `[0, plate_x] × [0, 4]`.
fn pyramid_under_plate(plate_x: f64) -> String {
    format!(
        "1.0 0.0 0.0 0.0
9 6 12
1 1 1
3 1 1
3 3 1
1 3 1
2 2 2
0 0 3
{plate_x} 0 3
{plate_x} 4 3
0 4 3
4 1 4 3 2
3 1 2 5
3 2 3 5
3 3 4 5
3 4 1 5
4 6 7 8 9"
    )
}

fn assert_gaps_well_formed(solid: &Polyedr) {
    for (_, edge) in solid.edges() {
        let gaps = edge.gaps();
        for gap in gaps {
            assert!(gap.start() >= 0.0 && gap.end() <= 1.0);
            assert!(gap.length() > MIN_GAP_LENGTH);
        }
        for pair in gaps.windows(2) {
            assert!(pair[0].end() < pair[1].start());
        }
    }
}

#[test]
fn holey_box_area() {
    let solid: Polyedr = HOLEY_BOX.parse().unwrap();
    assert_eq!(solid.edge_count(), 8);
    assert_eq!(solid.fully_invisible_facets().count(), 1);
    assert_relative_eq!(solid.calculate_area(), 0.25, epsilon = 1e-12);
    assert_gaps_well_formed(&solid);
}

#[test]
fn closed_cube_is_fully_visible_from_above() {
    let solid: Polyedr = CUBE.parse().unwrap();
    assert_eq!(solid.vertex_count(), 8);
    assert_eq!(solid.facet_count(), 6);
    assert_eq!(solid.edge_count(), 12);
    assert_eq!(solid.declared_edge_count(), Some(12));

    // bottom edges project onto the top outline, vertical ones onto its corners
    for (_, edge) in solid.edges() {
        assert_relative_eq!(edge.visible_fraction(), 1.0);
    }
    assert_eq!(solid.calculate_area(), 0.0);
    assert_gaps_well_formed(&solid);
}

#[test]
fn cube_facets_touch_the_unit_cube() {
    let solid: Polyedr = CUBE.parse().unwrap();
    // face centroids sit on the cube surface, which counts as inside
    for (_, facet) in solid.facets() {
        assert!(!facet.is_outside_unit_cube());
    }
}

#[test]
fn plate_hides_whole_pyramid() {
    let solid: Polyedr = pyramid_under_plate(4.0).parse().unwrap();
    assert_eq!(solid.edge_count(), 12);

    let hidden = solid.edges().filter(|(_, e)| e.is_hidden()).count();
    assert_eq!(hidden, 8);
    assert_eq!(solid.fully_invisible_facets().count(), 5);

    // base 2 x 2 plus four triangles of area sqrt(2)
    assert_relative_eq!(
        solid.calculate_area(),
        4.0 + 4.0 * 2.0_f64.sqrt(),
        epsilon = 1e-12
    );
    assert_gaps_well_formed(&solid);
}

#[test]
fn half_plate_hides_one_side() {
    let solid: Polyedr = pyramid_under_plate(2.0).parse().unwrap();

    let hidden: Vec<_> = solid.fully_invisible_facets().collect();
    assert_eq!(hidden.len(), 1);
    assert_relative_eq!(hidden[0].1.centroid().x, 4.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(solid.calculate_area(), 2.0_f64.sqrt(), epsilon = 1e-12);

    // base edges along y = 1 and y = 3 are cut at x = 2
    let halves = solid
        .edges()
        .filter(|(_, e)| {
            let (a, b) = e.points();
            a.z == 1.0 && b.z == 1.0 && a.y == b.y
        })
        .map(|(_, e)| e.visible_fraction())
        .collect::<Vec<_>>();
    assert_eq!(halves.len(), 2);
    for fraction in halves {
        assert_relative_eq!(fraction, 0.5, epsilon = 1e-9);
    }
    assert_gaps_well_formed(&solid);
}

#[test]
fn facet_order_does_not_matter() {
    let forward: Polyedr = pyramid_under_plate(2.0).parse().unwrap();

    let text = pyramid_under_plate(2.0);
    let mut lines: Vec<&str> = text.lines().collect();
    let facets = lines.split_off(11);
    let mut reordered = lines.join("\n");
    for facet in facets.iter().rev() {
        reordered.push('\n');
        reordered.push_str(facet);
    }
    let backward: Polyedr = reordered.parse().unwrap();

    assert_relative_eq!(forward.calculate_area(), backward.calculate_area(), epsilon = 1e-12);

    let mut a: Vec<f64> = forward.edges().map(|(_, e)| e.visible_fraction()).collect();
    let mut b: Vec<f64> = backward.edges().map(|(_, e)| e.visible_fraction()).collect();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);
    for (x, y) in a.iter().zip(&b) {
        assert_relative_eq!(*x, *y, epsilon = 1e-12);
    }
}

#[test]
fn mismatched_edge_count_still_loads() {
    let text = HOLEY_BOX.replacen("8  2  8", "8  2  10", 1);
    let solid: Polyedr = text.parse().unwrap();
    assert_eq!(solid.edge_count(), 8);
    assert_eq!(solid.declared_edge_count(), Some(10));
    assert_relative_eq!(solid.calculate_area(), 0.25, epsilon = 1e-12);
}

#[test]
fn drawing_splits_visible_and_hidden_parts() {
    let solid: Polyedr = pyramid_under_plate(2.0).parse().unwrap();
    let mut buffer = LineBuffer::default();
    solid.draw(&mut buffer, DrawOptions { show_hidden: true });

    let visible: f64 = buffer.visible.iter().map(|(a, b)| (b - a).norm()).sum();
    let hidden: f64 = buffer.hidden.iter().map(|(a, b)| (b - a).norm()).sum();
    let total: f64 = solid.edges().map(|(_, e)| e.length()).sum();
    assert_relative_eq!(visible + hidden, total, epsilon = 1e-9);
    assert!(hidden > 0.0);
}

#[test]
fn malformed_input_is_rejected() {
    let truncated = "1.0 0.0 0.0 0.0\n3 1 3\n0 0 0\n1 0 0\n";
    assert!(truncated.parse::<Polyedr>().is_err());

    let bad_index = "1.0 0.0 0.0 0.0\n3 1 3\n0 0 0\n1 0 0\n0 1 0\n3 1 2 4\n";
    assert!(bad_index.parse::<Polyedr>().is_err());
}
