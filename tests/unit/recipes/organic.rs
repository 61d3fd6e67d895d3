use super::*;
use crate::foundation::random::{SequenceRandom, SplitMix64};

#[test]
fn spiral_dot_count_is_arms_times_dots() {
    let art = spiral_dots(&mut SequenceRandom::new([0.0]));
    assert_eq!(art.shape_count(), 2 * 12);
    let Geometry::Circle { center, .. } = art.layers[0].shapes[0].geometry else {
        panic!("expected circle");
    };
    assert_eq!(center, CENTER);
}

#[test]
fn wave_lines_span_the_canvas() {
    for seed in 0..10 {
        let art = wave_lines(&mut SplitMix64::new(seed));
        assert!((4..8).contains(&art.shape_count()));
        for shape in art.shapes() {
            let Geometry::Polyline(pts) = &shape.geometry else {
                panic!("expected polyline");
            };
            assert_eq!(pts.len(), 50);
            assert_eq!(pts[0].x, 0.0);
            assert!((pts[49].x - 200.0).abs() < 1e-9);
        }
    }
}

#[test]
fn particles_start_inside_canvas() {
    for seed in 0..10 {
        let art = particle_cloud(&mut SplitMix64::new(seed));
        assert!((25..55).contains(&art.shape_count()));
        for shape in art.shapes() {
            let bb = shape.geometry.bounding_box();
            assert!(bb.x0 >= 5.0 && bb.x1 <= 195.0);
            assert!(bb.y0 >= 5.0 && bb.y1 <= 195.0);
        }
    }
}

#[test]
fn fractal_tree_without_middle_branches_is_binary() {
    let art = fractal_tree(&mut SequenceRandom::new([0.0]));
    // Depth limit 3, lengths 35, 21, 12.6, 7.56: four full binary levels.
    assert_eq!(art.shape_count(), 15);
    let Geometry::Line { from, to } = art.layers[0].shapes[0].geometry else {
        panic!("expected line");
    };
    assert_eq!(from, Point::new(100.0, 190.0));
    assert!((to.x - 100.0).abs() < 1e-9);
    assert!((to.y - 155.0).abs() < 1e-9);
}

#[test]
fn fractal_tree_terminates_for_any_seed() {
    for seed in 0..20 {
        let art = fractal_tree(&mut SplitMix64::new(seed));
        assert!(art.shape_count() >= 1);
        assert!(art.shape_count() < 400);
    }
}

#[test]
fn mandala_layers_ring_the_centre() {
    let art = mandala_flower(&mut SequenceRandom::new([0.0]));
    assert_eq!(art.shape_count(), 5 + 5);
    assert!(
        art.shapes()
            .all(|s| matches!(s.geometry, Geometry::Circle { .. }))
    );
}

#[test]
fn mandala_shape_kinds_follow_draw() {
    // Layer radius draw, petal-count draw, then per petal: r2, kind, dur.
    let art = mandala_flower(&mut SequenceRandom::new([0.99]));
    assert!(
        art.shapes()
            .all(|s| matches!(s.geometry, Geometry::Line { .. }))
    );
}
