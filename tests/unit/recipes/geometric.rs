use super::*;
use crate::foundation::random::{SequenceRandom, SplitMix64};
use kurbo::Shape as _;

fn circles(art: &Artwork) -> Vec<(Point, f64)> {
    art.shapes()
        .filter_map(|s| match s.geometry {
            Geometry::Circle { center, radius } => Some((center, radius)),
            _ => None,
        })
        .collect()
}

#[test]
fn constellation_links_every_pair_when_nodes_coincide() {
    let art = constellation(&mut SequenceRandom::new([0.0]));
    // 7 nodes at one point: every pair is closer than any threshold.
    assert_eq!(art.shape_count(), 21 + 7);
    assert!(
        circles(&art)
            .iter()
            .all(|(c, r)| *c == Point::new(15.0, 15.0) && *r == 3.0)
    );
}

#[test]
fn constellation_nodes_stay_inside_canvas() {
    for seed in 0..20 {
        let art = constellation(&mut SplitMix64::new(seed));
        let nodes = circles(&art);
        assert!((7..15).contains(&nodes.len()));
        for (c, r) in nodes {
            assert!((15.0..185.0).contains(&c.x) && (15.0..185.0).contains(&c.y));
            assert!((3.0..7.0).contains(&r));
        }
    }
}

#[test]
fn nested_polygons_start_at_top_vertex() {
    let art = nested_polygons(&mut SequenceRandom::new([0.0]));
    assert_eq!(art.shape_count(), 3);
    for (i, shape) in art.shapes().enumerate() {
        let Geometry::Polygon(pts) = &shape.geometry else {
            panic!("expected polygon");
        };
        assert_eq!(pts.len(), 3);
        let r = 18.0 + i as f64 * 14.0;
        assert!((pts[0].x - 100.0).abs() < 1e-9);
        assert!((pts[0].y - (100.0 - r)).abs() < 1e-9);
        assert!(matches!(
            shape.motions[0],
            Motion::Spin { degrees, .. } if degrees == -360.0
        ));
    }
}

#[test]
fn ripple_rings_share_a_centre() {
    let art = ripple_circles(&mut SequenceRandom::new([0.5]));
    let rings = circles(&art);
    assert_eq!(rings.len(), 7 + 1);
    assert!(rings.iter().all(|(c, _)| *c == Point::new(100.0, 100.0)));
    let Motion::Animate { values, .. } = &art.layers[0].shapes[0].motions[0] else {
        panic!("expected radius animation");
    };
    assert_eq!(values, &vec![0.0, 70.0]);
}

#[test]
fn circuit_paths_are_clamped() {
    let bounds = kurbo::Rect::new(5.0, 5.0, 195.0, 195.0);
    for seed in 0..20 {
        let art = circuit_paths(&mut SplitMix64::new(seed));
        assert_eq!(art.shape_count() % 2, 0);
        for shape in art.shapes() {
            if let Geometry::Path(path) = &shape.geometry {
                let bb = path.bounding_box();
                assert!(bounds.contains(bb.origin()));
                assert!(bb.x1 <= 195.0 && bb.y1 <= 195.0);
            }
        }
    }
}

#[test]
fn orbit_system_has_ring_and_dot_per_orbit() {
    let art = orbit_system(&mut SequenceRandom::new([0.0]));
    assert_eq!(art.shape_count(), 3 * 2 + 1);
    let ring = &art.layers[0].shapes[0];
    assert_eq!(ring.paint.stroke.as_ref().unwrap().dash, Some([5.0, 2.5]));
    assert_eq!(ring.paint.opacity, Some(0.4));
}
