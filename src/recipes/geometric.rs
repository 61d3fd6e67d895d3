//! Recipes built from straight edges and concentric rings.

use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, Point};

use crate::{
    foundation::random::RandomSource,
    recipes::{art_canvas, neon_set},
    scene::model::{Artwork, Attribute, Geometry, Motion, Paint, Shape},
};

const CENTER: Point = Point::new(100.0, 100.0);

pub fn constellation<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let colors = neon_set(rng, 3);

    struct Node {
        at: Point,
        r: f64,
        color: usize,
        dur: f64,
        delay: f64,
    }

    let count = rng.count(7, 15);
    let nodes: Vec<Node> = (0..count)
        .map(|_| Node {
            at: Point::new(rng.range(15.0, 185.0), rng.range(15.0, 185.0)),
            r: rng.range(3.0, 7.0),
            color: rng.index(3),
            dur: rng.range(1.5, 4.0),
            delay: rng.range(0.0, 2.0),
        })
        .collect();

    let mut shapes = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            // Each pair gets its own threshold.
            if a.at.distance(b.at) < rng.range(55.0, 95.0) {
                let color = colors[rng.index(3)];
                let dur = rng.range(2.0, 5.0);
                shapes.push(
                    Shape::new(Geometry::line(a.at, b.at), Paint::stroke(color, 1.2))
                        .with(Motion::flicker(0.3, 0.7, dur, 0.0)),
                );
            }
        }
    }
    for n in &nodes {
        shapes.push(
            Shape::new(Geometry::circle(n.at, n.r), Paint::fill(colors[n.color]))
                .with(Motion::pulse(Attribute::Radius, n.r, 1.5, n.dur, n.delay))
                .with(Motion::flicker(0.6, 1.0, n.dur, n.delay)),
        );
    }
    art_canvas(shapes)
}

pub fn nested_polygons<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let colors = neon_set(rng, 5);
    let count = rng.count(3, 7);
    let shapes = (0..count)
        .map(|i| {
            let sides = rng.count(3, 9);
            let r = 18.0 + i as f64 * rng.range(14.0, 22.0);
            let pts = (0..sides)
                .map(|j| {
                    let a = j as f64 / sides as f64 * TAU - FRAC_PI_2;
                    Point::new(CENTER.x + a.cos() * r, CENTER.y + a.sin() * r)
                })
                .collect();
            let dur = rng.range(6.0, 16.0);
            let degrees = if rng.coin() { 360.0 } else { -360.0 };
            let width = rng.range(1.2, 2.5);
            Shape::new(
                Geometry::Polygon(pts),
                Paint::stroke(colors[i % 5], width).opacity(0.7),
            )
            .with(Motion::Spin {
                degrees,
                center: CENTER,
                dur,
            })
        })
        .collect();
    art_canvas(shapes)
}

pub fn ripple_circles<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let colors = neon_set(rng, 3);
    let center = Point::new(rng.range(60.0, 140.0), rng.range(60.0, 140.0));
    let count = rng.count(5, 10);
    let max_r = rng.range(50.0, 90.0);

    let mut shapes: Vec<Shape> = (0..count)
        .map(|i| {
            let width = rng.range(1.0, 2.5);
            let dur = rng.range(2.0, 4.0);
            let delay = i as f64 * rng.range(0.2, 0.6);
            Shape::new(
                Geometry::circle(center, 0.0),
                Paint::stroke(colors[i % 3], width),
            )
            .with(Motion::animate(Attribute::Radius, [0.0, max_r], dur, delay))
            .with(Motion::animate(Attribute::Opacity, [0.8, 0.0], dur, delay))
        })
        .collect();
    shapes.push(
        Shape::new(Geometry::circle(center, 5.0), Paint::fill(colors[0]))
            .with(Motion::pulse(Attribute::Radius, 5.0, 1.6, 1.2, 0.0)),
    );
    art_canvas(shapes)
}

pub fn circuit_paths<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let colors = neon_set(rng, 4);
    let count = rng.count(6, 14);
    let mut shapes = Vec::with_capacity(count * 2);
    for idx in 0..count {
        let mut x = rng.range(20.0, 180.0);
        let mut y = rng.range(20.0, 180.0);
        let segs = rng.count(3, 7);
        let mut path = BezPath::new();
        path.move_to((x, y));
        for _ in 0..segs {
            if rng.coin() {
                x += rng.range(-45.0, 45.0);
            } else {
                y += rng.range(-45.0, 45.0);
            }
            x = x.clamp(5.0, 195.0);
            y = y.clamp(5.0, 195.0);
            path.line_to((x, y));
        }
        let color = colors[idx % 4];
        let width = rng.range(1.0, 2.5);
        let dur = rng.range(2.0, 5.0);
        let delay = rng.range(0.0, 2.0);
        let node_r = rng.range(3.0, 6.0);

        shapes.push(
            Shape::new(Geometry::Path(path), Paint::stroke(color, width).round_cap())
                .with(Motion::flicker(0.2, 0.7, dur, delay))
                .with(Motion::Trace { dur, begin: delay }),
        );
        shapes.push(
            Shape::new(Geometry::circle(Point::new(x, y), node_r), Paint::fill(color))
                .with(Motion::flicker(0.4, 1.0, 1.5, delay)),
        );
    }
    art_canvas(shapes)
}

pub fn orbit_system<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let colors = neon_set(rng, 6);
    let count = rng.count(3, 7);
    let mut shapes = Vec::with_capacity(count * 2 + 1);
    for i in 0..count {
        let r = 14.0 + i as f64 * rng.range(13.0, 22.0);
        let dot_r = rng.range(3.0, 7.0);
        let dur = rng.range(4.0, 15.0);
        let dir = if rng.coin() { 1.0 } else { -1.0 };
        let dash = rng.range(5.0, 25.0);
        let ring_color = colors[(i + 2) % 6];
        let ring_width = rng.range(0.8, 1.8);

        shapes.push(Shape::new(
            Geometry::circle(CENTER, r),
            Paint::stroke(ring_color, ring_width)
                .dashed(dash, dash * 0.5)
                .opacity(0.4),
        ));
        shapes.push(
            Shape::new(
                Geometry::circle(Point::new(CENTER.x + r, CENTER.y), dot_r),
                Paint::fill(colors[i % 6]).opacity(0.9),
            )
            .with(Motion::Spin {
                degrees: 360.0 * dir,
                center: CENTER,
                dur,
            }),
        );
    }
    shapes.push(
        Shape::new(Geometry::circle(CENTER, 6.0), Paint::fill(colors[0]))
            .with(Motion::pulse(Attribute::Radius, 6.0, 1.4, 1.5, 0.0))
            .with(Motion::flicker(0.7, 1.0, 1.5, 0.0)),
    );
    art_canvas(shapes)
}

#[cfg(test)]
#[path = "../../tests/unit/recipes/geometric.rs"]
mod tests;
