//! Recipes built from curves, drifting particles and recursive growth.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Point, Rect};

use crate::{
    foundation::{color::Rgb8, random::RandomSource},
    recipes::{art_canvas, neon_set},
    scene::model::{Artwork, Attribute, Geometry, Motion, Paint, Shape},
};

const CENTER: Point = Point::new(100.0, 100.0);

pub fn spiral_dots<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let colors = neon_set(rng, 4);
    let arms = rng.count(2, 5);
    let dots_per_arm = rng.count(12, 28);
    let tightness = rng.range(2.5, 5.0);

    let mut shapes = Vec::with_capacity(arms * dots_per_arm);
    for arm in 0..arms {
        let offset = arm as f64 / arms as f64 * TAU;
        for i in 0..dots_per_arm {
            let t = i as f64 / dots_per_arm as f64;
            let angle = offset + t * PI * tightness;
            let r = t * 85.0;
            let at = Point::new(CENTER.x + angle.cos() * r, CENTER.y + angle.sin() * r);
            let size = rng.range(2.0, 6.0) * (1.0 - t * 0.4);
            let delay = i as f64 * 0.04;
            let dur = rng.range(1.5, 3.0);
            shapes.push(
                Shape::new(Geometry::circle(at, size), Paint::fill(colors[arm % 4]))
                    .with(Motion::flicker(0.4, 0.9, dur, delay))
                    .with(Motion::pulse(Attribute::Radius, size, 1.4, dur, delay)),
            );
        }
    }
    art_canvas(shapes)
}

pub fn wave_lines<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    const SAMPLES: usize = 50;

    let colors = neon_set(rng, 6);
    let count = rng.count(4, 8);
    let shapes = (0..count)
        .map(|i| {
            let y_base = 25.0 + i as f64 * rng.range(20.0, 30.0);
            let amp = rng.range(10.0, 30.0);
            let freq = rng.range(0.03, 0.09);
            let phase = rng.range(0.0, TAU);
            let pts = (0..SAMPLES)
                .map(|j| {
                    let x = j as f64 / (SAMPLES - 1) as f64 * 200.0;
                    Point::new(x, y_base + (x * freq + phase).sin() * amp)
                })
                .collect();
            let width = rng.range(1.2, 2.5);
            let dur = rng.range(2.0, 5.0);
            Shape::new(
                Geometry::Polyline(pts),
                Paint::stroke(colors[i % 6], width).round_cap(),
            )
            .with(Motion::flicker(0.3, 0.75, dur, i as f64 * 0.15))
        })
        .collect();
    art_canvas(shapes)
}

pub fn particle_cloud<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let colors = neon_set(rng, 5);
    let count = rng.count(25, 55);
    let shapes = (0..count)
        .map(|i| {
            let x = rng.range(10.0, 190.0);
            let y = rng.range(10.0, 190.0);
            let r = rng.range(1.5, 5.0);
            let dx = rng.range(-20.0, 20.0);
            let dy = rng.range(-20.0, 20.0);
            let dur = rng.range(2.0, 6.0);
            let delay = rng.range(0.0, 3.0);
            Shape::new(
                Geometry::circle(Point::new(x, y), r),
                Paint::fill(colors[i % 5]),
            )
            .with(Motion::animate(Attribute::Cx, [x, x + dx, x], dur, delay))
            .with(Motion::animate(Attribute::Cy, [y, y + dy, y], dur, delay))
            .with(Motion::flicker(0.3, 0.85, dur, delay))
        })
        .collect();
    art_canvas(shapes)
}

struct Tree<'a, R: ?Sized> {
    rng: &'a mut R,
    colors: Vec<Rgb8>,
    shapes: Vec<Shape>,
}

impl<R: RandomSource + ?Sized> Tree<'_, R> {
    fn grow(&mut self, from: Point, angle: f64, len: f64, depth: usize) {
        // The depth limit is redrawn at every node, so branches stop at different heights.
        if depth as i64 > self.rng.range_int(3, 5) || len < 6.0 {
            return;
        }
        let to = Point::new(from.x + angle.cos() * len, from.y + angle.sin() * len);
        let width = (3.0 - depth as f64 * 0.5).max(0.8);
        let dur = self.rng.range(2.0, 4.0);
        self.shapes.push(
            Shape::new(
                Geometry::line(from, to),
                Paint::stroke(self.colors[depth % 4], width).round_cap(),
            )
            .with(Motion::flicker(0.35, 0.8, dur, depth as f64 * 0.2)),
        );

        let spread = self.rng.range(0.3, 0.9);
        let left = len * self.rng.range(0.6, 0.8);
        self.grow(to, angle - spread, left, depth + 1);
        let right = len * self.rng.range(0.6, 0.8);
        self.grow(to, angle + spread, right, depth + 1);
        if self.rng.next_f64() > 0.4 {
            let middle = len * self.rng.range(0.5, 0.7);
            self.grow(to, angle, middle, depth + 1);
        }
    }
}

pub fn fractal_tree<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let colors = neon_set(rng, 4);
    let trunk = rng.range(35.0, 55.0);
    let mut tree = Tree {
        rng,
        colors,
        shapes: Vec::new(),
    };
    tree.grow(Point::new(100.0, 190.0), -FRAC_PI_2, trunk, 0);
    art_canvas(tree.shapes)
}

pub fn mandala_flower<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let colors = neon_set(rng, 5);
    let petals = rng.count(5, 13);
    let layers = rng.count(2, 5);

    let mut shapes = Vec::new();
    for l in 0..layers {
        let r = 18.0 + l as f64 * rng.range(16.0, 28.0);
        let petal_count = petals + l * rng.count(0, 4);
        for p in 0..petal_count {
            let angle = p as f64 / petal_count as f64 * TAU;
            let at = Point::new(CENTER.x + angle.cos() * r, CENTER.y + angle.sin() * r);
            let r2 = rng.range(3.0, 8.0);
            let kind = rng.range_int(0, 3);
            let color = colors[(l + p) % 5];
            let dur = rng.range(1.5, 4.0);
            let delay = l as f64 * 0.2 + p as f64 * 0.04;

            let shape = match kind {
                0 => Shape::new(Geometry::circle(at, r2), Paint::fill(color))
                    .with(Motion::pulse(Attribute::Radius, r2, 1.5, dur, delay))
                    .with(Motion::flicker(0.5, 1.0, dur, delay)),
                1 => Shape::new(
                    Geometry::Rect(Rect::from_center_size(at, (r2, r2))),
                    Paint::fill(color),
                )
                .with(Motion::Spin {
                    degrees: 360.0,
                    center: at,
                    dur: dur * 3.0,
                })
                .with(Motion::flicker(0.5, 1.0, dur, delay)),
                _ => Shape::new(Geometry::line(CENTER, at), Paint::stroke(color, 1.2))
                    .with(Motion::flicker(0.3, 0.7, dur, delay)),
            };
            shapes.push(shape);
        }
    }
    art_canvas(shapes)
}

#[cfg(test)]
#[path = "../../tests/unit/recipes/organic.rs"]
mod tests;
