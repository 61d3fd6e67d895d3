//! Time-parameterized canvas drawings.
//!
//! A pattern is a pure function of the canvas size, a time `t` in seconds and a `seed` in
//! `[0, 1)` that picks the base hue (`seed * 360`). Sampling it at a fixed `t` gives one frame.

use std::{
    f64::consts::{PI, TAU},
    fmt,
    str::FromStr,
};

use kurbo::{BezPath, Point};

use crate::{
    foundation::{
        color::Rgba,
        error::{ScrollaError, ScrollaResult},
        random::RandomSource,
    },
    recipes::normalize,
    scene::model::{
        Artwork, Brush, Geometry, Gradient, GradientShape, GradientStop, Paint, Shape, ViewBox,
    },
};

/// Seconds the canvas clock advances per frame at 30 fps.
pub const FRAME_STEP: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Waves,
    Spiral,
    Mandala,
    Mesh,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [Self::Waves, Self::Spiral, Self::Mandala, Self::Mesh];

    pub fn choose<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let pattern = Self::ALL[rng.index(Self::ALL.len())];
        tracing::debug!(pattern = pattern.name(), "selected canvas pattern");
        pattern
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Waves => "waves",
            Self::Spiral => "spiral",
            Self::Mandala => "mandala",
            Self::Mesh => "mesh",
        }
    }

    /// Frame at time `t` on a canvas of `view`'s size.
    pub fn draw(self, view: ViewBox, t: f64, seed: f64) -> Artwork {
        let base_hue = seed * 360.0;
        match self {
            Self::Waves => waves(view, t, base_hue),
            Self::Spiral => spiral(view, t, base_hue),
            Self::Mandala => mandala(view, t, base_hue),
            Self::Mesh => mesh(view, t, base_hue),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = ScrollaError;

    fn from_str(s: &str) -> ScrollaResult<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or_else(|| ScrollaError::validation(format!("unknown pattern '{s}'")))
    }
}

fn alternate(i: usize) -> f64 {
    if i % 2 == 0 { 1.0 } else { -1.0 }
}

fn polyline(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

fn waves(view: ViewBox, t: f64, base_hue: f64) -> Artwork {
    let ViewBox {
        width: w,
        height: h,
    } = view;
    let mut gradients = Vec::with_capacity(4);
    let mut shapes = Vec::with_capacity(4);
    for i in 0..4 {
        let fi = i as f64;
        let freq = 0.008 + fi * 0.003;
        let amp = 30.0 + fi * 15.0;
        let speed = (0.3 + fi * 0.15) * alternate(i);
        let y_offset = h * (0.25 + fi * 0.12);
        let hue = base_hue + fi * 35.0;

        let mut path = BezPath::new();
        path.move_to((0.0, h));
        let mut x = 0.0;
        while x <= w {
            let y = y_offset
                + (x * freq + t * speed).sin() * amp
                + (x * freq * 1.7 + t * speed * 0.6 + fi).sin() * amp * 0.5;
            path.line_to((x, y));
            x += 6.0;
        }
        path.line_to((w, h));
        path.close_path();

        let id = format!("wave{i}");
        gradients.push(Gradient {
            id: id.clone(),
            shape: GradientShape::Linear {
                from: Point::new(0.0, y_offset - amp),
                to: Point::new(0.0, y_offset + amp * 2.0),
            },
            user_space: true,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: Rgba::from_hsl(hue, 70.0, 60.0, 0.06).into(),
                    opacity: 1.0,
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgba::from_hsl(hue, 70.0, 40.0, 0.02).into(),
                    opacity: 1.0,
                },
            ],
        });
        shapes.push(Shape::new(
            Geometry::Path(path),
            Paint::fill(Brush::Gradient(id)),
        ));
    }
    let mut art = Artwork::single(view, None, shapes);
    art.gradients = gradients;
    art
}

fn spiral(view: ViewBox, t: f64, base_hue: f64) -> Artwork {
    const ARMS: usize = 3;
    const PARTICLES: usize = 40;

    let c = view.center();
    let max_r = view.width.min(view.height) * 0.42;
    let mut shapes = Vec::with_capacity(ARMS * PARTICLES);
    for arm in 0..ARMS {
        let arm_angle = arm as f64 / ARMS as f64 * TAU;
        for i in 0..PARTICLES {
            let progress = i as f64 / PARTICLES as f64;
            let r = progress * max_r;
            let angle = arm_angle + progress * PI * 3.0 + t * 0.3;
            let at = Point::new(c.x + angle.cos() * r, c.y + angle.sin() * r);
            let size = 1.0 + (1.0 - progress) * 2.0;
            let alpha = (1.0 - progress * 0.8) * 0.5;
            let hue = base_hue + progress * 60.0 + arm as f64 * 40.0;
            shapes.push(Shape::new(
                Geometry::circle(at, size),
                Paint::fill(Rgba::from_hsl(hue, 70.0, 65.0, alpha)),
            ));
        }
    }
    Artwork::single(view, None, shapes)
}

fn mandala(view: ViewBox, t: f64, base_hue: f64) -> Artwork {
    const CONTROL_POINTS: usize = 15;

    let c = view.center();
    let mut shapes = Vec::new();
    for layer in 0..3 {
        let fl = layer as f64;
        let petals = 6 + layer * 3;
        let breathe = 1.0 + (t * 0.8 + fl * 0.7).sin() * 0.2;
        let base_r = (40.0 + fl * 30.0) * breathe;
        let rotation = t * (0.15 + fl * 0.05) * alternate(layer);
        let color = Rgba::from_hsl(base_hue + fl * 40.0, 60.0, 60.0, 0.2);

        for p in 0..petals {
            let angle = p as f64 / petals as f64 * TAU + rotation;
            let pulse = 1.0 + (t * 1.5 + p as f64 * 0.5 + fl).sin() * 0.15;
            let path = polyline((0..=CONTROL_POINTS).map(|i| {
                let pt = i as f64 / CONTROL_POINTS as f64;
                let petal_angle = angle - 0.3 + pt * 0.6;
                let r = base_r * (pt * PI).sin() * pulse;
                Point::new(c.x + petal_angle.cos() * r, c.y + petal_angle.sin() * r)
            }));
            shapes.push(Shape::new(Geometry::Path(path), Paint::stroke(color, 1.5)));
        }
    }
    Artwork::single(view, None, shapes)
}

fn mesh(view: ViewBox, t: f64, base_hue: f64) -> Artwork {
    const N: usize = 8;

    let spacing_x = view.width / (N - 1) as f64;
    let spacing_y = view.height / (N - 1) as f64;
    let point = |r: usize, c: usize| {
        let (fr, fc) = (r as f64, c as f64);
        let dx = (t * 0.5 + fc * 0.4 + fr * 0.3).sin() * 15.0;
        let dy = (t * 0.4 + fr * 0.4 + fc * 0.2).cos() * 15.0;
        Point::new(fc * spacing_x + dx, fr * spacing_y + dy)
    };

    let mut shapes = Vec::with_capacity(N * 2);
    for r in 0..N {
        let color = Rgba::from_hsl(base_hue + r as f64 * 10.0, 50.0, 55.0, 0.1);
        let path = polyline((0..N).map(|c| point(r, c)));
        shapes.push(Shape::new(Geometry::Path(path), Paint::stroke(color, 1.0)));
    }
    for c in 0..N {
        let color = Rgba::from_hsl(base_hue + 60.0 + c as f64 * 10.0, 50.0, 55.0, 0.1);
        let path = polyline((0..N).map(|r| point(r, c)));
        shapes.push(Shape::new(Geometry::Path(path), Paint::stroke(color, 1.0)));
    }
    Artwork::single(view, None, shapes)
}

#[cfg(test)]
#[path = "../../tests/unit/recipes/pattern.rs"]
mod tests;
