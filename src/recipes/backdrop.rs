use std::{fmt, str::FromStr};

use kurbo::{BezPath, Point, Shape as _};

use crate::{
    foundation::{
        color::{Hsl, Rgb8},
        error::{ScrollaError, ScrollaResult},
        random::RandomSource,
    },
    recipes::normalize,
    scene::model::{
        Artwork, Attribute, Brush, Filter, Geometry, Gradient, GradientShape, GradientStop, Layer,
        Motion, Paint, Shape, ViewBox,
    },
};

/// Saturated hues backdrops pick from.
pub const BACKDROP_NEONS: [Hsl; 10] = [
    Hsl::new(280, 100, 65),
    Hsl::new(320, 100, 60),
    Hsl::new(180, 100, 55),
    Hsl::new(140, 100, 50),
    Hsl::new(40, 100, 55),
    Hsl::new(200, 100, 60),
    Hsl::new(340, 100, 55),
    Hsl::new(60, 100, 55),
    Hsl::new(260, 100, 70),
    Hsl::new(160, 100, 50),
];

pub const BACKDROP_SIZE: f64 = 100.0;

/// Opacity a card fades its backdrop in to.
pub const BACKDROP_OPACITY: f64 = 0.55;

fn neon<R: RandomSource + ?Sized>(rng: &mut R) -> Hsl {
    BACKDROP_NEONS[rng.index(BACKDROP_NEONS.len())]
}

/// Full-card procedural layer shown when a card has no image or Lottie background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backdrop {
    NeonOrbits,
    ElectricGrid,
    MeteorShower,
    BurstRings,
    PlasmaBlobs,
}

impl Backdrop {
    pub const ALL: [Backdrop; 5] = [
        Self::NeonOrbits,
        Self::ElectricGrid,
        Self::MeteorShower,
        Self::BurstRings,
        Self::PlasmaBlobs,
    ];

    pub fn choose<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let backdrop = Self::ALL[rng.index(Self::ALL.len())];
        tracing::debug!(backdrop = backdrop.name(), "selected backdrop");
        backdrop
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NeonOrbits => "neon_orbits",
            Self::ElectricGrid => "electric_grid",
            Self::MeteorShower => "meteor_shower",
            Self::BurstRings => "burst_rings",
            Self::PlasmaBlobs => "plasma_blobs",
        }
    }

    #[tracing::instrument(level = "debug", skip(rng), fields(backdrop = self.name()))]
    pub fn generate<R: RandomSource + ?Sized>(self, rng: &mut R) -> Artwork {
        match self {
            Self::NeonOrbits => neon_orbits(rng),
            Self::ElectricGrid => electric_grid(rng),
            Self::MeteorShower => meteor_shower(rng),
            Self::BurstRings => burst_rings(rng),
            Self::PlasmaBlobs => plasma_blobs(rng),
        }
    }
}

impl fmt::Display for Backdrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backdrop {
    type Err = ScrollaError;

    fn from_str(s: &str) -> ScrollaResult<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|b| normalize(b.name()) == key)
            .ok_or_else(|| ScrollaError::validation(format!("unknown backdrop '{s}'")))
    }
}

fn canvas() -> Artwork {
    Artwork::new(ViewBox::square(BACKDROP_SIZE))
}

fn neon_orbits<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let center = Point::new(50.0, 50.0);
    let mut art = canvas();
    for _ in 0..rng.count(5, 10) {
        let r = rng.range(3.0, 8.0);
        let orbit_r = rng.range(12.0, 45.0);
        let color = neon(rng);
        let dur = rng.range(4.0, 12.0);
        let begin = rng.next_f64() * -15.0;
        let opacity = rng.range(0.4, 0.8);
        let glow_r = rng.range(6.0, 14.0);

        let path = BezPath::from_iter(kurbo::Circle::new(center, orbit_r).path_elements(0.1));
        // Placed at the origin: the motion path supplies the position.
        let dot = Shape::new(
            Geometry::circle(Point::ORIGIN, r),
            Paint::fill(color).opacity(opacity),
        )
        .with(Motion::Orbit { path, dur, begin })
        .with(Motion::pulse(Attribute::Radius, r, 1.5, 2.0, 0.0));

        let mut layer = Layer::new(Some(Filter::Glow {
            std_dev: glow_r / 4.0,
        }));
        layer.push(dot);
        art.layers.push(layer);
    }
    art
}

fn electric_grid<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let mut shapes = Vec::with_capacity(22);
    for i in 0..8 {
        let at = 12.5 * f64::from(i);
        for vertical in [true, false] {
            let color = neon(rng);
            let dur = rng.range(1.5, 4.0);
            let begin = rng.next_f64() * 3.0;
            let opacity = rng.range(0.3, 0.6);
            let (from, to) = if vertical {
                (Point::new(at, 0.0), Point::new(at, BACKDROP_SIZE))
            } else {
                (Point::new(0.0, at), Point::new(BACKDROP_SIZE, at))
            };
            shapes.push(
                Shape::new(
                    Geometry::line(from, to),
                    Paint::stroke(color, 0.3).opacity(opacity),
                )
                .with(Motion::animate(
                    Attribute::Opacity,
                    [opacity, opacity * 2.0, opacity],
                    dur,
                    begin,
                )),
            );
        }
    }
    for _ in 0..6 {
        let at = Point::new(rng.range(0.0, 100.0), rng.range(0.0, 100.0));
        let color = neon(rng);
        let dur = rng.range(1.0, 3.0);
        let begin = rng.next_f64() * 5.0;
        let r = rng.range(1.0, 3.0);
        shapes.push(
            Shape::new(Geometry::circle(at, r), Paint::fill(color).opacity(0.0))
                .with(Motion::flicker(0.0, 0.8, dur, begin))
                .with(Motion::pulse(Attribute::Radius, r, 4.0, dur, begin)),
        );
    }
    Artwork::single(ViewBox::square(BACKDROP_SIZE), None, shapes)
}

fn meteor_shower<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let mut art = canvas();
    let mut layer = Layer::new(None);
    for i in 0..rng.count(8, 15) {
        let start = Point::new(rng.range(-10.0, 110.0), rng.range(-20.0, 30.0));
        let angle = rng.range(20.0, 50.0).to_radians();
        let len = rng.range(40.0, 80.0);
        let end = Point::new(start.x + angle.cos() * len, start.y + angle.sin() * len);
        let color = neon(rng);
        let dur = rng.range(1.0, 3.0);
        let begin = rng.next_f64() * 8.0;
        let width = rng.range(0.3, 1.0);
        let opacity = rng.range(0.4, 0.9);

        let id = format!("mg{i}");
        art.gradients.push(Gradient {
            id: id.clone(),
            shape: GradientShape::Linear {
                from: Point::new(0.0, 0.0),
                to: Point::new(1.0, 0.0),
            },
            user_space: false,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: color.into(),
                    opacity: 0.0,
                },
                GradientStop {
                    offset: 0.6,
                    color: color.into(),
                    opacity,
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgb8::WHITE.into(),
                    opacity,
                },
            ],
        });
        layer.push(
            Shape::new(
                Geometry::line(start, end),
                Paint::stroke(Brush::Gradient(id), width)
                    .round_cap()
                    .opacity(0.0),
            )
            .with(Motion::flicker(0.0, 1.0, dur, begin)),
        );
    }
    art.layers.push(layer);
    art
}

fn burst_rings<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let shapes = (0..rng.count(5, 9))
        .map(|_| {
            let center = Point::new(rng.range(20.0, 80.0), rng.range(20.0, 80.0));
            let max_r = rng.range(8.0, 25.0);
            let color = neon(rng);
            let dur = rng.range(2.0, 5.0);
            let begin = rng.next_f64() * 6.0;
            let width = rng.range(0.3, 1.0);
            Shape::new(Geometry::circle(center, 0.0), Paint::stroke(color, width))
                .with(Motion::animate(Attribute::Radius, [0.0, max_r], dur, begin))
                .with(Motion::animate(Attribute::Opacity, [0.8, 0.0], dur, begin))
        })
        .collect();
    Artwork::single(ViewBox::square(BACKDROP_SIZE), None, shapes)
}

fn plasma_blobs<R: RandomSource + ?Sized>(rng: &mut R) -> Artwork {
    let shapes = (0..rng.count(5, 10))
        .map(|_| {
            let cx = rng.range(10.0, 90.0);
            let cy = rng.range(10.0, 90.0);
            let r = rng.range(5.0, 18.0);
            let color = neon(rng);
            let dx = rng.range(-20.0, 20.0);
            let dy = rng.range(-20.0, 20.0);
            let dur = rng.range(4.0, 10.0);
            let begin = rng.next_f64() * -8.0;
            let opacity = rng.range(0.2, 0.5);
            Shape::new(
                Geometry::circle(Point::new(cx, cy), r),
                Paint::fill(color).opacity(opacity),
            )
            .with(Motion::animate(Attribute::Cx, [cx, cx + dx, cx], dur, begin))
            .with(Motion::animate(Attribute::Cy, [cy, cy + dy, cy], dur, begin))
            .with(Motion::pulse(Attribute::Radius, r, 1.4, dur * 0.7, 0.0))
        })
        .collect();
    Artwork::single(
        ViewBox::square(BACKDROP_SIZE),
        Some(Filter::Blur { std_dev: 3.0 }),
        shapes,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/recipes/backdrop.rs"]
mod tests;
