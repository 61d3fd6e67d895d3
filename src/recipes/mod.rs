//! Generative-art recipes.
//!
//! Every recipe is a function of an injected [`RandomSource`]: selection and parameters are drawn
//! at generation time and never cached, so two calls with an entropy source differ while two calls
//! with equal scripted or seeded sources match.
//!
//! - [`Recipe`]: ten art recipes on a 200×200 canvas sharing one glow filter.
//! - [`Backdrop`]: five full-card procedural layers on a 100×100 canvas.
//! - [`Pattern`]: time-parameterized canvas drawings sampled into a static frame.
//! - [`BackgroundKind`]: which layer a card shows behind its text.

use std::{fmt, str::FromStr};

use crate::{
    foundation::{
        color::Rgb8,
        error::{ScrollaError, ScrollaResult},
        random::RandomSource,
    },
    scene::model::{Artwork, Filter, ViewBox},
};

pub mod backdrop;
pub mod background;
pub mod geometric;
pub mod organic;
pub mod pattern;

pub use backdrop::Backdrop;
pub use background::BackgroundKind;
pub use pattern::Pattern;

/// Fixed neon list art recipes draw their colours from.
pub const NEONS: [Rgb8; 20] = [
    Rgb8::from_hex(0xff2d55),
    Rgb8::from_hex(0xff3b30),
    Rgb8::from_hex(0xff9500),
    Rgb8::from_hex(0xffcc00),
    Rgb8::from_hex(0x4cd964),
    Rgb8::from_hex(0x5ac8fa),
    Rgb8::from_hex(0x007aff),
    Rgb8::from_hex(0x5856d6),
    Rgb8::from_hex(0xaf52de),
    Rgb8::from_hex(0xff2d95),
    Rgb8::from_hex(0x00e5ff),
    Rgb8::from_hex(0x76ff03),
    Rgb8::from_hex(0xff6d00),
    Rgb8::from_hex(0xd500f9),
    Rgb8::from_hex(0x1de9b6),
    Rgb8::from_hex(0xf50057),
    Rgb8::from_hex(0x651fff),
    Rgb8::from_hex(0x00b0ff),
    Rgb8::from_hex(0x69f0ae),
    Rgb8::from_hex(0xffd740),
];

/// Art canvas edge in user units.
pub const ART_SIZE: f64 = 200.0;

/// Deviation of the glow every art recipe is drawn under.
pub const ART_GLOW_STD_DEV: f64 = 2.0;

/// `n` independent picks from [`NEONS`]; repeats are allowed.
pub fn neon_set<R: RandomSource + ?Sized>(rng: &mut R, n: usize) -> Vec<Rgb8> {
    (0..n).map(|_| NEONS[rng.index(NEONS.len())]).collect()
}

pub(crate) fn art_canvas(shapes: Vec<crate::scene::model::Shape>) -> Artwork {
    Artwork::single(
        ViewBox::square(ART_SIZE),
        Some(Filter::Glow {
            std_dev: ART_GLOW_STD_DEV,
        }),
        shapes,
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recipe {
    Constellation,
    NestedPolygons,
    SpiralDots,
    RippleCircles,
    WaveLines,
    ParticleCloud,
    CircuitPaths,
    FractalTree,
    MandalaFlower,
    OrbitSystem,
}

impl Recipe {
    pub const ALL: [Recipe; 10] = [
        Self::Constellation,
        Self::NestedPolygons,
        Self::SpiralDots,
        Self::RippleCircles,
        Self::WaveLines,
        Self::ParticleCloud,
        Self::CircuitPaths,
        Self::FractalTree,
        Self::MandalaFlower,
        Self::OrbitSystem,
    ];

    /// Uniform pick: `ALL[floor(r * 10)]` for one draw `r`.
    pub fn choose<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let recipe = Self::ALL[rng.index(Self::ALL.len())];
        tracing::debug!(recipe = recipe.name(), "selected art recipe");
        recipe
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Constellation => "constellation",
            Self::NestedPolygons => "nested_polygons",
            Self::SpiralDots => "spiral_dots",
            Self::RippleCircles => "ripple_circles",
            Self::WaveLines => "wave_lines",
            Self::ParticleCloud => "particle_cloud",
            Self::CircuitPaths => "circuit_paths",
            Self::FractalTree => "fractal_tree",
            Self::MandalaFlower => "mandala_flower",
            Self::OrbitSystem => "orbit_system",
        }
    }

    /// Draws fresh parameters from `rng` and builds the artwork.
    #[tracing::instrument(level = "debug", skip(rng), fields(recipe = self.name()))]
    pub fn generate<R: RandomSource + ?Sized>(self, rng: &mut R) -> Artwork {
        let art = match self {
            Self::Constellation => geometric::constellation(rng),
            Self::NestedPolygons => geometric::nested_polygons(rng),
            Self::SpiralDots => organic::spiral_dots(rng),
            Self::RippleCircles => geometric::ripple_circles(rng),
            Self::WaveLines => organic::wave_lines(rng),
            Self::ParticleCloud => organic::particle_cloud(rng),
            Self::CircuitPaths => geometric::circuit_paths(rng),
            Self::FractalTree => organic::fractal_tree(rng),
            Self::MandalaFlower => organic::mandala_flower(rng),
            Self::OrbitSystem => geometric::orbit_system(rng),
        };
        tracing::debug!(shapes = art.shape_count(), "generated artwork");
        art
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Recipe {
    type Err = ScrollaError;

    /// Accepts the snake_case name, ignoring case and `-`/`_`.
    fn from_str(s: &str) -> ScrollaResult<Self> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|r| normalize(r.name()) == key)
            .ok_or_else(|| ScrollaError::validation(format!("unknown recipe '{s}'")))
    }
}

pub(crate) fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/recipes/mod.rs"]
mod tests;
