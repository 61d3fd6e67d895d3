//! Scrolla is the visual core of a scroll-driven deck of educational "atom" cards.
//!
//! It turns a concept string into a deterministic colour palette, picks and generates parametric
//! generative-art recipes, and composes both into SVG card documents that can be rasterized to
//! PNG. It also loads the atom feed the cards display and reports quality statistics over it.
//!
//! # Pipeline overview
//!
//! 1. **Palette**: `concept -> concept_hash -> ConceptHues -> ConceptPalette` (pure)
//! 2. **Plan**: `Atom + RandomSource -> CardPlan` (background kind, recipe, backdrop, pattern)
//! 3. **Compose**: `CardPlan -> Artwork` (backend-agnostic scene)
//! 4. **Output**: `Artwork -> SVG text` and optionally `SVG -> RgbaImage` via `resvg`
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injected randomness**: nothing reads a global random number generator; every random choice
//!   goes through a [`RandomSource`], so seeded and scripted renders are reproducible.
//! - **Total palette core**: hashing and palette derivation accept every string, including `""`.
#![forbid(unsafe_code)]

mod card;
mod content;
mod foundation;
mod palette;
mod recipes;
mod scene;

pub use card::{ART_SLOT, CARD_SIZE, CardPlan, counter_label};
pub use content::analysis::{
    DuplicateGroup, FeedReport, LONG_ATOM_WORDS, NEAR_DUPLICATE_THRESHOLD, NearDuplicate,
    ReadTimeStats, SHORT_ATOM_WORDS, jaccard_similarity, tokenize,
};
pub use content::model::{
    AnalyzedAtom, Atom, AtomFeed, AtomType, ComparisonData, ComparisonPanel, Content,
    Difficulty,
};
pub use foundation::color::{Color, Hsl, Hsla, Rgb8, Rgba};
pub use foundation::error::{ScrollaError, ScrollaResult};
pub use foundation::random::{EntropyRandom, RandomSource, SequenceRandom, SplitMix64};
pub use foundation::settings::RenderSettings;
pub use palette::accent::TypeAccent;
pub use palette::concept::{ConceptHues, ConceptPalette, concept_palette, seeded_random};
pub use palette::hash::concept_hash;
pub use recipes::backdrop::{BACKDROP_NEONS, BACKDROP_OPACITY, BACKDROP_SIZE};
pub use recipes::pattern::FRAME_STEP;
pub use recipes::{
    ART_GLOW_STD_DEV, ART_SIZE, Backdrop, BackgroundKind, NEONS, Pattern, Recipe, neon_set,
};
pub use scene::model::{
    Artwork, Attribute, Brush, Filter, Geometry, Gradient, GradientShape, GradientStop, Layer,
    Motion, Paint, Shape, Stroke, ViewBox,
};
pub use scene::raster::{parse_svg, rasterize};
pub use scene::svg::{SvgOptions, to_svg};
