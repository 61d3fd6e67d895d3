//! Card composition.
//!
//! A [`CardPlan`] fixes every random choice a card makes once (background kind, art recipe,
//! backdrop, canvas pattern) so the choices stay locked for the card's lifetime. Rendering a plan
//! draws fresh recipe parameters from the caller's [`RandomSource`].

use kurbo::{Point, Rect};

use crate::{
    content::model::{Atom, AtomType},
    foundation::{
        color::{Color, Hsla, Rgb8},
        random::RandomSource,
        settings::RenderSettings,
    },
    palette::{
        accent::TypeAccent,
        concept::{ConceptPalette, concept_palette},
    },
    recipes::{
        ART_SIZE, Backdrop, BackgroundKind, Pattern, Recipe,
        backdrop::{BACKDROP_OPACITY, BACKDROP_SIZE},
        pattern::FRAME_STEP,
    },
    scene::{
        model::{
            Artwork, Brush, Filter, Geometry, Gradient, GradientShape, GradientStop, Layer, Paint,
            Shape, ViewBox,
        },
        svg::{SvgOptions, to_svg},
    },
};

/// Card canvas edge in user units.
pub const CARD_SIZE: f64 = 400.0;

/// Edge of the square the art recipe is fitted into.
pub const ART_SLOT: f64 = 200.0;

const BASE_DARK: Rgb8 = Rgb8::from_hex(0x060609);

/// `stdDeviation` of the aurora blobs.
const BLOB_BLUR: f64 = 80.0;

/// Type badge chip in the top-left corner.
const BADGE: Rect = Rect::new(20.0, 20.0, 124.0, 44.0);

/// Card position label, both sides zero-padded to two digits: `"03 / 12"`.
pub fn counter_label(index: usize, total: usize) -> String {
    format!("{:02} / {total:02}", index + 1)
}

/// Every random choice for one card, drawn once.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CardPlan {
    pub concept: String,
    pub atom_type: AtomType,
    pub palette: ConceptPalette,
    pub accent: TypeAccent,
    /// Badge text for the atom type.
    pub badge: &'static str,
    pub background: BackgroundKind,
    /// Present only for procedural backgrounds.
    pub backdrop: Option<Backdrop>,
    pub recipe: Recipe,
    pub pattern: Pattern,
    /// Base hue of the pattern, as a fraction of a turn.
    pub pattern_seed: f64,
    pub counter: String,
    pub difficulty_level: u8,
}

impl CardPlan {
    /// Plans the card at `index` of a feed of `total` cards.
    #[tracing::instrument(level = "debug", skip(atom, rng), fields(atom = %atom.id))]
    pub fn new<R: RandomSource + ?Sized>(
        atom: &Atom,
        index: usize,
        total: usize,
        rng: &mut R,
    ) -> Self {
        let background = BackgroundKind::choose(rng);
        let backdrop = (background == BackgroundKind::Procedural).then(|| Backdrop::choose(rng));
        let recipe = Recipe::choose(rng);
        let pattern = Pattern::choose(rng);
        let pattern_seed = rng.next_f64();

        Self {
            concept: atom.concept.clone(),
            atom_type: atom.atom_type,
            palette: concept_palette(&atom.concept),
            accent: TypeAccent::for_type(atom.atom_type),
            badge: atom.atom_type.label(),
            background,
            backdrop,
            recipe,
            pattern,
            pattern_seed,
            counter: counter_label(index, total),
            difficulty_level: atom.difficulty.level(),
        }
    }

    /// Layered card scene: base gradient, aurora blobs, canvas pattern, optional backdrop, art,
    /// then the badge chip with the difficulty dots, back to front.
    pub fn compose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Artwork {
        let view = ViewBox::square(CARD_SIZE);
        let mut card = Artwork::new(view);

        card.gradients.push(self.base_gradient());
        card.layers.push(Layer {
            shapes: vec![Shape::new(
                Geometry::Rect(view.rect()),
                Paint::fill(Brush::Gradient("card-bg".to_string())),
            )],
            ..Layer::new(None)
        });
        card.layers.push(Layer {
            shapes: self.blobs(),
            ..Layer::new(Some(Filter::Blur { std_dev: BLOB_BLUR }))
        });

        let t = rng.count(0, 3000) as f64 * FRAME_STEP;
        card.embed(
            self.pattern.draw(view, t, self.pattern_seed),
            kurbo::Affine::IDENTITY,
            1.0,
            "pattern",
        );

        if let Some(backdrop) = self.backdrop {
            let art = backdrop.generate(rng);
            card.embed(
                art,
                kurbo::Affine::scale(CARD_SIZE / BACKDROP_SIZE),
                BACKDROP_OPACITY,
                "backdrop",
            );
        }

        let art = self.recipe.generate(rng);
        let slot = Self::art_slot();
        let fit = Artwork::fit_transform(ViewBox::square(ART_SIZE), slot.center(), slot.width());
        card.embed(art, fit, 1.0, "art");

        let mut chrome = Layer::new(None);
        chrome.push(self.badge_chip());
        for dot in self.difficulty_dots() {
            chrome.push(dot);
        }
        card.layers.push(chrome);
        card
    }

    #[tracing::instrument(level = "debug", skip(self, settings, rng), fields(recipe = self.recipe.name()))]
    pub fn to_svg<R: RandomSource + ?Sized>(
        &self,
        settings: &RenderSettings,
        rng: &mut R,
    ) -> String {
        to_svg(&self.compose(rng), &SvgOptions::from(settings))
    }

    fn base_gradient(&self) -> Gradient {
        let stop = |offset: f64, color: Color| GradientStop {
            offset,
            color,
            opacity: 1.0,
        };
        Gradient {
            id: "card-bg".to_string(),
            // Farthest corner from (30%, 20%) is (100%, 100%).
            shape: GradientShape::Radial {
                center: Point::new(0.3, 0.2),
                radius: Point::new(0.3, 0.2).distance(Point::new(1.0, 1.0)),
            },
            user_space: false,
            stops: vec![
                stop(0.0, self.palette.bg2.into()),
                stop(0.6, self.palette.bg1.into()),
                stop(1.0, BASE_DARK.into()),
            ],
        }
    }

    fn blobs(&self) -> Vec<Shape> {
        let blob = |color: Hsla, diameter: f64, x: f64, y: f64| {
            Shape::new(
                Geometry::circle(Point::new(CARD_SIZE * x, CARD_SIZE * y), diameter / 2.0),
                Paint::fill(color),
            )
        };
        vec![
            blob(self.palette.glow1, 340.0, 0.20, 0.15),
            blob(self.palette.glow2, 280.0, 0.70, 0.60),
            blob(self.palette.blob_tint(), 220.0, 0.45, 0.80),
        ]
    }

    fn badge_chip(&self) -> Shape {
        let mut paint = Paint::fill(self.accent.glow_with_alpha(0.12));
        paint.stroke = Paint::stroke(self.accent.glow_with_alpha(0.2), 1.0).stroke;
        Shape::new(Geometry::Rect(BADGE), paint)
    }

    fn difficulty_dots(&self) -> Vec<Shape> {
        const SPACING: f64 = 12.0;
        let y = CARD_SIZE - 20.0;
        (0..3u8)
            .map(|i| {
                let at = Point::new(CARD_SIZE / 2.0 + (f64::from(i) - 1.0) * SPACING, y);
                let paint = if i < self.difficulty_level {
                    Paint::fill(self.accent.color)
                } else {
                    Paint::fill(Rgb8::WHITE).opacity(0.2)
                };
                Shape::new(Geometry::circle(at, 3.0), paint)
            })
            .collect()
    }

    /// Outline of the art slot within the card.
    pub fn art_slot() -> Rect {
        Rect::from_center_size(
            Point::new(CARD_SIZE / 2.0, CARD_SIZE / 2.0),
            (ART_SLOT, ART_SLOT),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/mod.rs"]
mod tests;
