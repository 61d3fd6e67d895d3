use super::*;
use crate::{
    content::model::{Content, Difficulty},
    foundation::random::{SequenceRandom, SplitMix64},
    scene::raster::{parse_svg, rasterize},
};

fn atom(difficulty: Difficulty) -> Atom {
    Atom {
        id: "a1".to_string(),
        concept: "Recursion".to_string(),
        atom_type: AtomType::Question,
        content: Content::PlainText("What is the base case?".to_string()),
        answer: Some("The case that stops the recursion.".to_string()),
        difficulty,
        order: 3,
        estimated_read_time_sec: 4.0,
    }
}

#[test]
fn counter_pads_both_sides() {
    assert_eq!(counter_label(2, 12), "03 / 12");
    assert_eq!(counter_label(0, 5), "01 / 05");
    assert_eq!(counter_label(99, 120), "100 / 120");
}

#[test]
fn procedural_plan_draws_a_backdrop() {
    // background, backdrop, recipe, pattern, pattern seed
    let mut rng = SequenceRandom::new([0.8, 0.0, 0.35, 0.6, 0.25]);
    let plan = CardPlan::new(&atom(Difficulty::Hard), 2, 12, &mut rng);
    assert_eq!(rng.draws(), 5);
    assert_eq!(plan.background, BackgroundKind::Procedural);
    assert_eq!(plan.backdrop, Some(Backdrop::NeonOrbits));
    assert_eq!(plan.recipe, Recipe::RippleCircles);
    assert_eq!(plan.pattern, Pattern::Mandala);
    assert_eq!(plan.pattern_seed, 0.25);
    assert_eq!(plan.counter, "03 / 12");
    assert_eq!(plan.difficulty_level, 3);
    assert_eq!(plan.accent.hue, 270);
    assert_eq!(plan.badge, "✦ Challenge");
    assert_eq!(plan.palette, concept_palette("Recursion"));
}

#[test]
fn image_plan_skips_backdrop_draw() {
    let mut rng = SequenceRandom::new([0.1, 0.95, 0.0, 0.5]);
    let plan = CardPlan::new(&atom(Difficulty::Easy), 0, 1, &mut rng);
    assert_eq!(rng.draws(), 4);
    assert_eq!(plan.background, BackgroundKind::Image);
    assert_eq!(plan.backdrop, None);
    assert_eq!(plan.recipe, Recipe::OrbitSystem);
    assert_eq!(plan.pattern, Pattern::Waves);
    assert_eq!(plan.difficulty_level, 1);
}

#[test]
fn composed_card_layers_back_to_front() {
    let mut rng = SequenceRandom::new([0.1, 0.0, 0.0, 0.5]);
    let plan = CardPlan::new(&atom(Difficulty::Medium), 0, 1, &mut rng);
    let card = plan.compose(&mut SplitMix64::new(1));

    assert_eq!(card.view_box, ViewBox::square(CARD_SIZE));
    assert_eq!(card.gradients[0].id, "card-bg");
    assert_eq!(card.gradients[0].stops[2].color, Color::from(BASE_DARK));
    assert_eq!(
        card.layers[1].filter,
        Some(Filter::Blur { std_dev: BLOB_BLUR })
    );
    assert_eq!(card.layers[1].shapes.len(), 3);

    // bg, blobs, pattern, art, badge and dots
    assert_eq!(card.layers.len(), 5);
    let art = &card.layers[3];
    assert_eq!(art.filter, Some(Filter::Glow { std_dev: 2.0 }));
    let slot = CardPlan::art_slot();
    assert_eq!(art.transform * Point::ORIGIN, slot.origin());

    let chrome = &card.layers[4].shapes;
    assert_eq!(chrome.len(), 4);
    let badge = &chrome[0];
    assert_eq!(badge.geometry, Geometry::Rect(BADGE));
    assert_eq!(
        badge.paint.fill,
        Some(plan.accent.glow_with_alpha(0.12).into())
    );
    assert_eq!(
        badge.paint.stroke.as_ref().map(|s| s.brush.clone()),
        Some(plan.accent.glow_with_alpha(0.2).into())
    );

    let dots = &chrome[1..];
    let filled = dots
        .iter()
        .filter(|s| s.paint.fill == Some(plan.accent.color.into()))
        .count();
    assert_eq!(filled, 2);
}

#[test]
fn backdrop_layers_are_faded_and_scaled() {
    let mut rng = SequenceRandom::new([0.9, 0.7, 0.0, 0.0, 0.5]);
    let plan = CardPlan::new(&atom(Difficulty::Easy), 0, 1, &mut rng);
    assert_eq!(plan.backdrop, Some(Backdrop::BurstRings));
    let card = plan.compose(&mut SplitMix64::new(5));
    let backdrop = &card.layers[3];
    assert_eq!(backdrop.opacity, BACKDROP_OPACITY);
    assert_eq!(backdrop.transform, kurbo::Affine::scale(4.0));
}

#[test]
fn card_svg_parses_and_rasterizes() {
    for seed in 0..4 {
        let mut rng = SplitMix64::new(seed);
        let plan = CardPlan::new(&atom(Difficulty::Hard), 0, 3, &mut rng);
        let settings = RenderSettings::default().with_size(64);
        let svg = plan.to_svg(&settings, &mut rng);
        parse_svg(&svg).unwrap();
        let img = rasterize(&svg, &settings).unwrap();
        assert_eq!(img.dimensions(), (64, 64));
        // The base gradient covers the whole card.
        assert_eq!(img.get_pixel(0, 0).0[3], 255);
    }
}
