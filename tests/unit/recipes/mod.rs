use super::*;
use crate::{
    foundation::random::{SequenceRandom, SplitMix64},
    scene::{
        raster::parse_svg,
        svg::{SvgOptions, to_svg},
    },
};

fn tenths() -> SequenceRandom {
    SequenceRandom::new((0..10).map(|i| f64::from(i) / 10.0 + 0.05))
}

#[test]
fn choose_is_uniform_over_fixed_sequence() {
    let mut rng = tenths();
    let picked: Vec<Recipe> = (0..10).map(|_| Recipe::choose(&mut rng)).collect();
    assert_eq!(picked, Recipe::ALL.to_vec());
    assert_eq!(rng.draws(), 10);
}

#[test]
fn choose_edges_map_to_first_and_last() {
    let mut rng = SequenceRandom::new([0.0, 0.999_999]);
    assert_eq!(Recipe::choose(&mut rng), Recipe::Constellation);
    assert_eq!(Recipe::choose(&mut rng), Recipe::OrbitSystem);
}

#[test]
fn names_parse_back() {
    for r in Recipe::ALL {
        assert_eq!(r.name().parse::<Recipe>().unwrap(), r);
    }
    assert_eq!("Fractal-Tree".parse::<Recipe>().unwrap(), Recipe::FractalTree);
    assert!("teapot".parse::<Recipe>().is_err());
}

#[test]
fn neon_set_draws_from_fixed_list() {
    let mut rng = SequenceRandom::new([0.0, 0.5, 0.999]);
    let set = neon_set(&mut rng, 3);
    assert_eq!(set, vec![NEONS[0], NEONS[10], NEONS[19]]);
}

#[test]
fn every_recipe_emits_parseable_svg() {
    for seed in 0..5 {
        for recipe in Recipe::ALL {
            let mut rng = SplitMix64::new(seed);
            let art = recipe.generate(&mut rng);
            assert_eq!(art.view_box, ViewBox::square(ART_SIZE));
            assert!(art.shape_count() > 0, "{recipe} produced no shapes");
            assert_eq!(
                art.layers[0].filter,
                Some(Filter::Glow {
                    std_dev: ART_GLOW_STD_DEV
                })
            );
            let svg = to_svg(&art, &SvgOptions::default());
            parse_svg(&svg).unwrap_or_else(|e| panic!("{recipe}: {e}"));
        }
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    for recipe in Recipe::ALL {
        let a = recipe.generate(&mut SplitMix64::new(42));
        let b = recipe.generate(&mut SplitMix64::new(42));
        assert_eq!(a, b);
    }
}
