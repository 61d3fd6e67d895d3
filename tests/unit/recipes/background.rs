use super::*;
use crate::foundation::random::SequenceRandom;

#[test]
fn thresholds_split_half_quarter_quarter() {
    let mut rng = SequenceRandom::new([0.0, 0.49, 0.5, 0.74, 0.75, 0.99]);
    let kinds: Vec<_> = (0..6).map(|_| BackgroundKind::choose(&mut rng)).collect();
    assert_eq!(
        kinds,
        vec![
            BackgroundKind::Image,
            BackgroundKind::Image,
            BackgroundKind::Lottie,
            BackgroundKind::Lottie,
            BackgroundKind::Procedural,
            BackgroundKind::Procedural,
        ]
    );
}

#[test]
fn distribution_over_even_grid() {
    let mut rng = SequenceRandom::new((0..100).map(|i| f64::from(i) / 100.0));
    let mut counts = [0usize; 3];
    for _ in 0..100 {
        match BackgroundKind::choose(&mut rng) {
            BackgroundKind::Image => counts[0] += 1,
            BackgroundKind::Lottie => counts[1] += 1,
            BackgroundKind::Procedural => counts[2] += 1,
        }
    }
    assert_eq!(counts, [50, 25, 25]);
}
