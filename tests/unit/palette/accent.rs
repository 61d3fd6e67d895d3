use super::*;

#[test]
fn accents_match_type_table() {
    let a = TypeAccent::for_type(AtomType::Comparison);
    assert_eq!(a.hue, 170);
    assert_eq!(a.color.to_string(), "#2dd4bf");
    assert_eq!(a.glow.to_string(), "rgba(45,212,191,0.4)");

    assert_eq!(TypeAccent::for_type(AtomType::Example).hue, 210);
    assert_eq!(TypeAccent::for_type(AtomType::Question).hue, 270);
}

#[test]
fn glow_alpha_variants_keep_colour() {
    let a = TypeAccent::for_type(AtomType::Explanation);
    assert_eq!(a.glow_with_alpha(0.12).to_string(), "rgba(129,140,248,0.12)");
}
