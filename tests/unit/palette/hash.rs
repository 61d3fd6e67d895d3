use super::*;

#[test]
fn empty_string_hashes_to_zero() {
    assert_eq!(concept_hash(""), 0);
}

#[test]
fn short_strings_match_plain_arithmetic() {
    assert_eq!(concept_hash("0"), 48);
    assert_eq!(concept_hash("ab"), 97 * 31 + 98);
}

#[test]
fn reference_vectors_with_overflow() {
    assert_eq!(concept_hash("Recursion"), 1_125_219_518);
    assert_eq!(concept_hash("Stack"), 80_204_392);
    assert_eq!(concept_hash("Binary Search"), 2_144_045_735);
    assert_eq!(
        concept_hash("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
        474_938_880
    );
}

#[test]
fn hashes_utf16_code_units_not_bytes() {
    // U+00E9 is two bytes in UTF-8 but a single UTF-16 unit.
    assert_eq!(concept_hash("é"), 233);
    // U+1F600 is a surrogate pair.
    assert_eq!(concept_hash("😀"), 1_772_899);
}

#[test]
fn negative_accumulator_takes_absolute_value() {
    // "Recursion0" wraps negative during accumulation before the final abs.
    let mut h: i32 = 0;
    for u in "Recursion0".encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(i32::from(u));
    }
    assert_eq!(concept_hash("Recursion0"), h.unsigned_abs());
    assert_eq!(concept_hash("Recursion0"), 522_066_642);
}
