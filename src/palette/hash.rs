/// Polynomial rolling hash over the UTF-16 code units of `s`.
///
/// Accumulates `hash * 31 + unit` in a signed 32-bit integer with wraparound, then returns the
/// absolute value. `i32::MIN` has no positive counterpart in `i32`, so the result is widened to
/// `u32` (`2147483648`).
pub fn concept_hash(s: &str) -> u32 {
    s.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

#[cfg(test)]
#[path = "../../tests/unit/palette/hash.rs"]
mod tests;
