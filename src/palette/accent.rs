use crate::{
    content::model::AtomType,
    foundation::color::{Rgb8, Rgba},
};

/// Fixed accent for one atom type, independent of the concept.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TypeAccent {
    pub hue: u16,
    pub color: Rgb8,
    pub glow: Rgba,
}

impl TypeAccent {
    const GLOW_ALPHA: f64 = 0.4;

    pub fn for_type(atom_type: AtomType) -> Self {
        let (hue, hex) = match atom_type {
            AtomType::Explanation => (245, 0x818cf8),
            AtomType::Example => (210, 0x60a5fa),
            AtomType::Question => (270, 0xc084fc),
            AtomType::Comparison => (170, 0x2dd4bf),
        };
        let color = Rgb8::from_hex(hex);
        Self {
            hue,
            color,
            glow: Rgba::new(color, Self::GLOW_ALPHA),
        }
    }

    /// Glow colour at a different alpha (badge fills and borders).
    pub fn glow_with_alpha(&self, alpha: f64) -> Rgba {
        Rgba::new(self.color, alpha)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/accent.rs"]
mod tests;
