use crate::{
    foundation::color::{Hsl, Hsla},
    palette::hash::concept_hash,
};

/// Deterministic colour set for one concept.
///
/// Every field is a pure function of the concept string: no hidden state and no clock.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConceptPalette {
    pub primary: Hsl,
    pub secondary: Hsl,
    pub accent: Hsl,
    pub glow1: Hsla,
    pub glow2: Hsla,
    pub bg1: Hsla,
    pub bg2: Hsla,
    pub particle_colors: [Hsla; 4],
}

/// The three hues a palette is built from, exposed for callers that only need hue buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ConceptHues {
    pub hue: u16,
    pub hue2: u16,
    pub hue3: u16,
}

impl ConceptHues {
    pub fn from_hash(h: u32) -> Self {
        let hue = h % 360;
        let hue2 = (hue + 40 + h % 30) % 360;
        let hue3 = (hue + 180 + h % 40) % 360;
        // All three are < 360.
        Self {
            hue: hue as u16,
            hue2: hue2 as u16,
            hue3: hue3 as u16,
        }
    }

    pub fn of(concept: &str) -> Self {
        Self::from_hash(concept_hash(concept))
    }

    /// Quarter turn from the base hue, used by the fourth particle colour.
    pub fn quarter(self) -> u16 {
        (self.hue + 90) % 360
    }
}

impl ConceptPalette {
    pub fn from_hues(hues: ConceptHues) -> Self {
        let ConceptHues { hue, hue2, hue3 } = hues;
        Self {
            primary: Hsl::new(hue, 70, 65),
            secondary: Hsl::new(hue2, 60, 55),
            accent: Hsl::new(hue3, 80, 70),
            glow1: Hsla::new(hue, 80, 60, 0.3),
            glow2: Hsla::new(hue2, 70, 50, 0.25),
            bg1: Hsla::new(hue, 50, 8, 1.0),
            bg2: Hsla::new(hue2, 40, 12, 1.0),
            particle_colors: [
                Hsla::new(hue, 70, 65, 0.6),
                Hsla::new(hue2, 60, 55, 0.5),
                Hsla::new(hue3, 80, 70, 0.4),
                Hsla::new(hues.quarter(), 50, 60, 0.3),
            ],
        }
    }

    /// Primary colour at low alpha, the tint of the third aurora blob.
    pub fn blob_tint(&self) -> Hsla {
        self.primary.with_alpha(0.15)
    }

    /// Every colour as its CSS string, in a stable field order.
    pub fn css_entries(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("primary", self.primary.to_string()),
            ("secondary", self.secondary.to_string()),
            ("accent", self.accent.to_string()),
            ("glow1", self.glow1.to_string()),
            ("glow2", self.glow2.to_string()),
            ("bg1", self.bg1.to_string()),
            ("bg2", self.bg2.to_string()),
        ];
        const PARTICLE_KEYS: [&str; 4] = ["particle0", "particle1", "particle2", "particle3"];
        for (key, c) in PARTICLE_KEYS.iter().zip(self.particle_colors.iter()) {
            out.push((*key, c.to_string()));
        }
        out
    }
}

/// Palette for `concept`. Total over all strings, including the empty one.
#[tracing::instrument(level = "trace")]
pub fn concept_palette(concept: &str) -> ConceptPalette {
    ConceptPalette::from_hues(ConceptHues::of(concept))
}

/// Reproducible scalar in `[0, 1)` tied to a concept and an index.
///
/// Hashes the concept with the decimal index appended (`"Stack" + 3` hashes `"Stack3"`), then
/// keeps four decimal digits.
pub fn seeded_random(concept: &str, index: i64) -> f64 {
    let h = concept_hash(&format!("{concept}{index}"));
    f64::from(h % 10_000) / 10_000.0
}

#[cfg(test)]
#[path = "../../tests/unit/palette/concept.rs"]
mod tests;
