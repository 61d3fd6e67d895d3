use std::fmt;

/// Opaque HSL colour with integer hue (degrees) and saturation/lightness percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub const fn with_alpha(self, alpha: f32) -> Hsla {
        Hsla {
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.lightness,
            alpha,
        }
    }

    pub fn to_rgb(self) -> Rgb8 {
        let (r, g, b) = hsl_to_rgb_u8(
            f64::from(self.hue),
            f64::from(self.saturation),
            f64::from(self.lightness),
        );
        Rgb8 { r, g, b }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// HSL colour with a straight (non-premultiplied) alpha in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsla {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: u16, saturation: u8, lightness: u8, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    pub const fn opaque(self) -> Hsl {
        Hsl::new(self.hue, self.saturation, self.lightness)
    }

    pub fn to_rgba(self) -> Rgba {
        let rgb = self.opaque().to_rgb();
        Rgba::new(rgb, f64::from(self.alpha))
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Straight sRGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::from_hex(0xffffff);

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// sRGB triple with a fractional alpha, printed as CSS `rgba(...)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub rgb: Rgb8,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(rgb: Rgb8, alpha: f64) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// CSS HSL arithmetic with fractional inputs, as canvas drawing code needs.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let (r, g, b) = hsl_to_rgb_u8(hue.rem_euclid(360.0), saturation, lightness);
        Self::new(Rgb8 { r, g, b }, alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Any colour a scene can paint with.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Color {
    Rgb(Rgb8),
    Hsl(Hsl),
    Hsla(Hsla),
    Rgba(Rgba),
}

impl Color {
    /// Straight RGB plus alpha, for rasterization checks.
    pub fn to_rgba(self) -> Rgba {
        match self {
            Self::Rgb(c) => Rgba::new(c, 1.0),
            Self::Hsl(c) => Rgba::new(c.to_rgb(), 1.0),
            Self::Hsla(c) => c.to_rgba(),
            Self::Rgba(c) => c,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => c.fmt(f),
            Self::Hsl(c) => c.fmt(f),
            Self::Hsla(c) => c.fmt(f),
            Self::Rgba(c) => c.fmt(f),
        }
    }
}

impl From<Rgb8> for Color {
    fn from(c: Rgb8) -> Self {
        Self::Rgb(c)
    }
}

impl From<Hsl> for Color {
    fn from(c: Hsl) -> Self {
        Self::Hsl(c)
    }
}

impl From<Hsla> for Color {
    fn from(c: Hsla) -> Self {
        Self::Hsla(c)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Self::Rgba(c)
    }
}

// hue in degrees [0,360), saturation/lightness in percent.
fn hsl_to_rgb_u8(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);
    let a = s * l.min(1.0 - l);
    let channel = |n: f64| {
        let k = (n + hue / 30.0) % 12.0;
        let v = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };
    (channel(0.0), channel(8.0), channel(4.0))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
