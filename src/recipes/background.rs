use std::fmt;

use crate::foundation::random::RandomSource;

/// Layer a card shows behind its text.
///
/// Image and Lottie backgrounds are fetched by the presentation layer; only
/// [`BackgroundKind::Procedural`] is drawn here, as a [`Backdrop`](crate::recipes::Backdrop).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Image,
    Lottie,
    Procedural,
}

impl BackgroundKind {
    /// One draw `r`: below 0.5 image, below 0.75 lottie, otherwise procedural.
    pub fn choose<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let r = rng.next_f64();
        let kind = if r < 0.5 {
            Self::Image
        } else if r < 0.75 {
            Self::Lottie
        } else {
            Self::Procedural
        };
        tracing::debug!(kind = kind.as_str(), "selected background");
        kind
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Lottie => "lottie",
            Self::Procedural => "procedural",
        }
    }
}

impl fmt::Display for BackgroundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/recipes/background.rs"]
mod tests;
