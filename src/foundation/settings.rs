use crate::foundation::error::{ScrollaError, ScrollaResult};

/// Output configuration shared by the SVG writer and the rasterizer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderSettings {
    /// Edge length of rasterized output in pixels.
    pub size_px: u32,
    /// Straight RGBA the raster is cleared to before drawing; `None` keeps it transparent.
    pub clear_rgba: Option<[u8; 4]>,
    /// `stdDeviation` of the art glow filter. Other glows scale by the same factor.
    pub glow_std_dev: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size_px: 400,
            clear_rgba: None,
            glow_std_dev: Self::DEFAULT_GLOW_STD_DEV,
        }
    }
}

impl RenderSettings {
    pub const MAX_SIZE_PX: u32 = 8192;
    pub const DEFAULT_GLOW_STD_DEV: f64 = 2.0;

    /// Defaults overridden by `SCROLLA_SIZE_PX` and `SCROLLA_GLOW_STD_DEV`. Unparseable or
    /// out-of-range values are ignored.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(size) = std::env::var("SCROLLA_SIZE_PX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&n| n > 0 && n <= Self::MAX_SIZE_PX)
        {
            settings.size_px = size;
        }
        if let Some(std_dev) = std::env::var("SCROLLA_GLOW_STD_DEV")
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
        {
            settings.glow_std_dev = std_dev;
        }
        settings
    }

    pub fn with_size(mut self, size_px: u32) -> Self {
        self.size_px = size_px;
        self
    }

    pub fn validate(&self) -> ScrollaResult<()> {
        if self.size_px == 0 || self.size_px > Self::MAX_SIZE_PX {
            return Err(ScrollaError::validation(format!(
                "size_px must be in 1..={}",
                Self::MAX_SIZE_PX
            )));
        }
        if !self.glow_std_dev.is_finite() || self.glow_std_dev < 0.0 {
            return Err(ScrollaError::validation(
                "glow_std_dev must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;
