use crate::foundation::{
    error::{ScrollaError, ScrollaResult},
    settings::RenderSettings,
};

/// Parses and validates an SVG document.
pub fn parse_svg(svg: &str) -> ScrollaResult<usvg::Tree> {
    let opts = usvg::Options::default();
    usvg::Tree::from_str(svg, &opts).map_err(|e| ScrollaError::render(format!("parse svg: {e}")))
}

/// Renders the static frame of `svg` into a square-scaled straight-alpha RGBA image.
///
/// The document is scaled so its width maps to `settings.size_px`; the height follows the
/// document's aspect ratio. Animation elements are not evaluated.
#[tracing::instrument(level = "debug", skip(svg, settings), fields(size_px = settings.size_px))]
pub fn rasterize(svg: &str, settings: &RenderSettings) -> ScrollaResult<image::RgbaImage> {
    settings.validate()?;
    let tree = parse_svg(svg)?;

    let size = tree.size();
    let scale = settings.size_px as f32 / size.width();
    let width = settings.size_px;
    let height = ((size.height() * scale).round() as u32).max(1);
    if height > RenderSettings::MAX_SIZE_PX {
        return Err(ScrollaError::render(format!(
            "raster size too large: {width}x{height}"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ScrollaError::render("failed to allocate svg pixmap"))?;
    if let Some([r, g, b, a]) = settings.clear_rgba {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    tracing::debug!(width, height, "rasterized svg");
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| ScrollaError::render("raster buffer size mismatch"))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/raster.rs"]
mod tests;
