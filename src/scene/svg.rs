use std::fmt::{self, Write as _};

use kurbo::{Affine, Point};

use crate::{
    foundation::settings::RenderSettings,
    scene::model::{
        Artwork, Brush, Filter, Geometry, Gradient, GradientShape, Layer, Motion, Paint, Shape,
    },
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgOptions {
    /// Emits `width`/`height` attributes when set.
    pub size_px: Option<u32>,
    /// Multiplier applied to the deviation of every glow filter.
    pub glow_scale: f64,
    /// Emit SMIL animation elements; off gives a static frame.
    pub animate: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            size_px: None,
            glow_scale: 1.0,
            animate: true,
        }
    }
}

impl From<&RenderSettings> for SvgOptions {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            size_px: Some(settings.size_px),
            glow_scale: settings.glow_std_dev / RenderSettings::DEFAULT_GLOW_STD_DEV,
            animate: true,
        }
    }
}

/// Number rounded to three decimals, without trailing zeros.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = (self.0 * 1000.0).round() / 1000.0;
        if v == 0.0 || !v.is_finite() {
            return f.write_str("0");
        }
        write!(f, "{v}")
    }
}

fn pt(p: Point) -> impl fmt::Display {
    struct P(Point);
    impl fmt::Display for P {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{},{}", Num(self.0.x), Num(self.0.y))
        }
    }
    P(p)
}

fn points(pts: &[Point]) -> String {
    pts.iter()
        .map(|p| pt(*p).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn path_data(path: &kurbo::BezPath) -> String {
    let mut out = String::new();
    for el in path.elements() {
        if !out.is_empty() {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = match *el {
            kurbo::PathEl::MoveTo(p) => write!(out, "M{}", pt(p)),
            kurbo::PathEl::LineTo(p) => write!(out, "L{}", pt(p)),
            kurbo::PathEl::QuadTo(a, b) => write!(out, "Q{} {}", pt(a), pt(b)),
            kurbo::PathEl::CurveTo(a, b, c) => write!(out, "C{} {} {}", pt(a), pt(b), pt(c)),
            kurbo::PathEl::ClosePath => write!(out, "Z"),
        };
    }
    out
}

fn brush(b: &Brush) -> String {
    match b {
        Brush::Solid(c) => c.to_string(),
        Brush::Gradient(id) => format!("url(#{id})"),
    }
}

/// Serializes `art` as a standalone SVG document. Output is deterministic for a given scene.
#[tracing::instrument(level = "debug", skip(art), fields(shapes = art.shape_count()))]
pub fn to_svg(art: &Artwork, opts: &SvgOptions) -> String {
    let mut out = String::with_capacity(256 + art.shape_count() * 160);
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, art, opts);
    out
}

fn write_document(out: &mut String, art: &Artwork, opts: &SvgOptions) -> fmt::Result {
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}""#,
        Num(art.view_box.width),
        Num(art.view_box.height)
    )?;
    if let Some(px) = opts.size_px {
        let aspect = art.view_box.height / art.view_box.width.max(f64::EPSILON);
        let h = (f64::from(px) * aspect).round().max(1.0);
        write!(out, r#" width="{px}" height="{}""#, Num(h))?;
    }
    out.push('>');

    let has_filters = art.layers.iter().any(|l| l.filter.is_some());
    if !art.gradients.is_empty() || has_filters {
        out.push_str("<defs>");
        for g in &art.gradients {
            write_gradient(out, g)?;
        }
        for (i, layer) in art.layers.iter().enumerate() {
            if let Some(filter) = layer.filter {
                write_filter(out, i, filter, opts)?;
            }
        }
        out.push_str("</defs>");
    }

    for (i, layer) in art.layers.iter().enumerate() {
        write_layer(out, i, layer, opts)?;
    }
    out.push_str("</svg>");
    Ok(())
}

fn write_gradient(out: &mut String, g: &Gradient) -> fmt::Result {
    let units = if g.user_space {
        r#" gradientUnits="userSpaceOnUse""#
    } else {
        ""
    };
    let tag = match g.shape {
        GradientShape::Linear { from, to } => {
            write!(
                out,
                r#"<linearGradient id="{}"{units} x1="{}" y1="{}" x2="{}" y2="{}">"#,
                g.id,
                Num(from.x),
                Num(from.y),
                Num(to.x),
                Num(to.y)
            )?;
            "linearGradient"
        }
        GradientShape::Radial { center, radius } => {
            write!(
                out,
                r#"<radialGradient id="{}"{units} cx="{}" cy="{}" r="{}">"#,
                g.id,
                Num(center.x),
                Num(center.y),
                Num(radius)
            )?;
            "radialGradient"
        }
    };
    for stop in &g.stops {
        write!(
            out,
            r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
            Num(stop.offset),
            stop.color,
            Num(stop.opacity)
        )?;
    }
    write!(out, "</{tag}>")
}

fn write_filter(out: &mut String, index: usize, filter: Filter, opts: &SvgOptions) -> fmt::Result {
    write!(
        out,
        r#"<filter id="f{index}" x="-50%" y="-50%" width="200%" height="200%">"#
    )?;
    match filter {
        Filter::Glow { std_dev } => {
            let std_dev = std_dev * opts.glow_scale;
            write!(
                out,
                r#"<feGaussianBlur stdDeviation="{}" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
                Num(std_dev)
            )?;
        }
        // Only glows follow `glow_scale`.
        Filter::Blur { std_dev } => {
            write!(out, r#"<feGaussianBlur stdDeviation="{}"/>"#, Num(std_dev))?;
        }
    }
    out.push_str("</filter>");
    Ok(())
}

fn write_layer(out: &mut String, index: usize, layer: &Layer, opts: &SvgOptions) -> fmt::Result {
    out.push_str("<g");
    if layer.filter.is_some() {
        write!(out, r#" filter="url(#f{index})""#)?;
    }
    if layer.opacity < 1.0 {
        write!(out, r#" opacity="{}""#, Num(layer.opacity))?;
    }
    if layer.transform != Affine::IDENTITY {
        let [a, b, c, d, e, f] = layer.transform.as_coeffs();
        write!(
            out,
            r#" transform="matrix({} {} {} {} {} {})""#,
            Num(a),
            Num(b),
            Num(c),
            Num(d),
            Num(e),
            Num(f)
        )?;
    }
    out.push('>');
    for shape in &layer.shapes {
        write_shape(out, shape, opts)?;
    }
    out.push_str("</g>");
    Ok(())
}

fn write_shape(out: &mut String, shape: &Shape, opts: &SvgOptions) -> fmt::Result {
    let tag = match &shape.geometry {
        Geometry::Circle { center, radius } => {
            write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                Num(center.x),
                Num(center.y),
                Num(*radius)
            )?;
            "circle"
        }
        Geometry::Line { from, to } => {
            write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                Num(from.x),
                Num(from.y),
                Num(to.x),
                Num(to.y)
            )?;
            "line"
        }
        Geometry::Polygon(pts) => {
            write!(out, r#"<polygon points="{}""#, points(pts))?;
            "polygon"
        }
        Geometry::Polyline(pts) => {
            write!(out, r#"<polyline points="{}""#, points(pts))?;
            "polyline"
        }
        Geometry::Path(path) => {
            write!(out, r#"<path d="{}""#, path_data(path))?;
            "path"
        }
        Geometry::Rect(r) => {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                Num(r.x0),
                Num(r.y0),
                Num(r.width()),
                Num(r.height())
            )?;
            "rect"
        }
    };
    // A traced stroke owns the dash pattern; the paint's own dashes are dropped.
    let traced = opts.animate && shape.motions.iter().any(|m| matches!(m, Motion::Trace { .. }));
    write_paint(out, &shape.paint, !traced)?;
    if traced {
        out.push_str(r#" pathLength="1" stroke-dasharray="1""#);
    }

    let motions: &[Motion] = if opts.animate { &shape.motions } else { &[] };
    if motions.is_empty() {
        out.push_str("/>");
        return Ok(());
    }
    out.push('>');
    for m in motions {
        write_motion(out, m)?;
    }
    write!(out, "</{tag}>")
}

fn write_paint(out: &mut String, paint: &Paint, dashes: bool) -> fmt::Result {
    match &paint.fill {
        Some(b) => write!(out, r#" fill="{}""#, brush(b))?,
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(s) = &paint.stroke {
        write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            brush(&s.brush),
            Num(s.width)
        )?;
        if s.round_cap {
            out.push_str(r#" stroke-linecap="round""#);
        }
        if let Some([dash, gap]) = s.dash.filter(|_| dashes) {
            write!(out, r#" stroke-dasharray="{} {}""#, Num(dash), Num(gap))?;
        }
    }
    if let Some(o) = paint.opacity {
        write!(out, r#" opacity="{}""#, Num(o))?;
    }
    Ok(())
}

fn write_motion(out: &mut String, motion: &Motion) -> fmt::Result {
    match motion {
        Motion::Animate {
            attribute,
            values,
            dur,
            begin,
        } => {
            let values = values
                .iter()
                .map(|v| Num(*v).to_string())
                .collect::<Vec<_>>()
                .join(";");
            write!(
                out,
                r#"<animate attributeName="{}" values="{values}" dur="{}s" begin="{}s" repeatCount="indefinite"/>"#,
                attribute.as_str(),
                Num(*dur),
                Num(*begin)
            )
        }
        Motion::Spin {
            degrees,
            center,
            dur,
        } => write!(
            out,
            r#"<animateTransform attributeName="transform" type="rotate" from="0 {c}" to="{} {c}" dur="{}s" repeatCount="indefinite"/>"#,
            Num(*degrees),
            Num(*dur),
            c = format!("{} {}", Num(center.x), Num(center.y)),
        ),
        Motion::Orbit { path, dur, begin } => write!(
            out,
            r#"<animateMotion path="{}" dur="{}s" begin="{}s" repeatCount="indefinite"/>"#,
            path_data(path),
            Num(*dur),
            Num(*begin)
        ),
        Motion::Trace { dur, begin } => write!(
            out,
            r#"<animate attributeName="stroke-dashoffset" values="1;0;1" dur="{}s" begin="{}s" repeatCount="indefinite"/>"#,
            Num(*dur),
            Num(*begin)
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
