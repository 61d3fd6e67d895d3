use kurbo::{Affine, BezPath, Point, Rect, Shape as _};

use crate::foundation::color::{Color, Hsl, Hsla, Rgb8, Rgba};

/// User-space extent of an artwork; the origin is always `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn square(size: f64) -> Self {
        Self {
            width: size,
            height: size,
        }
    }

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Filter {
    /// Blurred copy merged under the source graphic.
    Glow { std_dev: f64 },
    /// Plain gaussian blur.
    Blur { std_dev: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum GradientShape {
    /// Endpoints in bounding-box fractions unless the gradient is in user space.
    Linear { from: Point, to: Point },
    Radial { center: Point, radius: f64 },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Gradient {
    pub id: String,
    pub shape: GradientShape,
    pub user_space: bool,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Brush {
    Solid(Color),
    /// Reference to a [`Gradient`] id of the owning artwork.
    Gradient(String),
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Self::Solid(c)
    }
}

macro_rules! solid_brush_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Brush {
            fn from(c: $ty) -> Self {
                Self::Solid(c.into())
            }
        })*
    };
}

solid_brush_from!(Rgb8, Hsl, Hsla, Rgba);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub brush: Brush,
    pub width: f64,
    pub round_cap: bool,
    pub dash: Option<[f64; 2]>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Paint {
    pub fill: Option<Brush>,
    pub stroke: Option<Stroke>,
    pub opacity: Option<f64>,
}

impl Paint {
    pub fn fill(brush: impl Into<Brush>) -> Self {
        Self {
            fill: Some(brush.into()),
            ..Self::default()
        }
    }

    pub fn stroke(brush: impl Into<Brush>, width: f64) -> Self {
        Self {
            stroke: Some(Stroke {
                brush: brush.into(),
                width,
                round_cap: false,
                dash: None,
            }),
            ..Self::default()
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn round_cap(mut self) -> Self {
        if let Some(s) = &mut self.stroke {
            s.round_cap = true;
        }
        self
    }

    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        if let Some(s) = &mut self.stroke {
            s.dash = Some([dash, gap]);
        }
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Geometry {
    Circle { center: Point, radius: f64 },
    Line { from: Point, to: Point },
    Polygon(Vec<Point>),
    Polyline(Vec<Point>),
    Path(BezPath),
    Rect(Rect),
}

impl Geometry {
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    pub fn line(from: Point, to: Point) -> Self {
        Self::Line { from, to }
    }

    /// Axis-aligned bounds of the static geometry (motions are not included).
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle { center, radius } => kurbo::Circle::new(*center, *radius).bounding_box(),
            Self::Line { from, to } => kurbo::Line::new(*from, *to).bounding_box(),
            Self::Polygon(pts) | Self::Polyline(pts) => points_bounds(pts),
            Self::Path(path) => path.bounding_box(),
            Self::Rect(r) => *r,
        }
    }
}

fn points_bounds(pts: &[Point]) -> Rect {
    let Some(first) = pts.first() else {
        return Rect::ZERO;
    };
    pts.iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |r, p| {
            r.union_pt(*p)
        })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Attribute {
    Opacity,
    Radius,
    Cx,
    Cy,
}

impl Attribute {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::Radius => "r",
            Self::Cx => "cx",
            Self::Cy => "cy",
        }
    }
}

/// Looping animation attached to a shape. Durations and offsets are in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Motion {
    /// Cycles an attribute through `values`.
    Animate {
        attribute: Attribute,
        values: Vec<f64>,
        dur: f64,
        begin: f64,
    },
    /// Full rotation by `degrees` around `center`.
    Spin {
        degrees: f64,
        center: Point,
        dur: f64,
    },
    /// Moves the shape along `path`.
    Orbit { path: BezPath, dur: f64, begin: f64 },
    /// Draws the stroke in and back out.
    Trace { dur: f64, begin: f64 },
}

impl Motion {
    pub fn animate(attribute: Attribute, values: impl Into<Vec<f64>>, dur: f64, begin: f64) -> Self {
        Self::Animate {
            attribute,
            values: values.into(),
            dur,
            begin,
        }
    }

    /// `base * [1, peak, 1]` on `attribute`, the usual pulse shape.
    pub fn pulse(attribute: Attribute, base: f64, peak: f64, dur: f64, begin: f64) -> Self {
        Self::animate(attribute, [base, base * peak, base], dur, begin)
    }

    /// Opacity cycling `low -> high -> low`.
    pub fn flicker(low: f64, high: f64, dur: f64, begin: f64) -> Self {
        Self::animate(Attribute::Opacity, [low, high, low], dur, begin)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    pub geometry: Geometry,
    pub paint: Paint,
    pub motions: Vec<Motion>,
}

impl Shape {
    pub fn new(geometry: Geometry, paint: Paint) -> Self {
        Self {
            geometry,
            paint,
            motions: Vec::new(),
        }
    }

    pub fn with(mut self, motion: Motion) -> Self {
        self.motions.push(motion);
        self
    }
}

/// A group of shapes sharing a filter, an opacity and a transform.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    pub filter: Option<Filter>,
    pub opacity: f64,
    pub transform: Affine,
    pub shapes: Vec<Shape>,
}

impl Layer {
    pub fn new(filter: Option<Filter>) -> Self {
        Self {
            filter,
            opacity: 1.0,
            transform: Affine::IDENTITY,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}

/// Backend-agnostic scene produced by recipes and consumed by the SVG writer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Artwork {
    pub view_box: ViewBox,
    pub gradients: Vec<Gradient>,
    pub layers: Vec<Layer>,
}

impl Artwork {
    pub fn new(view_box: ViewBox) -> Self {
        Self {
            view_box,
            gradients: Vec::new(),
            layers: Vec::new(),
        }
    }

    /// Artwork with one layer holding `shapes`.
    pub fn single(view_box: ViewBox, filter: Option<Filter>, shapes: Vec<Shape>) -> Self {
        let mut art = Self::new(view_box);
        art.layers.push(Layer {
            shapes,
            ..Layer::new(filter)
        });
        art
    }

    pub fn shape_count(&self) -> usize {
        self.layers.iter().map(|l| l.shapes.len()).sum()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.layers.iter().flat_map(|l| l.shapes.iter())
    }

    /// Appends `other`'s layers under `transform`, scaling their opacity.
    ///
    /// Gradient ids of `other` are prefixed with `prefix` so several embedded artworks can share
    /// one document.
    pub fn embed(&mut self, other: Artwork, transform: Affine, opacity: f64, prefix: &str) {
        let rename = |id: &str| format!("{prefix}-{id}");
        for mut g in other.gradients {
            g.id = rename(&g.id);
            self.gradients.push(g);
        }
        for mut layer in other.layers {
            layer.transform = transform * layer.transform;
            layer.opacity *= opacity;
            for shape in &mut layer.shapes {
                if let Some(Brush::Gradient(id)) = &mut shape.paint.fill {
                    *id = rename(id);
                }
                if let Some(Stroke {
                    brush: Brush::Gradient(id),
                    ..
                }) = &mut shape.paint.stroke
                {
                    *id = rename(id);
                }
            }
            self.layers.push(layer);
        }
    }

    /// Transform that fits `inner` centred in a `size`-sized square around `center`.
    pub fn fit_transform(inner: ViewBox, center: Point, size: f64) -> Affine {
        let scale = size / inner.width.max(inner.height).max(f64::EPSILON);
        Affine::translate((
            center.x - inner.width * scale / 2.0,
            center.y - inner.height * scale / 2.0,
        )) * Affine::scale(scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
