use super::*;
use crate::{
    foundation::color::{Hsl, Rgb8},
    scene::model::{Attribute, ViewBox},
};

fn dot_art() -> Artwork {
    Artwork::single(
        ViewBox::square(200.0),
        Some(Filter::Glow { std_dev: 2.0 }),
        vec![
            Shape::new(
                Geometry::circle(Point::new(100.0, 100.0), 4.123_456),
                Paint::fill(Rgb8::from_hex(0xff2d55)),
            )
            .with(Motion::pulse(Attribute::Radius, 4.0, 1.5, 2.0, 0.25)),
        ],
    )
}

#[test]
fn numbers_round_to_three_decimals() {
    assert_eq!(Num(1.23456).to_string(), "1.235");
    assert_eq!(Num(2.0).to_string(), "2");
    assert_eq!(Num(-0.0001).to_string(), "0");
    assert_eq!(Num(f64::NAN).to_string(), "0");
}

#[test]
fn document_has_view_box_filter_and_motion() {
    let svg = to_svg(&dot_art(), &SvgOptions::default());
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200">"#));
    assert!(svg.contains(r#"<filter id="f0""#));
    assert!(svg.contains(r#"stdDeviation="2""#));
    assert!(svg.contains(r#"<g filter="url(#f0)">"#));
    assert!(svg.contains(r##"<circle cx="100" cy="100" r="4.123" fill="#ff2d55">"##));
    assert!(svg.contains(r#"attributeName="r" values="4;6;4" dur="2s" begin="0.25s""#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn static_output_drops_animation_elements() {
    let opts = SvgOptions {
        animate: false,
        ..SvgOptions::default()
    };
    let svg = to_svg(&dot_art(), &opts);
    assert!(!svg.contains("<animate"));
    assert!(svg.contains(r##"fill="#ff2d55"/>"##));
}

#[test]
fn settings_override_size_and_glow() {
    let settings = RenderSettings {
        glow_std_dev: 5.5,
        ..RenderSettings::default().with_size(300)
    };
    let svg = to_svg(&dot_art(), &SvgOptions::from(&settings));
    assert!(svg.contains(r#"width="300" height="300""#));
    assert!(svg.contains(r#"stdDeviation="5.5""#));
}

#[test]
fn output_is_deterministic() {
    let a = to_svg(&dot_art(), &SvgOptions::default());
    let b = to_svg(&dot_art(), &SvgOptions::default());
    assert_eq!(a, b);
}

#[test]
fn strokes_spins_and_traces_serialize() {
    let mut path = kurbo::BezPath::new();
    path.move_to((10.0, 10.0));
    path.line_to((50.0, 10.0));
    let art = Artwork::single(
        ViewBox::square(200.0),
        None,
        vec![
            Shape::new(
                Geometry::Polygon(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]),
                Paint::stroke(Hsl::new(10, 20, 30), 1.5).round_cap().dashed(4.0, 2.0),
            )
            .with(Motion::Spin {
                degrees: -360.0,
                center: Point::new(100.0, 100.0),
                dur: 8.0,
            }),
            Shape::new(Geometry::Path(path), Paint::stroke(Rgb8::WHITE, 1.0))
                .with(Motion::Trace { dur: 3.0, begin: 0.5 }),
        ],
    );
    let svg = to_svg(&art, &SvgOptions::default());
    assert!(!svg.contains("<defs>"));
    assert!(svg.contains(r#"points="0,0 10,0""#));
    assert!(svg.contains(r#"fill="none" stroke="hsl(10, 20%, 30%)" stroke-width="1.5""#));
    assert!(svg.contains(r#"stroke-linecap="round" stroke-dasharray="4 2""#));
    assert!(svg.contains(r#"from="0 100 100" to="-360 100 100" dur="8s""#));
    assert!(svg.contains(r#"<path d="M10,10 L50,10""#));
    assert!(svg.contains(r#"pathLength="1" stroke-dasharray="1""#));
    assert!(svg.contains(r#"attributeName="stroke-dashoffset" values="1;0;1""#));
}

#[test]
fn gradients_and_layer_transforms_serialize() {
    let mut art = Artwork::new(ViewBox::square(100.0));
    art.gradients.push(Gradient {
        id: "m0".to_string(),
        shape: GradientShape::Linear {
            from: Point::new(0.0, 0.0),
            to: Point::new(1.0, 1.0),
        },
        user_space: false,
        stops: vec![crate::scene::model::GradientStop {
            offset: 0.6,
            color: Rgb8::WHITE.into(),
            opacity: 0.5,
        }],
    });
    let mut layer = Layer::new(None);
    layer.opacity = 0.55;
    layer.transform = Affine::translate((5.0, 6.0));
    art.layers.push(layer);

    let svg = to_svg(&art, &SvgOptions::default());
    assert!(svg.contains(r#"<linearGradient id="m0" x1="0" y1="0" x2="1" y2="1">"#));
    assert!(svg.contains(r##"<stop offset="0.6" stop-color="#ffffff" stop-opacity="0.5"/>"##));
    assert!(svg.contains(r#"<g opacity="0.55" transform="matrix(1 0 0 1 5 6)">"#));
}

#[test]
fn traced_dashed_stroke_writes_one_dash_array() {
    let mut path = kurbo::BezPath::new();
    path.move_to((10.0, 10.0));
    path.line_to((90.0, 40.0));
    let art = Artwork::single(
        ViewBox::square(100.0),
        None,
        vec![
            Shape::new(
                Geometry::Path(path),
                Paint::stroke(Rgb8::WHITE, 1.0).dashed(4.0, 2.0),
            )
            .with(Motion::Trace { dur: 2.0, begin: 0.0 }),
        ],
    );

    let svg = to_svg(&art, &SvgOptions::default());
    assert_eq!(svg.matches("stroke-dasharray=").count(), 1);
    assert!(svg.contains(r#"pathLength="1" stroke-dasharray="1""#));
    crate::scene::raster::parse_svg(&svg).unwrap();

    let still = to_svg(
        &art,
        &SvgOptions {
            animate: false,
            ..SvgOptions::default()
        },
    );
    assert!(still.contains(r#"stroke-dasharray="4 2""#));
    assert!(!still.contains("pathLength"));
    crate::scene::raster::parse_svg(&still).unwrap();
}

#[test]
fn glow_scale_leaves_blurs_alone() {
    let mut art = dot_art();
    art.layers.push(Layer::new(Some(Filter::Blur { std_dev: 3.0 })));
    let svg = to_svg(
        &art,
        &SvgOptions {
            glow_scale: 2.0,
            ..SvgOptions::default()
        },
    );
    assert!(svg.contains(r#"stdDeviation="4" result="blur""#));
    assert!(svg.contains(r#"<feGaussianBlur stdDeviation="3"/>"#));
}
