use crate::model::{CharacterStrokes, PathSegment, Point, Rgb};

/// Lower-left corner of the stroke data's coordinate space (y up).
pub const SOURCE_MIN: Point = Point::new(0.0, -124.0);
/// Upper-right corner of the stroke data's coordinate space.
pub const SOURCE_MAX: Point = Point::new(1024.0, 900.0);

/// Inset kept between the glyph box and the target box edges.
pub const OVERLAY_PADDING: f32 = 1.0;

pub const TRACE_OPACITY: f32 = 0.3;

/// Uniform scale plus translation that fits the source space into a
/// `width × height` box with the y axis flipped, centering the leftover
/// space on the short axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalingTransform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl ScalingTransform {
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        let source_w = SOURCE_MAX.x - SOURCE_MIN.x;
        let source_h = SOURCE_MAX.y - SOURCE_MIN.y;
        let effective_w = width - 2.0 * padding;
        let effective_h = height - 2.0 * padding;
        let scale = (effective_w / source_w).min(effective_h / source_h);

        let x_centering = padding + (effective_w - scale * source_w) / 2.0;
        let y_centering = padding + (effective_h - scale * source_h) / 2.0;
        let x_offset = -SOURCE_MIN.x * scale + x_centering;
        let y_offset = -SOURCE_MIN.y * scale + y_centering;

        Self {
            x: x_offset,
            y: height - y_offset,
            scale,
        }
    }

    /// Maps a source point into box-local coordinates (y down).
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.x + self.scale * p.x, self.y - self.scale * p.y)
    }

    /// Left edge of the mapped source box, relative to the target box.
    pub fn content_left(&self) -> f32 {
        self.apply(SOURCE_MIN).x
    }

    pub fn content_right(&self) -> f32 {
        self.apply(SOURCE_MAX).x
    }
}

/// How much of a character to draw and how.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlaySpec {
    /// Number of leading strokes to include; `None` means all of them.
    pub cutoff: Option<usize>,
    pub opacity: f32,
    pub size: f32,
    pub color: Rgb,
}

impl OverlaySpec {
    pub fn full(size: f32, color: Rgb) -> Self {
        Self {
            cutoff: None,
            opacity: 1.0,
            size,
            color,
        }
    }

    pub fn partial(size: f32, cutoff: usize, opacity: f32, color: Rgb) -> Self {
        Self {
            cutoff: Some(cutoff),
            opacity,
            size,
            color,
        }
    }
}

/// Filled stroke outlines ready for the sink, in page layout coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub origin: Point,
    pub size: f32,
    pub stroke_count: usize,
    pub opacity: f32,
    pub color: Rgb,
    pub strokes: Vec<Vec<PathSegment>>,
}

/// Scales strokes `[0, cutoff)` into a `size × size` box at `origin`, in
/// writing order.
pub fn build_overlay(strokes: &CharacterStrokes, origin: Point, spec: OverlaySpec) -> Overlay {
    let transform = ScalingTransform::new(spec.size, spec.size, OVERLAY_PADDING);
    let limit = spec
        .cutoff
        .map_or(strokes.stroke_count(), |c| c.min(strokes.stroke_count()));

    let paths = strokes.strokes[..limit]
        .iter()
        .map(|stroke| {
            stroke
                .segments
                .iter()
                .map(|seg| {
                    seg.map(|p| {
                        let local = transform.apply(p);
                        Point::new(origin.x + local.x, origin.y + local.y)
                    })
                })
                .collect()
        })
        .collect();

    Overlay {
        origin,
        size: spec.size,
        stroke_count: limit,
        opacity: spec.opacity,
        color: spec.color,
        strokes: paths,
    }
}
