use crate::model::{CharacterStrokes, Point, Rgb};
use crate::profile::GeometryProfile;

use super::HintAnchor;
use super::overlay::{Overlay, OverlaySpec, build_overlay};

/// Miniature overlays revealing 0, 1, ..., N strokes, left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct HintStrip {
    pub overlays: Vec<Overlay>,
}

impl HintStrip {
    pub fn step(profile: &GeometryProfile) -> f32 {
        profile.hint_size + profile.hint_spacing
    }

    /// Right edge of the last miniature, in page coordinates.
    pub fn right_edge(&self) -> f32 {
        self.overlays
            .last()
            .map_or(0.0, |o| o.origin.x + o.size)
    }
}

pub fn build_hint_strip(
    strokes: &CharacterStrokes,
    anchor: HintAnchor,
    profile: &GeometryProfile,
    color: Rgb,
) -> HintStrip {
    let step = HintStrip::step(profile);
    let overlays = (0..=strokes.stroke_count())
        .map(|i| {
            let origin = Point::new(
                anchor.x + i as f32 * step - profile.hint_x_correction,
                anchor.y,
            );
            build_overlay(
                strokes,
                origin,
                OverlaySpec::partial(profile.hint_size, i, 1.0, color),
            )
        })
        .collect();
    let strip = HintStrip { overlays };

    // Long characters are not wrapped; the strip runs past the margin.
    let right = strip.right_edge();
    if right > profile.page_width {
        log::warn!(
            "Hint strip for '{}' ends at x={right:.1}, past the {:.1}pt page width",
            strokes.character,
            profile.page_width
        );
    }
    strip
}
