use crate::error::Error;
use crate::model::{Point, Rgb};
use crate::render::RenderSink;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridColors {
    pub guide: Rgb,
    pub outline: Rgb,
}

impl Default for GridColors {
    fn default() -> Self {
        Self {
            guide: Rgb::LIGHT_GRAY,
            outline: Rgb::BLACK,
        }
    }
}

/// Draws one practice cell: both diagonals and the two midlines in the
/// guide color, then the outline on top.
pub fn draw_grid_cell<S: RenderSink>(
    sink: &mut S,
    x: f32,
    y: f32,
    size: f32,
    colors: GridColors,
) -> Result<(), Error> {
    let half = size / 2.0;
    let p = |dx: f32, dy: f32| Point::new(x + dx, y + dy);

    let guides = [
        (p(0.0, 0.0), p(size, size)),
        (p(size, 0.0), p(0.0, size)),
        (p(half, 0.0), p(half, size)),
        (p(0.0, half), p(size, half)),
    ];
    for (from, to) in guides {
        sink.draw_line(from, to, colors.guide)?;
    }

    let outline = [
        (p(0.0, size), p(size, size)),
        (p(0.0, 0.0), p(size, 0.0)),
        (p(0.0, 0.0), p(0.0, size)),
        (p(size, 0.0), p(size, size)),
    ];
    for (from, to) in outline {
        sink.draw_line(from, to, colors.outline)?;
    }
    Ok(())
}
