use crate::error::Error;
use crate::layout::Overlay;
use crate::model::{Point, Rgb};

/// Append-only drawing surface the worksheet is painted onto. Coordinates are
/// in layout space (points, top-left origin). The document starts with one
/// page; `finish` consumes the sink so it can only be finalized once.
pub trait RenderSink {
    type Output;

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), Error>;

    /// Fills every stroke outline of the overlay at its opacity.
    fn draw_overlay(&mut self, overlay: &Overlay) -> Result<(), Error>;

    fn add_page(&mut self) -> Result<(), Error>;

    fn finish(self) -> Result<Self::Output, Error>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Line { from: Point, to: Point, color: Rgb },
    Overlay {
        origin: Point,
        size: f32,
        stroke_count: usize,
        opacity: f32,
    },
    NewPage,
}

/// Records draw calls instead of painting them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    ops: Vec<DrawOp>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for RecordingSink {
    type Output = Vec<DrawOp>;

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), Error> {
        self.ops.push(DrawOp::Line { from, to, color });
        Ok(())
    }

    fn draw_overlay(&mut self, overlay: &Overlay) -> Result<(), Error> {
        self.ops.push(DrawOp::Overlay {
            origin: overlay.origin,
            size: overlay.size,
            stroke_count: overlay.stroke_count,
            opacity: overlay.opacity,
        });
        Ok(())
    }

    fn add_page(&mut self) -> Result<(), Error> {
        self.ops.push(DrawOp::NewPage);
        Ok(())
    }

    fn finish(self) -> Result<Vec<DrawOp>, Error> {
        Ok(self.ops)
    }
}
