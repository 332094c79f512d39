mod error;
pub mod layout;
mod model;
mod pdf;
mod profile;
mod render;
mod strokes;
mod worksheet;

pub use error::Error;
pub use model::{CharacterStrokes, PathSegment, Point, Rgb, StrokePath, hanzi_chars, is_hanzi};
pub use pdf::PdfSink;
pub use profile::{BUILTIN_PROFILES, GeometryProfile};
pub use render::{DrawOp, RecordingSink, RenderSink};
pub use strokes::{
    DirectorySource, MemorySource, StrokeSource, parse_character_json, parse_stroke_path,
};
pub use worksheet::{WorksheetConfig, WorksheetReport, build_worksheet};

use std::path::Path;
use std::time::Instant;

/// Renders the hanzi found in `text` into PDF bytes.
pub fn render_worksheet(
    text: &str,
    config: &WorksheetConfig,
    source: &dyn StrokeSource,
) -> Result<(Vec<u8>, WorksheetReport), Error> {
    config.profile.validate()?;
    let characters = hanzi_chars(text);
    build_worksheet(&characters, config, source, PdfSink::new(&config.profile))
}

pub fn generate_worksheet(
    text: &str,
    config: &WorksheetConfig,
    source: &dyn StrokeSource,
    output: &Path,
) -> Result<WorksheetReport, Error> {
    let t0 = Instant::now();

    let (bytes, report) = render_worksheet(text, config, source)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", e, output.display()),
        ))
    })?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms ({} characters, {} skipped, {} rows, {} pages, {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        report.rendered.len(),
        report.skipped.len(),
        report.rows,
        report.pages,
        bytes.len(),
    );

    Ok(report)
}
