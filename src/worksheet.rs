use crate::error::Error;
use crate::layout::{
    CellContent, GridColors, LayoutMode, OverlaySpec, PageCursor, RowLayout, TRACE_OPACITY,
    build_hint_strip, build_overlay, draw_grid_cell, layout_character,
};
use crate::model::{CharacterStrokes, Rgb};
use crate::profile::GeometryProfile;
use crate::render::RenderSink;
use crate::strokes::StrokeSource;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorksheetConfig {
    pub profile: GeometryProfile,
    pub mode: LayoutMode,
    pub grid_colors: GridColors,
    pub stroke_color: Rgb,
}

impl WorksheetConfig {
    pub fn new(profile: GeometryProfile, mode: LayoutMode) -> Self {
        Self {
            profile,
            mode,
            grid_colors: GridColors::default(),
            stroke_color: Rgb::BLACK,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorksheetReport {
    pub rendered: Vec<char>,
    /// Characters left out, with the reason they were skipped.
    pub skipped: Vec<(char, String)>,
    pub rows: usize,
    pub pages: usize,
}

/// Lays out and paints every character in order, then finalizes the sink.
///
/// Characters without stroke data (or with zero strokes) are skipped with a
/// warning and leave the page cursor untouched; any other error aborts.
pub fn build_worksheet<S: RenderSink>(
    characters: &[char],
    config: &WorksheetConfig,
    source: &dyn StrokeSource,
    mut sink: S,
) -> Result<(S::Output, WorksheetReport), Error> {
    let mut report = WorksheetReport {
        pages: 1,
        ..WorksheetReport::default()
    };
    let mut cursor = PageCursor::new();

    for &ch in characters {
        let strokes = match resolve(source, ch) {
            Ok(strokes) => strokes,
            Err(e) if e.is_recoverable() => {
                log::warn!("Skipping '{ch}': {e}");
                report.skipped.push((ch, e.to_string()));
                continue;
            }
            Err(e) => return Err(e),
        };

        let (next, rows) = layout_character(cursor, &strokes, &config.profile, config.mode);
        log::debug!(
            "'{ch}': {} strokes → {} rows, page row {} → {}",
            strokes.stroke_count(),
            rows.len(),
            cursor.row_in_page,
            next.row_in_page
        );
        for row in &rows {
            render_row(&mut sink, row, &strokes, config, &mut report)?;
        }
        cursor = next;
        report.rows += rows.len();
        report.rendered.push(ch);
    }

    let output = sink.finish()?;
    Ok((output, report))
}

fn resolve(source: &dyn StrokeSource, ch: char) -> Result<CharacterStrokes, Error> {
    let strokes = source.lookup(ch)?;
    if strokes.strokes.is_empty() {
        return Err(Error::EmptyStrokes(ch));
    }
    Ok(strokes)
}

fn render_row<S: RenderSink>(
    sink: &mut S,
    row: &RowLayout,
    strokes: &CharacterStrokes,
    config: &WorksheetConfig,
    report: &mut WorksheetReport,
) -> Result<(), Error> {
    let profile = &config.profile;

    if row.page_break_before {
        sink.add_page()?;
        report.pages += 1;
    }

    if let Some(anchor) = row.hint {
        let strip = build_hint_strip(strokes, anchor, profile, config.stroke_color);
        for overlay in &strip.overlays {
            sink.draw_overlay(overlay)?;
        }
    }

    for cell in &row.cells {
        draw_grid_cell(sink, cell.x, cell.y, cell.size, config.grid_colors)?;

        let spec = match cell.content {
            CellContent::Reference => {
                OverlaySpec::full(profile.character_size, config.stroke_color)
            }
            CellContent::Trace { cutoff } => OverlaySpec::partial(
                profile.character_size,
                cutoff,
                TRACE_OPACITY,
                config.stroke_color,
            ),
            CellContent::Blank => continue,
        };
        sink.draw_overlay(&build_overlay(strokes, cell.origin(), spec))?;
    }
    Ok(())
}
