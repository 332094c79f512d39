mod grid;
mod hint;
mod overlay;

pub use grid::{GridColors, draw_grid_cell};
pub use hint::{HintStrip, build_hint_strip};
pub use overlay::{
    OVERLAY_PADDING, Overlay, OverlaySpec, ScalingTransform, SOURCE_MAX, SOURCE_MIN,
    TRACE_OPACITY, build_overlay,
};

use crate::model::{CharacterStrokes, Point};
use crate::profile::GeometryProfile;

/// Which extras accompany the practice rows. Built once per run through
/// [`LayoutMode::new`], so tracing and hints can never both be on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutMode {
    tracing: bool,
    hints: bool,
}

impl LayoutMode {
    /// Tracing takes precedence: asking for both drops the hint strip.
    pub fn new(tracing: bool, hints: bool) -> Self {
        if tracing && hints {
            log::info!("Tracing enabled, hint strip disabled");
        }
        Self {
            tracing,
            hints: hints && !tracing,
        }
    }

    pub fn tracing(self) -> bool {
        self.tracing
    }

    pub fn hints(self) -> bool {
        self.hints
    }
}

/// Rows already emitted on the current page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageCursor {
    pub row_in_page: usize,
}

impl PageCursor {
    pub const fn new() -> Self {
        Self { row_in_page: 0 }
    }

    /// Applies the page-break rule ahead of a row. Returns the cursor to
    /// place the row at and whether a new page has to be started first.
    fn before_row(self, rows_per_page: usize) -> (PageCursor, bool) {
        if self.row_in_page > 0 && self.row_in_page % rows_per_page == 0 {
            (PageCursor::new(), true)
        } else {
            (self, false)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellContent {
    /// The complete character, full opacity.
    Reference,
    /// The first `cutoff` strokes, dimmed for tracing.
    Trace { cutoff: usize },
    /// Guide lines only.
    Blank,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPlacement {
    pub row: usize,
    pub column: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub content: CellContent,
}

impl CellPlacement {
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Top-left corner of the hint strip drawn above a character's first row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HintAnchor {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    pub page_break_before: bool,
    pub page_row: usize,
    pub y: f32,
    pub cells: Vec<CellPlacement>,
    pub hint: Option<HintAnchor>,
}

/// Rows a character with `stroke_count` strokes occupies. Depends only on
/// the character, so it can be computed ahead of placement.
pub fn row_count(stroke_count: usize, profile: &GeometryProfile, mode: LayoutMode) -> usize {
    if mode.tracing() {
        (stroke_count + 1).div_ceil(profile.grid_count_per_line)
    } else {
        1
    }
}

/// Top edge of the grid row at `page_row`. In hint mode every row above it
/// also reserves a hint band.
pub fn row_y(page_row: usize, profile: &GeometryProfile, mode: LayoutMode) -> f32 {
    let rows = page_row as f32;
    let mut y = profile.margin_top + rows * (profile.grid_size + profile.row_margin);
    if mode.hints() {
        y += rows * profile.hint_band();
    }
    y
}

pub fn cell_x(column: usize, profile: &GeometryProfile) -> f32 {
    profile.margin_left + column as f32 * profile.cell_step()
}

pub fn layout_character(
    cursor: PageCursor,
    strokes: &CharacterStrokes,
    profile: &GeometryProfile,
    mode: LayoutMode,
) -> (PageCursor, Vec<RowLayout>) {
    layout_rows(cursor, strokes.stroke_count(), profile, mode)
}

/// Lays out the row block of one character starting at `cursor`.
///
/// The page-break rule is evaluated before every row, so a character's rows
/// may straddle a page boundary. Cell `(i, g)` holds stroke number
/// `i * grid_count_per_line + g`: `(0, 0)` is the reference character, later
/// cells up to `stroke_count` are traces in tracing mode, the rest are blank.
pub fn layout_rows(
    cursor: PageCursor,
    stroke_count: usize,
    profile: &GeometryProfile,
    mode: LayoutMode,
) -> (PageCursor, Vec<RowLayout>) {
    let rows_per_page = profile.rows_per_page(mode.hints());
    let per_line = profile.grid_count_per_line;
    let mut cursor = cursor;
    let mut rows = Vec::with_capacity(row_count(stroke_count, profile, mode));

    for i in 0..row_count(stroke_count, profile, mode) {
        let (placed, page_break_before) = cursor.before_row(rows_per_page);
        cursor = placed;
        let page_row = cursor.row_in_page;
        let y = row_y(page_row, profile, mode);

        let cells = (0..per_line)
            .map(|g| {
                let stroke_number = i * per_line + g;
                let content = if stroke_number == 0 {
                    CellContent::Reference
                } else if mode.tracing() && stroke_number <= stroke_count {
                    CellContent::Trace { cutoff: stroke_number }
                } else {
                    CellContent::Blank
                };
                CellPlacement {
                    row: i,
                    column: g,
                    x: cell_x(g, profile),
                    y,
                    size: profile.grid_size,
                    content,
                }
            })
            .collect();

        let hint = (i == 0 && mode.hints()).then(|| HintAnchor {
            x: profile.margin_left,
            y: y - profile.hint_band(),
        });

        log::debug!(
            "row {i}: page_row={page_row} y={y:.1}{}",
            if page_break_before { " (new page)" } else { "" }
        );

        rows.push(RowLayout {
            page_break_before,
            page_row,
            y,
            cells,
            hint,
        });
        cursor.row_in_page += 1;
    }

    (cursor, rows)
}
