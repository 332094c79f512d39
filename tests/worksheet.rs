mod common;

use hanzi_practice_pdf::layout::{LayoutMode, TRACE_OPACITY};
use hanzi_practice_pdf::{
    CharacterStrokes, DrawOp, Error, GeometryProfile, MemorySource, RecordingSink, StrokeSource,
    WorksheetConfig, build_worksheet, generate_worksheet, render_worksheet,
};

fn config(mode: LayoutMode) -> WorksheetConfig {
    common::init_logging();
    WorksheetConfig::new(common::a6(), mode)
}

fn overlays(ops: &[DrawOp]) -> Vec<(usize, f32)> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Overlay {
                stroke_count,
                opacity,
                ..
            } => Some((*stroke_count, *opacity)),
            _ => None,
        })
        .collect()
}

fn line_count(ops: &[DrawOp]) -> usize {
    ops.iter()
        .filter(|op| matches!(op, DrawOp::Line { .. }))
        .count()
}

#[test]
fn plain_row_has_reference_and_blank_grids() {
    let source = common::source_with(&[('十', 2)]);
    let (ops, report) = build_worksheet(
        &['十'],
        &config(LayoutMode::new(false, false)),
        &source,
        RecordingSink::new(),
    )
    .unwrap();

    assert_eq!(report.rows, 1);
    assert_eq!(report.pages, 1);
    assert_eq!(line_count(&ops), 7 * 8);
    assert_eq!(overlays(&ops), vec![(2, 1.0)]);
}

#[test]
fn tracing_row_dims_partial_characters() {
    let source = common::source_with(&[('三', 3)]);
    let (ops, report) = build_worksheet(
        &['三'],
        &config(LayoutMode::new(true, false)),
        &source,
        RecordingSink::new(),
    )
    .unwrap();

    assert_eq!(report.rows, 1);
    assert_eq!(
        overlays(&ops),
        vec![(3, 1.0), (1, TRACE_OPACITY), (2, TRACE_OPACITY), (3, TRACE_OPACITY)]
    );
}

#[test]
fn hint_strip_precedes_the_practice_row() {
    let source = common::source_with(&[('三', 3)]);
    let (ops, _) = build_worksheet(
        &['三'],
        &config(LayoutMode::new(false, true)),
        &source,
        RecordingSink::new(),
    )
    .unwrap();

    let drawn: Vec<usize> = overlays(&ops).iter().map(|(n, _)| *n).collect();
    assert_eq!(drawn, vec![0, 1, 2, 3, 3]);
}

#[test]
fn missing_character_is_skipped_without_disturbing_layout() {
    let source = common::source_with(&[('一', 1), ('三', 3)]);
    let cfg = config(LayoutMode::new(true, false));

    let (with_gap, report) =
        build_worksheet(&['一', '二', '三'], &cfg, &source, RecordingSink::new()).unwrap();
    let (without, _) = build_worksheet(&['一', '三'], &cfg, &source, RecordingSink::new()).unwrap();

    assert_eq!(with_gap, without);
    assert_eq!(report.rendered, vec!['一', '三']);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].0, '二');
}

#[test]
fn zero_stroke_character_is_skipped() {
    let mut source = common::source_with(&[('一', 1)]);
    source.insert(CharacterStrokes {
        character: '口',
        strokes: Vec::new(),
    });

    let (_, report) = build_worksheet(
        &['口', '一'],
        &config(LayoutMode::new(false, false)),
        &source,
        RecordingSink::new(),
    )
    .unwrap();
    assert_eq!(report.rendered, vec!['一']);
    assert_eq!(report.skipped[0].0, '口');
    assert_eq!(report.rows, 1);
}

struct BrokenSource;

impl StrokeSource for BrokenSource {
    fn lookup(&self, character: char) -> Result<CharacterStrokes, Error> {
        Err(Error::InvalidStrokeData {
            character,
            reason: "corrupt".into(),
        })
    }
}

#[test]
fn corrupt_stroke_data_aborts() {
    let result = build_worksheet(
        &['一'],
        &config(LayoutMode::new(false, false)),
        &BrokenSource,
        RecordingSink::new(),
    );
    assert!(matches!(result, Err(Error::InvalidStrokeData { .. })));
}

#[test]
fn empty_input_yields_a_single_blank_page() {
    let source = MemorySource::new();
    let (ops, report) = build_worksheet(
        &[],
        &config(LayoutMode::new(true, false)),
        &source,
        RecordingSink::new(),
    )
    .unwrap();
    assert!(ops.is_empty());
    assert_eq!(report.pages, 1);

    let (pdf, _) = render_worksheet("", &config(LayoutMode::new(true, false)), &source).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
    assert_eq!(common::pdf_page_count(&pdf), 1);
}

#[test]
fn page_breaks_reach_the_sink() {
    let text = "一二三四五六七八九十";
    let entries: Vec<(char, usize)> = text.chars().map(|c| (c, 3)).collect();
    let source = common::source_with(&entries);
    let chars: Vec<char> = text.chars().collect();

    let (ops, report) = build_worksheet(
        &chars,
        &config(LayoutMode::new(false, false)),
        &source,
        RecordingSink::new(),
    )
    .unwrap();
    assert_eq!(report.rows, 10);
    assert_eq!(report.pages, 2);
    assert_eq!(ops.iter().filter(|op| **op == DrawOp::NewPage).count(), 1);

    let (pdf, pdf_report) =
        render_worksheet(text, &config(LayoutMode::new(false, false)), &source).unwrap();
    assert_eq!(pdf_report, report);
    assert_eq!(common::pdf_page_count(&pdf), 2);
}

#[test]
fn non_hanzi_input_is_ignored() {
    let source = common::source_with(&[('一', 1), ('十', 2)]);
    let (_, report) =
        render_worksheet("a 一, 十!", &config(LayoutMode::new(false, false)), &source).unwrap();
    assert_eq!(report.rendered, vec!['一', '十']);
    assert!(report.skipped.is_empty());
}

#[test]
fn pdf_output_is_reproducible() {
    let source = common::source_with(&[('一', 1), ('十', 2), ('王', 4)]);
    let cfg = config(LayoutMode::new(true, false));
    let (a, _) = render_worksheet("一十王", &cfg, &source).unwrap();
    let (b, _) = render_worksheet("一十王", &cfg, &source).unwrap();
    assert_eq!(a, b);
}

#[test]
fn generate_writes_pdf_file() {
    let source = common::source_with(&[('一', 1)]);
    let out = common::temp_output("worksheet.pdf");
    let cfg = WorksheetConfig::new(
        GeometryProfile::lookup("A4").unwrap(),
        LayoutMode::new(false, true),
    );

    let report = generate_worksheet("一", &cfg, &source, &out).unwrap();
    assert_eq!(report.rendered, vec!['一']);

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(common::pdf_page_count(&bytes), 1);
}

#[test]
fn unwritable_output_is_fatal() {
    let source = common::source_with(&[('一', 1)]);
    let out = common::temp_output("unused.pdf")
        .with_file_name("missing")
        .join("nested")
        .join("worksheet.pdf");

    let result = generate_worksheet("一", &config(LayoutMode::new(false, false)), &source, &out);
    match result {
        Err(e @ Error::Io(_)) => {
            assert!(!e.is_recoverable());
            assert!(e.to_string().contains("worksheet.pdf"), "{e}");
        }
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn unknown_paper_is_rejected() {
    let err = GeometryProfile::lookup("b5").unwrap_err();
    assert!(matches!(err, Error::UnknownProfile { .. }));
    assert!(err.to_string().contains("a6"));
}

#[test]
fn degenerate_profile_fails_validation() {
    let profile = GeometryProfile {
        grid_count_per_line: 0,
        ..common::a6()
    };
    assert!(matches!(profile.validate(), Err(Error::InvalidProfile(..))));

    let profile = GeometryProfile {
        grid_size: -1.0,
        ..common::a6()
    };
    assert!(profile.validate().is_err());

    for profile in hanzi_practice_pdf::BUILTIN_PROFILES {
        profile.validate().unwrap();
    }
}

#[test]
fn builtin_profiles_fit_their_pages() {
    for p in hanzi_practice_pdf::BUILTIN_PROFILES {
        let width = p.margin_left
            + p.grid_count_per_line as f32 * p.grid_size
            + (p.grid_count_per_line - 1) as f32 * p.grid_spacing;
        assert!(width <= p.page_width, "{} rows too wide", p.name);

        let plain_rows = p.rows_per_page_without_hint as f32;
        let plain_bottom = p.margin_top + plain_rows * p.grid_size + (plain_rows - 1.0) * p.row_margin;
        assert!(plain_bottom <= p.page_height, "{} too many plain rows", p.name);

        let hint_rows = p.rows_per_page_with_hint as f32;
        let hint_bottom = p.margin_top
            + hint_rows * p.grid_size
            + (hint_rows - 1.0) * (p.row_margin + p.hint_band());
        assert!(hint_bottom <= p.page_height, "{} too many hint rows", p.name);
        assert!(p.margin_top >= p.hint_band(), "{} first hint off page", p.name);
    }
}
