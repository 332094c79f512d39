#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use hanzi_practice_pdf::{CharacterStrokes, GeometryProfile, MemorySource, parse_stroke_path};

pub const FIXTURE_STROKES: &str = "tests/fixtures/strokes";

/// Routes `log` output through the test harness; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn a6() -> GeometryProfile {
    GeometryProfile::lookup("a6").expect("a6 profile")
}

/// A thin horizontal bar; stroke `i` sits lower than stroke `i - 1`, so
/// stroke order is visible in the first point of every path.
pub fn bar_path(i: usize) -> String {
    let top = 850.0 - (i as f32 * 30.0);
    format!(
        "M {x0} {top} L {x1} {top} L {x1} {bottom} L {x0} {bottom} Z",
        x0 = 100 + i,
        x1 = 900,
        bottom = top - 20.0,
    )
}

pub fn strokes(character: char, count: usize) -> CharacterStrokes {
    CharacterStrokes {
        character,
        strokes: (0..count)
            .map(|i| parse_stroke_path(character, &bar_path(i)).expect("valid bar path"))
            .collect(),
    }
}

pub fn source_with(entries: &[(char, usize)]) -> MemorySource {
    let mut source = MemorySource::new();
    for &(ch, count) in entries {
        source.insert(strokes(ch, count));
    }
    source
}

/// Counts `/Type /Page` dictionaries, excluding the `/Type /Pages` tree node.
pub fn pdf_page_count(bytes: &[u8]) -> usize {
    let needle = b"/Type /Page";
    bytes
        .windows(needle.len() + 1)
        .filter(|w| w.starts_with(needle) && w[needle.len()] != b's')
        .count()
}

pub fn temp_output(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!("hanzi-practice-pdf-{}-{nanos}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir.join(name)
}

pub fn fixture_dir() -> &'static Path {
    Path::new(FIXTURE_STROKES)
}
