/// A position in layout space: points, origin at the top-left of the page,
/// y growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0x00, 0x00, 0x00]);
    pub const LIGHT_GRAY: Rgb = Rgb([0xdd, 0xdd, 0xdd]);

    pub fn to_unit(self) -> (f32, f32, f32) {
        let [r, g, b] = self.0;
        (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathSegment {
    pub fn map(self, f: impl Fn(Point) -> Point) -> PathSegment {
        match self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(f(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(f(p)),
            PathSegment::CubicTo { ctrl1, ctrl2, to } => PathSegment::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            PathSegment::Close => PathSegment::Close,
        }
    }
}

/// One stroke outline, in the stroke data's native coordinate space.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokePath {
    pub segments: Vec<PathSegment>,
}

/// The strokes of one character, in canonical writing order.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterStrokes {
    pub character: char,
    pub strokes: Vec<StrokePath>,
}

impl CharacterStrokes {
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }
}

/// True for CJK ideographs (the unified block, extensions A and B, and the
/// compatibility block).
pub fn is_hanzi(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF
        | 0x3400..=0x4DBF
        | 0x20000..=0x2A6DF
        | 0xF900..=0xFAFF
    )
}

/// Splits the input into practice characters, dropping anything that is not
/// a hanzi (punctuation, latin letters, whitespace).
pub fn hanzi_chars(text: &str) -> Vec<char> {
    text.chars()
        .filter(|&c| {
            let keep = is_hanzi(c);
            if !keep {
                log::debug!("Dropping non-hanzi input {c:?} (U+{:04X})", c as u32);
            }
            keep
        })
        .collect()
}
