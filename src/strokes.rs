use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

use crate::error::Error;
use crate::model::{CharacterStrokes, PathSegment, Point, StrokePath};

/// Resolves the stroke outlines of a character.
///
/// A miss must be reported as [`Error::CharacterNotFound`] so callers can
/// skip the character; every other error is treated as fatal.
pub trait StrokeSource {
    fn lookup(&self, character: char) -> Result<CharacterStrokes, Error>;
}

/// On-disk layout of a hanzi-writer-data character file. `medians` and
/// `radStrokes` are present in the data but unused here.
#[derive(Deserialize)]
struct CharacterFile {
    strokes: Vec<String>,
}

/// Reads `<dir>/<character>.json` files in the hanzi-writer-data format.
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, character: char) -> PathBuf {
        self.dir.join(format!("{character}.json"))
    }
}

impl StrokeSource for DirectorySource {
    fn lookup(&self, character: char) -> Result<CharacterStrokes, Error> {
        let path = self.file_for(character);
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::CharacterNotFound(character));
            }
            Err(e) => {
                return Err(Error::Io(std::io::Error::new(
                    e.kind(),
                    format!("{}: {}", e, path.display()),
                )));
            }
        };
        parse_character_json(character, &json)
    }
}

/// Stroke data held in memory, keyed by character.
#[derive(Default)]
pub struct MemorySource {
    characters: HashMap<char, CharacterStrokes>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, strokes: CharacterStrokes) {
        self.characters.insert(strokes.character, strokes);
    }

    /// Registers a character from raw SVG path strings, one per stroke.
    pub fn insert_svg<S: AsRef<str>>(&mut self, character: char, paths: &[S]) -> Result<(), Error> {
        let strokes = paths
            .iter()
            .map(|d| parse_stroke_path(character, d.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.insert(CharacterStrokes { character, strokes });
        Ok(())
    }
}

impl StrokeSource for MemorySource {
    fn lookup(&self, character: char) -> Result<CharacterStrokes, Error> {
        self.characters
            .get(&character)
            .cloned()
            .ok_or(Error::CharacterNotFound(character))
    }
}

pub fn parse_character_json(character: char, json: &str) -> Result<CharacterStrokes, Error> {
    let file: CharacterFile =
        serde_json::from_str(json).map_err(|e| Error::InvalidStrokeData {
            character,
            reason: e.to_string(),
        })?;
    let strokes = file
        .strokes
        .iter()
        .map(|d| parse_stroke_path(character, d))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CharacterStrokes { character, strokes })
}

/// Parses one SVG path into absolute move/line/cubic segments. Relative,
/// shorthand and arc commands are normalized by the simplifying parser;
/// quadratic curves are raised to cubics.
pub fn parse_stroke_path(character: char, d: &str) -> Result<StrokePath, Error> {
    let mut segments = Vec::new();
    let mut current = Point::new(0.0, 0.0);
    let mut subpath_start = current;

    for segment in SimplifyingPathParser::from(d) {
        let segment = segment.map_err(|e| Error::InvalidStrokeData {
            character,
            reason: format!("invalid SVG path data: {e}"),
        })?;
        match segment {
            SimplePathSegment::MoveTo { x, y } => {
                current = Point::new(x as f32, y as f32);
                subpath_start = current;
                segments.push(PathSegment::MoveTo(current));
            }
            SimplePathSegment::LineTo { x, y } => {
                current = Point::new(x as f32, y as f32);
                segments.push(PathSegment::LineTo(current));
            }
            SimplePathSegment::CurveTo { x1, y1, x2, y2, x, y } => {
                let to = Point::new(x as f32, y as f32);
                segments.push(PathSegment::CubicTo {
                    ctrl1: Point::new(x1 as f32, y1 as f32),
                    ctrl2: Point::new(x2 as f32, y2 as f32),
                    to,
                });
                current = to;
            }
            SimplePathSegment::Quadratic { x1, y1, x, y } => {
                let ctrl = Point::new(x1 as f32, y1 as f32);
                let to = Point::new(x as f32, y as f32);
                segments.push(PathSegment::CubicTo {
                    ctrl1: Point::new(
                        current.x + 2.0 / 3.0 * (ctrl.x - current.x),
                        current.y + 2.0 / 3.0 * (ctrl.y - current.y),
                    ),
                    ctrl2: Point::new(
                        to.x + 2.0 / 3.0 * (ctrl.x - to.x),
                        to.y + 2.0 / 3.0 * (ctrl.y - to.y),
                    ),
                    to,
                });
                current = to;
            }
            SimplePathSegment::ClosePath => {
                segments.push(PathSegment::Close);
                current = subpath_start;
            }
        }
    }

    if segments.is_empty() {
        return Err(Error::InvalidStrokeData {
            character,
            reason: "empty stroke path".into(),
        });
    }
    Ok(StrokePath { segments })
}
