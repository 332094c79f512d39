#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown paper profile '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("invalid paper profile '{0}': {1}")]
    InvalidProfile(String, String),

    #[error("no stroke data for '{0}'")]
    CharacterNotFound(char),

    #[error("stroke data for '{0}' has no strokes")]
    EmptyStrokes(char),

    #[error("invalid stroke data for '{character}': {reason}")]
    InvalidStrokeData { character: char, reason: String },
}

impl Error {
    /// Per-character failures the worksheet skips over instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::CharacterNotFound(_) | Error::EmptyStrokes(_))
    }
}
