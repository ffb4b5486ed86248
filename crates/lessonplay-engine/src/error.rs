use std::fmt;

/// Result type for lessonplay-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// CSV reading or writing failed
    Csv(csv::Error),

    /// Per-file transcript layer failed
    Transcript(lessonplay_transcripts::Error),

    /// An input table is missing required columns or holds unusable values
    Schema(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Transcript(err) => write!(f, "Transcript error: {}", err),
            Error::Schema(msg) => write!(f, "Schema error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Transcript(err) => Some(err),
            Error::Schema(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<lessonplay_transcripts::Error> for Error {
    fn from(err: lessonplay_transcripts::Error) -> Self {
        Error::Transcript(err)
    }
}
