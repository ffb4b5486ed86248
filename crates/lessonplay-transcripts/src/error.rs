use std::fmt;
use std::path::PathBuf;

/// Result type for lessonplay-transcripts operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the transcripts layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// CSV parsing failed
    Csv(csv::Error),

    /// Directory traversal failed
    WalkDir(walkdir::Error),

    /// The data root to scan does not exist
    MissingRoot(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::WalkDir(err) => write!(f, "Directory traversal error: {}", err),
            Error::MissingRoot(path) => write!(f, "data root not found: {}", path.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::WalkDir(err) => Some(err),
            Error::MissingRoot(_) => None,
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

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err)
    }
}
