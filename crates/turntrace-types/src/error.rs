use std::fmt;

/// Result type for turntrace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a whole reconstruction call.
///
/// Structural oddities inside otherwise valid lines are never reported here;
/// they are recovered locally by treating the event as inert.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed while draining the input
    Io(std::io::Error),

    /// A line is not valid JSON (1-based line number)
    MalformedLine {
        line: usize,
        source: serde_json::Error,
    },

    /// A line exceeds the configured byte ceiling (1-based line number)
    LineTooLong { line: usize, limit: usize },
}

impl Error {
    /// 1-based line number of the offending input line, if the failure has one
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedLine { line, .. } | Error::LineTooLong { line, .. } => Some(*line),
            Error::Io(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::MalformedLine { line, source } => {
                write!(f, "Malformed JSON on line {}: {}", line, source)
            }
            Error::LineTooLong { line, limit } => {
                write!(f, "Line {} exceeds the {} byte limit", line, limit)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::MalformedLine { source, .. } => Some(source),
            Error::LineTooLong { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
