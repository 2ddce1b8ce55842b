use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while shifting subtitles
#[derive(Debug)]
pub enum SrtShiftError {
    Timestamp(TimestampError),
    Delay(DelayError),
    Other(io::Error),
}

/// A timestamp that does not follow `HH:MM:SS,mmm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampError {
    pub text: String,
}

impl TimestampError {
    /// Create a new error for the offending text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Delay values that cannot be expressed in milliseconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayError {
    pub message: String,
}

impl DelayError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SrtShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SrtShiftError::Other(err) => write!(f, "I/O error: {}", err),
            SrtShiftError::Timestamp(err) => write!(f, "{}", err),
            SrtShiftError::Delay(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid timestamp format: {}", self.text)
    }
}

impl fmt::Display for DelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid delay: {}", self.message)
    }
}

impl Error for SrtShiftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SrtShiftError::Other(err) => Some(err),
            SrtShiftError::Timestamp(err) => Some(err),
            SrtShiftError::Delay(err) => Some(err),
        }
    }
}
impl Error for TimestampError {}
impl Error for DelayError {}

// Conversion implementations
impl From<io::Error> for SrtShiftError {
    fn from(err: io::Error) -> Self {
        SrtShiftError::Other(err)
    }
}

impl From<TimestampError> for SrtShiftError {
    fn from(err: TimestampError) -> Self {
        SrtShiftError::Timestamp(err)
    }
}

impl From<DelayError> for SrtShiftError {
    fn from(err: DelayError) -> Self {
        SrtShiftError::Delay(err)
    }
}

// Conversion to io::Error for callers working in io::Result
impl From<SrtShiftError> for io::Error {
    fn from(err: SrtShiftError) -> Self {
        match err {
            SrtShiftError::Other(inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

// Type alias for Result with SrtShiftError
pub type SrtShiftResult<T> = Result<T, SrtShiftError>;
