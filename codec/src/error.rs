//! Error types for token decoding.

use std::fmt;

use bitpack::BitError;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding a token.
///
/// Encoding is total; only decoding of an untrusted token can fail. Callers
/// recovering shared data should treat every variant as "no recoverable
/// data" rather than a fatal condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The symbol stream itself is unreadable: a character outside the
    /// alphabet, or a stream that ends mid-field.
    Symbols(BitError),

    /// A dictionary reference to a code that was never assigned and is not
    /// the self-reference case.
    UnknownCode {
        /// The code found in the stream.
        code: u32,
        /// The next code the dictionary would assign.
        next_code: u32,
    },

    /// The stream opened with a 2-bit marker that names neither a literal
    /// width nor the end of the stream.
    InvalidLiteralMarker {
        /// The marker value read.
        marker: u32,
    },

    /// The recovered code units do not form valid UTF-16.
    InvalidUtf16,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbols(err) => write!(f, "symbol stream error: {err}"),
            Self::UnknownCode { code, next_code } => {
                write!(
                    f,
                    "reference to unassigned dictionary code {code} (next would be {next_code})"
                )
            }
            Self::InvalidLiteralMarker { marker } => {
                write!(f, "stream opens with invalid literal marker {marker}")
            }
            Self::InvalidUtf16 => {
                write!(f, "recovered code units are not valid UTF-16")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Symbols(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BitError> for DecodeError {
    fn from(err: BitError) -> Self {
        Self::Symbols(err)
    }
}
