use crate::convert::Format;
use std::fmt;

/// Error raised while parsing, decoding, or rendering a UUID representation.
///
/// A failed conversion never touches generator state; every variant is
/// reported synchronously to the caller.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The input matched no known format by length or prefix and no format
    /// hint was given.
    UnrecognizedFormat,

    /// The input superficially matched a format but did not decode to
    /// exactly 16 bytes.
    MalformedInput {
        /// The format the input was decoded as.
        format: Format,
    },

    /// A character outside the chosen alphabet was found during base-N
    /// decoding.
    InvalidEncodingCharacter {
        /// The offending character.
        character: char,
    },

    /// The requested format has no rendering of the requested kind (e.g. a
    /// textual rendering of the binary format).
    UnsupportedFormat {
        /// The format requested.
        format: Format,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedFormat => f.write_str("could not recognize UUID format"),
            Self::MalformedInput { format } => {
                write!(f, "input does not decode to 16 bytes as {:?}", format)
            }
            Self::InvalidEncodingCharacter { character } => {
                write!(f, "invalid character in encoded UUID: {:?}", character)
            }
            Self::UnsupportedFormat { format } => {
                write!(f, "no textual rendering for {:?} format", format)
            }
        }
    }
}

impl std::error::Error for Error {}
