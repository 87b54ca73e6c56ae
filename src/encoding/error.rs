use std::{error, fmt, io};

use crate::network;

/// The reason why bytes or text could not be decoded into a neuron or network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer bytes are available than the encoding declares.
    Truncated { expected: usize, found: usize },
    /// More bytes are available than the encoding declares.
    TrailingBytes { expected: usize, found: usize },
    /// The text is not valid unpadded base32hex.
    InvalidText,
    /// A sensor or action name is not valid UTF-8.
    InvalidName,
    /// A network encoding declares a layer count other than two. Contains the declared count.
    LayerCount(usize),
    /// The four trailing bytes of a network encoding are not zero.
    Trailer,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Truncated { expected, found } => {
                write!(f, "truncated input: expected {} bytes, found {}", expected, found)
            }
            Self::TrailingBytes { expected, found } => {
                write!(f, "trailing bytes: expected {} bytes, found {}", expected, found)
            }
            Self::InvalidText => write!(f, "invalid base32hex text"),
            Self::InvalidName => write!(f, "name is not valid UTF-8"),
            Self::LayerCount(count) => write!(f, "expected 2 layers, found {}", count),
            Self::Trailer => write!(f, "invalid trailer"),
        }
    }
}

impl error::Error for DecodeError {}

/// An error while loading or saving a [`Neuron`][crate::Neuron] or [`Network`][crate::Network].
#[derive(Debug)]
pub enum Error {
    /// An error while reading from/writing to a stream or file.
    Io(io::Error),
    /// Malformed input.
    Decode(DecodeError),
    /// The decoded parts do not form a valid [`Network`][crate::Network].
    Network(network::Error),
    /// The encoded network is longer than its 16-bit length header can describe. Contains the
    /// payload length.
    PayloadTooLarge(usize),
    /// An error during JSON serialization or deserialization.
    #[cfg(feature = "json")]
    Serde(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {}", e),
            Self::Decode(e) => write!(f, "decode error: {}", e),
            Self::Network(e) => write!(f, "network error: {}", e),
            Self::PayloadTooLarge(len) => write!(
                f,
                "payload of {} bytes exceeds the maximum of {}",
                len,
                u16::MAX
            ),
            #[cfg(feature = "json")]
            Self::Serde(e) => write!(f, "de/serialization error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Network(e) => Some(e),
            Self::PayloadTooLarge(_) => None,
            #[cfg(feature = "json")]
            Self::Serde(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<network::Error> for Error {
    fn from(e: network::Error) -> Self {
        Self::Network(e)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}
