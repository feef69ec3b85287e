// SPDX-License-Identifier: MPL-2.0
use crate::domain::ParseSizeError;
use std::fmt;

/// Errors raised around the overlay math: configuration, payload decoding
/// and command-line input. The transform functions themselves never fail.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Payload(String),
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Payload(e) => write!(f, "Payload Error: {}", e),
            Error::InvalidArgument(e) => write!(f, "Invalid Argument: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Payload(err.to_string())
    }
}

impl From<ParseSizeError> for Error {
    fn from(err: ParseSizeError) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::InvalidArgument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
