use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug)]
pub enum ParseError {
    /// Not enough data buffered to parse a whole frame yet.
    Incomplete,
    /// A complete line arrived but is not a valid message.
    InvalidMessage(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidMessage(err.to_string())
    }
}

impl From<FromUtf8Error> for ParseError {
    fn from(err: FromUtf8Error) -> Self {
        Self::InvalidMessage(err.to_string())
    }
}

#[derive(Error, Debug)]
#[error("Writing a frame failed.")]
pub enum WriteError {
    IOError(#[from] std::io::Error),
    SerializationError(#[from] serde_json::Error),
}
