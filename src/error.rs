//! Crate-wide error type.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// A pattern in a [crate::patterns] table failed to compile. Fatal at
    /// process start.
    PatternCompile(String),
    /// The dictionary service could not load any dictionary from the
    /// requested directory.
    DictionaryInit(String),
    /// A one-shot global resource was initialized twice.
    AlreadyInitialized(&'static str),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::PatternCompile(msg) => write!(f, "pattern compile error: {msg}"),
            Error::DictionaryInit(msg) => write!(f, "dictionary init error: {msg}"),
            Error::AlreadyInitialized(what) => write!(f, "{what} is already initialized"),
            Error::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Custom(e.to_string())
    }
}
