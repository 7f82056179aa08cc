//! Errors raised while loading instance files.

use std::io;

/// Failure to load a kplib instance file.
#[derive(Debug)]
pub enum InstanceLoadError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// The file has no header (item count + capacity) to read.
    MissingHeader,
    /// The item count or capacity line did not parse as an integer.
    InvalidHeader { line: usize },
    /// An item line did not consist of exactly two integers.
    InvalidItem { line: usize },
    /// Fewer item lines than the header declared.
    MissingItems { expected: usize, found: usize },
}

impl std::fmt::Display for InstanceLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceLoadError::Io(err) => write!(f, "I/O error: {err}"),
            InstanceLoadError::MissingHeader => {
                write!(f, "instance file is empty or missing its header")
            }
            InstanceLoadError::InvalidHeader { line } => {
                write!(f, "invalid header on line {line}: expected an integer")
            }
            InstanceLoadError::InvalidItem { line } => {
                write!(
                    f,
                    "invalid item on line {line}: expected `<profit> <weight>`"
                )
            }
            InstanceLoadError::MissingItems { expected, found } => {
                write!(f, "expected {expected} items, found only {found}")
            }
        }
    }
}

impl std::error::Error for InstanceLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstanceLoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InstanceLoadError {
    fn from(err: io::Error) -> Self {
        InstanceLoadError::Io(err)
    }
}
