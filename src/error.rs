use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum NoteGroomError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("File System error: {0}")]
    Io(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("Position {line}:{column} lies outside the source text")]
    OutOfBounds { line: u32, column: u32 },
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for NoteGroomError {
    fn from(src: toml::de::Error) -> NoteGroomError {
        NoteGroomError::Serialization(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for NoteGroomError {
    fn from(src: toml::ser::Error) -> NoteGroomError {
        NoteGroomError::Serialization(format!("Toml serialization error: {src}"))
    }
}

impl From<io::Error> for NoteGroomError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => NoteGroomError::NotFound(format!("{x}")),
            _ => NoteGroomError::Io(format!("IOError: {}", x.kind())),
        }
    }
}
