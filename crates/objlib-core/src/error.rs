use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of data at offset {offset:#x} (need {need} bytes, have {have})")]
    UnexpectedEof {
        offset: usize,
        need: usize,
        have: usize,
    },

    #[error("{field} mismatch at offset {offset:#x}: expected {expected:#x}, got {actual:#x}")]
    ContainerTagMismatch {
        offset: usize,
        field: &'static str,
        expected: u32,
        actual: u32,
    },

    #[error(
        "{kind} fingerprint mismatch at offset {offset:#x} (word {index}): expected {expected:#x}, got {actual:#x}"
    )]
    MagicMismatch {
        kind: &'static str,
        offset: usize,
        index: usize,
        expected: u32,
        actual: u32,
    },

    #[error("cannot seek backward from offset {offset:#x} to {target:#x}")]
    SeekBackward { offset: usize, target: usize },

    #[error("unsupported datapoint type {datatype} at offset {offset:#x}")]
    UnsupportedDatatype { offset: usize, datatype: u32 },

    #[error("unexpected {context} value {value} at offset {offset:#x}")]
    UnexpectedFlag {
        offset: usize,
        context: &'static str,
        value: u32,
    },

    #[error("string at offset {offset:#x} is not valid UTF-8: {source}")]
    InvalidString {
        offset: usize,
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid hash table: {0}")]
    InvalidHashTable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Byte offset the error was raised at, when the error comes from decoding.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEof { offset, .. }
            | Self::ContainerTagMismatch { offset, .. }
            | Self::MagicMismatch { offset, .. }
            | Self::SeekBackward { offset, .. }
            | Self::UnsupportedDatatype { offset, .. }
            | Self::UnexpectedFlag { offset, .. }
            | Self::InvalidString { offset, .. } => Some(*offset),
            Self::InvalidHashTable(_) | Self::Io(_) | Self::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
