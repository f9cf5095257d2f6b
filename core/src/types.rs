//! types.rs
//! Unified error surfaced by every public entry point.
use std::fmt;
use std::io;
use serde::{Deserialize, Serialize};

use crate::compression::{CompressionError, Operation};
use crate::framing::ChunkError;
use crate::headers::HeaderError;

/// The five failure kinds callers can branch on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    UnavailableCodec,
    Backend,
    Io,
    OutOfMemory,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation       => "ValidationError",
            ErrorKind::UnavailableCodec => "UnavailableCodecError",
            ErrorKind::Backend          => "BackendError",
            ErrorKind::Io               => "IOError",
            ErrorKind::OutOfMemory      => "OutOfMemoryError",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid container header: {0}")]
    Header(#[from] HeaderError),

    #[error("malformed chunk framing: {0}")]
    Chunk(ChunkError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("codec unavailable: {0}")]
    UnavailableCodec(String),

    #[error("{codec} {op} failed: {detail}")]
    Backend {
        codec: &'static str,
        op: Operation,
        detail: String,
    },

    #[error("i/o error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{codec}: could not allocate {requested} bytes")]
    OutOfMemory {
        codec: &'static str,
        requested: usize,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Header(_) | Error::Chunk(_) | Error::Validation(_) => ErrorKind::Validation,
            Error::UnavailableCodec(_) => ErrorKind::UnavailableCodec,
            Error::Backend { .. } => ErrorKind::Backend,
            Error::Io { .. } => ErrorKind::Io,
            Error::OutOfMemory { .. } => ErrorKind::OutOfMemory,
        }
    }

    /// `map_err` adapter attaching what the pipeline was doing.
    pub fn io(context: &'static str) -> impl FnOnce(io::Error) -> Error {
        move |source| Error::Io { context, source }
    }
}

impl From<ChunkError> for Error {
    fn from(e: ChunkError) -> Self {
        match e {
            ChunkError::Io(source) => Error::Io { context: "reading chunk", source },
            other => Error::Chunk(other),
        }
    }
}

impl From<CompressionError> for Error {
    fn from(e: CompressionError) -> Self {
        match e {
            CompressionError::Backend { codec, op, msg } =>
                Error::Backend { codec, op, detail: msg },
            CompressionError::CapacityExceeded { codec, op, max } =>
                Error::Backend { codec, op, detail: format!("output exceeds capacity of {} bytes", max) },
            CompressionError::SizeMismatch { codec, expected, actual } =>
                Error::Backend {
                    codec,
                    op: Operation::Decompress,
                    detail: format!("expected {} bytes, got {}", expected, actual),
                },
            CompressionError::OutOfMemory { codec, requested } =>
                Error::OutOfMemory { codec, requested },
            CompressionError::Chunk(c) => Error::from(c),
            CompressionError::Io(source) =>
                Error::Io { context: "streaming payload", source },
        }
    }
}
