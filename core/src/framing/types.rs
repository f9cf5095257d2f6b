use std::fmt;
use std::io;

/// Per-chunk header.
///
/// ```text
/// [ original_len   (u32 LE) ]
/// [ compressed_len (u32 LE) ]
/// [ compressed bytes (compressed_len) ]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub original_len: u32,
    pub compressed_len: u32,
}

impl ChunkHeader {
    pub const LEN: usize = 4  // original_len
        + 4;                 // compressed_len

    pub const TERMINATOR: ChunkHeader = ChunkHeader { original_len: 0, compressed_len: 0 };

    /// Both lengths zero: explicit end of the chunk sequence.
    #[inline]
    pub fn is_terminator(&self) -> bool {
        self.original_len == 0 && self.compressed_len == 0
    }
}

/// Largest lengths a reader accepts before allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkLimits {
    pub max_original: usize,
    pub max_compressed: usize,
}

#[derive(Debug)]
pub enum ChunkError {
    /// Input ended inside a chunk header.
    TruncatedHeader { have: usize },
    /// Input ended inside a chunk payload.
    TruncatedPayload { expected: usize, actual: usize },
    /// A declared length is above the reader's limit.
    TooLarge { field: &'static str, have: usize, max: usize },
    /// Underlying reader or writer failed.
    Io(io::Error),
}

impl From<io::Error> for ChunkError {
    fn from(e: io::Error) -> Self {
        ChunkError::Io(e)
    }
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ChunkError::*;
        match self {
            TruncatedHeader { have } =>
                write!(f, "truncated chunk header: {} < {}", have, ChunkHeader::LEN),
            TruncatedPayload { expected, actual } =>
                write!(f, "truncated chunk payload: expected {}, got {}", expected, actual),
            TooLarge { field, have, max } =>
                write!(f, "chunk {} too large: {} > {}", field, have, max),
            Io(e) =>
                write!(f, "chunk i/o: {}", e),
        }
    }
}

impl std::error::Error for ChunkError {}
