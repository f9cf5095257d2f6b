//! compression/types.rs
//! Codec identifiers, the codec traits, and codec-level errors.
use std::fmt;
use std::io::{self, Read, Write};
use num_enum::TryFromPrimitive;

use crate::compression::constants::codec_ids;
use crate::framing::ChunkError;

/// Stable on-disk codec identifier.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CodecId {
    None   = codec_ids::NONE,
    Zlib   = codec_ids::ZLIB,
    Bzip2  = codec_ids::BZIP2,
    Lzma   = codec_ids::LZMA,
    Zstd   = codec_ids::ZSTD,
    Lz4    = codec_ids::LZ4,
    Snappy = codec_ids::SNAPPY,
}

impl CodecId {
    pub const ALL: [CodecId; 6] = [
        CodecId::Zlib,
        CodecId::Bzip2,
        CodecId::Lzma,
        CodecId::Zstd,
        CodecId::Lz4,
        CodecId::Snappy,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            CodecId::None   => "none",
            CodecId::Zlib   => "zlib",
            CodecId::Bzip2  => "bzip2",
            CodecId::Lzma   => "lzma",
            CodecId::Zstd   => "zstd",
            CodecId::Lz4    => "lz4",
            CodecId::Snappy => "snappy",
        }
    }

    /// Exact, case-sensitive name lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::try_from_primitive(raw).ok()
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which direction a codec call was going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Compress,
    Decompress,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Compress   => f.write_str("compression"),
            Operation::Decompress => f.write_str("decompression"),
        }
    }
}

/// Inclusive level range plus the level used when none is given.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelRange {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl LevelRange {
    pub const fn new(min: i32, max: i32, default: i32) -> Self {
        Self { min, max, default }
    }

    /// Absent or negative → default; anything else clamped into `min..=max`.
    pub fn clamp(&self, level: Option<i32>) -> i32 {
        match level {
            Some(l) if l >= 0 => l.clamp(self.min, self.max),
            _ => self.default,
        }
    }
}

/// Byte counts reported by a streaming call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamTotals {
    pub bytes_read: u64,
    pub bytes_written: u64,
    /// Framed chunks emitted/consumed (chunk-framed codecs only).
    pub chunks: u64,
}

#[derive(Debug)]
pub enum CompressionError {
    /// The backend library reported a failure.
    Backend { codec: &'static str, op: Operation, msg: String },
    /// Output did not fit the declared capacity.
    CapacityExceeded { codec: &'static str, op: Operation, max: usize },
    /// Decoded length differs from the expected one.
    SizeMismatch { codec: &'static str, expected: u64, actual: u64 },
    /// Output buffer could not be allocated.
    OutOfMemory { codec: &'static str, requested: usize },
    /// Chunk framing was truncated or malformed.
    Chunk(ChunkError),
    /// Source or destination failed.
    Io(io::Error),
}

impl CompressionError {
    pub fn backend(codec: &'static str, op: Operation, msg: impl fmt::Display) -> Self {
        CompressionError::Backend { codec, op, msg: msg.to_string() }
    }
}

impl From<io::Error> for CompressionError {
    fn from(e: io::Error) -> Self {
        CompressionError::Io(e)
    }
}

impl From<ChunkError> for CompressionError {
    fn from(e: ChunkError) -> Self {
        match e {
            ChunkError::Io(io) => CompressionError::Io(io),
            other => CompressionError::Chunk(other),
        }
    }
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompressionError::*;
        match self {
            Backend { codec, op, msg } =>
                write!(f, "{} {} failed: {}", codec, op, msg),
            CapacityExceeded { codec, op, max } =>
                write!(f, "{} {} failed: output exceeds capacity of {} bytes", codec, op, max),
            SizeMismatch { codec, expected, actual } =>
                write!(f, "{} decompression failed: expected {} bytes, got {}", codec, expected, actual),
            OutOfMemory { codec, requested } =>
                write!(f, "{} could not allocate {} bytes", codec, requested),
            Chunk(e) =>
                write!(f, "chunk framing error: {}", e),
            Io(e) =>
                write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for CompressionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompressionError::Chunk(e) => Some(e),
            CompressionError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Allocate an empty output buffer with room for `capacity` bytes.
pub fn reserve_output(codec: &'static str, capacity: usize) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::new();
    out.try_reserve_exact(capacity)
        .map_err(|_| CompressionError::OutOfMemory { codec, requested: capacity })?;
    Ok(out)
}

/// Render a raw header byte as a codec name, or hex when unknown.
pub fn codec_name_or_hex(raw: u8) -> String {
    match CodecId::from_raw(raw) {
        Some(id) => id.name().to_string(),
        None => format!("0x{:02x}", raw),
    }
}

/// One compression algorithm.
///
/// The buffered pair is mandatory. Streaming is optional and exposed through
/// [`Codec::streaming`], so a codec provides both streaming directions or neither.
pub trait Codec: Send + Sync {
    fn id(&self) -> CodecId;

    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Whether the backend is usable in this process.
    fn available(&self) -> bool {
        true
    }

    /// Upper bound on the compressed size of `input_len` bytes (buffered path).
    fn upper_bound(&self, input_len: usize) -> usize;

    /// Effective level for `level`, or `None` when the codec has no levels.
    fn clamp_level(&self, level: Option<i32>) -> Option<i32>;

    fn compress_buffer(&self, input: &[u8], level: Option<i32>) -> Result<Vec<u8>, CompressionError>;

    /// Decompress a whole block; fails if the output would exceed `capacity`.
    fn decompress_buffer(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, CompressionError>;

    /// Decompressed length embedded in a one-shot payload, if the format carries one.
    fn probe_decompressed_len(&self, _payload: &[u8]) -> Option<Result<usize, CompressionError>> {
        None
    }

    fn streaming(&self) -> Option<&dyn StreamingCodec> {
        None
    }
}

/// Incremental operation over byte streams through a fixed-size window.
pub trait StreamingCodec: Send + Sync {
    fn compress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        level: Option<i32>,
    ) -> Result<StreamTotals, CompressionError>;

    /// `original_size` is the header's declared size; codecs may use it as a hint only.
    fn decompress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        original_size: u64,
    ) -> Result<StreamTotals, CompressionError>;
}
