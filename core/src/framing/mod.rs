//! Chunk framing for codecs without a self-delimiting stream format.
//!
//! Responsibilities:
//! - Define the chunk header and its limits
//! - Encode chunks into the canonical little-endian layout
//! - Decode chunks with strict truncation checks
//!
//! Non-responsibilities:
//! - Compression
//! - Container header

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    ChunkHeader,
    ChunkLimits,
    ChunkError,
};
pub use encode::{encode_chunk_header, write_chunk};
pub use decode::{decode_chunk_header, read_chunk_header, read_chunk_payload};
