//! constants.rs
//! Wire constants for the container format and stream windows.

/// Magic marker at offset 0 of every container.
pub const MAGIC_COMP: [u8; 4] = *b"COMP";

/// Only supported container version.
pub const CONTAINER_V1: u8 = 1;

/// Fixed container header size in bytes.
pub const HEADER_LEN_V1: usize = 16;

/// Window size used by every streaming codec loop (64 KiB).
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// Header level byte when the caller gave no level, or the codec has none.
pub const LEVEL_UNSPECIFIED: u8 = 255;

/// Highest level value representable in the header.
pub const LEVEL_MAX_STORED: u8 = 254;

/// Flag bitmask for the container header `flags` byte.
pub mod flags {
    /// Every bit a v1 reader understands. All bits are reserved and written as zero.
    pub const KNOWN: u8 = 0x00;
}
