//! headers/types.rs
//! Container header struct and its validation errors.
use std::fmt;

use crate::compression::types::{codec_name_or_hex, CodecId};
use crate::constants::{flags, CONTAINER_V1, HEADER_LEN_V1, LEVEL_UNSPECIFIED, MAGIC_COMP};
use crate::utils::fmt_bytes;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub magic: [u8; 4],      // "COMP"
    pub version: u8,         // container version
    pub codec_id: u8,        // codec_ids
    pub level: u8,           // clamped level, 255 = unspecified
    pub flags: u8,           // reserved, 0
    pub original_size: u64,  // uncompressed byte count
}

impl Default for ContainerHeader {
    fn default() -> Self {
        Self {
            magic: MAGIC_COMP,
            version: CONTAINER_V1,
            codec_id: CodecId::None.as_u8(),
            level: LEVEL_UNSPECIFIED,
            flags: 0,
            original_size: 0,
        }
    }
}

impl ContainerHeader {
    pub const LEN: usize = HEADER_LEN_V1;

    pub fn new(codec: CodecId, level: u8, original_size: u64) -> Self {
        Self {
            codec_id: codec.as_u8(),
            level,
            original_size,
            ..Default::default()
        }
    }

    /// Structural checks only; codec availability is the caller's concern.
    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC_COMP {
            return Err(HeaderError::InvalidMagic { have: self.magic, need: MAGIC_COMP });
        }
        if self.version != CONTAINER_V1 {
            return Err(HeaderError::UnsupportedVersion { have: self.version, supported: CONTAINER_V1 });
        }
        let unknown = self.flags & !flags::KNOWN;
        if unknown != 0 {
            return Err(HeaderError::UnknownFlags { raw: unknown });
        }
        Ok(())
    }

    pub fn codec(&self) -> Option<CodecId> {
        CodecId::from_raw(self.codec_id)
    }

    /// `None` when the level byte is the unspecified sentinel.
    pub fn level(&self) -> Option<u8> {
        (self.level != LEVEL_UNSPECIFIED).then_some(self.level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Fewer bytes than a full header.
    BufferTooShort { have: usize, need: usize },
    InvalidMagic { have: [u8; 4], need: [u8; 4] },
    UnsupportedVersion { have: u8, supported: u8 },
    /// Flag bits this version does not define.
    UnknownFlags { raw: u8 },
    /// Declared original size of zero.
    ZeroOriginalSize,
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            BufferTooShort { have, need } =>
                write!(f, "header buffer too short: {} < {}", have, need),
            InvalidMagic { have, need } =>
                write!(f, "invalid magic: expected {}, got {}", fmt_bytes(need), fmt_bytes(have)),
            UnsupportedVersion { have, supported } =>
                write!(f, "unsupported version: {} (supported: {})", have, supported),
            UnknownFlags { raw } =>
                write!(f, "unknown flag bits: 0x{:02x}", raw),
            ZeroOriginalSize =>
                write!(f, "declared original size is zero"),
        }
    }
}

impl std::error::Error for HeaderError {}

impl fmt::Display for ContainerHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} codec={} level={} flags=0x{:02x} original_size={}",
            fmt_bytes(&self.magic),
            self.version,
            codec_name_or_hex(self.codec_id),
            self.level,
            self.flags,
            self.original_size,
        )
    }
}
