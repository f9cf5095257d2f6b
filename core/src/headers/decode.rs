//! headers/decode.rs
//! Parse and validate the fixed container header.
use byteorder::{ByteOrder, LittleEndian};

use crate::headers::types::{ContainerHeader, HeaderError};

/// Decode the first `ContainerHeader::LEN` bytes of `buf` and validate them.
///
/// Magic is checked before anything else so a foreign file is reported as such
/// even when it is also too short for other fields to make sense.
pub fn decode_header_le(buf: &[u8]) -> Result<ContainerHeader, HeaderError> {
    if buf.len() < ContainerHeader::LEN {
        if buf.len() >= 4 && buf[0..4] != crate::constants::MAGIC_COMP {
            let mut have = [0u8; 4];
            have.copy_from_slice(&buf[0..4]);
            return Err(HeaderError::InvalidMagic { have, need: crate::constants::MAGIC_COMP });
        }
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: ContainerHeader::LEN });
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&buf[0..4]);

    let h = ContainerHeader {
        magic,
        version: buf[4],
        codec_id: buf[5],
        level: buf[6],
        flags: buf[7],
        original_size: LittleEndian::read_u64(&buf[8..16]),
    };
    h.validate()?;
    Ok(h)
}
