use std::io::Write;
use byteorder::{ByteOrder, LittleEndian};

use crate::framing::types::{ChunkError, ChunkHeader};

#[inline]
pub fn encode_chunk_header(h: &ChunkHeader) -> [u8; ChunkHeader::LEN] {
    let mut out = [0u8; ChunkHeader::LEN];
    LittleEndian::write_u32(&mut out[0..4], h.original_len);
    LittleEndian::write_u32(&mut out[4..8], h.compressed_len);
    out
}

/// Write one chunk (header + payload); returns bytes written.
pub fn write_chunk<W: Write + ?Sized>(
    w: &mut W,
    original_len: usize,
    payload: &[u8],
) -> Result<usize, ChunkError> {
    let header = ChunkHeader {
        original_len: u32::try_from(original_len).map_err(|_| ChunkError::TooLarge {
            field: "original_len",
            have: original_len,
            max: u32::MAX as usize,
        })?,
        compressed_len: u32::try_from(payload.len()).map_err(|_| ChunkError::TooLarge {
            field: "compressed_len",
            have: payload.len(),
            max: u32::MAX as usize,
        })?,
    };

    w.write_all(&encode_chunk_header(&header))?;
    w.write_all(payload)?;
    Ok(ChunkHeader::LEN + payload.len())
}
