use std::io::Read;
use byteorder::{ByteOrder, LittleEndian};
use tracing::trace;

use crate::framing::types::{ChunkError, ChunkHeader, ChunkLimits};
use crate::utils::read_window;

#[inline]
pub fn decode_chunk_header(buf: &[u8]) -> Result<ChunkHeader, ChunkError> {
    if buf.len() < ChunkHeader::LEN {
        return Err(ChunkError::TruncatedHeader { have: buf.len() });
    }
    Ok(ChunkHeader {
        original_len: LittleEndian::read_u32(&buf[0..4]),
        compressed_len: LittleEndian::read_u32(&buf[4..8]),
    })
}

/// Read the next chunk header.
///
/// Returns `Ok(None)` at clean end of input or on an explicit terminator chunk.
pub fn read_chunk_header<R: Read + ?Sized>(
    r: &mut R,
    limits: &ChunkLimits,
) -> Result<Option<ChunkHeader>, ChunkError> {
    let mut buf = [0u8; ChunkHeader::LEN];
    let got = read_window(r, &mut buf)?;
    if got == 0 {
        return Ok(None);
    }
    let header = decode_chunk_header(&buf[..got])?;

    if header.is_terminator() {
        trace!("explicit terminator chunk");
        return Ok(None);
    }
    if header.original_len as usize > limits.max_original {
        return Err(ChunkError::TooLarge {
            field: "original_len",
            have: header.original_len as usize,
            max: limits.max_original,
        });
    }
    if header.compressed_len as usize > limits.max_compressed {
        return Err(ChunkError::TooLarge {
            field: "compressed_len",
            have: header.compressed_len as usize,
            max: limits.max_compressed,
        });
    }
    Ok(Some(header))
}

/// Read exactly `header.compressed_len` payload bytes into `buf`.
pub fn read_chunk_payload<R: Read + ?Sized>(
    r: &mut R,
    header: &ChunkHeader,
    buf: &mut Vec<u8>,
) -> Result<(), ChunkError> {
    let expected = header.compressed_len as usize;
    buf.resize(expected, 0);
    let actual = read_window(r, buf)?;
    if actual != expected {
        return Err(ChunkError::TruncatedPayload { expected, actual });
    }
    Ok(())
}
