//! compression/codecs/lz4.rs
//!
//! LZ4 frame format via `lz4_flex`. Levels are accepted and ignored.
use std::io::{self, Read, Write};

use lz4_flex::frame::{FrameDecoder, FrameEncoder, FrameInfo};

use crate::compression::stream::{pump, run_stream};
use crate::compression::types::{
    reserve_output, Codec, CodecId, CompressionError, Operation, StreamTotals, StreamingCodec,
};

const NAME: &str = "lz4";

/// Block size used by the frame encoder.
const FRAME_BLOCK: usize = 64 * 1024;

/// Frame header (max 19) + end mark (4) + content checksum (4).
const FRAME_OVERHEAD: usize = 27;

/// Frames carry a content checksum so a truncated or damaged tail is detected.
fn frame_info() -> FrameInfo {
    FrameInfo::new().content_checksum(true)
}

pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn id(&self) -> CodecId {
        CodecId::Lz4
    }

    /// LZ4 block bound for every 64 KiB block, each with a 4-byte size prefix.
    fn upper_bound(&self, n: usize) -> usize {
        n + n / 255 + (16 + 4) * (n / FRAME_BLOCK + 1) + FRAME_OVERHEAD
    }

    fn clamp_level(&self, _level: Option<i32>) -> Option<i32> {
        None
    }

    fn compress_buffer(&self, input: &[u8], _level: Option<i32>) -> Result<Vec<u8>, CompressionError> {
        let max = self.upper_bound(input.len());
        let out = reserve_output(NAME, max)?;
        let mut enc = FrameEncoder::with_frame_info(frame_info(), out);
        enc.write_all(input)
            .map_err(|e| CompressionError::backend(NAME, Operation::Compress, e))?;
        let out = enc
            .finish()
            .map_err(|e| CompressionError::backend(NAME, Operation::Compress, e))?;

        if out.len() > max {
            return Err(CompressionError::CapacityExceeded { codec: NAME, op: Operation::Compress, max });
        }
        Ok(out)
    }

    fn decompress_buffer(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, CompressionError> {
        let mut out = reserve_output(NAME, capacity)?;
        FrameDecoder::new(input)
            .take(capacity as u64 + 1)
            .read_to_end(&mut out)
            .map_err(|e| CompressionError::backend(NAME, Operation::Decompress, e))?;

        if out.len() > capacity {
            return Err(CompressionError::CapacityExceeded {
                codec: NAME,
                op: Operation::Decompress,
                max: capacity,
            });
        }
        Ok(out)
    }

    fn streaming(&self) -> Option<&dyn StreamingCodec> {
        Some(self)
    }
}

impl StreamingCodec for Lz4Codec {
    fn compress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        _level: Option<i32>,
    ) -> Result<StreamTotals, CompressionError> {
        run_stream(NAME, Operation::Compress, src, dst, |input, output| {
            let mut enc = FrameEncoder::with_frame_info(frame_info(), output);
            pump(input, &mut enc)?;
            enc.finish().map_err(io::Error::other)?;
            Ok(0)
        })
    }

    fn decompress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        _original_size: u64,
    ) -> Result<StreamTotals, CompressionError> {
        run_stream(NAME, Operation::Decompress, src, dst, |input, output| {
            let mut dec = FrameDecoder::new(input);
            pump(&mut dec, output)?;
            Ok(0)
        })
    }
}
