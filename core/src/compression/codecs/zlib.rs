//! compression/codecs/zlib.rs
//!
//! zlib (deflate with zlib wrapper) via `flate2`.
use std::io::{Read, Write};

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::compression::constants::DEFAULT_LEVEL_ZLIB;
use crate::compression::stream::{pump, run_stream};
use crate::compression::types::{
    reserve_output, Codec, CodecId, CompressionError, LevelRange, Operation, StreamTotals,
    StreamingCodec,
};

const NAME: &str = "zlib";
const LEVELS: LevelRange = LevelRange::new(0, 9, DEFAULT_LEVEL_ZLIB);

pub struct ZlibCodec;

impl Codec for ZlibCodec {
    fn id(&self) -> CodecId {
        CodecId::Zlib
    }

    /// zlib's conservative `deflateBound` (no stream parameters known).
    fn upper_bound(&self, n: usize) -> usize {
        n + ((n + 7) >> 3) + ((n + 63) >> 6) + 5 + 6
    }

    fn clamp_level(&self, level: Option<i32>) -> Option<i32> {
        Some(LEVELS.clamp(level))
    }

    fn compress_buffer(&self, input: &[u8], level: Option<i32>) -> Result<Vec<u8>, CompressionError> {
        let max = self.upper_bound(input.len());
        let mut out = reserve_output(NAME, max)?;
        let mut z = Compress::new(Compression::new(LEVELS.clamp(level) as u32), true);

        match z.compress_vec(input, &mut out, FlushCompress::Finish) {
            Ok(Status::StreamEnd) => Ok(out),
            Ok(_) => Err(CompressionError::CapacityExceeded { codec: NAME, op: Operation::Compress, max }),
            Err(e) => Err(CompressionError::backend(NAME, Operation::Compress, e)),
        }
    }

    fn decompress_buffer(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, CompressionError> {
        // One spare byte tells "exactly full" apart from "needs more room".
        let mut out = reserve_output(NAME, capacity.saturating_add(1))?;
        let mut z = Decompress::new(true);

        loop {
            let consumed = z.total_in() as usize;
            let before = (z.total_in(), z.total_out());
            let status = z
                .decompress_vec(&input[consumed..], &mut out, FlushDecompress::Finish)
                .map_err(|e| CompressionError::backend(NAME, Operation::Decompress, e))?;

            if out.len() > capacity {
                return Err(CompressionError::CapacityExceeded {
                    codec: NAME,
                    op: Operation::Decompress,
                    max: capacity,
                });
            }
            if status == Status::StreamEnd {
                return Ok(out);
            }
            if (z.total_in(), z.total_out()) == before {
                return Err(CompressionError::backend(NAME, Operation::Decompress, "truncated stream"));
            }
        }
    }

    fn streaming(&self) -> Option<&dyn StreamingCodec> {
        Some(self)
    }
}

impl StreamingCodec for ZlibCodec {
    fn compress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        level: Option<i32>,
    ) -> Result<StreamTotals, CompressionError> {
        let level = Compression::new(LEVELS.clamp(level) as u32);
        run_stream(NAME, Operation::Compress, src, dst, |input, output| {
            let mut enc = ZlibEncoder::new(output, level);
            pump(input, &mut enc)?;
            enc.finish()?;
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
            let mut dec = ZlibDecoder::new(input);
            pump(&mut dec, output)?;
            Ok(0)
        })
    }
}
