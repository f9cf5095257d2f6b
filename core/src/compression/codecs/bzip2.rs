//! compression/codecs/bzip2.rs
//!
//! bzip2 via the `bzip2` crate. Levels map to block size (1..=9, ×100 KiB).
use std::io::{Read, Write};

use bzip2::{Action, Compress, Compression, Decompress, Status};
use bzip2::read::BzDecoder;
use bzip2::write::BzEncoder;

use crate::compression::constants::DEFAULT_LEVEL_BZIP2;
use crate::compression::stream::{pump, run_stream};
use crate::compression::types::{
    reserve_output, Codec, CodecId, CompressionError, LevelRange, Operation, StreamTotals,
    StreamingCodec,
};

const NAME: &str = "bzip2";
const LEVELS: LevelRange = LevelRange::new(1, 9, DEFAULT_LEVEL_BZIP2);

/// libbzip2's default work factor.
const WORK_FACTOR: u32 = 30;

pub struct Bzip2Codec;

impl Codec for Bzip2Codec {
    fn id(&self) -> CodecId {
        CodecId::Bzip2
    }

    fn upper_bound(&self, n: usize) -> usize {
        n + n / 100 + 600
    }

    fn clamp_level(&self, level: Option<i32>) -> Option<i32> {
        Some(LEVELS.clamp(level))
    }

    fn compress_buffer(&self, input: &[u8], level: Option<i32>) -> Result<Vec<u8>, CompressionError> {
        let max = self.upper_bound(input.len());
        let mut out = reserve_output(NAME, max)?;
        let mut bz = Compress::new(Compression::new(LEVELS.clamp(level) as u32), WORK_FACTOR);

        loop {
            let consumed = bz.total_in() as usize;
            let before = (bz.total_in(), bz.total_out());
            let status = bz
                .compress_vec(&input[consumed..], &mut out, Action::Finish)
                .map_err(|e| CompressionError::backend(NAME, Operation::Compress, e))?;

            if status == Status::StreamEnd {
                return Ok(out);
            }
            if out.len() == out.capacity() || (bz.total_in(), bz.total_out()) == before {
                return Err(CompressionError::CapacityExceeded { codec: NAME, op: Operation::Compress, max });
            }
        }
    }

    fn decompress_buffer(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, CompressionError> {
        let mut out = reserve_output(NAME, capacity.saturating_add(1))?;
        let mut bz = Decompress::new(false);

        loop {
            let consumed = bz.total_in() as usize;
            let before = (bz.total_in(), bz.total_out());
            let status = bz
                .decompress_vec(&input[consumed..], &mut out)
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
            if (bz.total_in(), bz.total_out()) == before {
                return Err(CompressionError::backend(NAME, Operation::Decompress, "truncated stream"));
            }
        }
    }

    fn streaming(&self) -> Option<&dyn StreamingCodec> {
        Some(self)
    }
}

impl StreamingCodec for Bzip2Codec {
    fn compress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        level: Option<i32>,
    ) -> Result<StreamTotals, CompressionError> {
        let level = Compression::new(LEVELS.clamp(level) as u32);
        run_stream(NAME, Operation::Compress, src, dst, |input, output| {
            let mut enc = BzEncoder::new(output, level);
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
            let mut dec = BzDecoder::new(input);
            pump(&mut dec, output)?;
            Ok(0)
        })
    }
}
