//! compression/codecs/lzma.rs
//!
//! LZMA2 in the `.xz` container (CRC64 check) via `xz2`.
//! Every level runs with the extreme preset flag.
use std::io::{Read, Write};

use xz2::read::XzDecoder;
use xz2::stream::{Action, Check, Status, Stream};
use xz2::write::XzEncoder;

use crate::compression::constants::DEFAULT_LEVEL_LZMA;
use crate::compression::stream::{pump, run_stream};
use crate::compression::types::{
    reserve_output, Codec, CodecId, CompressionError, LevelRange, Operation, StreamTotals,
    StreamingCodec,
};

const NAME: &str = "lzma";
const LEVELS: LevelRange = LevelRange::new(0, 9, DEFAULT_LEVEL_LZMA);

/// liblzma `LZMA_PRESET_EXTREME`.
const PRESET_EXTREME: u32 = 0x8000_0000;

fn preset(level: Option<i32>) -> u32 {
    LEVELS.clamp(level) as u32 | PRESET_EXTREME
}

fn encoder(level: Option<i32>) -> Result<Stream, CompressionError> {
    Stream::new_easy_encoder(preset(level), Check::Crc64)
        .map_err(|e| CompressionError::backend(NAME, Operation::Compress, e))
}

fn decoder() -> Result<Stream, CompressionError> {
    Stream::new_stream_decoder(u64::MAX, 0)
        .map_err(|e| CompressionError::backend(NAME, Operation::Decompress, e))
}

pub struct LzmaCodec;

impl Codec for LzmaCodec {
    fn id(&self) -> CodecId {
        CodecId::Lzma
    }

    fn upper_bound(&self, n: usize) -> usize {
        n + n / 3 + 128 * 1024
    }

    fn clamp_level(&self, level: Option<i32>) -> Option<i32> {
        Some(LEVELS.clamp(level))
    }

    fn compress_buffer(&self, input: &[u8], level: Option<i32>) -> Result<Vec<u8>, CompressionError> {
        let max = self.upper_bound(input.len());
        let mut out = reserve_output(NAME, max)?;
        let mut xz = encoder(level)?;

        loop {
            let consumed = xz.total_in() as usize;
            let before = (xz.total_in(), xz.total_out());
            let status = xz
                .process_vec(&input[consumed..], &mut out, Action::Finish)
                .map_err(|e| CompressionError::backend(NAME, Operation::Compress, e))?;

            if status == Status::StreamEnd {
                return Ok(out);
            }
            if out.len() == out.capacity() || (xz.total_in(), xz.total_out()) == before {
                return Err(CompressionError::CapacityExceeded { codec: NAME, op: Operation::Compress, max });
            }
        }
    }

    fn decompress_buffer(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, CompressionError> {
        let mut out = reserve_output(NAME, capacity.saturating_add(1))?;
        let mut xz = decoder()?;

        loop {
            let consumed = xz.total_in() as usize;
            let before = (xz.total_in(), xz.total_out());
            let status = xz
                .process_vec(&input[consumed..], &mut out, Action::Finish)
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
            if (xz.total_in(), xz.total_out()) == before {
                return Err(CompressionError::backend(NAME, Operation::Decompress, "truncated stream"));
            }
        }
    }

    fn streaming(&self) -> Option<&dyn StreamingCodec> {
        Some(self)
    }
}

impl StreamingCodec for LzmaCodec {
    fn compress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        level: Option<i32>,
    ) -> Result<StreamTotals, CompressionError> {
        let stream = encoder(level)?;
        run_stream(NAME, Operation::Compress, src, dst, |input, output| {
            let mut enc = XzEncoder::new_stream(output, stream);
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
        let stream = decoder()?;
        run_stream(NAME, Operation::Decompress, src, dst, |input, output| {
            let mut dec = XzDecoder::new_stream(input, stream);
            pump(&mut dec, output)?;
            Ok(0)
        })
    }
}
