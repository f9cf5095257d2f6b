//! compression/codecs/zstd.rs
//!
//! Zstandard via `zstd` (streams, bulk API) and `zstd-safe` (bounds, level range).
use std::io::{Read, Write};

use crate::compression::constants::DEFAULT_LEVEL_ZSTD;
use crate::compression::stream::{pump, run_stream};
use crate::compression::types::{
    reserve_output, Codec, CodecId, CompressionError, LevelRange, Operation, StreamTotals,
    StreamingCodec,
};

const NAME: &str = "zstd";

fn levels() -> LevelRange {
    LevelRange::new(0, zstd_safe::max_c_level(), DEFAULT_LEVEL_ZSTD)
}

pub struct ZstdCodec;

impl Codec for ZstdCodec {
    fn id(&self) -> CodecId {
        CodecId::Zstd
    }

    fn upper_bound(&self, n: usize) -> usize {
        zstd_safe::compress_bound(n)
    }

    fn clamp_level(&self, level: Option<i32>) -> Option<i32> {
        Some(levels().clamp(level))
    }

    fn compress_buffer(&self, input: &[u8], level: Option<i32>) -> Result<Vec<u8>, CompressionError> {
        let mut out = reserve_output(NAME, self.upper_bound(input.len()))?;
        zstd::bulk::Compressor::new(levels().clamp(level))
            .and_then(|mut z| z.compress_to_buffer(input, &mut out))
            .map_err(|e| CompressionError::backend(NAME, Operation::Compress, e))?;
        Ok(out)
    }

    fn decompress_buffer(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, CompressionError> {
        let mut out = reserve_output(NAME, capacity)?;
        zstd::bulk::Decompressor::new()
            .and_then(|mut z| z.decompress_to_buffer(input, &mut out))
            .map_err(|e| CompressionError::backend(NAME, Operation::Decompress, e))?;
        Ok(out)
    }

    fn streaming(&self) -> Option<&dyn StreamingCodec> {
        Some(self)
    }
}

impl StreamingCodec for ZstdCodec {
    fn compress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        level: Option<i32>,
    ) -> Result<StreamTotals, CompressionError> {
        let level = levels().clamp(level);
        run_stream(NAME, Operation::Compress, src, dst, |input, output| {
            let mut enc = zstd::stream::Encoder::new(output, level)?;
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
            let mut dec = zstd::stream::Decoder::new(input)?;
            pump(&mut dec, output)?;
            Ok(0)
        })
    }
}
