//! compression/codecs/snappy.rs
//!
//! Snappy raw blocks via `snap`. The raw format has no stream mode, so the
//! streaming path frames each 64 KiB window as one chunk (see `crate::framing`).
//! Levels are accepted and ignored.
use std::io::{Read, Write};

use snap::raw::{decompress_len, max_compress_len, Decoder, Encoder};
use tracing::trace;

use crate::compression::stream::run_stream;
use crate::compression::types::{
    reserve_output, Codec, CodecId, CompressionError, Operation, StreamTotals, StreamingCodec,
};
use crate::constants::STREAM_CHUNK_SIZE;
use crate::framing::{read_chunk_header, read_chunk_payload, write_chunk, ChunkLimits};
use crate::utils::read_window;

const NAME: &str = "snappy";

fn chunk_limits() -> ChunkLimits {
    ChunkLimits {
        max_original: STREAM_CHUNK_SIZE,
        max_compressed: max_compress_len(STREAM_CHUNK_SIZE),
    }
}

pub struct SnappyCodec;

impl Codec for SnappyCodec {
    fn id(&self) -> CodecId {
        CodecId::Snappy
    }

    fn upper_bound(&self, n: usize) -> usize {
        max_compress_len(n)
    }

    fn clamp_level(&self, _level: Option<i32>) -> Option<i32> {
        None
    }

    fn compress_buffer(&self, input: &[u8], _level: Option<i32>) -> Result<Vec<u8>, CompressionError> {
        let max = self.upper_bound(input.len());
        if max == 0 && !input.is_empty() {
            return Err(CompressionError::CapacityExceeded { codec: NAME, op: Operation::Compress, max });
        }
        let mut out = reserve_output(NAME, max)?;
        out.resize(max, 0);
        let n = Encoder::new()
            .compress(input, &mut out)
            .map_err(|e| CompressionError::backend(NAME, Operation::Compress, e))?;
        out.truncate(n);
        Ok(out)
    }

    fn decompress_buffer(&self, input: &[u8], capacity: usize) -> Result<Vec<u8>, CompressionError> {
        let need = decompress_len(input)
            .map_err(|e| CompressionError::backend(NAME, Operation::Decompress, e))?;
        if need > capacity {
            return Err(CompressionError::CapacityExceeded {
                codec: NAME,
                op: Operation::Decompress,
                max: capacity,
            });
        }
        let mut out = reserve_output(NAME, need)?;
        out.resize(need, 0);
        let n = Decoder::new()
            .decompress(input, &mut out)
            .map_err(|e| CompressionError::backend(NAME, Operation::Decompress, e))?;
        out.truncate(n);
        Ok(out)
    }

    fn probe_decompressed_len(&self, payload: &[u8]) -> Option<Result<usize, CompressionError>> {
        Some(
            decompress_len(payload)
                .map_err(|e| CompressionError::backend(NAME, Operation::Decompress, e)),
        )
    }

    fn streaming(&self) -> Option<&dyn StreamingCodec> {
        Some(self)
    }
}

impl StreamingCodec for SnappyCodec {
    fn compress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        _level: Option<i32>,
    ) -> Result<StreamTotals, CompressionError> {
        run_stream(NAME, Operation::Compress, src, dst, |input, output| {
            let mut window = vec![0u8; STREAM_CHUNK_SIZE];
            let mut packed = vec![0u8; max_compress_len(STREAM_CHUNK_SIZE)];
            let mut enc = Encoder::new();
            let mut chunks = 0u64;

            loop {
                let n = read_window(input, &mut window)?;
                if n == 0 {
                    return Ok(chunks);
                }
                let len = enc
                    .compress(&window[..n], &mut packed)
                    .map_err(|e| CompressionError::backend(NAME, Operation::Compress, e))?;
                write_chunk(output, n, &packed[..len])?;
                chunks += 1;
                trace!(chunk = chunks, original = n, compressed = len, "snappy chunk written");
            }
        })
    }

    fn decompress_stream(
        &self,
        src: &mut dyn Read,
        dst: &mut dyn Write,
        _original_size: u64,
    ) -> Result<StreamTotals, CompressionError> {
        let limits = chunk_limits();
        run_stream(NAME, Operation::Decompress, src, dst, |input, output| {
            let mut payload = Vec::with_capacity(limits.max_compressed);
            let mut window = vec![0u8; STREAM_CHUNK_SIZE];
            let mut dec = Decoder::new();
            let mut chunks = 0u64;

            while let Some(header) = read_chunk_header(input, &limits)? {
                read_chunk_payload(input, &header, &mut payload)?;
                let n = dec
                    .decompress(&payload, &mut window)
                    .map_err(|e| CompressionError::backend(NAME, Operation::Decompress, e))?;
                if n != header.original_len as usize {
                    return Err(CompressionError::backend(
                        NAME,
                        Operation::Decompress,
                        format!("chunk decoded to {} bytes, header says {}", n, header.original_len),
                    ));
                }
                output.write_all(&window[..n])?;
                chunks += 1;
            }
            Ok(chunks)
        })
    }
}
