//! pipeline/decompress.rs
//! Codec resolution and payload reconstruction for decompression.
use std::io::{Read, Write};
use tracing::{debug, warn};

use crate::compression::{codec_name_or_hex, Codec, CompressionError, Operation, Registry};
use crate::config::DecompressOptions;
use crate::framing::ChunkHeader;
use crate::headers::{ContainerHeader, HeaderError};
use crate::pipeline::context::{CallContext, Outcome};
use crate::pipeline::io::read_to_vec;
use crate::telemetry::{PayloadPath, Stage};
use crate::types::Error;

/// An explicit override wins over the header's codec id; a mismatch is logged.
pub fn resolve_codec<'r>(
    registry: &'r Registry,
    header: &ContainerHeader,
    opts: &DecompressOptions,
) -> Result<&'r dyn Codec, Error> {
    if let Some(name) = opts.algorithm.as_deref() {
        let codec = registry
            .by_name(name)
            .ok_or_else(|| Error::UnavailableCodec(name.to_string()))?;
        if codec.id().as_u8() != header.codec_id {
            warn!(
                requested = codec.name(),
                recorded = %codec_name_or_hex(header.codec_id),
                "decompression codec overrides the one recorded in the header"
            );
        }
        return Ok(codec);
    }

    let codec = registry
        .by_raw_id(header.codec_id)
        .ok_or_else(|| Error::UnavailableCodec(codec_name_or_hex(header.codec_id)))?;
    debug!(codec = codec.name(), "codec resolved from header");
    Ok(codec)
}

/// Empty sources cannot be restored from a container: a zero declared size is rejected.
pub fn check_original_size(header: &ContainerHeader) -> Result<(), Error> {
    if header.original_size == 0 {
        return Err(HeaderError::ZeroOriginalSize.into());
    }
    Ok(())
}

/// Reconstruct the payload after the header into `dst`.
///
/// `payload_len` is the number of container bytes after the header; the
/// one-shot path reserves that much before reading.
pub fn decompress_payload(
    ctx: &mut CallContext<'_>,
    codec: &dyn Codec,
    header: &ContainerHeader,
    src: &mut dyn Read,
    payload_len: u64,
    dst: &mut dyn Write,
) -> Result<Outcome, Error> {
    ctx.counters.add_header(ContainerHeader::LEN);

    if let Some(streaming) = codec.streaming() {
        let totals = ctx.codec_call(codec, Operation::Decompress, Stage::Decompress, || {
            streaming.decompress_stream(src, dst, header.original_size)
        })??;

        if totals.bytes_written != header.original_size {
            return Err(CompressionError::SizeMismatch {
                codec: codec.name(),
                expected: header.original_size,
                actual: totals.bytes_written,
            }
            .into());
        }
        ctx.counters.add_payload(totals.bytes_written, totals.bytes_read);
        ctx.counters.add_chunks(totals.chunks, ChunkHeader::LEN);
        return Ok(Outcome { path: PayloadPath::Streaming, level: header.level });
    }

    let payload = ctx.timer.time(Stage::Read, || read_to_vec(src, payload_len, codec))?;

    // Formats that embed their decoded length are trusted over the header.
    let probed = match codec.probe_decompressed_len(&payload) {
        Some(len) => Some(len?),
        None => None,
    };
    let capacity = match probed {
        Some(len) => len,
        None => usize::try_from(header.original_size).map_err(|_| Error::OutOfMemory {
            codec: codec.name(),
            requested: usize::MAX,
        })?,
    };

    let out = ctx.codec_call(codec, Operation::Decompress, Stage::Decompress, || {
        codec.decompress_buffer(&payload, capacity)
    })??;

    if probed.is_none() && out.len() as u64 != header.original_size {
        return Err(CompressionError::SizeMismatch {
            codec: codec.name(),
            expected: header.original_size,
            actual: out.len() as u64,
        }
        .into());
    }

    ctx.timer
        .time(Stage::Write, || dst.write_all(&out))
        .map_err(Error::io("writing output"))?;
    ctx.counters.add_payload(out.len() as u64, payload.len() as u64);
    Ok(Outcome { path: PayloadPath::Buffered, level: header.level })
}
