//! pipeline/compress.rs
//! Codec resolution and payload production for compression.
use std::io::{Read, Write};
use tracing::debug;

use crate::compression::{Codec, Operation, Registry};
use crate::config::CompressOptions;
use crate::constants::{LEVEL_MAX_STORED, LEVEL_UNSPECIFIED};
use crate::framing::ChunkHeader;
use crate::headers::{encode_header_le, ContainerHeader};
use crate::pipeline::context::{CallContext, Outcome};
use crate::pipeline::io::read_to_vec;
use crate::telemetry::{PayloadPath, Stage};
use crate::types::Error;

/// Explicit name wins outright; otherwise the strategy picks.
pub fn resolve_codec<'r>(registry: &'r Registry, opts: &CompressOptions) -> Result<&'r dyn Codec, Error> {
    if let Some(name) = opts.algorithm.as_deref() {
        let codec = registry
            .by_name(name)
            .ok_or_else(|| Error::UnavailableCodec(name.to_string()))?;
        debug!(codec = codec.name(), "codec resolved by name");
        return Ok(codec);
    }

    let strategy = opts.resolved_strategy();
    let codec = strategy
        .select(registry)
        .ok_or_else(|| Error::UnavailableCodec(format!("no codec registered for strategy {}", strategy)))?;
    debug!(codec = codec.name(), %strategy, "codec resolved by strategy");
    Ok(codec)
}

/// Level byte recorded in the header: the clamped level when the caller gave one
/// and the codec has levels, 255 otherwise.
pub fn header_level(codec: &dyn Codec, level: Option<i32>) -> u8 {
    match level {
        Some(l) if l >= 0 => codec
            .clamp_level(Some(l))
            .map(|c| c.clamp(0, LEVEL_MAX_STORED as i32) as u8)
            .unwrap_or(LEVEL_UNSPECIFIED),
        _ => LEVEL_UNSPECIFIED,
    }
}

fn write_header(
    ctx: &mut CallContext<'_>,
    dst: &mut dyn Write,
    header: &ContainerHeader,
) -> Result<(), Error> {
    let bytes = encode_header_le(header);
    ctx.timer
        .time(Stage::Header, || dst.write_all(&bytes))
        .map_err(Error::io("writing header"))?;
    ctx.counters.add_header(ContainerHeader::LEN);
    Ok(())
}

/// Write header and payload for `original_size` bytes of `src` into `dst`.
///
/// Streams whenever the codec supports it; otherwise loads the input and runs
/// the one-shot path. Both write the same header.
pub fn compress_payload(
    ctx: &mut CallContext<'_>,
    codec: &dyn Codec,
    opts: &CompressOptions,
    src: &mut dyn Read,
    original_size: u64,
    dst: &mut dyn Write,
) -> Result<Outcome, Error> {
    let level = header_level(codec, opts.level);

    if let Some(streaming) = codec.streaming() {
        write_header(ctx, dst, &ContainerHeader::new(codec.id(), level, original_size))?;

        let totals = ctx.codec_call(codec, Operation::Compress, Stage::Compress, || {
            streaming.compress_stream(src, dst, opts.level)
        })??;

        if totals.bytes_read != original_size {
            return Err(Error::Validation(format!(
                "source changed during compression: expected {} bytes, read {}",
                original_size, totals.bytes_read
            )));
        }
        ctx.counters.add_payload(totals.bytes_read, totals.bytes_written);
        ctx.counters.add_chunks(totals.chunks, ChunkHeader::LEN);
        return Ok(Outcome { path: PayloadPath::Streaming, level });
    }

    let data = ctx.timer.time(Stage::Read, || read_to_vec(src, original_size, codec))?;
    let packed = ctx.codec_call(codec, Operation::Compress, Stage::Compress, || {
        codec.compress_buffer(&data, opts.level)
    })??;

    let header = ContainerHeader::new(codec.id(), level, data.len() as u64);
    write_header(ctx, dst, &header)?;

    ctx.timer
        .time(Stage::Write, || dst.write_all(&packed))
        .map_err(Error::io("writing payload"))?;
    ctx.counters.add_payload(data.len() as u64, packed.len() as u64);
    Ok(Outcome { path: PayloadPath::Buffered, level })
}
