//! pipeline/core.rs
//! Public entry points.
//!
//! Ordering guarantees:
//! - compress: resolve codec → open source → stat size → create destination → header → payload.
//!   An unknown codec never touches the destination.
//! - decompress: open source → read/validate header → resolve codec → reject zero size →
//!   create destination → payload. A bad header never touches the destination.
//!
//! A failure after the destination was created leaves the partial file in place.
use std::io::{Cursor, Write};
use std::path::Path;

use crate::compression::{registry, Operation, Registry};
use crate::config::{CompressOptions, DecompressOptions};
use crate::headers::ContainerHeader;
use crate::host::{HostLock, NoHost};
use crate::pipeline::compress::{compress_payload, resolve_codec as resolve_for_compress};
use crate::pipeline::context::CallContext;
use crate::pipeline::decompress::{check_original_size, decompress_payload, resolve_codec as resolve_for_decompress};
use crate::pipeline::inspect::{capabilities_of, inspect_path, CodecCapability, InspectReport};
use crate::pipeline::io::{create_destination, open_source, read_header};
use crate::telemetry::{Stage, TelemetrySnapshot};
use crate::types::Error;

/// A registry plus the host the codec calls cooperate with.
#[derive(Clone, Copy)]
pub struct Pipeline<'a> {
    registry: &'a Registry,
    host: &'a dyn HostLock,
}

impl<'a> Pipeline<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry, host: &NoHost }
    }

    pub fn with_host(mut self, host: &'a dyn HostLock) -> Self {
        self.host = host;
        self
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn compress_file(
        &self,
        src: impl AsRef<Path>,
        dst: impl AsRef<Path>,
        opts: &CompressOptions,
    ) -> Result<TelemetrySnapshot, Error> {
        let mut ctx = CallContext::new(self.host);
        let codec = ctx.timer.time(Stage::Resolve, || resolve_for_compress(self.registry, opts))?;

        let (mut reader, size) = open_source(src.as_ref())?;
        let mut writer = create_destination(dst.as_ref())?;

        let outcome = compress_payload(&mut ctx, codec, opts, &mut reader, size, &mut writer)?;
        writer.flush().map_err(Error::io("flushing destination"))?;

        Ok(ctx.finish(codec, Operation::Compress, outcome))
    }

    pub fn decompress_file(
        &self,
        src: impl AsRef<Path>,
        dst: impl AsRef<Path>,
        opts: &DecompressOptions,
    ) -> Result<TelemetrySnapshot, Error> {
        let mut ctx = CallContext::new(self.host);

        let (mut reader, size) = open_source(src.as_ref())?;
        let header = ctx.timer.time(Stage::Header, || read_header(&mut reader))?;
        let codec = ctx.timer.time(Stage::Resolve, || resolve_for_decompress(self.registry, &header, opts))?;
        check_original_size(&header)?;

        let mut writer = create_destination(dst.as_ref())?;
        let payload_len = size.saturating_sub(ContainerHeader::LEN as u64);
        let outcome = decompress_payload(&mut ctx, codec, &header, &mut reader, payload_len, &mut writer)?;
        writer.flush().map_err(Error::io("flushing destination"))?;

        Ok(ctx.finish(codec, Operation::Decompress, outcome))
    }

    /// In-memory compression into a complete container.
    pub fn compress_bytes(&self, data: &[u8], opts: &CompressOptions) -> Result<Vec<u8>, Error> {
        let mut ctx = CallContext::new(self.host);
        let codec = resolve_for_compress(self.registry, opts)?;

        let mut out = Vec::new();
        compress_payload(&mut ctx, codec, opts, &mut Cursor::new(data), data.len() as u64, &mut out)?;
        Ok(out)
    }

    /// In-memory decompression of a complete container.
    pub fn decompress_bytes(&self, container: &[u8], opts: &DecompressOptions) -> Result<Vec<u8>, Error> {
        let mut ctx = CallContext::new(self.host);
        let mut reader = Cursor::new(container);

        let header = read_header(&mut reader)?;
        let codec = resolve_for_decompress(self.registry, &header, opts)?;
        check_original_size(&header)?;

        let mut out = Vec::new();
        let payload_len = container.len().saturating_sub(ContainerHeader::LEN) as u64;
        decompress_payload(&mut ctx, codec, &header, &mut reader, payload_len, &mut out)?;
        Ok(out)
    }

    /// Registered codecs, in registry order.
    pub fn capabilities(&self) -> Vec<CodecCapability> {
        capabilities_of(self.registry)
    }

    pub fn inspect(&self, path: impl AsRef<Path>) -> Result<InspectReport, Error> {
        inspect_path(self.registry, path.as_ref())
    }
}

impl Default for Pipeline<'static> {
    fn default() -> Self {
        Pipeline::new(registry())
    }
}

/// Compress `src` into a container at `dst`.
///
/// `algorithm` names a codec explicitly; otherwise `strategy` picks one
/// ("fast", "balanced", "max_ratio"; anything else is balanced).
pub fn compress_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    algorithm: Option<&str>,
    strategy: Option<&str>,
    level: Option<i32>,
) -> Result<TelemetrySnapshot, Error> {
    let opts = CompressOptions {
        algorithm: algorithm.map(str::to_string),
        strategy: strategy.map(str::to_string),
        level,
        ..Default::default()
    };
    Pipeline::default().compress_file(src, dst, &opts)
}

/// Decompress the container at `src` into `dst`.
///
/// `algorithm`, when given, overrides the codec recorded in the header.
pub fn decompress_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    algorithm: Option<&str>,
) -> Result<TelemetrySnapshot, Error> {
    let opts = DecompressOptions { algorithm: algorithm.map(str::to_string) };
    Pipeline::default().decompress_file(src, dst, &opts)
}

pub fn compress_bytes(data: &[u8], opts: &CompressOptions) -> Result<Vec<u8>, Error> {
    Pipeline::default().compress_bytes(data, opts)
}

pub fn decompress_bytes(container: &[u8], opts: &DecompressOptions) -> Result<Vec<u8>, Error> {
    Pipeline::default().decompress_bytes(container, opts)
}

pub fn capabilities() -> Vec<CodecCapability> {
    Pipeline::default().capabilities()
}

pub fn inspect(path: impl AsRef<Path>) -> Result<InspectReport, Error> {
    Pipeline::default().inspect(path)
}
