//! pipeline/inspect.rs
//! Introspection: registered codecs and container header reports.
use std::fs::File;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::compression::{Codec, Registry};
use crate::constants::MAGIC_COMP;
use crate::headers::{decode_header_le, ContainerHeader, HeaderError};
use crate::types::Error;
use crate::utils::read_window;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCapability {
    pub name: String,
    pub id: u8,
    pub supports_streaming: bool,
    pub has_buffer: bool,
}

impl CodecCapability {
    pub fn of(codec: &dyn Codec) -> Self {
        Self {
            name: codec.name().to_string(),
            id: codec.id().as_u8(),
            supports_streaming: codec.streaming().is_some(),
            has_buffer: true,
        }
    }
}

pub fn capabilities_of(registry: &Registry) -> Vec<CodecCapability> {
    registry.iter().map(CodecCapability::of).collect()
}

/// Rough decode throughput per codec, MiB/s, for the time estimate.
fn estimated_mib_per_sec(codec: &str) -> f64 {
    match codec {
        "zlib"   => 200.0,
        "bzip2"  => 50.0,
        "lzma"   => 30.0,
        "zstd"   => 400.0,
        "lz4"    => 800.0,
        "snappy" => 600.0,
        _        => 200.0,
    }
}

/// What a file's header says, and whether this process could decompress it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectReport {
    pub path: PathBuf,
    /// Magic matched.
    pub is_container: bool,
    /// Magic, version and flags all valid.
    pub header_ok: bool,
    /// Why the file cannot be decompressed, if it cannot.
    pub reason: Option<String>,
    pub version: Option<u8>,
    pub codec_id: Option<u8>,
    pub codec_name: Option<String>,
    /// `None` for the unspecified sentinel.
    pub level: Option<u8>,
    pub flags: Option<u8>,
    pub original_size: Option<u64>,
    pub codec_available: bool,
    pub supports_streaming: bool,
    pub can_decompress: bool,
    pub estimated_decompress_secs: Option<f64>,
}

impl InspectReport {
    fn rejected(path: &Path, is_container: bool, reason: String) -> Self {
        Self {
            path: path.to_path_buf(),
            is_container,
            header_ok: false,
            reason: Some(reason),
            version: None,
            codec_id: None,
            codec_name: None,
            level: None,
            flags: None,
            original_size: None,
            codec_available: false,
            supports_streaming: false,
            can_decompress: false,
            estimated_decompress_secs: None,
        }
    }
}

pub fn inspect_path(registry: &Registry, path: &Path) -> Result<InspectReport, Error> {
    let meta = std::fs::metadata(path).map_err(Error::io("reading file metadata"))?;
    if !meta.is_file() {
        return Ok(InspectReport::rejected(path, false, "not a regular file".into()));
    }

    let mut file = File::open(path).map_err(Error::io("opening file"))?;
    let mut buf = [0u8; ContainerHeader::LEN];
    let n = read_window(&mut file, &mut buf).map_err(Error::io("reading header"))?;

    let header = match decode_header_le(&buf[..n]) {
        Ok(h) => h,
        Err(HeaderError::BufferTooShort { have, .. }) if have < MAGIC_COMP.len() => {
            return Ok(InspectReport::rejected(path, false, "file too small to be a container".into()));
        }
        Err(e @ HeaderError::InvalidMagic { .. }) => {
            return Ok(InspectReport::rejected(path, false, e.to_string()));
        }
        Err(e @ HeaderError::UnsupportedVersion { have, .. }) => {
            let mut report = InspectReport::rejected(path, true, e.to_string());
            report.version = Some(have);
            return Ok(report);
        }
        Err(e) => return Ok(InspectReport::rejected(path, true, e.to_string())),
    };

    let codec = registry.by_raw_id(header.codec_id);
    let codec_available = codec.is_some();
    let codec_name = codec
        .map(|c| c.name().to_string())
        .or_else(|| header.codec().map(|id| id.name().to_string()));

    let reason = if !codec_available {
        Some("no available codec for this container".to_string())
    } else if header.original_size == 0 {
        Some(HeaderError::ZeroOriginalSize.to_string())
    } else {
        None
    };
    let can_decompress = reason.is_none();

    let estimated_decompress_secs = match (&codec_name, can_decompress) {
        (Some(name), true) => {
            Some(header.original_size as f64 / (estimated_mib_per_sec(name) * 1024.0 * 1024.0))
        }
        _ => None,
    };

    Ok(InspectReport {
        path: path.to_path_buf(),
        is_container: true,
        header_ok: true,
        reason,
        version: Some(header.version),
        codec_id: Some(header.codec_id),
        codec_name,
        level: header.level(),
        flags: Some(header.flags),
        original_size: Some(header.original_size),
        codec_available,
        supports_streaming: codec.map(|c| c.streaming().is_some()).unwrap_or(false),
        can_decompress,
        estimated_decompress_secs,
    })
}
