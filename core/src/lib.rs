//! compresso-core
//!
//! Whole-file compression through pluggable codecs and a self-describing container.
//! No bindings, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;
pub mod host;

// Codecs and wire formats
pub mod compression;
pub mod headers;
pub mod framing;
pub mod telemetry;

// Orchestration
pub mod pipeline;

pub use types::{Error, ErrorKind};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{registry, Codec, CodecId, Registry, Strategy, StreamingCodec};
    pub use crate::config::{CompressOptions, DecompressOptions};
    pub use crate::host::{HostLock, NoHost};
    pub use crate::pipeline::{
        capabilities, compress_bytes, compress_file, decompress_bytes, decompress_file, inspect,
        CodecCapability, InspectReport, Pipeline,
    };
    pub use crate::telemetry::{PayloadPath, TelemetrySnapshot};
    pub use crate::types::{Error, ErrorKind};
}
