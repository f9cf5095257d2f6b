//! pipeline/mod.rs
//! Compress and decompress orchestration over the container format.
//!
//! Responsibilities:
//! - Resolve the codec (explicit name, strategy, or header id)
//! - Write/read and validate the container header
//! - Pick the streaming or buffered codec path and run it through the host lock
//! - Report a telemetry snapshot on success
//!
//! Non-responsibilities:
//! - Codec internals (see `compression::codecs`)
//! - Cleanup of partial destination files after a failure

pub mod context;
pub mod io;
pub mod compress;
pub mod decompress;
pub mod inspect;
pub mod core;

pub use context::CallContext;
pub use inspect::{CodecCapability, InspectReport};
pub use self::core::{
    capabilities,
    compress_bytes,
    compress_file,
    decompress_bytes,
    decompress_file,
    inspect,
    Pipeline,
};
