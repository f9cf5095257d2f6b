//! headers/mod.rs
//! Fixed 16-byte container header written before every payload.
//!
//! ```text
//! 0..4   magic "COMP"
//! 4      version (1)
//! 5      codec id
//! 6      level (0..=254, 255 = unspecified)
//! 7      flags
//! 8..16  original size (u64 LE)
//! ```

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{ContainerHeader, HeaderError};
pub use encode::encode_header_le;
pub use decode::decode_header_le;
