//! compression/codecs/mod.rs
//! Backend adapters, one per algorithm. Each is compiled behind its cargo feature.

#[cfg(feature = "zlib")]
pub mod zlib;
#[cfg(feature = "bzip2")]
pub mod bzip2;
#[cfg(feature = "lzma")]
pub mod lzma;
#[cfg(feature = "zstd")]
pub mod zstd;
#[cfg(feature = "lz4")]
pub mod lz4;
#[cfg(feature = "snappy")]
pub mod snappy;

use crate::compression::types::Codec;

/// Every codec compiled into this build, in codec id order.
pub fn builtin_codecs() -> Vec<Box<dyn Codec>> {
    #[allow(unused_mut)]
    let mut codecs: Vec<Box<dyn Codec>> = Vec::new();
    #[cfg(feature = "zlib")]
    codecs.push(Box::new(zlib::ZlibCodec));
    #[cfg(feature = "bzip2")]
    codecs.push(Box::new(bzip2::Bzip2Codec));
    #[cfg(feature = "lzma")]
    codecs.push(Box::new(lzma::LzmaCodec));
    #[cfg(feature = "zstd")]
    codecs.push(Box::new(zstd::ZstdCodec));
    #[cfg(feature = "lz4")]
    codecs.push(Box::new(lz4::Lz4Codec));
    #[cfg(feature = "snappy")]
    codecs.push(Box::new(snappy::SnappyCodec));
    codecs
}
