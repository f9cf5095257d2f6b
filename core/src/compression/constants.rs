/// Stable codec IDs (u8) persisted in the container header.
pub mod codec_ids {
    pub const NONE: u8   = 0;
    pub const ZLIB: u8   = 1;
    pub const BZIP2: u8  = 2;
    pub const LZMA: u8   = 3;
    pub const ZSTD: u8   = 4;
    pub const LZ4: u8    = 5;
    pub const SNAPPY: u8 = 6;
}

/// Default compression levels used when the caller gives none (or a negative one).
pub const DEFAULT_LEVEL_ZLIB: i32 = 6;
pub const DEFAULT_LEVEL_BZIP2: i32 = 9;
pub const DEFAULT_LEVEL_LZMA: i32 = 6;
pub const DEFAULT_LEVEL_ZSTD: i32 = 3;

/// Upper bound on the number of codecs a registry holds.
pub const MAX_REGISTERED_CODECS: usize = 8;
