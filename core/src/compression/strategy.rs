//! compression/strategy.rs
//! Coarse intent → codec, by static preference tables.
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::compression::registry::Registry;
use crate::compression::types::{Codec, CodecId};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Fast,
    #[default]
    Balanced,
    MaxRatio,
}

const FAST: [CodecId; 6] = [
    CodecId::Lz4, CodecId::Snappy, CodecId::Zstd, CodecId::Zlib, CodecId::Lzma, CodecId::Bzip2,
];
const BALANCED: [CodecId; 6] = [
    CodecId::Zstd, CodecId::Zlib, CodecId::Lzma, CodecId::Bzip2, CodecId::Lz4, CodecId::Snappy,
];
const MAX_RATIO: [CodecId; 6] = [
    CodecId::Lzma, CodecId::Zstd, CodecId::Bzip2, CodecId::Zlib, CodecId::Lz4, CodecId::Snappy,
];

impl Strategy {
    /// "fast", "balanced", "max_ratio". Anything else, or nothing, is Balanced.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("fast") => Strategy::Fast,
            Some("max_ratio") => Strategy::MaxRatio,
            _ => Strategy::Balanced,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Fast     => "fast",
            Strategy::Balanced => "balanced",
            Strategy::MaxRatio => "max_ratio",
        }
    }

    /// Total preference order over codec ids.
    pub const fn preference(self) -> &'static [CodecId] {
        match self {
            Strategy::Fast     => &FAST,
            Strategy::Balanced => &BALANCED,
            Strategy::MaxRatio => &MAX_RATIO,
        }
    }

    /// First preferred codec present in `registry`; `None` only when it is empty.
    pub fn select<'r>(&self, registry: &'r Registry) -> Option<&'r dyn Codec> {
        self.preference().iter().find_map(|id| registry.by_id(*id))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
