//! compression/registry.rs
//! The set of codecs usable in this process.
use std::sync::OnceLock;
use tracing::debug;

use crate::compression::codecs::builtin_codecs;
use crate::compression::constants::MAX_REGISTERED_CODECS;
use crate::compression::types::{Codec, CodecId};

/// Ordered, immutable codec list. At most one codec per id and per name.
pub struct Registry {
    codecs: Vec<Box<dyn Codec>>,
}

impl Registry {
    /// Every codec compiled into this build that reports itself available.
    pub fn builtin() -> Self {
        Self::with_codecs(builtin_codecs())
    }

    /// Build from an explicit list, keeping order.
    ///
    /// Unavailable codecs and duplicates (by id or name; first wins) are dropped.
    pub fn with_codecs(candidates: Vec<Box<dyn Codec>>) -> Self {
        let mut codecs: Vec<Box<dyn Codec>> = Vec::with_capacity(candidates.len().min(MAX_REGISTERED_CODECS));

        for codec in candidates {
            if !codec.available() {
                debug!(codec = codec.name(), "codec unavailable, skipped");
                continue;
            }
            if codecs.iter().any(|c| c.id() == codec.id() || c.name() == codec.name()) {
                debug!(codec = codec.name(), id = codec.id().as_u8(), "duplicate codec, skipped");
                continue;
            }
            if codecs.len() == MAX_REGISTERED_CODECS {
                debug!(codec = codec.name(), "registry full, skipped");
                continue;
            }
            codecs.push(codec);
        }

        debug!(
            codecs = ?codecs.iter().map(|c| c.name()).collect::<Vec<_>>(),
            "codec registry built"
        );
        Self { codecs }
    }

    /// Exact, case-sensitive.
    pub fn by_name(&self, name: &str) -> Option<&dyn Codec> {
        self.codecs.iter().find(|c| c.name() == name).map(|c| c.as_ref())
    }

    pub fn by_id(&self, id: CodecId) -> Option<&dyn Codec> {
        self.codecs.iter().find(|c| c.id() == id).map(|c| c.as_ref())
    }

    /// Lookup by the raw id byte stored in a container header.
    pub fn by_raw_id(&self, raw: u8) -> Option<&dyn Codec> {
        CodecId::from_raw(raw).and_then(|id| self.by_id(id))
    }

    pub fn contains(&self, id: CodecId) -> bool {
        self.by_id(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Codec> {
        self.codecs.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.codecs.iter().map(|c| c.name())).finish()
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Process-wide registry, built on first use and never mutated afterwards.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::builtin)
}
