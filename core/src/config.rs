//! config.rs
//! Per-call options for the compress and decompress entry points.
use serde::{Deserialize, Serialize};

use crate::compression::Strategy;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressOptions {
    /// Explicit codec name; wins over `strategy`.
    pub algorithm: Option<String>,
    /// Strategy name ("fast", "balanced", "max_ratio"); unknown → balanced.
    pub strategy: Option<String>,
    /// Negative or absent → codec default; out of range → clamped.
    pub level: Option<i32>,
}

impl CompressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = Some(name.into());
        self
    }

    pub fn strategy(mut self, name: impl Into<String>) -> Self {
        self.strategy = Some(name.into());
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn resolved_strategy(&self) -> Strategy {
        Strategy::from_name(self.strategy.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompressOptions {
    /// Overrides the codec id recorded in the header.
    pub algorithm: Option<String>,
}

impl DecompressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = Some(name.into());
        self
    }
}
