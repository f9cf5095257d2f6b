//! compression/mod.rs
//! Codec abstraction, codec registry, and strategy selection.

pub mod constants;
pub mod types;
pub mod stream;
pub mod codecs;
pub mod registry;
pub mod strategy;

pub use constants::*;
pub use types::*;
pub use registry::{registry, Registry};
pub use strategy::Strategy;
