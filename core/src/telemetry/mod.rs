//! telemetry/mod.rs
//! Per-call counters, stage timers, and the immutable snapshot a pipeline returns.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::TelemetryCounters;
pub use timers::{Stage, StageTimes, TelemetryTimer};
pub use snapshot::{PayloadPath, TelemetrySnapshot};
