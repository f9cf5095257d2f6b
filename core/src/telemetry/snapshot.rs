//! telemetry/snapshot.rs
//! Immutable summary returned by every successful pipeline call.
use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

/// Which codec path produced or consumed the payload.
///
/// Chosen by codec capability: streaming whenever the codec supports it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadPath {
    Streaming,
    Buffered,
}

impl fmt::Display for PayloadPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadPath::Streaming => f.write_str("streaming"),
            PayloadPath::Buffered  => f.write_str("buffered"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub codec: String,
    /// Level byte recorded in the container header (255 = unspecified).
    pub level: u8,
    pub path: PayloadPath,
    pub bytes_original: u64,
    pub bytes_payload: u64,
    pub bytes_overhead: u64,
    pub chunks: u64,
    /// container bytes / original bytes; 0.0 for empty input.
    pub compression_ratio: f64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(
        codec: &str,
        level: u8,
        path: PayloadPath,
        counters: &TelemetryCounters,
        timer: &TelemetryTimer,
    ) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_original > 0 {
            counters.container_bytes() as f64 / counters.bytes_original as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_original as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            codec: codec.to_string(),
            level,
            path,
            bytes_original: counters.bytes_original,
            bytes_payload: counters.bytes_payload,
            bytes_overhead: counters.bytes_overhead,
            chunks: counters.chunks,
            compression_ratio,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    /// Size of the container file (header + framing + payload).
    pub fn container_bytes(&self) -> u64 {
        self.bytes_payload + self.bytes_overhead
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.stage_times.contains(*s))
    }

    /// Stage times never exceed the wall clock.
    pub fn sanity_check(&self) -> bool {
        self.total_stage_time() <= self.elapsed
    }
}
