//! pipeline/context.rs
//! Per-call state: host lock, timers, counters. Owned by exactly one call.
use tracing::debug;

use crate::compression::{Codec, Operation};
use crate::host::{run_unlocked, HostLock};
use crate::telemetry::{PayloadPath, Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::Error;

pub struct CallContext<'a> {
    pub host: &'a dyn HostLock,
    pub timer: TelemetryTimer,
    pub counters: TelemetryCounters,
}

/// What a payload step actually did; feeds the snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub path: PayloadPath,
    pub level: u8,
}

impl<'a> CallContext<'a> {
    pub fn new(host: &'a dyn HostLock) -> Self {
        Self {
            host,
            timer: TelemetryTimer::new(),
            counters: TelemetryCounters::default(),
        }
    }

    /// Run one codec invocation with the host lock released, timed under `stage`.
    pub fn codec_call<T>(
        &mut self,
        codec: &dyn Codec,
        op: Operation,
        stage: Stage,
        f: impl FnOnce() -> T,
    ) -> Result<T, Error> {
        let host = self.host;
        self.timer
            .time(stage, || run_unlocked(host, f))
            .ok_or_else(|| Error::Backend {
                codec: codec.name(),
                op,
                detail: "host runtime did not run the codec call".into(),
            })
    }

    pub fn finish(mut self, codec: &dyn Codec, op: Operation, outcome: Outcome) -> TelemetrySnapshot {
        self.timer.finish();
        let snapshot = TelemetrySnapshot::from(codec.name(), outcome.level, outcome.path, &self.counters, &self.timer);
        debug!(
            codec = codec.name(),
            %op,
            path = %outcome.path,
            original = snapshot.bytes_original,
            container = snapshot.container_bytes(),
            elapsed_us = snapshot.elapsed.as_micros() as u64,
            "pipeline finished"
        );
        snapshot
    }
}
