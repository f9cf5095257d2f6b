//! telemetry/counters.rs
//! Mutable byte counters filled while one pipeline call runs.
use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Uncompressed bytes (source on compress, destination on decompress).
    pub bytes_original: u64,
    /// Compressed payload bytes, container header excluded.
    pub bytes_payload: u64,
    /// Container header plus chunk framing bytes.
    pub bytes_overhead: u64,
    /// Framed chunks (chunk-framed codecs only).
    pub chunks: u64,
}

impl TelemetryCounters {
    pub fn add_header(&mut self, header_len: usize) {
        self.bytes_overhead += header_len as u64;
    }

    /// Record `chunks` framed chunks; their headers count as overhead and are
    /// moved out of the payload total.
    pub fn add_chunks(&mut self, chunks: u64, chunk_header_len: usize) {
        let framing = chunks * chunk_header_len as u64;
        self.chunks += chunks;
        self.bytes_overhead += framing;
        self.bytes_payload = self.bytes_payload.saturating_sub(framing);
    }

    pub fn add_payload(&mut self, original: u64, payload: u64) {
        self.bytes_original += original;
        self.bytes_payload += payload;
    }

    /// Bytes of the whole container (header + payload + framing).
    pub fn container_bytes(&self) -> u64 {
        self.bytes_payload + self.bytes_overhead
    }
}
