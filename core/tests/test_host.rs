// Host lock cooperation around codec calls.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use compresso_core::compression::registry;
    use compresso_core::config::{CompressOptions, DecompressOptions};
    use compresso_core::host::{run_unlocked, HostLock, NoHost};
    use compresso_core::pipeline::Pipeline;
    use compresso_core::ErrorKind;

    /// Counts releases of a pretend interpreter lock.
    #[derive(Default)]
    struct CountingHost {
        released: AtomicUsize,
    }

    impl HostLock for CountingHost {
        fn unlocked(&self, work: &mut dyn FnMut()) {
            self.released.fetch_add(1, Ordering::SeqCst);
            work();
        }
    }

    /// A broken host that never runs the work it is handed.
    struct StuckHost;

    impl HostLock for StuckHost {
        fn unlocked(&self, _work: &mut dyn FnMut()) {}
    }

    #[test]
    fn no_host_runs_inline() {
        assert_eq!(run_unlocked(&NoHost, || 41 + 1), Some(42));
    }

    #[test]
    fn every_codec_call_releases_the_host_once() {
        let host = CountingHost::default();
        let pipeline = Pipeline::new(registry()).with_host(&host);
        let data = vec![7u8; 10_000];

        let container = pipeline.compress_bytes(&data, &CompressOptions::new()).unwrap();
        assert_eq!(host.released.load(Ordering::SeqCst), 1);

        let restored = pipeline.decompress_bytes(&container, &DecompressOptions::new()).unwrap();
        assert_eq!(restored, data);
        assert_eq!(host.released.load(Ordering::SeqCst), 2);

        let opts = CompressOptions::new().algorithm("snappy");
        pipeline.compress_bytes(&data, &opts).unwrap();
        assert_eq!(host.released.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn host_that_skips_work_is_reported() {
        let pipeline = Pipeline::new(registry()).with_host(&StuckHost);
        let err = pipeline.compress_bytes(b"abc", &CompressOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Backend);
    }
}
