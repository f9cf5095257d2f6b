// Registry construction, lookups, and strategy selection.

#[cfg(test)]
mod tests {
    use compresso_core::compression::codecs::builtin_codecs;
    use compresso_core::compression::{
        registry, Codec, CodecId, CompressionError, Registry, Strategy,
    };

    /// Minimal stand-in codec: stores input verbatim.
    struct Fake {
        id: CodecId,
        name: &'static str,
        available: bool,
    }

    impl Codec for Fake {
        fn id(&self) -> CodecId {
            self.id
        }
        fn name(&self) -> &'static str {
            self.name
        }
        fn available(&self) -> bool {
            self.available
        }
        fn upper_bound(&self, n: usize) -> usize {
            n
        }
        fn clamp_level(&self, _level: Option<i32>) -> Option<i32> {
            None
        }
        fn compress_buffer(&self, input: &[u8], _level: Option<i32>) -> Result<Vec<u8>, CompressionError> {
            Ok(input.to_vec())
        }
        fn decompress_buffer(&self, input: &[u8], _capacity: usize) -> Result<Vec<u8>, CompressionError> {
            Ok(input.to_vec())
        }
    }

    fn fake(id: CodecId, name: &'static str, available: bool) -> Box<dyn Codec> {
        Box::new(Fake { id, name, available })
    }

    fn names(r: &Registry) -> Vec<&'static str> {
        r.iter().map(|c| c.name()).collect()
    }

// # ✅ 1. Builtin registry

    #[test]
    fn builtin_registry_has_all_six_in_id_order() {
        let r = Registry::builtin();
        assert_eq!(names(&r), ["zlib", "bzip2", "lzma", "zstd", "lz4", "snappy"]);
        for id in CodecId::ALL {
            assert_eq!(r.by_id(id).map(|c| c.id()), Some(id));
        }
    }

    #[test]
    fn process_registry_is_built_once() {
        let a = registry() as *const Registry;
        let b = registry() as *const Registry;
        assert_eq!(a, b);
        assert_eq!(registry().len(), builtin_codecs().len());
    }

    #[test]
    fn name_lookup_is_exact_and_case_sensitive() {
        let r = Registry::builtin();
        assert!(r.by_name("zstd").is_some());
        assert!(r.by_name("ZSTD").is_none());
        assert!(r.by_name("zst").is_none());
        assert!(r.by_name("brotli").is_none());
    }

    #[test]
    fn raw_id_lookup() {
        let r = Registry::builtin();
        assert_eq!(r.by_raw_id(6).map(|c| c.name()), Some("snappy"));
        assert!(r.by_raw_id(0).is_none(), "id 0 is reserved for none");
        assert!(r.by_raw_id(200).is_none());
    }

// # ✅ 2. Explicit construction

    #[test]
    fn unavailable_codecs_are_dropped() {
        let r = Registry::with_codecs(vec![
            fake(CodecId::Zlib, "zlib", false),
            fake(CodecId::Lz4, "lz4", true),
        ]);
        assert_eq!(names(&r), ["lz4"]);
        assert!(!r.contains(CodecId::Zlib));
    }

    #[test]
    fn duplicates_keep_the_first() {
        let r = Registry::with_codecs(vec![
            fake(CodecId::Zstd, "zstd", true),
            fake(CodecId::Zstd, "zstd-again", true),
            fake(CodecId::Zlib, "zstd", true),
        ]);
        assert_eq!(names(&r), ["zstd"]);
    }

// # ✅ 3. Strategy selection

    #[test]
    fn strategy_picks_documented_defaults() {
        let r = Registry::builtin();
        let pick = |s: Option<&str>| Strategy::from_name(s).select(&r).map(|c| c.name());

        assert_eq!(pick(Some("fast")), Some("lz4"));
        assert_eq!(pick(Some("balanced")), Some("zstd"));
        assert_eq!(pick(Some("max_ratio")), Some("lzma"));
        assert_eq!(pick(Some("turbo")), Some("zstd"));
        assert_eq!(pick(Some("FAST")), Some("zstd"));
        assert_eq!(pick(None), Some("zstd"));
    }

    #[test]
    fn strategy_falls_through_missing_codecs() {
        let r = Registry::with_codecs(vec![
            fake(CodecId::Bzip2, "bzip2", true),
            fake(CodecId::Snappy, "snappy", true),
        ]);
        assert_eq!(Strategy::Fast.select(&r).map(|c| c.id()), Some(CodecId::Snappy));
        assert_eq!(Strategy::Balanced.select(&r).map(|c| c.id()), Some(CodecId::Bzip2));
        assert_eq!(Strategy::MaxRatio.select(&r).map(|c| c.id()), Some(CodecId::Bzip2));
    }

    #[test]
    fn empty_registry_selects_nothing() {
        let r = Registry::with_codecs(Vec::new());
        assert!(r.is_empty());
        assert!(Strategy::Balanced.select(&r).is_none());
    }

    #[test]
    fn preference_tables_are_total_orders() {
        for s in [Strategy::Fast, Strategy::Balanced, Strategy::MaxRatio] {
            let mut ids: Vec<u8> = s.preference().iter().map(|id| id.as_u8()).collect();
            ids.sort_unstable();
            assert_eq!(ids, [1u8, 2, 3, 4, 5, 6], "{s}");
        }
    }
}
