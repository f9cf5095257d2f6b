// Every compiled codec, exercised directly through the trait objects.

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use compresso_core::compression::codecs::builtin_codecs;
    use compresso_core::compression::{Codec, CodecId, CompressionError};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn random_bytes(n: usize, seed: u64) -> Vec<u8> {
        let mut buf = vec![0u8; n];
        StdRng::seed_from_u64(seed).fill_bytes(&mut buf);
        buf
    }

    fn text_bytes(n: usize) -> Vec<u8> {
        b"the quick brown fox jumps over the lazy dog. "
            .iter()
            .copied()
            .cycle()
            .take(n)
            .collect()
    }

// # ✅ 1. Buffered round trip

    #[test]
    fn buffered_roundtrip_every_codec() {
        let input = text_bytes(100_000);
        for codec in builtin_codecs() {
            let packed = codec.compress_buffer(&input, None).unwrap();
            assert!(packed.len() < input.len(), "{} did not compress text", codec.name());
            let unpacked = codec.decompress_buffer(&packed, input.len()).unwrap();
            assert_eq!(unpacked, input, "{} buffered round trip", codec.name());
        }
    }

// # ✅ 2. Streaming round trip

    #[test]
    fn streaming_roundtrip_every_codec() {
        let input = random_bytes(150_000, 7);
        for codec in builtin_codecs() {
            let streaming = codec.streaming().expect("all builtin codecs stream");

            let mut packed = Vec::new();
            let totals = streaming
                .compress_stream(&mut Cursor::new(&input), &mut packed, Some(1))
                .unwrap();
            assert_eq!(totals.bytes_read, input.len() as u64, "{}", codec.name());
            assert_eq!(totals.bytes_written, packed.len() as u64, "{}", codec.name());

            let mut unpacked = Vec::new();
            let totals = streaming
                .decompress_stream(&mut Cursor::new(&packed), &mut unpacked, input.len() as u64)
                .unwrap();
            assert_eq!(totals.bytes_written, input.len() as u64, "{}", codec.name());
            assert_eq!(unpacked, input, "{} streaming round trip", codec.name());
        }
    }

    #[test]
    fn snappy_stream_counts_chunks() {
        let codec = builtin_codecs().into_iter().find(|c| c.id() == CodecId::Snappy).unwrap();
        let streaming = codec.streaming().unwrap();
        let input = random_bytes(200 * 1024, 11);

        let mut packed = Vec::new();
        let totals = streaming.compress_stream(&mut Cursor::new(&input), &mut packed, None).unwrap();
        assert_eq!(totals.chunks, 4);
    }

// # ✅ 3. Upper bound never under-estimates

    #[test]
    fn upper_bound_holds_for_reference_sizes() {
        for n in [0usize, 1, 4096, 1 << 20] {
            let input = random_bytes(n, n as u64);
            for codec in builtin_codecs() {
                let packed = codec.compress_buffer(&input, None).unwrap();
                assert!(
                    codec.upper_bound(n) >= packed.len(),
                    "{}: bound {} < actual {} for n={}",
                    codec.name(),
                    codec.upper_bound(n),
                    packed.len(),
                    n
                );
            }
        }
    }

// # ✅ 4. Level handling

    #[test]
    fn levels_clamp_instead_of_failing() {
        for codec in builtin_codecs() {
            let default = codec.clamp_level(None);
            assert_eq!(codec.clamp_level(Some(-1)), default, "{}", codec.name());

            match codec.id() {
                CodecId::Zlib => {
                    assert_eq!(default, Some(6));
                    assert_eq!(codec.clamp_level(Some(99)), Some(9));
                }
                CodecId::Bzip2 => {
                    assert_eq!(default, Some(9));
                    assert_eq!(codec.clamp_level(Some(0)), Some(1));
                }
                CodecId::Lzma => {
                    assert_eq!(default, Some(6));
                    assert_eq!(codec.clamp_level(Some(12)), Some(9));
                }
                CodecId::Zstd => {
                    assert_eq!(default, Some(3));
                    assert!(codec.clamp_level(Some(1000)).unwrap() <= 22);
                }
                CodecId::Lz4 | CodecId::Snappy => {
                    assert_eq!(default, None);
                    assert_eq!(codec.clamp_level(Some(5)), None);
                }
                CodecId::None => unreachable!(),
            }

            // lzma at 9e needs a 64 MiB dictionary; clamping is checked above.
            if codec.id() == CodecId::Lzma {
                continue;
            }
            let input = text_bytes(4096);
            let packed = codec.compress_buffer(&input, Some(i32::MAX)).unwrap();
            assert_eq!(codec.decompress_buffer(&packed, input.len()).unwrap(), input);
        }
    }

// # ❌ 5. Failures

    #[test]
    fn capacity_is_enforced_on_decompress() {
        let input = text_bytes(10_000);
        for codec in builtin_codecs() {
            let packed = codec.compress_buffer(&input, None).unwrap();
            let err = codec.decompress_buffer(&packed, input.len() / 2).unwrap_err();
            assert!(
                matches!(err, CompressionError::CapacityExceeded { .. } | CompressionError::Backend { .. }),
                "{}: {err}",
                codec.name()
            );
        }
    }

    #[test]
    fn garbage_is_a_backend_error() {
        let garbage = random_bytes(512, 3);
        for codec in builtin_codecs() {
            match codec.decompress_buffer(&garbage, 4096) {
                Err(CompressionError::Backend { codec: name, .. }) => assert_eq!(name, codec.name()),
                Err(CompressionError::CapacityExceeded { .. }) => {}
                other => panic!("{}: unexpected {:?}", codec.name(), other.map(|v| v.len())),
            }

            let mut sink = Vec::new();
            let err = codec
                .streaming()
                .unwrap()
                .decompress_stream(&mut Cursor::new(&garbage), &mut sink, 4096)
                .unwrap_err();
            assert!(
                matches!(err, CompressionError::Backend { .. } | CompressionError::Chunk(_)),
                "{}: {err}",
                codec.name()
            );
        }
    }

    #[test]
    fn lz4_detects_a_clipped_frame_tail() {
        let codec = builtin_codecs().into_iter().find(|c| c.id() == CodecId::Lz4).unwrap();
        let input = text_bytes(20_000);

        let mut packed = codec.compress_buffer(&input, None).unwrap();
        packed.pop();
        assert!(codec.decompress_buffer(&packed, input.len()).is_err());

        let streaming = codec.streaming().unwrap();
        let mut framed = Vec::new();
        streaming.compress_stream(&mut Cursor::new(&input), &mut framed, None).unwrap();
        framed.pop();
        let mut sink = Vec::new();
        let err = streaming
            .decompress_stream(&mut Cursor::new(&framed), &mut sink, input.len() as u64)
            .unwrap_err();
        assert!(matches!(err, CompressionError::Backend { codec: "lz4", .. }), "{err}");
    }

    #[test]
    fn snappy_probe_reads_embedded_length() {
        let codec = builtin_codecs().into_iter().find(|c| c.id() == CodecId::Snappy).unwrap();
        let packed = codec.compress_buffer(&text_bytes(1234), None).unwrap();
        assert_eq!(codec.probe_decompressed_len(&packed).unwrap().unwrap(), 1234);

        let zlib = builtin_codecs().into_iter().find(|c| c.id() == CodecId::Zlib).unwrap();
        assert!(zlib.probe_decompressed_len(&packed).is_none());
    }

// # 6. Property: arbitrary inputs round trip through both paths

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_roundtrip_fast_codecs(data in proptest::collection::vec(any::<u8>(), 0..20_000)) {
            for codec in builtin_codecs().into_iter().filter(|c| c.id() != CodecId::Lzma) {
                let packed = codec.compress_buffer(&data, Some(1)).unwrap();
                prop_assert!(packed.len() <= codec.upper_bound(data.len()));
                prop_assert_eq!(&codec.decompress_buffer(&packed, data.len()).unwrap(), &data);

                let streaming = codec.streaming().unwrap();
                let mut framed = Vec::new();
                streaming.compress_stream(&mut Cursor::new(&data), &mut framed, Some(1)).unwrap();
                let mut restored = Vec::new();
                streaming
                    .decompress_stream(&mut Cursor::new(&framed), &mut restored, data.len() as u64)
                    .unwrap();
                prop_assert_eq!(&restored, &data);
            }
        }
    }
}
