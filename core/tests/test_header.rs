// Container header: layout, validation and error display.

#[cfg(test)]
mod tests {
    use compresso_core::compression::CodecId;
    use compresso_core::constants::{flags, CONTAINER_V1, LEVEL_UNSPECIFIED, MAGIC_COMP};
    use compresso_core::headers::{decode_header_le, encode_header_le, ContainerHeader, HeaderError};

    fn sample() -> ContainerHeader {
        ContainerHeader::new(CodecId::Zstd, 3, 0x0102_0304_0506_0708)
    }

// # ✅ 1. Byte layout is fixed and little-endian

    #[test]
    fn encoded_layout_matches_wire_format() {
        let buf = encode_header_le(&sample());

        assert_eq!(buf.len(), 16);
        assert_eq!(&buf[0..4], b"COMP");
        assert_eq!(buf[4], CONTAINER_V1);
        assert_eq!(buf[5], 4);
        assert_eq!(buf[6], 3);
        assert_eq!(buf[7], 0);
        assert_eq!(&buf[8..16], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn decode_recovers_every_field() {
        let h = sample();
        let decoded = decode_header_le(&encode_header_le(&h)).unwrap();

        assert_eq!(decoded, h);
        assert_eq!(decoded.codec(), Some(CodecId::Zstd));
        assert_eq!(decoded.level(), Some(3));
        assert_eq!(decoded.flags, 0);
    }

    #[test]
    fn unspecified_level_reads_as_none() {
        let h = ContainerHeader::new(CodecId::Lz4, LEVEL_UNSPECIFIED, 10);
        assert_eq!(h.level(), None);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut buf = encode_header_le(&sample()).to_vec();
        buf.extend_from_slice(b"payload");
        assert_eq!(decode_header_le(&buf).unwrap(), sample());
    }

// # ❌ 2. Rejections

    #[test]
    fn every_magic_byte_flip_is_rejected() {
        let good = encode_header_le(&sample());
        for i in 0..MAGIC_COMP.len() {
            let mut bad = good;
            bad[i] ^= 0xFF;
            assert!(
                matches!(decode_header_le(&bad), Err(HeaderError::InvalidMagic { .. })),
                "flip at byte {i} accepted"
            );
        }
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut buf = encode_header_le(&sample());
        buf[4] = 2;
        assert_eq!(
            decode_header_le(&buf),
            Err(HeaderError::UnsupportedVersion { have: 2, supported: CONTAINER_V1 })
        );
    }

    #[test]
    fn reserved_flag_bits_are_rejected() {
        assert_eq!(flags::KNOWN, 0);
        for bit in 0..8 {
            let mut buf = encode_header_le(&sample());
            buf[7] = 1 << bit;
            assert_eq!(decode_header_le(&buf), Err(HeaderError::UnknownFlags { raw: 1 << bit }));
        }
    }

    #[test]
    fn truncated_header_is_rejected() {
        let buf = encode_header_le(&sample());
        assert_eq!(
            decode_header_le(&buf[..10]),
            Err(HeaderError::BufferTooShort { have: 10, need: ContainerHeader::LEN })
        );
        assert!(matches!(decode_header_le(&[]), Err(HeaderError::BufferTooShort { have: 0, .. })));
    }

    #[test]
    fn short_foreign_file_reports_bad_magic() {
        assert!(matches!(decode_header_le(b"PK\x03\x04zip"), Err(HeaderError::InvalidMagic { .. })));
    }

    #[test]
    fn unknown_codec_id_is_structurally_valid() {
        let mut buf = encode_header_le(&sample());
        buf[5] = 0x42;
        let h = decode_header_le(&buf).unwrap();
        assert_eq!(h.codec(), None);
    }

// # 3. Display

    #[test]
    fn error_messages_are_readable() {
        let e = HeaderError::InvalidMagic { have: *b"ABCD", need: MAGIC_COMP };
        assert_eq!(e.to_string(), "invalid magic: expected b\"COMP\", got b\"ABCD\"");

        let e = HeaderError::InvalidMagic { have: [0, 1, 2, 3], need: MAGIC_COMP };
        assert!(e.to_string().ends_with("0x00010203"));
    }

    #[test]
    fn header_display_names_codec() {
        let text = sample().to_string();
        assert!(text.contains("codec=zstd"), "{text}");
        assert!(text.contains("level=3"), "{text}");

        let mut h = sample();
        h.codec_id = 0x42;
        assert!(h.to_string().contains("codec=0x42"), "{h}");
    }
}
