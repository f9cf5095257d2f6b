//! headers/encode.rs
//! Serialize a `ContainerHeader` into its fixed little-endian layout.
use crate::headers::types::ContainerHeader;

#[inline]
pub fn encode_header_le(h: &ContainerHeader) -> [u8; ContainerHeader::LEN] {
    let mut out = [0u8; ContainerHeader::LEN];
    let mut i = 0usize;

    fn put_u8(out: &mut [u8], i: &mut usize, v: u8) {
        out[*i] = v;
        *i += 1;
    }
    fn put_u64(out: &mut [u8], i: &mut usize, v: u64) {
        out[*i..*i + 8].copy_from_slice(&v.to_le_bytes());
        *i += 8;
    }
    fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
        out[*i..*i + b.len()].copy_from_slice(b);
        *i += b.len();
    }

    put_bytes(&mut out, &mut i, &h.magic);     // 0..4
    put_u8(&mut out, &mut i, h.version);       // 4
    put_u8(&mut out, &mut i, h.codec_id);      // 5
    put_u8(&mut out, &mut i, h.level);         // 6
    put_u8(&mut out, &mut i, h.flags);         // 7
    put_u64(&mut out, &mut i, h.original_size); // 8..16

    debug_assert_eq!(i, ContainerHeader::LEN, "encoding wrote incorrect length");
    out
}
