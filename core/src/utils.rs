use std::io::{self, Read};

/// Printable form of a byte string: quoted when ASCII, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Fill `window` from `r` until it is full or the reader hits EOF.
///
/// Returns the number of bytes placed in `window`; 0 means EOF.
pub fn read_window<R: Read + ?Sized>(r: &mut R, window: &mut [u8]) -> io::Result<usize> {
    let mut off = 0;
    while off < window.len() {
        match r.read(&mut window[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(off)
}
