//! pipeline/io.rs
//! File handles and whole-input reads for the pipelines.
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use crate::compression::Codec;
use crate::constants::STREAM_CHUNK_SIZE;
use crate::headers::{decode_header_le, ContainerHeader};
use crate::types::Error;
use crate::utils::read_window;

/// Open the source and report its size.
pub fn open_source(path: &Path) -> Result<(BufReader<File>, u64), Error> {
    let file = File::open(path).map_err(Error::io("opening source"))?;
    let size = file.metadata().map_err(Error::io("reading source metadata"))?.len();
    Ok((BufReader::with_capacity(STREAM_CHUNK_SIZE, file), size))
}

/// Create or truncate the destination.
pub fn create_destination(path: &Path) -> Result<BufWriter<File>, Error> {
    let file = File::create(path).map_err(Error::io("creating destination"))?;
    Ok(BufWriter::with_capacity(STREAM_CHUNK_SIZE, file))
}

/// Read and validate the container header at the current position.
pub fn read_header<R: Read + ?Sized>(src: &mut R) -> Result<ContainerHeader, Error> {
    let mut buf = [0u8; ContainerHeader::LEN];
    let n = read_window(src, &mut buf).map_err(Error::io("reading header"))?;
    Ok(decode_header_le(&buf[..n])?)
}

/// Read everything left in `src`; `size_hint` bytes are reserved up front.
pub fn read_to_vec<R: Read + ?Sized>(
    src: &mut R,
    size_hint: u64,
    codec: &dyn Codec,
) -> Result<Vec<u8>, Error> {
    let oom = || Error::OutOfMemory { codec: codec.name(), requested: size_hint as usize };
    let hint = usize::try_from(size_hint).map_err(|_| oom())?;

    let mut data = Vec::new();
    data.try_reserve_exact(hint).map_err(|_| oom())?;
    src.read_to_end(&mut data).map_err(Error::io("reading payload"))?;
    Ok(data)
}
