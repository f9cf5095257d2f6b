//! compression/stream.rs
//! Shared plumbing for streaming codecs.
//!
//! Backends report every failure as `io::Error`, so a streaming call cannot tell
//! a corrupt payload from a broken file by the error alone. [`Tap`] wraps the
//! caller's source and destination, counts bytes, and remembers whether the
//! underlying handle itself failed. [`run_stream`] uses that record to classify
//! the outcome.
use std::io::{self, Read, Write};

use crate::compression::types::{CompressionError, Operation, StreamTotals};
use crate::constants::STREAM_CHUNK_SIZE;

/// Counting reader/writer that records failures of the wrapped handle.
pub struct Tap<T> {
    inner: T,
    count: u64,
    failure: Option<io::Error>,
}

impl<T> Tap<T> {
    pub fn new(inner: T) -> Self {
        Self { inner, count: 0, failure: None }
    }

    /// Bytes that passed through so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }

    fn record(&mut self, e: io::Error) -> io::Error {
        let echo = io::Error::new(e.kind(), e.to_string());
        if self.failure.is_none() {
            self.failure = Some(e);
        }
        echo
    }
}

impl<R: Read> Read for Tap<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buf) {
            Ok(n) => {
                self.count += n as u64;
                Ok(n)
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(e),
            Err(e) => Err(self.record(e)),
        }
    }
}

impl<W: Write> Write for Tap<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.inner.write(buf) {
            Ok(n) => {
                self.count += n as u64;
                Ok(n)
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(e),
            Err(e) => Err(self.record(e)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().map_err(|e| self.record(e))
    }
}

/// Copy `src` into `sink` one window at a time. Returns bytes copied.
pub fn pump<R, W>(src: &mut R, sink: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut window = vec![0u8; STREAM_CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = crate::utils::read_window(src, &mut window)?;
        if n == 0 {
            return Ok(total);
        }
        sink.write_all(&window[..n])?;
        total += n as u64;
    }
}

/// Run one streaming operation between tapped handles.
///
/// `body` returns the number of framed chunks it processed (0 for codecs with
/// their own stream format). Errors raised while a tapped handle had failed
/// become [`CompressionError::Io`]; anything else is a backend failure.
pub fn run_stream<F>(
    codec: &'static str,
    op: Operation,
    src: &mut dyn Read,
    dst: &mut dyn Write,
    body: F,
) -> Result<StreamTotals, CompressionError>
where
    F: FnOnce(&mut Tap<&mut dyn Read>, &mut Tap<&mut dyn Write>) -> Result<u64, CompressionError>,
{
    let mut input = Tap::new(src);
    let mut output = Tap::new(dst);

    let result = body(&mut input, &mut output).and_then(|chunks| {
        output.flush()?;
        Ok(chunks)
    });

    match result {
        Ok(chunks) => Ok(StreamTotals {
            bytes_read: input.count(),
            bytes_written: output.count(),
            chunks,
        }),
        Err(e) => {
            if let Some(io_err) = input.take_failure().or_else(|| output.take_failure()) {
                return Err(CompressionError::Io(io_err));
            }
            Err(match e {
                CompressionError::Io(inner) => CompressionError::backend(codec, op, inner),
                other => other,
            })
        }
    }
}
