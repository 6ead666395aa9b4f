//! Byte-accounted writing for grid rendering.
//!
//! Rendering reports how many bytes reached the sink, including when the
//! sink fails partway. [`CountingWriter`] tracks every byte a `write` call
//! accepted; [`RenderError`] carries that count next to the first failure.

use std::error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

/// First write failure while rendering, plus the bytes written before it.
#[derive(Debug)]
pub struct RenderError {
    written: u64,
    source: io::Error,
}

impl RenderError {
    pub fn new(written: u64, source: io::Error) -> Self {
        Self { written, source }
    }

    /// Bytes the sink accepted before the failure.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }

    pub fn into_io_error(self) -> io::Error {
        self.source
    }
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "render failed after {} bytes: {}",
            self.written, self.source
        )
    }
}

impl error::Error for RenderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}

/// `io::Write` wrapper counting the bytes each inner `write` accepted.
pub struct CountingWriter<'a, W: Write + ?Sized> {
    inner: &'a mut W,
    written: u64,
}

impl<'a, W: Write + ?Sized> CountingWriter<'a, W> {
    pub fn new(inner: &'a mut W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn written(&self) -> u64 {
        self.written
    }
}

impl<W: Write + ?Sized> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
