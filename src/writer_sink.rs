use std::io;

use crate::sink::Sink;

/// Pass-through sink over any [`io::Write`].
///
/// Writes go straight to the wrapped writer; `finalize` is a no-op. For
/// destinations that do have shutdown semantics, implement [`Sink`] directly
/// instead of using this adapter.
#[derive(Debug, Clone, Default)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: io::Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Gets a reference to the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Gets a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwraps this adapter, returning the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Sink for WriterSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    #[inline]
    fn finalize(&mut self) -> io::Result<()> {
        Ok(())
    }
}
