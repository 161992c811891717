use std::io;

/// Destination capability a tracer writes formatted output to.
///
/// Two operations only: accept raw bytes, and run a one-shot finalize action
/// when the owning tracer is closed (flush, release a handle, ...). Adapters
/// whose destination has no shutdown semantics implement `finalize` as a
/// no-op.
pub trait Sink {
    /// Writes `buf` to the destination, returning the number of bytes
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns the destination's I/O error. Whether that error is visible to
    /// callers depends on the tracer path used: raw writes surface it,
    /// formatted emission discards it.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Runs the shutdown action for this sink.
    ///
    /// # Errors
    ///
    /// Returns the destination's I/O error if the shutdown action fails.
    fn finalize(&mut self) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn finalize(&mut self) -> io::Result<()> {
        (**self).finalize()
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }

    fn finalize(&mut self) -> io::Result<()> {
        (**self).finalize()
    }
}
