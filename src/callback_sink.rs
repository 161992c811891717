use std::io;

use crate::sink::Sink;

/// Sink forwarding each write to a handler callback.
///
/// The handler has no failure channel, so every write reports full success;
/// `finalize` is a no-op.
pub struct CallbackSink<F> {
    handler: F,
}

impl<F: FnMut(&[u8])> CallbackSink<F> {
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F: FnMut(&[u8])> Sink for CallbackSink<F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (self.handler)(buf);
        Ok(buf.len())
    }

    #[inline]
    fn finalize(&mut self) -> io::Result<()> {
        Ok(())
    }
}
