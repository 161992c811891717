use std::{collections::HashMap, fmt, io, process};

use crate::{
    callback_sink::CallbackSink, level::Level, sink::Sink, writer_sink::WriterSink,
};

/// Leveled, synchronous tracer writing severity-prefixed lines to a sink.
///
/// A `Tracer` is built once per session with an immutable subscription mask
/// and an owned [`Sink`], used for the duration of the session, and destroyed
/// by an explicit [`close`](Self::close) that runs the sink's finalize hook.
///
/// Emission contract:
/// - Level-gated emitters ([`trace`](Self::trace) .. [`error`](Self::error))
///   are complete no-ops when their bit is absent from the mask, and
///   otherwise write `"<LEVEL>: <message>\n"`.
/// - All formatted paths discard sink write errors; tracing never interrupts
///   caller control flow on sink failure. The raw [`write`](Self::write)
///   escape hatch is the one path that surfaces them.
/// - [`fatal`](Self::fatal) bypasses the mask and **terminates the process**.
pub struct Tracer<S> {
    mask: Level,
    sink: S,
    values: HashMap<String, String>,
    exit: fn(i32) -> !,
}

impl<W: io::Write> Tracer<WriterSink<W>> {
    /// Builds a tracer over a bare writer with no shutdown semantics.
    ///
    /// The writer is wrapped in a [`WriterSink`], so [`close`](Self::close)
    /// runs a no-op finalize.
    #[must_use]
    pub fn without_finalize(mask: Level, writer: W) -> Self {
        Self::new(mask, WriterSink::new(writer))
    }
}

impl<F: FnMut(&[u8])> Tracer<CallbackSink<F>> {
    /// Builds a tracer that hands every written chunk to `handler`.
    ///
    /// The handler has no failure channel, so writes always report success;
    /// finalize is a no-op.
    ///
    /// # Examples
    /// ```ignore
    /// let t = Tracer::with_callback(Level::ALL, |bytes| {
    ///     upstream.forward(bytes);
    /// });
    /// ```
    #[must_use]
    pub fn with_callback(mask: Level, handler: F) -> Self {
        Self::new(mask, CallbackSink::new(handler))
    }
}

impl<S: Sink> Tracer<S> {
    /// Builds a tracer bound to an arbitrary sink.
    ///
    /// `mask` selects the subscribed categories, e.g. [`Level::ALL`] for
    /// everything or `Level::INFO | Level::ERROR` for a selection. The value
    /// is not validated; an empty mask simply emits nothing through the gated
    /// paths.
    #[must_use]
    pub fn new(mask: Level, sink: S) -> Self {
        Self {
            mask,
            sink,
            values: HashMap::new(),
            exit: default_exit,
        }
    }

    /// Replaces the process-termination hook used by [`fatal`](Self::fatal).
    ///
    /// The default hook is [`std::process::exit`]. Substituting it (e.g. with
    /// a panicking function in tests) is the only supported way to observe a
    /// fatal emission without ending the process.
    #[must_use]
    pub fn with_exit_hook(mut self, exit: fn(i32) -> !) -> Self {
        self.exit = exit;
        self
    }

    /// Returns the subscribed mask, fixed at construction.
    #[must_use]
    pub fn mask(&self) -> Level {
        self.mask
    }

    /// Returns whether any bit of `level` is subscribed.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        self.mask.intersects(level)
    }

    /// Renders a result as a short status token: `"[OK]"` on success,
    /// `"[Error: <message>]"` on failure.
    ///
    /// Pure formatting helper for call sites that trace the outcome of a
    /// fallible step; performs no filtering and no writes.
    #[must_use]
    pub fn need_no_err<T, E: fmt::Display>(&self, res: &Result<T, E>) -> String {
        match res {
            Ok(_) => "[OK]".to_string(),
            Err(e) => format!("[Error: {e}]"),
        }
    }

    /// Inserts or overwrites an auxiliary named value; last write wins.
    ///
    /// The store is out-of-band context for collaborators that extend
    /// formatting. No tracing call reads or emits it.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Reads back an auxiliary value set via [`set_value`](Self::set_value).
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Writes raw bytes straight to the sink, never filtered by the mask.
    ///
    /// This is the lowest-level escape hatch and the only write path that
    /// surfaces the sink's error.
    ///
    /// # Errors
    ///
    /// Propagates the sink's write error.
    pub fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }

    /// Writes a string to the sink, discarding any write error.
    pub fn write_str(&mut self, s: &str) {
        // Sink faults must not bubble out of formatted paths.
        let _ = self.write(s.as_bytes());
    }

    /// Formats and writes, discarding any write error.
    ///
    /// Call sites usually go through [`tracer_writef!`](crate::tracer_writef)
    /// rather than building the [`fmt::Arguments`] by hand.
    pub fn writef(&mut self, args: fmt::Arguments<'_>) {
        self.write_str(&args.to_string());
    }

    /// Writes `s` followed by a newline, as a single sink write.
    pub fn write_line(&mut self, s: &str) {
        self.write_str(&format!("{s}\n"));
    }

    /// Formats and writes the result followed by a newline.
    pub fn write_linef(&mut self, args: fmt::Arguments<'_>) {
        self.write_line(&args.to_string());
    }

    /// Emits a `TRACE:`-prefixed line if [`Level::TRACE`] is subscribed.
    pub fn trace(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::TRACE, "TRACE", args);
    }

    /// Emits a `DEBUG:`-prefixed line if [`Level::DEBUG`] is subscribed.
    pub fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::DEBUG, "DEBUG", args);
    }

    /// Emits an `INFO:`-prefixed line if [`Level::INFO`] is subscribed.
    pub fn info(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::INFO, "INFO", args);
    }

    /// Emits a `WARN:`-prefixed line if [`Level::WARN`] is subscribed.
    pub fn warn(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::WARN, "WARN", args);
    }

    /// Emits an `ERROR:`-prefixed line if [`Level::ERROR`] is subscribed.
    pub fn error(&mut self, args: fmt::Arguments<'_>) {
        self.emit(Level::ERROR, "ERROR", args);
    }

    /// Writes a `FATAL:`-prefixed line, bypassing the mask, then
    /// **terminates the process** with a non-zero exit status.
    ///
    /// Never returns. Collaborators may depend on crash-on-fatal semantics;
    /// tests substitute the termination via
    /// [`with_exit_hook`](Self::with_exit_hook).
    pub fn fatal(&mut self, args: fmt::Arguments<'_>) -> ! {
        self.write_str(&format!("FATAL: {args}\n"));
        (self.exit)(1)
    }

    /// Ends the session: emits a Debug-gated `"End of session"` line, then
    /// runs the sink's finalize hook.
    ///
    /// Consumes the tracer; there is no implicit finalization on drop.
    ///
    /// # Errors
    ///
    /// Propagates the sink's finalize error. The session-end line itself
    /// follows normal gating and error-swallowing rules.
    pub fn close(mut self) -> io::Result<()> {
        self.debug(format_args!("End of session"));
        self.sink.finalize()
    }

    fn emit(&mut self, level: Level, token: &str, args: fmt::Arguments<'_>) {
        if !self.mask.intersects(level) {
            return;
        }
        self.write_str(&format!("{token}: {args}\n"));
    }
}

fn default_exit(code: i32) -> ! {
    process::exit(code)
}
