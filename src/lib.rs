//! Tracer is a minimal leveled logging facility meant to be embedded in
//! larger systems.
//!
//! A [`Tracer`] filters messages by a severity bitmask ([`Level`]), formats
//! them with an uppercase severity prefix, and writes them synchronously to a
//! caller-supplied [`Sink`]. Closing the tracer runs the sink's finalize
//! hook. There is no rotation, buffering, fan-out, or timestamping; those
//! belong to the sink or to the surrounding application.
//!
//! ```ignore
//! let mut t = Tracer::without_finalize(Level::INFO | Level::ERROR, std::io::stderr());
//! tracer_info!(t, "listening on {}", addr);
//! t.close()?;
//! ```

/// Sink adapter forwarding each write to a callback.
pub mod callback_sink;
/// Bit-flag severity levels and subscription masks.
pub mod level;
/// `tracer_info!`-style format-string macros.
pub mod macros;
/// Sink that discards everything.
pub mod null_sink;
/// The sink capability contract.
pub mod sink;
/// The leveled tracer itself.
pub mod tracer;
/// Pass-through sink over any `io::Write`.
pub mod writer_sink;

pub use callback_sink::CallbackSink;
pub use level::Level;
pub use null_sink::NullSink;
pub use sink::Sink;
pub use tracer::Tracer;
pub use writer_sink::WriterSink;
