//! Format-string sugar over the [`Tracer`](crate::Tracer) methods.
//!
//! Each macro takes the tracer expression first, then a standard format
//! string and arguments, and expands to the matching method call with
//! `format_args!`. Because `format_args!` is lazy, a gated-off level still
//! performs no formatting work.

// ---------------------- LEVEL-GATED EMITTERS ----------------------

#[macro_export]
macro_rules! tracer_trace { ($tracer:expr, $($arg:tt)*) => { $tracer.trace(format_args!($($arg)*)) } }

#[macro_export]
macro_rules! tracer_debug { ($tracer:expr, $($arg:tt)*) => { $tracer.debug(format_args!($($arg)*)) } }

#[macro_export]
macro_rules! tracer_info { ($tracer:expr, $($arg:tt)*) => { $tracer.info(format_args!($($arg)*)) } }

#[macro_export]
macro_rules! tracer_warn { ($tracer:expr, $($arg:tt)*) => { $tracer.warn(format_args!($($arg)*)) } }

#[macro_export]
macro_rules! tracer_error { ($tracer:expr, $($arg:tt)*) => { $tracer.error(format_args!($($arg)*)) } }

// ---------------------- UNGATED PATHS ----------------------

/// Expands to [`Tracer::fatal`](crate::Tracer::fatal): writes the `FATAL:`
/// line and terminates the process.
#[macro_export]
macro_rules! tracer_fatal { ($tracer:expr, $($arg:tt)*) => { $tracer.fatal(format_args!($($arg)*)) } }

#[macro_export]
macro_rules! tracer_writef { ($tracer:expr, $($arg:tt)*) => { $tracer.writef(format_args!($($arg)*)) } }

#[macro_export]
macro_rules! tracer_write_line { ($tracer:expr, $($arg:tt)*) => { $tracer.write_linef(format_args!($($arg)*)) } }
