#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use tracer::{Level, Tracer};
use tracer::{tracer_debug, tracer_error, tracer_info, tracer_trace, tracer_warn, tracer_writef};

#[test]
fn partial_mask_keeps_only_subscribed_categories() {
    let out = Rc::new(RefCell::new(Vec::new()));
    let sink_out = Rc::clone(&out);

    let mut t = Tracer::with_callback(Level::DEBUG | Level::TRACE, move |bytes: &[u8]| {
        sink_out.borrow_mut().extend_from_slice(bytes);
    });

    tracer_trace!(t, "Hello World");
    tracer_info!(t, "Hello world");
    tracer_error!(t, "Hello World");
    tracer_debug!(t, "Hello World");
    tracer_warn!(t, "Hello World");
    drop(t);

    let expected = b"TRACE: Hello World\nDEBUG: Hello World\n";
    assert_eq!(out.borrow().as_slice(), expected);
}

#[test]
fn full_mask_preserves_call_order_not_severity_order() {
    let out = Rc::new(RefCell::new(Vec::new()));
    let sink_out = Rc::clone(&out);

    let mut t = Tracer::with_callback(Level::ALL, move |bytes: &[u8]| {
        sink_out.borrow_mut().extend_from_slice(bytes);
    });

    tracer_trace!(t, "1");
    tracer_warn!(t, "2");
    tracer_info!(t, "3");
    tracer_debug!(t, "4");
    tracer_error!(t, "5");
    drop(t);

    let expected = b"TRACE: 1\nWARN: 2\nINFO: 3\nDEBUG: 4\nERROR: 5\n";
    assert_eq!(out.borrow().as_slice(), expected);
}

#[test]
fn raw_writes_bypass_the_mask_and_mix_with_gated_lines() {
    let mut out = Vec::new();
    let mut t = Tracer::without_finalize(Level::INFO, &mut out);

    t.write(b"# session header\n").unwrap();
    tracer_debug!(t, "filtered out");
    tracer_info!(t, "peer {} connected", 7);
    tracer_writef!(t, "checked {} ", 3);
    t.write_line("items");
    drop(t);

    assert_eq!(
        out,
        b"# session header\nINFO: peer 7 connected\nchecked 3 items\n"
    );
}

#[test]
fn close_appends_session_end_only_when_debug_subscribed() {
    let mut with_debug = Vec::new();
    Tracer::without_finalize(Level::ALL, &mut with_debug)
        .close()
        .unwrap();
    assert_eq!(with_debug, b"DEBUG: End of session\n");

    let mut without_debug = Vec::new();
    Tracer::without_finalize(Level::INFO | Level::ERROR, &mut without_debug)
        .close()
        .unwrap();
    assert!(without_debug.is_empty());
}

#[test]
fn need_no_err_reads_well_inline() {
    let out = Rc::new(RefCell::new(Vec::new()));
    let sink_out = Rc::clone(&out);

    let mut t = Tracer::with_callback(Level::ALL, move |bytes: &[u8]| {
        sink_out.borrow_mut().extend_from_slice(bytes);
    });

    let step: Result<(), std::io::Error> = Ok(());
    let status = t.need_no_err(&step);
    tracer_info!(t, "handshake {status}");
    drop(t);

    assert_eq!(out.borrow().as_slice(), b"INFO: handshake [OK]\n");
}
