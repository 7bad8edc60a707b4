#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging-sink` provides the destination half of the oc-log controller:
//! streaming [`message::Message`] values into arbitrary writers, and routing
//! each emitted message to exactly one of the fallback stream or a dedicated
//! verbose-output file.
//!
//! # Design
//!
//! The crate exposes two layers. [`MessageSink`] is a lightweight wrapper
//! around an [`std::io::Write`] implementor that renders messages through a
//! reusable [`message::MessageScratch`] buffer, so batched diagnostics avoid
//! repeated allocation. [`Router`] sits above it and decides destinations:
//! ordinary severities always reach the fallback sink, while verbose-tier
//! messages are appended to the configured vlog file when one exists.
//!
//! # Invariants
//!
//! - Each routed message reaches exactly one destination, never both.
//! - Every line is rendered into a single contiguous buffer and written with
//!   one `write_all`, so serialized callers never interleave partial lines.
//! - Vlog-file writes are flushed immediately; a concurrent reader polling
//!   the file observes each entry as soon as `route` returns.
//! - A vlog file that cannot be opened or written demotes the router to the
//!   fallback stream for the remainder of the process, after a single
//!   warning; routing itself never fails the caller on account of the file.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! fallback writer. Errors from the vlog file are consumed by the demotion
//! path described above.
//!
//! # Examples
//!
//! Stream two diagnostics into an in-memory buffer and inspect the output:
//!
//! ```
//! use logging_sink::{LineMode, MessageSink};
//! use message::Message;
//!
//! let mut sink = MessageSink::new(Vec::new());
//! sink.write(&Message::warning("some files vanished")).unwrap();
//! sink.write(&Message::error("partial transfer")).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.lines().all(|line| line.starts_with("oc-log")));
//!
//! // Render a final message without appending a newline.
//! let mut final_sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
//! final_sink.write(&Message::info("completed")).unwrap();
//! assert!(final_sink.into_inner().ends_with(b"completed"));
//! ```
//!
//! # See also
//!
//! - [`message`] for message construction and formatting helpers.
//! - The `logging` crate for the verbosity gate and the process-wide router.

mod line_mode;
mod router;
mod sink;
mod timestamp;

pub use line_mode::LineMode;
pub use router::Router;
pub use sink::MessageSink;
