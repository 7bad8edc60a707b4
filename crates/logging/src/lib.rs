#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the front of the oc-log controller: an environment-driven
//! verbosity gate over the destination router in `logging-sink`. Verbose
//! diagnostics are emitted through the [`vlog!`] macro, which consults the
//! process-wide [`VlogConfig`] before the message text is even formatted;
//! ordinary severities go through [`log_info!`], [`log_warning!`] and
//! [`log_error!`] and bypass the gate entirely.
//!
//! # Configuration
//!
//! The configuration is captured from the environment exactly once per
//! process, either explicitly at startup via [`init`] (or [`init_with`]) or
//! lazily on the first gate query. It is immutable for the remainder of the
//! process, so diagnostic behavior is deterministic across a run:
//!
//! | Variable | Effect |
//! |---|---|
//! | `OC_LOG_MAX_VLOG_LEVEL` | global maximum verbose level, default 0 |
//! | `OC_LOG_VLOG_FILE` | dedicated file for verbose output |
//! | `OC_LOG_MIN_SEVERITY` | floor for ordinary severities, default `info` |
//! | `OC_LOG_VMODULE` | `name=level,...` per-source-file overrides |
//!
//! # Routing
//!
//! Ordinary severities always reach the fallback stream (stderr). Verbose
//! messages that pass the gate go to the configured vlog file when one
//! exists, otherwise they merge into the fallback stream. A file that cannot
//! be opened demotes the router to the fallback stream after a single
//! warning; logging never takes down the host process.
//!
//! # Examples
//!
//! ```
//! logging::init();
//!
//! logging::log_warning!("{} files vanished", 3);
//! logging::vlog!(1, "walked {} entries", 42);
//!
//! if logging::vlog_on!(2) {
//!     logging::vlog!(2, "expensive detail");
//! }
//! ```
//!
//! # See also
//!
//! - [`message`] for the diagnostic record type and its rendering.
//! - `logging-sink` for the sink and router primitives underneath.

mod config;
mod env;
mod global;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ModuleOverride, VlogConfig};
pub use env::{MAX_VLOG_LEVEL_ENV, MIN_SEVERITY_ENV, VLOG_FILE_ENV, VMODULE_ENV};
pub use global::{config, emit, init, init_with, vlog_enabled};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{VlogLayer, init_tracing, init_tracing_with_filter};

pub use logging_sink::{LineMode, MessageSink, Router};
pub use message::{Message, MessageScratch, Severity, SourceLocation};

#[doc(hidden)]
pub use message as __message;
