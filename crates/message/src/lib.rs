#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `message` provides the diagnostic record type shared across the oc-log
//! workspace. A [`Message`] pairs a [`Severity`] (or a verbose level finer
//! than any ordinary severity) with a payload and an optional
//! [`SourceLocation`], and renders itself into line-oriented diagnostics such
//! as `oc-log warning: some files vanished`.
//!
//! # Design
//!
//! Messages are cheap, ephemeral values: the payload is a
//! [`Cow<'static, str>`](std::borrow::Cow) so call sites that log literals
//! never allocate, and rendering reuses a caller-provided [`MessageScratch`]
//! so batched emission avoids zeroing fresh buffers between writes.
//!
//! # Invariants
//!
//! - A rendered message is a single line; payloads are not split or wrapped.
//! - Verbose messages rank as [`Severity::Info`] for severity comparisons;
//!   the verbose level only changes the rendered tag (`v1`, `v2`, ...).
//! - Rendering with a scratch buffer produces the whole line in one
//!   contiguous buffer so sinks can issue a single write per message.
//!
//! # Examples
//!
//! ```
//! use message::{Message, MessageScratch};
//!
//! let mut scratch = MessageScratch::new();
//! let warning = Message::warning("some files vanished");
//! assert_eq!(warning.render_with_scratch(&mut scratch), "oc-log warning: some files vanished");
//!
//! let detail = Message::verbose(1, "walked 42 entries");
//! assert_eq!(detail.render_with_scratch(&mut scratch), "oc-log v1: walked 42 entries");
//! ```

mod macros;
mod message;
mod scratch;
mod severity;
mod source;

pub use message::Message;
pub use scratch::MessageScratch;
pub use severity::Severity;
pub use source::{SourceLocation, source_stem};

/// Brand prefix rendered at the start of every diagnostic line.
pub const BRAND: &str = "oc-log";
