//! crates/message/src/message.rs
//! The diagnostic record and its line rendering.

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::io;

use crate::{BRAND, MessageScratch, Severity, SourceLocation};

/// A single diagnostic record.
///
/// Messages come in two tiers. Ordinary messages carry a [`Severity`] and are
/// always eligible for emission. Verbose messages additionally carry a
/// numeric verbose level; whether they are emitted at all is decided by the
/// controller's verbosity gate before the message is ever constructed.
///
/// Rendered form:
///
/// ```text
/// oc-log warning: some files vanished
/// oc-log v1: walked 42 entries [crates/logging/src/global.rs:88]
/// ```
///
/// The bracketed location suffix appears only when a [`SourceLocation`] is
/// attached; the emission macros attach one automatically.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    severity: Severity,
    vlog_level: Option<i32>,
    text: Cow<'static, str>,
    source: Option<SourceLocation>,
}

impl Message {
    /// Creates a message with the provided severity and payload.
    ///
    /// Call sites typically construct diagnostics through the
    /// severity-specific helpers ([`Message::info`], [`Message::warning`],
    /// [`Message::error`]) or the `oc_*!` macros; this constructor exists for
    /// callers that only know the severity at runtime.
    #[inline]
    #[must_use = "constructed messages must be emitted to reach users"]
    pub fn new<T: Into<Cow<'static, str>>>(severity: Severity, text: T) -> Self {
        Self {
            severity,
            vlog_level: None,
            text: text.into(),
            source: None,
        }
    }

    /// Creates an informational message.
    #[inline]
    #[must_use = "constructed messages must be emitted to reach users"]
    pub fn info<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Creates a warning message.
    #[inline]
    #[must_use = "constructed messages must be emitted to reach users"]
    pub fn warning<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Creates an error message.
    #[inline]
    #[must_use = "constructed messages must be emitted to reach users"]
    pub fn error<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Creates a verbose message at the given level.
    ///
    /// Verbose messages rank as [`Severity::Info`] for severity comparisons;
    /// the level only affects gating and the rendered tag.
    #[inline]
    #[must_use = "constructed messages must be emitted to reach users"]
    pub fn verbose<T: Into<Cow<'static, str>>>(level: i32, text: T) -> Self {
        Self {
            severity: Severity::Info,
            vlog_level: Some(level),
            text: text.into(),
            source: None,
        }
    }

    /// Attaches the emission-site source location.
    #[inline]
    #[must_use]
    pub const fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns the message severity.
    #[inline]
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the verbose level, if this is a verbose-tier message.
    #[inline]
    #[must_use]
    pub const fn vlog_level(&self) -> Option<i32> {
        self.vlog_level
    }

    /// Returns `true` when this message belongs to the verbose tier.
    #[inline]
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.vlog_level.is_some()
    }

    /// Returns the message payload text.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the attached source location, if any.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> Option<&SourceLocation> {
        self.source.as_ref()
    }

    /// Appends the rendered line (without a trailing newline) to `buf`.
    pub fn render_append(&self, buf: &mut String) {
        buf.push_str(BRAND);
        buf.push(' ');
        match self.vlog_level {
            Some(level) => {
                let _ = write!(buf, "v{level}");
            }
            None => buf.push_str(self.severity.as_str()),
        }
        buf.push_str(": ");
        buf.push_str(&self.text);
        if let Some(source) = &self.source {
            let _ = write!(buf, " [{source}]");
        }
    }

    /// Renders the message into `scratch` and returns the rendered line.
    ///
    /// The scratch buffer is cleared first, so the returned slice holds
    /// exactly this message.
    pub fn render_with_scratch<'a>(&self, scratch: &'a mut MessageScratch) -> &'a str {
        scratch.clear();
        self.render_append(scratch.buffer_mut());
        scratch.as_str()
    }

    /// Streams the rendered message into an [`io::Write`] implementor.
    ///
    /// The whole line is rendered into the scratch buffer first and written
    /// with a single `write_all`, so concurrent writers that serialize at the
    /// sink level never interleave partial lines.
    pub fn render_to_writer_with_scratch<W: io::Write>(
        &self,
        scratch: &mut MessageScratch,
        writer: &mut W,
    ) -> io::Result<()> {
        let rendered = self.render_with_scratch(scratch);
        writer.write_all(rendered.as_bytes())
    }

    /// Streams the rendered message followed by a newline.
    pub fn render_line_to_writer_with_scratch<W: io::Write>(
        &self,
        scratch: &mut MessageScratch,
        writer: &mut W,
    ) -> io::Result<()> {
        scratch.clear();
        self.render_append(scratch.buffer_mut());
        scratch.buffer_mut().push('\n');
        writer.write_all(scratch.as_str().as_bytes())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.render_append(&mut buf);
        f.write_str(&buf)
    }
}
