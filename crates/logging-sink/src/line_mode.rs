//! crates/logging-sink/src/line_mode.rs
//! Newline policy for rendered messages.

/// Controls whether a [`MessageSink`](crate::MessageSink) appends a trailing
/// newline when writing messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered message.
    WithNewline,
    /// Emit the rendered message without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Returns `true` when the mode appends a newline terminator.
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl Default for LineMode {
    fn default() -> Self {
        Self::WithNewline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_appends_newline() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
        assert!(LineMode::WithNewline.append_newline());
    }

    #[test]
    fn without_newline_does_not_append() {
        assert!(!LineMode::WithoutNewline.append_newline());
    }
}
