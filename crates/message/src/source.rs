//! crates/message/src/source.rs
//! Emission-site source locations captured by the logging macros.

use std::fmt;

/// Source file and line of the call site that produced a message.
///
/// The logging macros capture this automatically via `file!()` and `line!()`.
/// The file path is whatever the compiler embeds, typically relative to the
/// workspace root (`crates/logging/src/global.rs`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from a compiler-embedded file path and line.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Returns the source file path.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the one-based source line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the file stem of the source path, without directories or the
    /// extension.
    ///
    /// Per-module verbosity overrides match against this stem, so
    /// `crates/logging/src/global.rs` and `src\\bin\\probe.rs` reduce to
    /// `global` and `probe` respectively.
    ///
    /// # Examples
    ///
    /// ```
    /// use message::SourceLocation;
    ///
    /// let location = SourceLocation::new("crates/logging/src/global.rs", 10);
    /// assert_eq!(location.stem(), "global");
    /// ```
    #[must_use]
    pub fn stem(&self) -> &'static str {
        source_stem(self.file)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Reduces a source path to its file stem.
///
/// Handles both `/` and `\` separators so locations captured on Windows
/// builds match the same override names as Unix builds.
#[must_use]
pub fn source_stem(path: &str) -> &str {
    let basename = path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(path);
    match basename.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => basename,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_file_and_line() {
        let location = SourceLocation::new("src/lib.rs", 42);
        assert_eq!(location.file(), "src/lib.rs");
        assert_eq!(location.line(), 42);
    }

    #[test]
    fn display_renders_file_colon_line() {
        let location = SourceLocation::new("crates/logging/src/env.rs", 7);
        assert_eq!(format!("{location}"), "crates/logging/src/env.rs:7");
    }

    #[test]
    fn stem_strips_directories_and_extension() {
        assert_eq!(source_stem("crates/logging/src/global.rs"), "global");
        assert_eq!(source_stem("src/bin/oc-log-probe.rs"), "oc-log-probe");
    }

    #[test]
    fn stem_handles_backslash_separators() {
        assert_eq!(source_stem("src\\bin\\probe.rs"), "probe");
    }

    #[test]
    fn stem_without_extension_is_basename() {
        assert_eq!(source_stem("src/Makefile"), "Makefile");
    }

    #[test]
    fn stem_of_dotfile_is_the_dotfile() {
        // A leading dot is not an extension separator for an empty stem.
        assert_eq!(source_stem(".hidden"), ".hidden");
    }

    #[test]
    fn stem_of_bare_name() {
        assert_eq!(source_stem("main.rs"), "main");
        assert_eq!(source_stem("main"), "main");
    }
}
