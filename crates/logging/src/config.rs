//! crates/logging/src/config.rs
//! Process-wide verbosity configuration.

use std::env;
use std::path::{Path, PathBuf};

use message::{Severity, source_stem};

use crate::env::{
    MAX_VLOG_LEVEL_ENV, MIN_SEVERITY_ENV, VLOG_FILE_ENV, VMODULE_ENV, parse_max_level,
    parse_min_severity, parse_vmodule,
};

/// Per-source-file verbose-level override.
///
/// The module name matches the file stem of the emission site: an override
/// named `router` applies to messages produced from `router.rs` anywhere in
/// the tree.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleOverride {
    module: String,
    level: i32,
}

impl ModuleOverride {
    /// Creates an override for the given module stem.
    pub fn new(module: impl Into<String>, level: i32) -> Self {
        Self {
            module: module.into(),
            level,
        }
    }

    /// Returns the module stem this override applies to.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Returns the maximum verbose level for the module.
    #[must_use]
    pub const fn level(&self) -> i32 {
        self.level
    }
}

/// Immutable verbosity configuration for one process.
///
/// Built once, from the environment or an embedder-supplied value, and read
/// by every call site for the remainder of the process. The gate predicate
/// [`vlog_enabled`](Self::vlog_enabled) is a pure function of this value.
///
/// # Examples
///
/// ```
/// use logging::VlogConfig;
///
/// let config = VlogConfig::default().with_max_level(2);
/// assert!(config.vlog_enabled(2, "src/walker.rs"));
/// assert!(!config.vlog_enabled(3, "src/walker.rs"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VlogConfig {
    max_level: i32,
    vlog_file: Option<PathBuf>,
    min_severity: Severity,
    overrides: Vec<ModuleOverride>,
}

impl VlogConfig {
    /// Builds the configuration from the process environment.
    ///
    /// Missing or malformed values reduce to the defaults (verbose logging
    /// disabled, no dedicated file, `info` floor); nothing here can fail.
    #[must_use]
    pub fn from_env() -> Self {
        let max_level = env::var_os(MAX_VLOG_LEVEL_ENV)
            .map_or(0, |value| parse_max_level(&value.to_string_lossy()));
        let vlog_file = env::var_os(VLOG_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let min_severity = env::var_os(MIN_SEVERITY_ENV)
            .map_or_else(Severity::default, |value| {
                parse_min_severity(&value.to_string_lossy())
            });
        let overrides = env::var_os(VMODULE_ENV)
            .map_or_else(Vec::new, |value| parse_vmodule(&value.to_string_lossy()));

        Self {
            max_level,
            vlog_file,
            min_severity,
            overrides,
        }
    }

    /// Sets the global maximum verbose level.
    #[must_use]
    pub fn with_max_level(mut self, max_level: i32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Sets the dedicated verbose-output file.
    #[must_use]
    pub fn with_vlog_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.vlog_file = Some(path.into());
        self
    }

    /// Sets the minimum ordinary severity.
    #[must_use]
    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }

    /// Adds a per-module verbose-level override.
    #[must_use]
    pub fn with_override(mut self, module: impl Into<String>, level: i32) -> Self {
        self.overrides.push(ModuleOverride::new(module, level));
        self
    }

    /// Returns the global maximum verbose level.
    #[must_use]
    pub const fn max_level(&self) -> i32 {
        self.max_level
    }

    /// Returns the dedicated verbose-output file, if configured.
    #[must_use]
    pub fn vlog_file(&self) -> Option<&Path> {
        self.vlog_file.as_deref()
    }

    /// Returns the minimum ordinary severity.
    #[must_use]
    pub const fn min_severity(&self) -> Severity {
        self.min_severity
    }

    /// Returns the configured per-module overrides.
    #[must_use]
    pub fn overrides(&self) -> &[ModuleOverride] {
        &self.overrides
    }

    /// Returns the maximum verbose level in effect for an emission site.
    ///
    /// The first override whose module name equals the stem of `file` wins;
    /// without a match the global maximum applies.
    #[must_use]
    pub fn effective_max_level(&self, file: &str) -> i32 {
        let stem = source_stem(file);
        self.overrides
            .iter()
            .find(|entry| entry.module() == stem)
            .map_or(self.max_level, ModuleOverride::level)
    }

    /// The verbosity gate: `true` iff a verbose message at `level`, emitted
    /// from `file`, should be constructed and routed.
    ///
    /// Pure predicate; evaluating it twice for the same inputs always yields
    /// the same answer within a process lifetime.
    #[must_use]
    pub fn vlog_enabled(&self, level: i32, file: &str) -> bool {
        level <= self.effective_max_level(file)
    }
}
