//! crates/logging/src/env.rs
//! Environment variable names and value parsing.
//!
//! All parsing in this module is total: malformed values reduce to the safe
//! default instead of surfacing an error, because the logging subsystem must
//! never be the reason a process fails to start.

use message::Severity;

use crate::config::ModuleOverride;

/// Global maximum verbose level. Absent or unparseable means `0` (verbose
/// logging disabled).
pub const MAX_VLOG_LEVEL_ENV: &str = "OC_LOG_MAX_VLOG_LEVEL";

/// Dedicated verbose-output file. Absent means the verbose tier merges into
/// the fallback stream.
pub const VLOG_FILE_ENV: &str = "OC_LOG_VLOG_FILE";

/// Minimum ordinary severity. Accepts `info`/`warning`/`error` or the
/// numeric ranks 0/1/2. Absent or unparseable means `info`.
pub const MIN_SEVERITY_ENV: &str = "OC_LOG_MIN_SEVERITY";

/// Per-source-file verbose-level overrides, `name=level` pairs separated by
/// commas. Malformed entries are skipped.
pub const VMODULE_ENV: &str = "OC_LOG_VMODULE";

/// Parses a maximum verbose level, defaulting to 0.
pub(crate) fn parse_max_level(value: &str) -> i32 {
    value.trim().parse().unwrap_or(0)
}

/// Parses a minimum severity, defaulting to [`Severity::Info`].
///
/// Numeric ranks above 2 clamp to [`Severity::Error`] so an aggressive
/// setting silences everything below errors rather than nothing.
pub(crate) fn parse_min_severity(value: &str) -> Severity {
    let trimmed = value.trim();
    if let Some(severity) = Severity::from_name(trimmed) {
        return severity;
    }
    match trimmed.parse::<u8>() {
        Ok(rank) => Severity::from_rank(rank.min(2)).unwrap_or_default(),
        Err(_) => Severity::default(),
    }
}

/// Parses a `name=level,name=level` override list.
///
/// Entries with an empty name, a missing `=`, or an unparseable level are
/// skipped; the remaining entries still apply.
pub(crate) fn parse_vmodule(value: &str) -> Vec<ModuleOverride> {
    value
        .split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let (name, level) = entry.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let level = level.trim().parse().ok()?;
            Some(ModuleOverride::new(name, level))
        })
        .collect()
}
