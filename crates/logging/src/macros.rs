//! crates/logging/src/macros.rs
//! Emission macros: gate at the call site, then construct and route.

/// Queries the process-wide verbosity gate for the current file.
///
/// Expands to a boolean, letting callers hoist the check out of loops or
/// guard expensive diagnostic computation:
///
/// ```
/// if logging::vlog_on!(2) {
///     // only now compute the expensive summary
/// }
/// ```
#[macro_export]
macro_rules! vlog_on {
    ($level:expr) => {
        $crate::vlog_enabled($level, ::std::file!())
    };
}

/// Emits a verbose message at the given level.
///
/// The gate is consulted first; when the level is above the effective
/// maximum for this file, the message text is never even formatted.
///
/// ```
/// logging::vlog!(1, "walked {} entries", 42);
/// ```
#[macro_export]
macro_rules! vlog {
    ($level:expr, $($arg:tt)*) => {
        if $crate::vlog_enabled($level, ::std::file!()) {
            $crate::emit($crate::__message::oc_vlog!($level, $($arg)*));
        }
    };
}

/// Emits an informational message.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit($crate::__message::oc_info!($($arg)*))
    };
}

/// Emits a warning message.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::emit($crate::__message::oc_warning!($($arg)*))
    };
}

/// Emits an error message.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit($crate::__message::oc_error!($($arg)*))
    };
}
