//! crates/message/src/macros.rs
//! Construction macros that capture the emission site.

/// Captures the current source location for attachment to a message.
#[macro_export]
macro_rules! message_source {
    () => {
        $crate::SourceLocation::new(::std::file!(), ::std::line!())
    };
}

/// Builds an informational [`Message`](crate::Message) with the call site attached.
///
/// Accepts the same arguments as [`format!`].
#[macro_export]
macro_rules! oc_info {
    ($($arg:tt)*) => {
        $crate::Message::info(::std::format!($($arg)*)).with_source($crate::message_source!())
    };
}

/// Builds a warning [`Message`](crate::Message) with the call site attached.
#[macro_export]
macro_rules! oc_warning {
    ($($arg:tt)*) => {
        $crate::Message::warning(::std::format!($($arg)*)).with_source($crate::message_source!())
    };
}

/// Builds an error [`Message`](crate::Message) with the call site attached.
#[macro_export]
macro_rules! oc_error {
    ($($arg:tt)*) => {
        $crate::Message::error(::std::format!($($arg)*)).with_source($crate::message_source!())
    };
}

/// Builds a verbose [`Message`](crate::Message) at the given level with the
/// call site attached.
///
/// The level is any `i32` expression; gating against the configured maximum
/// happens in the controller, not here.
#[macro_export]
macro_rules! oc_vlog {
    ($level:expr, $($arg:tt)*) => {
        $crate::Message::verbose($level, ::std::format!($($arg)*))
            .with_source($crate::message_source!())
    };
}
