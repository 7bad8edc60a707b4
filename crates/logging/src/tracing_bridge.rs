//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the vlog controller.
//!
//! This module provides a tracing-subscriber layer that feeds tracing events
//! through the controller's gate and router. It enables using standard Rust
//! tracing macros (trace!, debug!, info!, warn!, error!) while keeping the
//! environment-driven verbosity and destination behavior of the controller.
//!
//! # Architecture
//!
//! - [`VlogLayer`]: a tracing-subscriber layer that filters and forwards events
//! - ERROR/WARN/INFO events become ordinary-severity messages
//! - DEBUG/TRACE events become verbose messages at levels 1 and 2, gated by
//!   the process-wide configuration before the event payload is collected
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init();
//! logging::init_tracing();
//!
//! // Now use standard tracing macros
//! tracing::info!("transfer started");
//! tracing::debug!("delta computed");   // verbose level 1
//! ```

use message::{Message, Severity, SourceLocation};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::global::{emit, vlog_enabled};

/// A tracing layer that forwards events into the vlog controller.
#[derive(Clone, Copy, Debug, Default)]
pub struct VlogLayer {
    _private: (),
}

impl VlogLayer {
    /// Creates a new layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Maps an ordinary tracing level to a message severity.
    ///
    /// Returns `None` for the sub-INFO levels, which map to the verbose tier
    /// instead.
    const fn severity_for(level: &Level) -> Option<Severity> {
        match *level {
            Level::ERROR => Some(Severity::Error),
            Level::WARN => Some(Severity::Warning),
            Level::INFO => Some(Severity::Info),
            _ => None,
        }
    }

    /// Maps a sub-INFO tracing level to a verbose level.
    const fn vlog_level_for(level: &Level) -> i32 {
        match *level {
            Level::TRACE => 2,
            _ => 1,
        }
    }
}

impl<S> Layer<S> for VlogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let file = metadata.file().unwrap_or_else(|| metadata.target());

        if let Some(severity) = Self::severity_for(metadata.level()) {
            if let Some(text) = collect_message(event) {
                emit(attach_source(Message::new(severity, text), metadata));
            }
            return;
        }

        let level = Self::vlog_level_for(metadata.level());
        if !vlog_enabled(level, file) {
            return;
        }
        if let Some(text) = collect_message(event) {
            emit(attach_source(Message::verbose(level, text), metadata));
        }
    }
}

fn attach_source(message: Message, metadata: &tracing::Metadata<'static>) -> Message {
    match (metadata.file(), metadata.line()) {
        (Some(file), Some(line)) => message.with_source(SourceLocation::new(file, line)),
        _ => message,
    }
}

fn collect_message(event: &tracing::Event<'_>) -> Option<String> {
    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);
    visitor.message
}

/// Visitor to extract the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a subscriber whose only layer is the vlog bridge.
///
/// Call once at process startup, after (or instead of) [`crate::init`];
/// installing a second global subscriber is an error surfaced by
/// tracing-subscriber itself.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry().with(VlogLayer::new()).init();
}

/// Installs the vlog bridge alongside a caller-provided filter layer.
///
/// This allows combining the controller's verbosity system with standard
/// tracing filters such as [`tracing_subscriber::EnvFilter`] for
/// finer-grained control.
pub fn init_tracing_with_filter<F>(filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(VlogLayer::new())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_levels_map_to_severities() {
        assert_eq!(
            VlogLayer::severity_for(&Level::ERROR),
            Some(Severity::Error)
        );
        assert_eq!(
            VlogLayer::severity_for(&Level::WARN),
            Some(Severity::Warning)
        );
        assert_eq!(VlogLayer::severity_for(&Level::INFO), Some(Severity::Info));
    }

    #[test]
    fn sub_info_levels_map_to_the_verbose_tier() {
        assert_eq!(VlogLayer::severity_for(&Level::DEBUG), None);
        assert_eq!(VlogLayer::severity_for(&Level::TRACE), None);
        assert_eq!(VlogLayer::vlog_level_for(&Level::DEBUG), 1);
        assert_eq!(VlogLayer::vlog_level_for(&Level::TRACE), 2);
    }
}
