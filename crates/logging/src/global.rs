//! crates/logging/src/global.rs
//! One-time process-wide initialization and the emission path.

use std::io;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use logging_sink::Router;
use message::Message;

use crate::config::VlogConfig;

/// Configuration for this process. Set exactly once: by the first explicit
/// `init*` call or lazily by the first gate query or emission, whichever
/// comes first. There is no way back to the uninitialized state.
static CONFIG: OnceLock<VlogConfig> = OnceLock::new();

/// Process-wide router, built lazily from the established configuration.
/// The mutex serializes emission so concurrent threads never interleave
/// partial lines.
static ROUTER: OnceLock<Mutex<Router<io::Stderr>>> = OnceLock::new();

/// Returns the process-wide configuration, initializing it from the
/// environment on first use.
pub fn config() -> &'static VlogConfig {
    CONFIG.get_or_init(VlogConfig::from_env)
}

/// Initializes the controller from the environment.
///
/// Optional: the first gate query or emission performs the same
/// initialization. Calling this from process startup makes the moment of
/// environment capture explicit.
pub fn init() -> &'static VlogConfig {
    config()
}

/// Initializes the controller with an embedder-supplied configuration.
///
/// Wins only if no configuration has been established yet; afterwards the
/// already-established configuration is returned unchanged. Embedders that
/// need to know whether their value took effect can compare the result.
pub fn init_with(config: VlogConfig) -> &'static VlogConfig {
    CONFIG.get_or_init(move || config)
}

/// The process-wide verbosity gate.
///
/// `true` iff a verbose message at `level`, emitted from `file` (typically
/// `file!()`), should be constructed and routed. Lock-free after
/// initialization: a plain read of the immutable configuration.
pub fn vlog_enabled(level: i32, file: &str) -> bool {
    config().vlog_enabled(level, file)
}

/// Emits a message through the process-wide router.
///
/// Fire and forget: ordinary severities below the configured minimum are
/// dropped, everything else is routed, and routing errors are swallowed so
/// logging can never take down or block the host. Verbose messages are
/// expected to have passed [`vlog_enabled`] already; the `vlog!` macro
/// arranges this.
pub fn emit(message: Message) {
    let config = config();
    if message.severity().rank() < config.min_severity().rank() {
        return;
    }

    let router = ROUTER.get_or_init(|| {
        Mutex::new(Router::new(
            io::stderr(),
            config.vlog_file().map(Path::to_path_buf),
        ))
    });
    let mut router = match router.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let _ = router.route(&message);
}
