#![cfg(feature = "tracing")]

//! Integration tests for the tracing bridge.
//!
//! The bridge installs a global subscriber, so this binary initializes the
//! controller once and drives standard tracing macros through it. Routed
//! output lands on stderr; these tests exercise the full path for panics
//! and gating rather than asserting rendered bytes (the probe-based suite
//! at the workspace root covers output content).

use logging::VlogConfig;

#[test]
fn tracing_events_flow_through_the_controller() {
    logging::init_with(VlogConfig::default().with_max_level(1));
    logging::init_tracing();

    tracing::error!("bridge error line");
    tracing::warn!("bridge warning line");
    tracing::info!("bridge info line");
    // DEBUG maps to verbose level 1: inside the configured maximum.
    tracing::debug!("bridge debug line");
    // TRACE maps to verbose level 2: gated out, never formatted.
    tracing::trace!("bridge trace line");
}
