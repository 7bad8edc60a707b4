#![allow(dead_code)]

//! Shared harness for spawning the probe binary with a controlled
//! environment and capturing its diagnostics.
//!
//! The controller's environment variables are scrubbed before each run so a
//! developer's own `OC_LOG_*` settings cannot leak into the assertions, and
//! the child's stderr is captured into a bounded buffer. The child handle is
//! reaped on every exit path, including after a failed read, so harness
//! failures are reported distinctly: spawn, read, and wait errors each carry
//! their own context.

use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};

/// Upper bound on captured child output.
pub const CAPTURE_CAP: usize = 8192;

/// Captured result of one probe run.
pub struct ProbeOutput {
    pub status: ExitStatus,
    pub stderr: String,
}

/// Runs the probe with exactly the given `OC_LOG_*` environment and
/// arguments, capturing up to [`CAPTURE_CAP`] bytes of stderr.
pub fn run_probe(env: &[(&str, &str)], args: &[&str]) -> io::Result<ProbeOutput> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_oc-log-probe"));
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    for var in [
        logging::MAX_VLOG_LEVEL_ENV,
        logging::VLOG_FILE_ENV,
        logging::MIN_SEVERITY_ENV,
        logging::VMODULE_ENV,
    ] {
        command.env_remove(var);
    }
    for (key, value) in env {
        command.env(key, value);
    }

    let mut child = command
        .spawn()
        .map_err(|error| io::Error::other(format!("failed to spawn probe: {error}")))?;

    let read_result = match child.stderr.take() {
        Some(mut stream) => read_capped(&mut stream),
        None => Err(io::Error::other("probe stderr was not captured")),
    };

    // Reap the child even when the read failed; a wait failure is its own
    // error, distinct from a read failure.
    let status = child
        .wait()
        .map_err(|error| io::Error::other(format!("failed to wait for probe: {error}")))?;

    let stderr_bytes =
        read_result.map_err(|error| io::Error::other(format!("failed to read probe stderr: {error}")))?;

    Ok(ProbeOutput {
        status,
        stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
    })
}

/// Reads until EOF or until the capture bound is reached.
fn read_capped<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut buffer = vec![0_u8; CAPTURE_CAP];
    let mut filled = 0;
    while filled < buffer.len() {
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(read) => filled += read,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
            Err(error) => return Err(error),
        }
    }
    buffer.truncate(filled);
    Ok(buffer)
}

/// Asserts a marker is present, reporting the captured buffer on failure.
pub fn assert_contains(haystack: &str, needle: &str, context: &str) {
    assert!(
        haystack.contains(needle),
        "{context}: expected {needle:?} in captured output:\n{haystack}"
    );
}

/// Asserts a marker is absent, reporting the captured buffer on failure.
pub fn assert_absent(haystack: &str, needle: &str, context: &str) {
    assert!(
        !haystack.contains(needle),
        "{context}: expected {needle:?} to be absent from captured output:\n{haystack}"
    );
}
