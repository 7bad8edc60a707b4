//! crates/logging-sink/src/router.rs
//! Routes emitted messages to the fallback stream or the vlog file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use message::Message;

use crate::sink::MessageSink;
use crate::timestamp::{append_utc_timestamp, epoch_seconds_now};

/// Destination router for emitted messages.
///
/// Ordinary severities always reach the fallback sink. Verbose-tier messages
/// are appended to the configured vlog file when one exists; without a
/// configured file they merge into the fallback stream. The vlog file is
/// opened lazily on the first verbose write and kept open for the remainder
/// of the process.
///
/// When the configured file cannot be opened (or a write to it later fails),
/// the router emits a single warning through the fallback sink and demotes
/// itself to fallback-only operation. Routing never propagates vlog-file
/// errors to the caller; only fallback-stream errors surface.
///
/// The router itself is not synchronized. The process-wide instance in the
/// `logging` crate wraps it in a `Mutex` so concurrent emission serializes
/// whole lines.
#[derive(Debug)]
pub struct Router<W> {
    fallback: MessageSink<W>,
    vlog: VlogDestination,
}

#[derive(Debug)]
enum VlogDestination {
    /// No vlog file configured; verbose messages merge into the fallback.
    Fallback,
    /// File configured but not opened yet.
    Pending(PathBuf),
    /// File open and accepting appends.
    Open(FileSink),
    /// Open or write failed; warned once, fallback-only from here on.
    Failed,
}

impl<W> Router<W> {
    /// Creates a router over the given fallback writer.
    ///
    /// `vlog_file` is the dedicated verbose-output destination; `None` merges
    /// the verbose tier into the fallback stream.
    #[must_use]
    pub fn new(fallback: W, vlog_file: Option<PathBuf>) -> Self {
        Self {
            fallback: MessageSink::new(fallback),
            vlog: vlog_file.map_or(VlogDestination::Fallback, VlogDestination::Pending),
        }
    }

    /// Returns `true` while verbose output is still bound for the configured
    /// file (pending or open).
    #[must_use]
    pub fn vlog_file_active(&self) -> bool {
        matches!(
            self.vlog,
            VlogDestination::Pending(_) | VlogDestination::Open(_)
        )
    }

    /// Borrows the fallback writer.
    #[must_use]
    pub fn fallback_ref(&self) -> &W {
        self.fallback.get_ref()
    }

    /// Consumes the router and returns the fallback writer.
    #[must_use]
    pub fn into_fallback(self) -> W {
        self.fallback.into_inner()
    }
}

impl<W> Router<W>
where
    W: Write,
{
    /// Routes one message to exactly one destination.
    ///
    /// Invoked after the verbosity gate approved the message (verbose tier)
    /// or unconditionally (ordinary severities). Errors from the fallback
    /// writer propagate; vlog-file errors demote the router instead.
    pub fn route(&mut self, message: &Message) -> io::Result<()> {
        if !message.is_verbose() {
            return self.fallback.write(message);
        }

        if let VlogDestination::Pending(path) = &self.vlog {
            let path = path.clone();
            match FileSink::open(&path) {
                Ok(sink) => self.vlog = VlogDestination::Open(sink),
                Err(error) => {
                    self.demote(&format!(
                        "cannot open vlog file {}: {error}",
                        path.display()
                    ))?;
                }
            }
        }

        let file_write = match &mut self.vlog {
            VlogDestination::Open(sink) => Some(sink.append(message)),
            _ => None,
        };

        match file_write {
            Some(Ok(())) => Ok(()),
            Some(Err(error)) => {
                self.demote(&format!("vlog file write failed: {error}"))?;
                self.fallback.write(message)
            }
            None => self.fallback.write(message),
        }
    }

    /// Flushes the fallback writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.fallback.flush()
    }

    fn demote(&mut self, reason: &str) -> io::Result<()> {
        self.vlog = VlogDestination::Failed;
        let notice = Message::warning(format!(
            "{reason}; verbose output falls back to the default stream"
        ));
        self.fallback.write(&notice)
    }
}

/// Append-mode vlog file with timestamped entries.
///
/// Each entry is rendered as `YYYY/MM/DD HH:MM:SS <message line>` into a
/// reusable buffer and written with a single `write_all` followed by a flush,
/// so a reader polling the file observes whole entries promptly.
#[derive(Debug)]
struct FileSink {
    file: File,
    line: String,
}

impl FileSink {
    fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file,
            line: String::new(),
        })
    }

    fn append(&mut self, message: &Message) -> io::Result<()> {
        self.line.clear();
        append_utc_timestamp(&mut self.line, epoch_seconds_now());
        self.line.push(' ');
        message.render_append(&mut self.line);
        self.line.push('\n');
        self.file.write_all(self.line.as_bytes())?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fallback_text(router: Router<Vec<u8>>) -> String {
        String::from_utf8(router.into_fallback()).expect("utf-8")
    }

    #[test]
    fn ordinary_severities_reach_the_fallback() {
        let mut router = Router::new(Vec::new(), None);
        router
            .route(&Message::warning("Warning: foobar"))
            .expect("route succeeds");

        let output = fallback_text(router);
        assert_eq!(output, "oc-log warning: Warning: foobar\n");
    }

    #[test]
    fn verbose_merges_into_fallback_without_a_file() {
        let mut router = Router::new(Vec::new(), None);
        router
            .route(&Message::verbose(1, "Level 1"))
            .expect("route succeeds");

        let output = fallback_text(router);
        assert!(output.contains("Level 1"));
    }

    #[test]
    fn verbose_goes_to_the_file_and_not_the_fallback() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vlog.log");
        let mut router = Router::new(Vec::new(), Some(path.clone()));

        router
            .route(&Message::verbose(1, "Level 1"))
            .expect("route succeeds");

        let file_contents = fs::read_to_string(&path).expect("vlog file readable");
        assert!(file_contents.contains("Level 1"));
        assert!(fallback_text(router).is_empty());
    }

    #[test]
    fn ordinary_severities_never_enter_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vlog.log");
        let mut router = Router::new(Vec::new(), Some(path.clone()));

        router
            .route(&Message::warning("Warning: foobar"))
            .expect("route succeeds");
        router
            .route(&Message::verbose(1, "Level 1"))
            .expect("route succeeds");

        let file_contents = fs::read_to_string(&path).expect("vlog file readable");
        assert!(!file_contents.contains("Warning: foobar"));
        assert!(file_contents.contains("Level 1"));

        let output = fallback_text(router);
        assert!(output.contains("Warning: foobar"));
        assert!(!output.contains("Level 1"));
    }

    #[test]
    fn file_entries_carry_timestamps_in_emission_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vlog.log");
        let mut router = Router::new(Vec::new(), Some(path.clone()));

        for index in 1..=5 {
            router
                .route(&Message::verbose(1, format!("entry-{index:03}")))
                .expect("route succeeds");
        }

        let file_contents = fs::read_to_string(&path).expect("vlog file readable");
        let lines: Vec<&str> = file_contents.lines().collect();
        assert_eq!(lines.len(), 5);
        for (index, line) in lines.iter().enumerate() {
            assert!(line.contains(&format!("entry-{:03}", index + 1)));
            // `YYYY/MM/DD HH:MM:SS ` prefix
            assert_eq!(line.as_bytes()[4], b'/');
            assert_eq!(line.as_bytes()[10], b' ');
        }
    }

    #[test]
    fn unopenable_file_demotes_with_a_single_warning() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing-dir").join("vlog.log");
        let mut router = Router::new(Vec::new(), Some(path));

        router
            .route(&Message::verbose(1, "Level 1"))
            .expect("route succeeds");
        router
            .route(&Message::verbose(1, "Level 1 again"))
            .expect("route succeeds");

        assert!(!router.vlog_file_active());
        let output = fallback_text(router);
        assert!(output.contains("cannot open vlog file"));
        assert_eq!(output.matches("falls back").count(), 1);
        assert!(output.contains("Level 1"));
        assert!(output.contains("Level 1 again"));
    }

    #[test]
    fn file_stays_lazily_unopened_until_first_verbose_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vlog.log");
        let mut router = Router::new(Vec::new(), Some(path.clone()));

        router
            .route(&Message::warning("ordinary"))
            .expect("route succeeds");
        assert!(!path.exists());
        assert!(router.vlog_file_active());

        router
            .route(&Message::verbose(1, "first verbose"))
            .expect("route succeeds");
        assert!(path.exists());
    }

    #[test]
    fn appends_to_an_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("vlog.log");
        fs::write(&path, "pre-existing line\n").expect("seed file");

        let mut router = Router::new(Vec::new(), Some(path.clone()));
        router
            .route(&Message::verbose(1, "appended"))
            .expect("route succeeds");

        let file_contents = fs::read_to_string(&path).expect("vlog file readable");
        assert!(file_contents.starts_with("pre-existing line\n"));
        assert!(file_contents.contains("appended"));
    }
}
