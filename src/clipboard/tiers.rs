//! Copy strategies, tried in order until one succeeds
//!
//! Native goes through `arboard`. Legacy shells out to the platform clipboard
//! tool and pipes the text into its stdin.

use arboard::Clipboard;
use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How long a clipboard tool may run before it is killed
const COMMAND_TIMEOUT: Duration = Duration::from_secs(2);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Result of a single tier attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierOutcome {
    Success,
    /// Tier cannot run here (no clipboard server, tool not installed)
    Unavailable,
    /// Tier ran and failed
    Failed(String),
}

pub trait CopyTier: Send + Sync {
    fn name(&self) -> &'static str;
    fn copy(&self, text: &str) -> TierOutcome;
}

// ─────────────────────────────────────────────────────────────────────────────
// Native clipboard
// ─────────────────────────────────────────────────────────────────────────────

/// System clipboard via arboard. A fresh handle is opened per copy so no
/// clipboard resources are held between copies.
#[derive(Debug, Default)]
pub struct NativeClipboard;

impl CopyTier for NativeClipboard {
    fn name(&self) -> &'static str {
        "native"
    }

    fn copy(&self, text: &str) -> TierOutcome {
        let mut clipboard = match Clipboard::new() {
            Ok(clipboard) => clipboard,
            Err(e) => {
                tracing::debug!("Native clipboard unavailable: {}", e);
                return TierOutcome::Unavailable;
            }
        };
        match clipboard.set_text(text) {
            Ok(()) => TierOutcome::Success,
            Err(arboard::Error::ClipboardNotSupported) => TierOutcome::Unavailable,
            Err(e) => TierOutcome::Failed(e.to_string()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Legacy command
// ─────────────────────────────────────────────────────────────────────────────

/// External program that reads the clipboard contents from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Platform clipboard tools in preference order
    pub fn candidates() -> Vec<CommandSpec> {
        let mut out = Vec::new();
        if cfg!(target_os = "macos") {
            out.push(CommandSpec::new("pbcopy", &[]));
        }
        if cfg!(target_os = "windows") {
            out.push(CommandSpec::new("clip", &[]));
        }
        if env::var_os("WAYLAND_DISPLAY").is_some() {
            out.push(CommandSpec::new("wl-copy", &[]));
        }
        if env::var_os("DISPLAY").is_some() {
            out.push(CommandSpec::new("xclip", &["-selection", "clipboard"]));
            out.push(CommandSpec::new("xsel", &["--clipboard", "--input"]));
        }
        out
    }

    /// First candidate installed on this machine
    pub fn detect() -> Option<CommandSpec> {
        Self::candidates()
            .into_iter()
            .find(|spec| command_exists(&spec.program))
    }
}

#[derive(Debug, Clone, Default)]
pub struct LegacyCommand {
    spec: Option<CommandSpec>,
}

impl LegacyCommand {
    pub fn detect() -> Self {
        let spec = CommandSpec::detect();
        match &spec {
            Some(spec) => tracing::debug!("Clipboard command: {}", spec.program),
            None => tracing::debug!("No clipboard command found"),
        }
        Self { spec }
    }

    pub fn with_command(spec: CommandSpec) -> Self {
        Self { spec: Some(spec) }
    }

    pub fn command(&self) -> Option<&CommandSpec> {
        self.spec.as_ref()
    }
}

impl CopyTier for LegacyCommand {
    fn name(&self) -> &'static str {
        "legacy-command"
    }

    fn copy(&self, text: &str) -> TierOutcome {
        let Some(spec) = &self.spec else {
            return TierOutcome::Unavailable;
        };
        if !command_exists(&spec.program) {
            return TierOutcome::Unavailable;
        }

        let result =
            StagedChild::spawn(spec).and_then(|staged| staged.run(text, COMMAND_TIMEOUT));
        match result {
            Ok(status) if status.success() => TierOutcome::Success,
            Ok(status) => TierOutcome::Failed(format!("{} exited with {}", spec.program, status)),
            Err(e) => TierOutcome::Failed(format!("{}: {}", spec.program, e)),
        }
    }
}

/// Spawned clipboard tool. Whatever happens after spawn, dropping the guard
/// kills and reaps the child.
struct StagedChild {
    child: Option<Child>,
}

impl StagedChild {
    fn spawn(spec: &CommandSpec) -> io::Result<Self> {
        let child = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(Self { child: Some(child) })
    }

    /// Pipe the text in and wait for the tool to exit, all within `timeout`.
    ///
    /// The write happens on a helper thread: a tool that never drains its
    /// stdin would otherwise block us once the pipe buffer fills. On timeout
    /// the child is killed, which fails the pending write with `BrokenPipe`.
    fn run(mut self, text: &str, timeout: Duration) -> io::Result<ExitStatus> {
        let deadline = Instant::now() + timeout;
        let child = self.child.as_mut().ok_or_else(reaped)?;

        let writer = child.stdin.take().map(|mut stdin| {
            let bytes = text.as_bytes().to_vec();
            // Dropping stdin at the end of the closure sends EOF
            thread::spawn(move || stdin.write_all(&bytes))
        });

        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if Instant::now() >= deadline {
                self.reap();
                let _ = join_writer(writer);
                return Err(io::Error::new(io::ErrorKind::TimedOut, "clipboard command timed out"));
            }
            thread::sleep(POLL_INTERVAL);
        };
        self.child = None;

        join_writer(writer)?;
        Ok(status)
    }

    fn reap(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Wait for the stdin writer. Safe once the child has exited or been killed.
fn join_writer(writer: Option<JoinHandle<io::Result<()>>>) -> io::Result<()> {
    match writer {
        Some(handle) => handle
            .join()
            .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "stdin writer panicked"))),
        None => Ok(()),
    }
}

impl Drop for StagedChild {
    fn drop(&mut self) {
        self.reap();
    }
}

fn reaped() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "child already reaped")
}

/// PATH lookup without spawning anything
pub fn command_exists(command: &str) -> bool {
    if command.contains(std::path::MAIN_SEPARATOR) {
        return Path::new(command).is_file();
    }

    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&path_var).any(|dir| {
        dir.join(command).is_file()
            || (cfg!(target_os = "windows") && dir.join(format!("{command}.exe")).is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_is_unavailable() {
        let tier = LegacyCommand::with_command(CommandSpec::new("folio-no-such-clipboard-tool", &[]));
        assert_eq!(tier.copy("hello"), TierOutcome::Unavailable);
    }

    #[test]
    fn no_detected_command_is_unavailable() {
        let tier = LegacyCommand::default();
        assert!(tier.command().is_none());
        assert_eq!(tier.copy("hello"), TierOutcome::Unavailable);
    }

    #[cfg(unix)]
    #[test]
    fn command_reading_stdin_succeeds() {
        let tier = LegacyCommand::with_command(CommandSpec::new("cat", &[]));
        assert_eq!(tier.copy("copied through a pipe"), TierOutcome::Success);
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_reports_failure() {
        let tier = LegacyCommand::with_command(CommandSpec::new("false", &[]));
        assert!(matches!(tier.copy("x"), TierOutcome::Failed(_)));
    }

    #[cfg(unix)]
    #[test]
    fn hung_command_is_killed() {
        let spec = CommandSpec::new("sleep", &["30"]);
        let staged = StagedChild::spawn(&spec).unwrap();
        let err = staged.run("ignored", Duration::from_millis(50)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }

    #[cfg(unix)]
    #[test]
    fn timeout_covers_a_tool_that_never_reads_stdin() {
        // Well past the pipe buffer, so the write itself would block
        let payload = "x".repeat(1 << 20);
        let spec = CommandSpec::new("sleep", &["30"]);
        let started = Instant::now();

        let err = StagedChild::spawn(&spec)
            .unwrap()
            .run(&payload, Duration::from_millis(200))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(5));

        let tier = LegacyCommand::with_command(spec);
        let started = Instant::now();
        assert!(matches!(tier.copy(&payload), TierOutcome::Failed(_)));
        assert!(started.elapsed() < COMMAND_TIMEOUT + Duration::from_secs(3));
    }

    #[cfg(unix)]
    #[test]
    fn command_exists_scans_path() {
        assert!(command_exists("sh"));
        assert!(!command_exists("folio-no-such-clipboard-tool"));
    }
}
