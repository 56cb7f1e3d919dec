//! Clipboard and notification sinks.
//!
//! The core never talks to the desktop directly. It hands the chosen text
//! to a [`ClipboardSink`] and, optionally, a confirmation to a
//! [`NotifySink`]. Both are plain traits, also implemented for closures,
//! so tests and alternative frontends can inject their own. The default
//! implementations run external programs (`wl-copy`, `notify-send`, ...).

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::settings::CommandsConfig;
use crate::error::{CoreError, CoreResult};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Something that can place text on the system clipboard.
pub trait ClipboardSink {
    fn copy(&self, text: &str) -> CoreResult<()>;
}

impl<F> ClipboardSink for F
where
    F: Fn(&str) -> CoreResult<()>,
{
    fn copy(&self, text: &str) -> CoreResult<()> {
        self(text)
    }
}

/// Something that can show a short desktop notification.
pub trait NotifySink {
    fn notify(&self, title: &str, body: &str) -> CoreResult<()>;
}

impl<F> NotifySink for F
where
    F: Fn(&str, &str) -> CoreResult<()>,
{
    fn notify(&self, title: &str, body: &str) -> CoreResult<()> {
        self(title, body)
    }
}

/// A program plus its fixed leading arguments, e.g. `xclip -selection clipboard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Splits a command line on whitespace. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs the command with `extra_args`, optionally feeding `stdin`, and
    /// waits at most `timeout` for it to exit successfully.
    pub fn run(&self, extra_args: &[&str], stdin: Option<&str>, timeout: Duration) -> CoreResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .args(extra_args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.failure(format!("could not start: {e}")))?;

        if let (Some(text), Some(mut pipe)) = (stdin, child.stdin.take()) {
            // The pipe closes when `pipe` drops, signalling end of input.
            if let Err(e) = pipe.write_all(text.as_bytes()) {
                tracing::debug!(program = %self.program, error = %e, "stdin write failed");
            }
        }

        let deadline = Instant::now() + timeout;
        loop {
            let status = child
                .try_wait()
                .map_err(|e| self.failure(format!("could not wait: {e}")))?;
            match status {
                Some(status) if status.success() => return Ok(()),
                Some(status) => return Err(self.failure(format!("exited with {status}"))),
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(self.failure(format!("timed out after {}ms", timeout.as_millis())));
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        }
    }

    fn failure(&self, reason: String) -> CoreError {
        CoreError::Sink {
            command: self.program.clone(),
            reason,
        }
    }
}

/// Clipboard backed by a chain of external commands.
///
/// Each command receives the text on stdin; the first one to succeed wins.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    commands: Vec<CommandSpec>,
    timeout: Duration,
}

impl CommandClipboard {
    pub fn new(commands: Vec<CommandSpec>, timeout: Duration) -> Self {
        Self { commands, timeout }
    }

    pub fn from_config(config: &CommandsConfig) -> Self {
        let commands = config
            .clipboard
            .iter()
            .filter_map(|line| CommandSpec::parse(line))
            .collect();
        Self::new(commands, config.clipboard_timeout())
    }
}

impl ClipboardSink for CommandClipboard {
    fn copy(&self, text: &str) -> CoreResult<()> {
        let mut last_error = None;
        for spec in &self.commands {
            match spec.run(&[], Some(text), self.timeout) {
                Ok(()) => {
                    tracing::info!(program = spec.program(), "copied to clipboard");
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard command failed");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| CoreError::Sink {
            command: "clipboard".to_string(),
            reason: "no clipboard command configured".to_string(),
        }))
    }
}

/// Notifications via an external program called as `<program> <title> <body>`.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    command: CommandSpec,
    timeout: Duration,
}

impl CommandNotifier {
    pub fn new(command: CommandSpec, timeout: Duration) -> Self {
        Self { command, timeout }
    }

    /// Returns `None` when no notification program is configured.
    pub fn from_config(config: &CommandsConfig) -> Option<Self> {
        CommandSpec::parse(&config.notification)
            .map(|spec| Self::new(spec, config.notification_timeout()))
    }
}

impl NotifySink for CommandNotifier {
    fn notify(&self, title: &str, body: &str) -> CoreResult<()> {
        self.command.run(&[title, body], None, self.timeout)
    }
}

/// Copies a selection and then fires the optional notification.
#[derive(Debug, Clone)]
pub struct Exporter<C, N> {
    clipboard: C,
    notifier: Option<N>,
}

impl<C: ClipboardSink, N: NotifySink> Exporter<C, N> {
    pub fn new(clipboard: C, notifier: Option<N>) -> Self {
        Self {
            clipboard,
            notifier,
        }
    }

    /// Copies `text`; on success notifies with `title` and `text`.
    ///
    /// Notification failures are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// [`CoreError::Sink`] when the clipboard sink fails. No notification
    /// is sent in that case.
    pub fn export(&self, text: &str, title: &str) -> CoreResult<()> {
        self.clipboard.copy(text)?;
        if let Some(notifier) = &self.notifier {
            if let Err(e) = notifier.notify(title, text) {
                tracing::debug!(error = %e, "notification not delivered");
            }
        }
        Ok(())
    }
}

impl Exporter<CommandClipboard, CommandNotifier> {
    /// Builds the command-backed exporter described by `config`.
    pub fn from_config(config: &CommandsConfig, notifications: bool) -> Self {
        let notifier = if notifications {
            CommandNotifier::from_config(config)
        } else {
            None
        };
        Self::new(CommandClipboard::from_config(config), notifier)
    }
}
