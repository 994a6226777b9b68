//! Clipboard access through the platform's clipboard command.
//!
//! Text is piped into the first command that can be spawned: `pbcopy` on
//! macOS, `clip` on Windows, `wl-copy` then `xclip` elsewhere.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use value_ramp_core::{Clipboard, RampError};

#[cfg(target_os = "macos")]
const PLATFORM_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const PLATFORM_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PLATFORM_COMMANDS: &[(&str, &[&str])] =
    &[("wl-copy", &[]), ("xclip", &["-selection", "clipboard"])];

/// A [`Clipboard`] that pipes text to an external command.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    commands: Vec<(String, Vec<String>)>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            commands: PLATFORM_COMMANDS
                .iter()
                .map(|(program, args)| {
                    (
                        program.to_string(),
                        args.iter().map(|a| a.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl SystemClipboard {
    /// Uses the platform's clipboard command(s).
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a single custom command that reads the text from stdin.
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            commands: vec![(
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            )],
        }
    }

    /// Runs one command with `text` on stdin. The child is always waited on,
    /// even when writing fails.
    fn pipe(program: &str, args: &[String], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written?;
        Ok(status.success())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), RampError> {
        let mut failures = Vec::new();
        for (program, args) in &self.commands {
            match Self::pipe(program, args, text) {
                Ok(true) => {
                    log::debug!("clipboard <- {text:?} via {program}");
                    return Ok(());
                }
                Ok(false) => {
                    log::debug!("clipboard command {program} exited with failure, trying next");
                    failures.push(format!("{program}: exited with failure"));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    log::debug!("clipboard command {program} not found, trying next");
                    failures.push(format!("{program}: not found"));
                }
                Err(e) => {
                    log::debug!("clipboard command {program} failed: {e}");
                    failures.push(format!("{program}: {e}"));
                }
            }
        }
        Err(RampError::Clipboard(format!(
            "no clipboard command succeeded ({})",
            failures.join("; ")
        )))
    }
}
