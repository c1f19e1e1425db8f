//! Subprocess output capture.

use crate::error::{CaptureError, Result};
use std::io::Read;
use std::process::{Command, Stdio};

/// Runs `command` through the shell and reads its entire stdout.
///
/// The child's stdout is read to end-of-stream into a growable buffer and
/// returned as an owned string (invalid UTF-8 is replaced; the downstream
/// scan only branches on ASCII). The child's exit status and stderr are
/// not inspected: a nonzero exit with empty stdout surfaces downstream as
/// a missing field, not as a distinct error. Blocks until the stream is
/// exhausted; there is no timeout.
///
/// # Errors
///
/// Returns [`CaptureError::SpawnFailed`] if the shell cannot be started
/// and [`CaptureError::ReadFailed`] if reading the stream fails.
pub fn read_command_output(command: &str) -> Result<String> {
    let mut child = Command::new("sh")
        .args(["-c", command])
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| CaptureError::SpawnFailed {
            reason: e.to_string(),
        })?;

    let mut buffer = Vec::new();
    if let Some(stdout) = child.stdout.as_mut() {
        stdout
            .read_to_end(&mut buffer)
            .map_err(|e| CaptureError::ReadFailed {
                reason: e.to_string(),
            })?;
    }

    // Reap the child; the exit status is intentionally not examined.
    let _ = child.wait();

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
