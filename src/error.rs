//! Error types for ollama-ask operations.
//!
//! This module provides the error hierarchy using `thiserror` for all
//! pipeline stages: request construction, subprocess capture, and
//! response scanning.

use thiserror::Error;

/// Result type alias for ollama-ask operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for the question/answer pipeline.
///
/// Every variant is terminal: the binary reports it once on stderr and
/// exits with a failure status. Nothing is retried or recovered.
#[derive(Error, Debug)]
pub enum Error {
    /// Request construction errors (command line assembly).
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// Subprocess capture errors (spawning or reading the HTTP client).
    #[error("capture error: {0}")]
    Capture(#[from] CaptureError),

    /// Response scanning errors (field or value not found).
    #[error("response error: {0}")]
    Scan(#[from] ScanError),
}

/// Errors while building the HTTP client command line.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The serialized command would exceed the fixed maximum length.
    /// The command is never truncated.
    #[error("command string too long: {len} bytes (max: {max})")]
    CommandTooLong {
        /// Length the command would have had.
        len: usize,
        /// Maximum permitted length.
        max: usize,
    },
}

/// Errors while capturing subprocess output.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The HTTP client process could not be started.
    #[error("failed to run command: {reason}")]
    SpawnFailed {
        /// Underlying OS error.
        reason: String,
    },

    /// Reading the child's stdout failed mid-stream.
    #[error("failed to read command output: {reason}")]
    ReadFailed {
        /// Underlying OS error.
        reason: String,
    },
}

/// Errors while scanning the response text.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The `"message"` object was not found in the response.
    #[error("could not find \"message\" in the response")]
    MessageNotFound,

    /// The `"content"` field was not found inside the `"message"` object,
    /// or no string value follows it.
    #[error("could not find \"content\" in the \"message\" object")]
    ContentNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Request(RequestError::CommandTooLong { len: 5000, max: 4096 });
        assert_eq!(
            err.to_string(),
            "request error: command string too long: 5000 bytes (max: 4096)"
        );
    }

    #[test]
    fn test_capture_error_display() {
        let err = CaptureError::SpawnFailed {
            reason: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("failed to run command"));

        let err = CaptureError::ReadFailed {
            reason: "broken pipe".to_string(),
        };
        assert!(err.to_string().contains("broken pipe"));
    }

    #[test]
    fn test_scan_error_display() {
        assert_eq!(
            ScanError::MessageNotFound.to_string(),
            "could not find \"message\" in the response"
        );
        assert_eq!(
            ScanError::ContentNotFound.to_string(),
            "could not find \"content\" in the \"message\" object"
        );
    }

    #[test]
    fn test_error_from_request() {
        let err: Error = RequestError::CommandTooLong { len: 1, max: 0 }.into();
        assert!(matches!(err, Error::Request(_)));
    }

    #[test]
    fn test_error_from_capture() {
        let err: Error = CaptureError::SpawnFailed {
            reason: "denied".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Capture(_)));
    }

    #[test]
    fn test_error_from_scan() {
        let err: Error = ScanError::MessageNotFound.into();
        assert!(matches!(err, Error::Scan(_)));
    }
}
