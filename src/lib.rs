//! # ollama-ask
//!
//! Ask a locally running Ollama chat endpoint a question and print the
//! decoded answer.
//!
//! The whole program is one linear pipeline of four stages:
//!
//! 1. **Request builder**: serializes a fixed-shape chat payload and wraps
//!    it as a shell command invoking an HTTP client binary.
//! 2. **Output capture**: runs the command and reads its stdout to the end.
//! 3. **Field locator**: textually scans the response for the
//!    `message.content` string value (not a JSON parser, on purpose).
//! 4. **Escape decoder**: expands JSON escape sequences into characters.
//!
//! Any stage's failure aborts with a one-line diagnostic on stderr and a
//! nonzero exit code.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod client;
pub mod error;
pub mod scan;

// Re-export commonly used types at crate root
pub use error::{CaptureError, Error, RequestError, Result, ScanError};

// Re-export client types
pub use client::{
    CHAT_ENDPOINT, ChatRequest, DEFAULT_HTTP_CLIENT, DEFAULT_MODEL, MAX_COMMAND_LEN,
    read_command_output,
};

// Re-export scan functions
pub use scan::{locate_string_value, raw_string_value, unescape};

// Re-export CLI types
pub use cli::{Cli, OutputFormat, execute};
