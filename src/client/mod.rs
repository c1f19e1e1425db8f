//! Chat endpoint client layer.
//!
//! Builds the HTTP client command line for the local Ollama chat endpoint
//! and captures the subprocess output. The HTTP request itself is made by
//! an external client binary (curl by default), not by this crate.

pub mod capture;
pub mod request;

pub use capture::read_command_output;
pub use request::{CHAT_ENDPOINT, ChatRequest, DEFAULT_HTTP_CLIENT, DEFAULT_MODEL, MAX_COMMAND_LEN};
