//! Output formatting for the decoded answer and for errors.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use serde::Serialize;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// A decoded answer together with the model that produced it.
#[derive(Debug, Serialize)]
pub struct Answer {
    /// Model identifier the request targeted.
    pub model: String,
    /// Decoded answer text.
    pub answer: String,
}

/// Formats the answer for stdout. Text format is the answer followed by a
/// newline; JSON wraps it with the model name.
#[must_use]
pub fn format_answer(answer: &Answer, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{}\n", answer.answer),
        OutputFormat::Json => format!("{}\n", format_json(answer)),
    }
}

/// Formats an error for the error stream.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
