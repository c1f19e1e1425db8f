//! Pipeline orchestration: request, capture, locate, extract, decode.

use crate::cli::output::Answer;
use crate::cli::parser::Cli;
use crate::client::{ChatRequest, read_command_output};
use crate::error::{Result, ScanError};
use crate::scan::{locate_string_value, raw_string_value, unescape};
use std::io::{self, Write};

/// Runs the full question/answer pipeline for the parsed CLI arguments.
///
/// Builds the chat request, shells out to the HTTP client, scans the raw
/// response for `message.content`, and returns the decoded answer.
///
/// # Errors
///
/// Returns an error if the command line cannot be built, the HTTP client
/// cannot be run, or the response does not contain a `message` object
/// with a string `content` field.
pub fn execute(cli: &Cli) -> Result<Answer> {
    let request = ChatRequest::new(&cli.question, cli.model.as_deref());
    let command = request.command_line(&cli.http_client)?;
    let response = read_command_output(&command)?;

    if cli.verbose {
        let _ = writeln!(io::stderr(), "Full response:\n{response}");
    }

    let answer = extract_answer(&response)?;
    Ok(Answer {
        model: request.model().to_string(),
        answer,
    })
}

/// Scans a raw chat response for the `message.content` string and decodes
/// its escape sequences.
///
/// The scan anchors on the literal `"message":` first, then locates the
/// `content` field within the remainder. Both steps are textual, with the
/// documented narrow-match limitations of the scan layer.
pub fn extract_answer(response: &str) -> Result<String> {
    let message_start = response
        .find("\"message\":")
        .ok_or(ScanError::MessageNotFound)?;
    let message = &response[message_start..];

    let content_start =
        locate_string_value(message, "content").ok_or(ScanError::ContentNotFound)?;

    let raw = raw_string_value(content_start);
    Ok(unescape(raw))
}
