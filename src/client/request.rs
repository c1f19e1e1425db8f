//! Request builder: chat payload and HTTP client command line.

use crate::error::{RequestError, Result};

/// Model used when none is given on the command line.
pub const DEFAULT_MODEL: &str = "llama3.2:3b";

/// The local chat endpoint consumed by this tool.
pub const CHAT_ENDPOINT: &str = "http://localhost:11434/api/chat";

/// HTTP client binary used when no override is configured.
pub const DEFAULT_HTTP_CLIENT: &str = "curl";

/// Maximum length of the serialized command line, in bytes.
pub const MAX_COMMAND_LEN: usize = 4096;

/// Instruction prepended to the user's question in the chat message.
const PROMPT_PREFIX: &str = "Write a very short answer to the following question: ";

/// A single-turn chat request against the local endpoint.
///
/// Borrows the question and model for the lifetime of the pipeline; all
/// owned allocations happen at serialization time.
#[derive(Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    question: &'a str,
    model: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// Creates a request, falling back to [`DEFAULT_MODEL`] if `model` is
    /// absent.
    #[must_use]
    pub fn new(question: &'a str, model: Option<&'a str>) -> Self {
        Self {
            question,
            model: model.unwrap_or(DEFAULT_MODEL),
        }
    }

    /// The model this request targets.
    #[must_use]
    pub const fn model(&self) -> &str {
        self.model
    }

    /// Serializes the fixed-shape request body.
    ///
    /// The question is embedded as-is: embedded quotes or backslashes are
    /// NOT escaped, so a question containing `"` produces a malformed
    /// payload. This matches the observable behavior of the tool this one
    /// is compatible with; see DESIGN.md before relying on it anywhere
    /// untrusted input can reach.
    #[must_use]
    pub fn payload(&self) -> String {
        format!(
            "{{\"model\": \"{}\",\"messages\": [{{\"role\": \"user\", \"content\": \"{}{}\"}}],\"stream\": false}}",
            self.model, PROMPT_PREFIX, self.question
        )
    }

    /// Builds the shell command line invoking `client` against the chat
    /// endpoint with the serialized payload as POST data.
    ///
    /// Only the template's own quotes are escaped for the shell; the
    /// question and model are interpolated raw. A question containing `"`
    /// therefore breaks the command's quoting too, not just the payload.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::CommandTooLong`] if the command would reach
    /// [`MAX_COMMAND_LEN`] bytes. The command is never truncated.
    pub fn command_line(&self, client: &str) -> Result<String> {
        let command = format!(
            "{client} \"{CHAT_ENDPOINT}\" -s -d \"{{\\\"model\\\": \\\"{model}\\\",\\\"messages\\\": [{{\\\"role\\\": \\\"user\\\", \\\"content\\\": \\\"{PROMPT_PREFIX}{question}\\\"}}],\\\"stream\\\": false}}\"",
            model = self.model,
            question = self.question,
        );

        if command.len() >= MAX_COMMAND_LEN {
            return Err(RequestError::CommandTooLong {
                len: command.len(),
                max: MAX_COMMAND_LEN,
            }
            .into());
        }
        Ok(command)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let request = ChatRequest::new("why is the sky blue?", None);
        assert_eq!(request.model(), DEFAULT_MODEL);
        assert!(request.payload().contains("\"model\": \"llama3.2:3b\""));
    }

    #[test]
    fn test_explicit_model() {
        let request = ChatRequest::new("why?", Some("deepseek-r1:8b"));
        assert_eq!(request.model(), "deepseek-r1:8b");
        assert!(request.payload().contains("\"model\": \"deepseek-r1:8b\""));
    }

    #[test]
    fn test_payload_shape() {
        let request = ChatRequest::new("what is 2+2?", None);
        let payload = request.payload();
        assert!(payload.starts_with('{'));
        assert!(payload.ends_with('}'));
        assert!(payload.contains("\"role\": \"user\""));
        assert!(payload.contains("\"stream\": false"));
        assert!(payload.contains(
            "Write a very short answer to the following question: what is 2+2?"
        ));
        // A quote-free question yields well-formed JSON.
        assert!(serde_json::from_str::<serde_json::Value>(&payload).is_ok());
    }

    #[test]
    fn test_quote_in_question_breaks_payload() {
        // Preserved fidelity gap: the question is embedded without escaping.
        let request = ChatRequest::new("what does \"idempotent\" mean?", None);
        assert!(serde_json::from_str::<serde_json::Value>(&request.payload()).is_err());
    }

    #[test]
    fn test_command_line_shape() {
        let request = ChatRequest::new("hello?", None);
        let command = request
            .command_line(DEFAULT_HTTP_CLIENT)
            .expect("command should fit");
        assert!(command.starts_with("curl \"http://localhost:11434/api/chat\" -s -d \""));
        assert!(command.contains("\\\"model\\\": \\\"llama3.2:3b\\\""));
        assert!(command.ends_with('"'));
    }

    #[test]
    fn test_command_matches_payload() {
        let request = ChatRequest::new("hello?", Some("m"));
        let command = request
            .command_line(DEFAULT_HTTP_CLIENT)
            .expect("command should fit");
        let escaped = request.payload().replace('"', "\\\"");
        assert!(command.ends_with(&format!("-d \"{escaped}\"")));
    }

    #[test]
    fn test_quote_in_question_breaks_command_quoting() {
        // The question's quote enters the command unescaped, ending the
        // shell's double-quoted data argument early.
        let request = ChatRequest::new("what is \"foo\"?", None);
        let command = request
            .command_line(DEFAULT_HTTP_CLIENT)
            .expect("command should fit");
        assert!(command.contains("what is \"foo\"?"));
    }

    #[test]
    fn test_command_too_long() {
        let question = "x".repeat(MAX_COMMAND_LEN);
        let request = ChatRequest::new(&question, None);
        let err = request.command_line(DEFAULT_HTTP_CLIENT);
        assert!(matches!(
            err,
            Err(crate::Error::Request(RequestError::CommandTooLong { .. }))
        ));
    }

    #[test]
    fn test_command_just_under_limit() {
        // Grow the question until the command sits one byte under the cap.
        let fixed = ChatRequest::new("", None)
            .command_line(DEFAULT_HTTP_CLIENT)
            .expect("empty question fits")
            .len();
        let question = "x".repeat(MAX_COMMAND_LEN - 1 - fixed);
        let request = ChatRequest::new(&question, None);
        assert!(request.command_line(DEFAULT_HTTP_CLIENT).is_ok());
    }
}
