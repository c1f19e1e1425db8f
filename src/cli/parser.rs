//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{CommandFactory, Parser};

/// ollama-ask: ask a local Ollama chat endpoint a question.
///
/// Sends the question as a single user message to the chat endpoint at
/// `http://localhost:11434/api/chat` and prints the decoded answer.
#[derive(Parser, Debug)]
#[command(name = "ollama-ask")]
#[command(version, about, long_about = None)]
// Help is deliberately an error path: `-h`/`--help` reach the positional
// argument and the binary prints usage to stderr with a failure status.
#[command(disable_help_flag = true)]
pub struct Cli {
    /// The question to ask. `-h` or `--help` prints usage instead.
    #[arg(allow_hyphen_values = true)]
    pub question: String,

    /// Model identifier (e.g. "deepseek-r1:8b"). Defaults to "llama3.2:3b".
    pub model: Option<String>,

    /// HTTP client binary used to perform the request.
    #[arg(long, env = "OLLAMA_ASK_CLIENT", default_value = crate::client::DEFAULT_HTTP_CLIENT)]
    pub http_client: String,

    /// Output format (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Dump the raw response to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the question argument is actually a help request.
    #[must_use]
    pub fn wants_help(&self) -> bool {
        matches!(self.question.as_str(), "-h" | "--help")
    }
}

/// Renders the usage text shown on the error stream.
#[must_use]
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
