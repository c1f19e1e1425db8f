//! CLI layer for ollama-ask.
//!
//! Provides the command-line interface using clap, plus the pipeline
//! orchestration and output formatting.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::Cli;
