//! Binary entry point for ollama-ask.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use ollama_ask::cli::output::{OutputFormat, format_answer, format_error};
use ollama_ask::cli::parser::usage;
use ollama_ask::cli::{Cli, execute};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.format);

    // Usage shares the error path: help never exits successfully.
    if cli.wants_help() {
        eprint!("{}", usage());
        return ExitCode::FAILURE;
    }

    match execute(&cli) {
        Ok(answer) => {
            let output = format_answer(&answer, format);
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            if let Err(e) = write!(io::stdout(), "{output}")
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error writing to stdout: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    println!("{error_output}");
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
