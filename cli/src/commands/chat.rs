//! # travelrs Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements `travelrs chat`, the interactive loop that also runs
//! when `travelrs` is started without a subcommand. It:
//! - Prints a welcome banner
//! - Repeatedly prompts with `You: ` and reads one line
//! - Stops on `quit` (any case) or end of input
//! - Otherwise prints the assistant's reply prefixed with its name
//!
//! ## Examples
//!
//! ```text
//! Welcome to the Travel Assistant! (Type 'quit' to exit)
//! You can ask about routes between Paris and Lyon
//!
//! You: hello
//!
//! Assistant: I'm sorry, I couldn't understand your query. ...
//!
//! You: quit
//! ```
//!
use super::AppContext;
use crate::assistant::TravelAssistant;
use crate::common::ui;
use crate::core::error::{Result, TravelError};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const BANNER: &str = "Welcome to the Travel Assistant! (Type 'quit' to exit)\n\
You can ask about routes between Paris and Lyon";

/// # Chat Arguments (`ChatArgs`)
///
/// `travelrs chat` takes no options of its own; the global `--data`, `--at`
/// and `-v` flags still apply.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {}

/// Runs the interactive loop on stdin/stdout.
pub fn handle_chat(_args: ChatArgs, ctx: &AppContext) -> Result<()> {
    info!("Starting interactive chat");
    let assistant = ctx.assistant();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_chat(
        &assistant,
        &ctx.config.assistant.name,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// The chat loop itself, over arbitrary input and output streams.
pub fn run_chat<R: BufRead, W: Write>(
    assistant: &TravelAssistant<'_>,
    name: &str,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{BANNER}").map_err(TravelError::from)?;

    let mut answered = 0usize;
    while let Some(line) = ui::prompt(input, output, "\nYou: ")? {
        if ui::is_quit(&line) {
            debug!("Quit requested");
            break;
        }
        let response = assistant.process(&line);
        writeln!(output, "\n{name}: {response}").map_err(TravelError::from)?;
        answered += 1;
    }

    info!("Chat finished after {answered} queries");
    Ok(())
}
