//! # travelrs Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the travelrs CLI, a small
//! travel assistant that answers questions about getting between Paris and
//! Lyon by car or train, using simulated traffic and timetable data.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and the travel dataset
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - `transport`: Read-only traffic and timetable tables (the data provider)
//! - `routing`: Evaluates a trip for one transport mode against those tables
//! - `assistant`: Turns free-text questions into formatted answers
//! - `commands`: `chat`, `ask` and `route` handlers
//! - `core` / `common`: configuration, errors, clock and console helpers
//!
//! ## Examples
//!
//! ```bash
//! # Interactive session (default)
//! travelrs
//!
//! # One-shot question with the clock pinned at 07:30
//! travelrs --at 07:30 ask route from paris to lyon
//!
//! # Direct evaluation with debug logging
//! travelrs -vv route --from Lyon --to Paris --mode car
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod assistant;
mod commands;
mod common;
mod core;
mod routing;
mod transport;

use commands::AppContext;
use transport::ClockTime;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "travelrs",
    about = "Travel assistant for car and train trips between Paris and Lyon",
    long_about = "Ask about routes between Paris and Lyon and get a driving-time estimate\n\
                  with current traffic, plus the next train that still has seats.\n\
                  Runs an interactive chat when no subcommand is given.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Load traffic and timetable tables from this TOML file.
    #[arg(long, global = true, env = "TRAVELRS_DATA", value_name = "FILE")]
    data: Option<PathBuf>,
    /// Use this time of day (HH:MM) instead of the local clock.
    #[arg(long, global = true, value_name = "HH:MM")]
    at: Option<ClockTime>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive question/answer session (default).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single question and exit.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Evaluate a trip between two cities directly.
    #[command(alias = "r")]
    Route(commands::route::RouteArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = AppContext::load(cli.data, cli.at).and_then(|ctx| {
        match cli.command.unwrap_or(Commands::Chat(Default::default())) {
            Commands::Chat(args) => commands::chat::handle_chat(args, &ctx),
            Commands::Ask(args) => commands::ask::handle_ask(args, &ctx),
            Commands::Route(args) => commands::route::handle_route(args, &ctx),
        }
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
