//! # travelrs Route Command
//!
//! File: cli/src/commands/route.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `travelrs route` calls the route evaluator directly with explicit cities,
//! skipping keyword matching. Flags are forgiving about case and blanks
//! (`--from lyon --mode Train`); they are normalised to the canonical names
//! before evaluation. Anything still unknown is reported the way the evaluator
//! reports it. It prints one line per evaluated mode:
//!
//! ```text
//! $ travelrs --at 07:00 route --from Paris --to Lyon
//! car: 4.4 hours via A1: heavy, A2: light
//! train: departs 08:00, arrives 10:00, 45 seats available
//!
//! $ travelrs --at 23:00 route --from Paris --to Lyon --mode train
//! train: No available trains
//! Error: No travel options from Paris to Lyon
//! ```
//!
//! The command fails (exit code 1) only when none of the requested modes
//! produced a route.
//!
use super::AppContext;
use crate::core::error::Result;
use crate::routing::{RouteResult, TransportMode};
use crate::transport::City;
use clap::Parser;
use tracing::info;

/// # Route Arguments (`RouteArgs`)
#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Departure city (Paris or Lyon, any case).
    #[arg(long)]
    pub from: String,

    /// Arrival city (Paris or Lyon, any case).
    #[arg(long)]
    pub to: String,

    /// Evaluate a single mode ("car" or "train") instead of all of them.
    #[arg(long)]
    pub mode: Option<String>,
}

pub fn handle_route(args: RouteArgs, ctx: &AppContext) -> Result<()> {
    info!(
        "Evaluating route {} -> {} (mode: {:?})",
        args.from, args.to, args.mode
    );

    let (from, to) = (canonical_city(&args.from), canonical_city(&args.to));
    let modes: Vec<String> = match args.mode {
        Some(mode) => vec![mode.trim().to_ascii_lowercase()],
        None => TransportMode::ALL.iter().map(ToString::to_string).collect(),
    };
    let evaluator = ctx.evaluator();
    let results: Vec<(String, RouteResult)> = modes
        .into_iter()
        .map(|mode| {
            let result = evaluator.evaluate(&from, &to, &mode);
            (mode, result)
        })
        .collect();

    for line in render_results(&results) {
        println!("{line}");
    }

    if results.iter().all(|(_, result)| result.is_err()) {
        anyhow::bail!("No travel options from {} to {}", args.from, args.to);
    }
    Ok(())
}

/// The display name of a known city, otherwise the input unchanged.
fn canonical_city(name: &str) -> String {
    City::from_name_ignore_case(name)
        .map(|city| city.name().to_string())
        .unwrap_or_else(|| name.to_string())
}

/// One line per mode: the route summary, or `mode: reason` on failure.
fn render_results(results: &[(String, RouteResult)]) -> Vec<String> {
    results
        .iter()
        .map(|(mode, result)| match result {
            Ok(route) => route.to_string(),
            Err(reason) => format!("{mode}: {reason}"),
        })
        .collect()
}
