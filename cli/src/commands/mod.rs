//! # travelrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the travelrs CLI and the
//! `AppContext` they share. `main.rs` builds one context per run from the
//! configuration files and the global flags, then hands it to the handler of
//! the selected subcommand.
//!
//! ## Commands
//!
//! - `chat`: Interactive question/answer loop (the default)
//! - `ask`: Answer a single question and exit
//! - `route`: Evaluate a trip directly, bypassing query parsing
//!
//! ## Context
//!
//! The context owns everything that lives for the whole run: the merged
//! configuration, the transport tables and the clock. Evaluators and
//! assistants borrow from it.
//!
use crate::assistant::TravelAssistant;
use crate::common::clock::{Clock, FixedClock, SystemClock};
use crate::core::config::{self, Config};
use crate::core::error::{Result, TravelError};
use crate::routing::RouteEvaluator;
use crate::transport::{dataset, ClockTime, TravelData};
use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Command for answering one question non-interactively.
pub mod ask;
/// Command for the interactive chat loop.
pub mod chat;
/// Command for evaluating a trip by explicit cities and mode.
pub mod route;

/// Everything a command needs for the duration of a run.
pub struct AppContext {
    pub config: Config,
    pub data: TravelData,
    clock: Box<dyn Clock>,
}

impl AppContext {
    /// Loads configuration from disk and builds the context.
    ///
    /// `data_override` (from `--data` / `TRAVELRS_DATA`) replaces any configured
    /// dataset; `at` pins the clock instead of using local time.
    pub fn load(data_override: Option<PathBuf>, at: Option<ClockTime>) -> Result<Self> {
        let config = config::load_config().context("Failed to load travelrs configuration")?;
        Self::from_config(config, data_override, at)
    }

    /// Builds the context from an already loaded configuration.
    pub fn from_config(
        config: Config,
        data_override: Option<PathBuf>,
        at: Option<ClockTime>,
    ) -> Result<Self> {
        let data_path = match data_override {
            Some(path) => Some(path),
            None => config.data.file.as_deref().map(configured_data_path).transpose()?,
        };
        let data = match data_path {
            Some(path) => load_dataset(&path)?,
            None => {
                debug!("Using built-in dataset");
                TravelData::builtin()
            }
        };
        info!("Dataset ready: {}", data.summary());

        let clock: Box<dyn Clock> = match at {
            Some(time) => {
                info!("Clock pinned at {time}");
                Box::new(FixedClock(time))
            }
            None => Box::new(SystemClock),
        };

        Ok(Self {
            config,
            data,
            clock,
        })
    }

    /// A route evaluator over this context's data and clock.
    pub fn evaluator(&self) -> RouteEvaluator<'_> {
        RouteEvaluator::new(&self.data, &*self.clock)
            .with_segment_distance(self.config.routing.segment_distance_km)
    }

    /// A query handler backed by `evaluator()`.
    pub fn assistant(&self) -> TravelAssistant<'_> {
        TravelAssistant::new(self.evaluator())
    }
}

/// `[data].file` from the configuration, which must name an existing file.
fn configured_data_path(file: &str) -> Result<PathBuf> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(anyhow!(TravelError::Config(format!(
            "Configured data file '{}' does not exist or is not a file.",
            path.display()
        ))));
    }
    Ok(path)
}

fn load_dataset(path: &Path) -> Result<TravelData> {
    dataset::load_from_path(path)
        .with_context(|| format!("Could not use dataset '{}'", path.display()))
}
