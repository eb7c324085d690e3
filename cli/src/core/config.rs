//! # travelrs Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for travelrs, handling loading,
//! merging, validation, and access to configuration data. Configuration is entirely
//! optional: with no files present the assistant runs on the built-in dataset
//! with the default settings.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.travelrs.toml` in current directory or ancestors
//! 2. User-specific `<config dir>/travelrs/config.toml`
//! 3. Default values defined in the code
//!
//! The `--data` command-line flag (or `TRAVELRS_DATA`) is applied on top of the
//! merged result by `main.rs`.
//!
//! ## Examples
//!
//! ```toml
//! [assistant]
//! name = "Assistant"
//!
//! [routing]
//! segment_distance_km = 100.0
//!
//! [data]
//! file = "~/travel/data.toml"
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let km = cfg.routing.segment_distance_km;
//! ```
//!
use crate::core::error::{Result, TravelError};
use crate::routing::DEFAULT_SEGMENT_DISTANCE_KM;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub data: DataConfig,
}

/// Settings for the conversational front end.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Label printed in front of every response (`Assistant: ...`).
    #[serde(default = "default_assistant_name")]
    pub name: String,
}

/// Settings for the route evaluator.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Distance, in kilometres, assumed for every road segment of a car route.
    #[serde(default = "default_segment_distance_km")]
    pub segment_distance_km: f64,
}

/// Where the traffic and timetable tables come from.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Optional TOML dataset replacing the built-in tables (can use ~).
    pub file: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            segment_distance_km: default_segment_distance_km(),
        }
    }
}

fn default_assistant_name() -> String {
    "Assistant".to_string()
}
fn default_segment_distance_km() -> f64 {
    DEFAULT_SEGMENT_DISTANCE_KM
}

const PROJECT_CONFIG_FILENAME: &str = ".travelrs.toml";

/// Loads, merges, expands and validates the configuration.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "TravelRS", "travelrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.travelrs.toml) found in cwd or its ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.travelrs.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win whenever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.assistant.name = if project_cfg.assistant.name != default_assistant_name() {
        project_cfg.assistant.name
    } else {
        user.assistant.name
    };
    merged.routing.segment_distance_km =
        if project_cfg.routing.segment_distance_km != default_segment_distance_km() {
            project_cfg.routing.segment_distance_km
        } else {
            user.routing.segment_distance_km
        };
    merged.data.file = project_cfg.data.file.or(user.data.file);
    merged
}

fn expand_config_paths(config: &mut Config) {
    if let Some(file) = config.data.file.as_mut() {
        *file = shellexpand::tilde(file.as_str()).into_owned();
        debug!("Expanded data file path: {}", file);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let km = config.routing.segment_distance_km;
    if !km.is_finite() || km <= 0.0 {
        return Err(anyhow!(TravelError::Config(format!(
            "routing.segment_distance_km must be a positive number, got {km}"
        ))));
    }
    if config.assistant.name.trim().is_empty() {
        return Err(anyhow!(TravelError::Config(
            "assistant.name cannot be empty".to_string()
        )));
    }
    if config.data.file.as_deref().is_some_and(|f| f.trim().is_empty()) {
        return Err(anyhow!(TravelError::Config(
            "data.file cannot be empty".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
