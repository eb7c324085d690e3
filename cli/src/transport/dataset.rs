//! # Dataset Files
//!
//! File: cli/src/transport/dataset.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Reads a `TravelData` from a TOML file so the simulated tables can be swapped
//! without rebuilding. The file is read once at startup and never written.
//!
//! ## Format
//!
//! ```toml
//! [[roads]]
//! id = "A1"
//! congestion = "heavy"
//! speed = 30
//!
//! [[car_routes]]
//! from = "Paris"
//! to = "Lyon"
//! roads = ["A1", "A2"]
//!
//! [[trains]]
//! from = "Paris"
//! to = "Lyon"
//! departure = "08:00"
//! arrival = "10:00"
//! seats = 45
//! ```
//!
//! Trains are kept in file order per route; that order is the order in which
//! the evaluator scans for the next departure.
//!
use super::time::ClockTime;
use super::types::{City, Congestion, RoadStatus, RouteKey, ScheduleEntry};
use super::TravelData;
use crate::core::error::{Result, TravelError};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info};

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    #[serde(default)]
    roads: Vec<RoadRecord>,
    #[serde(default)]
    car_routes: Vec<CarRouteRecord>,
    #[serde(default)]
    trains: Vec<TrainRecord>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RoadRecord {
    id: String,
    congestion: Congestion,
    speed: f64,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct CarRouteRecord {
    from: City,
    to: City,
    roads: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct TrainRecord {
    from: City,
    to: City,
    departure: ClockTime,
    arrival: ClockTime,
    seats: u32,
}

/// Reads and validates a dataset file.
pub fn load_from_path(path: &Path) -> Result<TravelData> {
    info!("Loading travel dataset from: {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;
    let data = parse_dataset(&content, &path.display().to_string())
        .with_context(|| format!("Failed to load dataset from: {}", path.display()))?;
    debug!("Loaded dataset: {}", data.summary());
    Ok(data)
}

/// Parses dataset TOML. `origin` names the source in validation errors.
pub(crate) fn parse_dataset(content: &str, origin: &str) -> Result<TravelData> {
    let file: DatasetFile = toml::from_str(content).context("Invalid dataset TOML")?;
    let mut data = TravelData::default();

    for road in file.roads {
        if road.id.trim().is_empty() {
            return Err(invalid(origin, "road id cannot be empty"));
        }
        if data.roads.contains_key(&road.id) {
            return Err(invalid(origin, format!("road '{}' is defined twice", road.id)));
        }
        if !road.speed.is_finite() || road.speed < 0.0 {
            let reason = format!("road '{}' has invalid speed {}", road.id, road.speed);
            return Err(invalid(origin, reason));
        }
        data.roads.insert(
            road.id,
            RoadStatus {
                congestion: road.congestion,
                speed: road.speed,
            },
        );
    }

    for route in file.car_routes {
        let key = RouteKey::new(route.from, route.to);
        if route.roads.is_empty() {
            return Err(invalid(origin, format!("car route {key} lists no roads")));
        }
        if data.car_routes.insert(key, route.roads).is_some() {
            return Err(invalid(origin, format!("car route {key} is defined twice")));
        }
    }

    for train in file.trains {
        let key = RouteKey::new(train.from, train.to);
        data.schedules.entry(key).or_default().push(ScheduleEntry {
            departure: train.departure,
            arrival: train.arrival,
            available_seats: train.seats,
        });
    }

    Ok(data)
}

fn invalid(origin: &str, reason: impl Into<String>) -> anyhow::Error {
    anyhow!(TravelError::Dataset {
        path: origin.to_string(),
        reason: reason.into(),
    })
}
