//! # travelrs Transport Data Provider
//!
//! File: cli/src/transport/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module owns the simulated traffic and train-timetable tables that the
//! route evaluator consults. The tables are built once at startup, either from
//! the built-in dataset or from a TOML file (see `dataset`), and are read-only
//! from then on.
//!
//! ## Architecture
//!
//! - `types`: Typed keys and records (`City`, `RouteKey`, `RoadStatus`, `ScheduleEntry`)
//! - `time`: `ClockTime`, the `HH:MM` time of day used by timetables
//! - `dataset`: Loading a `TravelData` from a TOML file
//!
//! Lookups never fail. A road that is not in the table reports
//! `RoadStatus::UNKNOWN` (congestion "unknown", speed 0) and a route with no
//! timetable reports an empty schedule; deciding what that means is left to
//! the caller.
//!
//! ## Examples
//!
//! ```rust
//! let data = TravelData::builtin();
//! let a1 = data.lookup_traffic("A1"); // heavy, 30 km/h
//! let trains = data.lookup_schedule(RouteKey::new(City::Paris, City::Lyon));
//! ```
//!
use std::collections::HashMap;

pub mod dataset;
pub mod time;
pub mod types;

pub use time::ClockTime;
pub use types::{City, Congestion, RoadStatus, RouteKey, ScheduleEntry};

/// Immutable traffic, road-plan and timetable tables.
#[derive(Debug, Clone, Default)]
pub struct TravelData {
    pub(crate) roads: HashMap<String, RoadStatus>,
    pub(crate) car_routes: HashMap<RouteKey, Vec<String>>,
    pub(crate) schedules: HashMap<RouteKey, Vec<ScheduleEntry>>,
}

impl TravelData {
    /// The simulated Paris/Lyon dataset shipped with the binary.
    pub fn builtin() -> Self {
        let road = |congestion, speed| RoadStatus { congestion, speed };
        let train = |dep: (u32, u32), arr: (u32, u32), seats| ScheduleEntry {
            departure: hm(dep),
            arrival: hm(arr),
            available_seats: seats,
        };
        let paris_lyon = RouteKey::new(City::Paris, City::Lyon);

        let roads = HashMap::from([
            ("A1".to_string(), road(Congestion::Heavy, 30.0)),
            ("A2".to_string(), road(Congestion::Light, 90.0)),
            ("N1".to_string(), road(Congestion::Moderate, 50.0)),
        ]);
        let car_routes = HashMap::from([
            (paris_lyon, vec!["A1".to_string(), "A2".to_string()]),
            (paris_lyon.reversed(), vec!["A2".to_string(), "A1".to_string()]),
        ]);
        let schedules = HashMap::from([
            (
                paris_lyon,
                vec![train((8, 0), (10, 0), 45), train((10, 0), (12, 0), 20)],
            ),
            (
                paris_lyon.reversed(),
                vec![train((9, 0), (11, 0), 30), train((11, 0), (13, 0), 50)],
            ),
        ]);

        Self {
            roads,
            car_routes,
            schedules,
        }
    }

    /// Status of `road_id`, or `RoadStatus::UNKNOWN` if the road is not tracked.
    pub fn lookup_traffic(&self, road_id: &str) -> RoadStatus {
        self.roads
            .get(road_id)
            .copied()
            .unwrap_or(RoadStatus::UNKNOWN)
    }

    /// Trains for `key` in timetable order; empty if none are scheduled.
    pub fn lookup_schedule(&self, key: RouteKey) -> &[ScheduleEntry] {
        self.schedules.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Roads driven, in order, between the two cities of `key`; empty if undefined.
    pub fn road_plan(&self, key: RouteKey) -> &[String] {
        self.car_routes.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// One-line description of table sizes, for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} roads, {} car routes, {} train services",
            self.roads.len(),
            self.car_routes.len(),
            self.schedules.values().map(Vec::len).sum::<usize>()
        )
    }
}

fn hm((hour, minute): (u32, u32)) -> ClockTime {
    ClockTime::from_hm(hour, minute).expect("built-in timetable times are valid")
}
